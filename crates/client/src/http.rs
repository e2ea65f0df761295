// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::config::ClientConfig;
use serde::Serialize;
use serde_json::Value;
use tour_planner::{Gateway, GatewayError};
use tour_planner_domain::{Event, Point, Staff, Territory};
use tour_planner_protocol::{
    ActionPayload, Availability, CreatedAction, EventListRequest, MutationResponse, Pagination,
    PointListRequest, SetStatusRequest, StaffListRequest, StatusIdent, TerritoryListRequest,
    TerritoryUuids, UuidRef, events_from, points_from, staff_from, territories_from,
};

/// The remote mount point every endpoint lives under.
const ENDPOINT_PREFIX: &str = "api/tourplanner";

/// [`Gateway`] implementation over HTTP.
///
/// Every call is a bearer-authenticated JSON POST to
/// `<base>/api/tourplanner/<endpoint>`.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: reqwest::Client,
    base_url: String,
    bearer_token: String,
}

impl HttpGateway {
    #[must_use]
    pub fn new(base_url: impl Into<String>, bearer_token: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            bearer_token: bearer_token.into(),
        }
    }

    #[must_use]
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.base_url.clone(), config.bearer_token.clone())
    }

    /// Issues a one-item territory list to verify the base URL and
    /// token work.
    ///
    /// # Errors
    ///
    /// Returns the [`GatewayError`] of the probe request.
    pub async fn test_connection(&self) -> Result<(), GatewayError> {
        let request: TerritoryListRequest = TerritoryListRequest {
            pagination: Pagination::first(1),
        };
        self.post_json("territory/list", &request).await?;
        tracing::info!("connection test succeeded");
        Ok(())
    }

    async fn post_json<B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<Value, GatewayError> {
        let url: String = format!(
            "{}/{ENDPOINT_PREFIX}/{endpoint}",
            self.base_url.trim_end_matches('/')
        );
        tracing::debug!(%url, "posting request");
        let response: reqwest::Response = self
            .client
            .post(&url)
            .bearer_auth(&self.bearer_token)
            .json(body)
            .send()
            .await
            .map_err(|err| GatewayError::Transport(err.to_string()))?;

        let status: reqwest::StatusCode = response.status();
        if !status.is_success() {
            let body: String = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), endpoint, "remote error");
            return Err(GatewayError::Remote {
                status: status.as_u16(),
                body,
            });
        }
        response
            .json::<Value>()
            .await
            .map_err(|err| GatewayError::Decode(err.to_string()))
    }

    async fn post_mutation<B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<MutationResponse, GatewayError> {
        let value: Value = self.post_json(endpoint, body).await?;
        let response: MutationResponse =
            serde_json::from_value(value).map_err(|err| GatewayError::Decode(err.to_string()))?;
        if !response.is_success() {
            return Err(GatewayError::Rejected(format!(
                "{endpoint} reported an unsuccessful status"
            )));
        }
        Ok(response)
    }
}

impl Gateway for HttpGateway {
    async fn list_territories(&self, page_size: u32) -> Result<Vec<Territory>, GatewayError> {
        let request: TerritoryListRequest = TerritoryListRequest {
            pagination: Pagination::first(page_size),
        };
        let value: Value = self.post_json("territory/list", &request).await?;
        Ok(territories_from(value))
    }

    async fn list_events(&self, page_size: u32) -> Result<Vec<Event>, GatewayError> {
        let request: EventListRequest = EventListRequest {
            pagination: Pagination::first(page_size),
        };
        let value: Value = self.post_json("event/list", &request).await?;
        Ok(events_from(value))
    }

    async fn list_points(
        &self,
        territory_uuid: &str,
        event_uuid: &str,
        page_size: u32,
    ) -> Result<Vec<Point>, GatewayError> {
        let request: PointListRequest = PointListRequest {
            event: UuidRef {
                uuid: event_uuid.to_string(),
            },
            territory: UuidRef {
                uuid: territory_uuid.to_string(),
            },
            pagination: Pagination::first(page_size),
        };
        let value: Value = self.post_json("point/list", &request).await?;
        Ok(points_from(value))
    }

    async fn list_staff(
        &self,
        territory_uuid: &str,
        date: &str,
        page_size: u32,
    ) -> Result<Vec<Staff>, GatewayError> {
        let request: StaffListRequest = StaffListRequest {
            pagination: Pagination::first(page_size),
            availability: Availability {
                since: date.to_string(),
                until: date.to_string(),
            },
            territory: TerritoryUuids {
                uuids: vec![territory_uuid.to_string()],
            },
        };
        let value: Value = self.post_json("user/list", &request).await?;
        Ok(staff_from(value))
    }

    async fn create_action(&self, payload: &ActionPayload) -> Result<CreatedAction, GatewayError> {
        let response: MutationResponse = self.post_mutation("action/create", payload).await?;
        response.created().ok_or_else(|| {
            GatewayError::Rejected(String::from(
                "action/create returned no action identity",
            ))
        })
    }

    async fn set_action_status(
        &self,
        action_uuid: &str,
        status_ident: &str,
    ) -> Result<(), GatewayError> {
        let request: SetStatusRequest = SetStatusRequest {
            status: StatusIdent {
                ident: status_ident.to_string(),
            },
            action: UuidRef {
                uuid: action_uuid.to_string(),
            },
        };
        self.post_mutation("action/set-status", &request).await?;
        Ok(())
    }
}
