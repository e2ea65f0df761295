// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use tour_planner_domain::{Event, Point, Staff, Territory};
use tour_planner_protocol::{ActionPayload, CreatedAction};

/// Access to the remote tour API.
///
/// The engine only ever talks to the remote through this trait, so
/// tests drive the full cascade against an in-memory implementation.
#[allow(async_fn_in_trait)]
pub trait Gateway {
    /// Lists territories, first page at the given size.
    async fn list_territories(&self, page_size: u32) -> Result<Vec<Territory>, GatewayError>;

    /// Lists events. The remote scopes events to the account, not to a
    /// territory, so no territory filter goes on the wire.
    async fn list_events(&self, page_size: u32) -> Result<Vec<Event>, GatewayError>;

    /// Lists points belonging to one territory and one event.
    async fn list_points(
        &self,
        territory_uuid: &str,
        event_uuid: &str,
        page_size: u32,
    ) -> Result<Vec<Point>, GatewayError>;

    /// Lists staff available in the territory on the given
    /// `YYYY-MM-DD` date (the availability window is that single day).
    async fn list_staff(
        &self,
        territory_uuid: &str,
        date: &str,
        page_size: u32,
    ) -> Result<Vec<Staff>, GatewayError>;

    /// Creates an action and returns its remote-assigned identity.
    async fn create_action(&self, payload: &ActionPayload) -> Result<CreatedAction, GatewayError>;

    /// Moves an action to the named status, e.g. `accepted`.
    async fn set_action_status(
        &self,
        action_uuid: &str,
        status_ident: &str,
    ) -> Result<(), GatewayError>;
}

/// Failures crossing the gateway boundary.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The request never produced an HTTP response.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The remote answered with a non-success HTTP status.
    #[error("remote returned {status}: {body}")]
    Remote { status: u16, body: String },

    /// The response body could not be decoded.
    #[error("could not decode response: {0}")]
    Decode(String),

    /// The remote answered 2xx but marked the mutation unsuccessful.
    #[error("remote rejected the request: {0}")]
    Rejected(String),
}
