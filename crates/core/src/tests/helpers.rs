// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::gateway::{Gateway, GatewayError};
use crate::planner::Planner;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use time::macros::datetime;
use time::{Date, OffsetDateTime};
use tour_planner_domain::{Address, Event, Point, Staff, Territory};
use tour_planner_protocol::{ActionPayload, CreatedAction};

pub fn sample_now() -> OffsetDateTime {
    datetime!(2026-03-17 09:41:00 UTC)
}

pub fn today() -> Date {
    sample_now().date()
}

pub fn territory(n: u32) -> Territory {
    Territory {
        uuid: format!("t{n}-uuid"),
        ident: format!("TER{n}"),
    }
}

pub fn territory_token(n: u32) -> String {
    format!("t{n}-uuid|TER{n}")
}

pub fn event(n: u32) -> Event {
    Event {
        uuid: format!("e{n}-uuid"),
        name: format!("Event {n}"),
    }
}

pub fn event_token(n: u32) -> String {
    format!("e{n}-uuid|Event {n}")
}

pub fn point(n: u32) -> Point {
    Point {
        uuid: format!("p{n}-uuid"),
        ident: format!("PT{n}"),
        name: format!("Point {n}"),
        address: Address {
            street_address: Some(String::from("Złota")),
            street_number: Some(format!("{n}")),
            city_name: Some(String::from("Warszawa")),
            postal_code: Some(String::from("00-120")),
            geo_lat: Some(String::from("52.22977000")),
            geo_lng: Some(String::from("21.01178000")),
        },
    }
}

pub fn staff_member(n: u32) -> Staff {
    Staff {
        uuid: format!("s{n}-uuid"),
        firstname: String::from("Anna"),
        lastname: format!("Kowalska{n}"),
        ident: format!("AK0{n}"),
    }
}

/// In-memory gateway with swappable fixtures, per-endpoint failure
/// switches, and call counters. Tests keep a reference and hand
/// `&MockGateway` to the planner.
#[derive(Default)]
pub struct MockGateway {
    pub territories: Mutex<Vec<Territory>>,
    pub events: Mutex<Vec<Event>>,
    pub points: Mutex<Vec<Point>>,
    pub staff: Mutex<Vec<Staff>>,
    pub fail_territories: AtomicBool,
    pub fail_events: AtomicBool,
    pub fail_points: AtomicBool,
    pub fail_staff: AtomicBool,
    pub fail_create: AtomicBool,
    pub fail_accept: AtomicBool,
    pub territory_calls: AtomicUsize,
    pub event_calls: AtomicUsize,
    pub point_calls: AtomicUsize,
    pub staff_calls: AtomicUsize,
    pub create_calls: AtomicUsize,
    pub accept_calls: AtomicUsize,
    pub last_point_request: Mutex<Option<(String, String)>>,
    pub last_staff_request: Mutex<Option<(String, String)>>,
    pub created_payload: Mutex<Option<ActionPayload>>,
    pub accepted: Mutex<Option<(String, String)>>,
}

pub fn gateway_with_fixtures() -> MockGateway {
    let gateway: MockGateway = MockGateway::default();
    *gateway.territories.lock().unwrap() = vec![territory(1), territory(2)];
    *gateway.events.lock().unwrap() = vec![event(1), event(2)];
    *gateway.points.lock().unwrap() = vec![point(1), point(2)];
    *gateway.staff.lock().unwrap() = vec![staff_member(1), staff_member(2)];
    gateway
}

fn down(endpoint: &str) -> GatewayError {
    GatewayError::Transport(format!("{endpoint} unavailable"))
}

impl Gateway for &MockGateway {
    async fn list_territories(&self, _page_size: u32) -> Result<Vec<Territory>, GatewayError> {
        self.territory_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_territories.load(Ordering::SeqCst) {
            return Err(down("territory/list"));
        }
        Ok(self.territories.lock().unwrap().clone())
    }

    async fn list_events(&self, _page_size: u32) -> Result<Vec<Event>, GatewayError> {
        self.event_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_events.load(Ordering::SeqCst) {
            return Err(down("event/list"));
        }
        Ok(self.events.lock().unwrap().clone())
    }

    async fn list_points(
        &self,
        territory_uuid: &str,
        event_uuid: &str,
        _page_size: u32,
    ) -> Result<Vec<Point>, GatewayError> {
        self.point_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_point_request.lock().unwrap() =
            Some((territory_uuid.to_string(), event_uuid.to_string()));
        if self.fail_points.load(Ordering::SeqCst) {
            return Err(down("point/list"));
        }
        Ok(self.points.lock().unwrap().clone())
    }

    async fn list_staff(
        &self,
        territory_uuid: &str,
        date: &str,
        _page_size: u32,
    ) -> Result<Vec<Staff>, GatewayError> {
        self.staff_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_staff_request.lock().unwrap() =
            Some((territory_uuid.to_string(), date.to_string()));
        if self.fail_staff.load(Ordering::SeqCst) {
            return Err(down("user/list"));
        }
        Ok(self.staff.lock().unwrap().clone())
    }

    async fn create_action(&self, payload: &ActionPayload) -> Result<CreatedAction, GatewayError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_create.load(Ordering::SeqCst) {
            return Err(GatewayError::Remote {
                status: 500,
                body: String::from("create failed"),
            });
        }
        *self.created_payload.lock().unwrap() = Some(payload.clone());
        Ok(CreatedAction {
            uuid: String::from("act-uuid"),
            ident: String::from("ACT-123"),
        })
    }

    async fn set_action_status(
        &self,
        action_uuid: &str,
        status_ident: &str,
    ) -> Result<(), GatewayError> {
        self.accept_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_accept.load(Ordering::SeqCst) {
            return Err(GatewayError::Remote {
                status: 403,
                body: String::from("not allowed"),
            });
        }
        *self.accepted.lock().unwrap() =
            Some((action_uuid.to_string(), status_ident.to_string()));
        Ok(())
    }
}

pub fn planner(gateway: &MockGateway) -> Planner<&MockGateway> {
    Planner::new(gateway, sample_now())
}

/// Planner with the whole cascade walked and every form field filled,
/// ready to submit.
pub async fn planner_with_full_selection(gateway: &MockGateway) -> Planner<&MockGateway> {
    let mut planner: Planner<&MockGateway> = self::planner(gateway);
    planner.select_territory(&territory_token(1), today()).await;
    planner.select_event(&event_token(1)).await;
    planner.select_point(&point(1));
    planner.select_staff(&staff_member(1));
    planner.set_name("Spring campaign");
    planner
}
