// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use tour_planner_domain::{Address, Event, Point};

/// The fixed event substituted while Velo mode is on.
pub const VELO_EVENT_UUID: &str = "f6ab5b6c-8855-11ed-bb12-065ed9e1cfca";
pub const VELO_EVENT_NAME: &str = "Unconvencional";

/// The fixed point substituted while Velo mode is on.
pub const VELO_POINT_UUID: &str = "cdcea488-66f4-5ad3-acee-0dc4739e68b9";
pub const VELO_POINT_IDENT: &str = "Unconvencional_R409D2S1";

/// Suffix appended to the point label while Velo mode is on.
pub const VELO_SUFFIX: &str = " (Velo)";

/// Unknown-location sentinel carried by the Velo point.
const ZERO_GEO: &str = "0.00000000";

/// The synthetic Velo event.
#[must_use]
pub fn velo_event() -> Event {
    Event {
        uuid: String::from(VELO_EVENT_UUID),
        name: String::from(VELO_EVENT_NAME),
    }
}

/// The synthetic Velo point. Its address has no street data and the
/// zero-coordinate sentinel for both geo fields.
#[must_use]
pub fn velo_point() -> Point {
    Point {
        uuid: String::from(VELO_POINT_UUID),
        ident: String::from(VELO_POINT_IDENT),
        name: String::from(VELO_POINT_IDENT),
        address: Address {
            street_address: Some(String::new()),
            street_number: None,
            city_name: Some(String::new()),
            postal_code: None,
            geo_lat: Some(String::from(ZERO_GEO)),
            geo_lng: Some(String::from(ZERO_GEO)),
        },
    }
}
