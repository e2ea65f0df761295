// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::requests::UuidRef;
use serde::Serialize;
use tour_planner_domain::Address;

/// The single planning area every action is filed under.
pub const AREA_UUID: &str = "80dba439-7ca8-11ef-816e-065ed9e1cfca";

/// Geo coordinates substituted when a point carries none.
pub const FALLBACK_GEO_LAT: &str = "52.51983050";
pub const FALLBACK_GEO_LNG: &str = "19.81849910";

/// The only action type this client creates.
pub const ACTION_TYPE_IDENT: &str = "Standard";

/// Body of `action/create`.
#[derive(Debug, Clone, Serialize)]
pub struct ActionPayload {
    pub action: ActionBody,
}

/// The action object itself. `action_points` and `users` are arrays on
/// the wire even though this client always sends exactly one entry in
/// each.
#[derive(Debug, Clone, Serialize)]
pub struct ActionBody {
    pub new: bool,
    pub ident: String,
    pub name: String,
    pub description: String,
    pub excerpt: String,
    pub since: DateRef,
    pub until: DateRef,
    #[serde(rename = "type")]
    pub kind: TypeRef,
    pub territory: TerritoryRef,
    pub area: UuidRef,
    pub event: EventRef,
    #[serde(rename = "actionPoints")]
    pub action_points: Vec<ActionPoint>,
    pub users: Vec<ActionUser>,
}

/// Wrapped timestamp, `YYYY-MM-DD HH:MM:SS`.
#[derive(Debug, Clone, Serialize)]
pub struct DateRef {
    pub date: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TypeRef {
    pub ident: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TerritoryRef {
    pub uuid: String,
    pub ident: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct EventRef {
    pub uuid: String,
    pub name: String,
}

/// One visited point within the action.
#[derive(Debug, Clone, Serialize)]
pub struct ActionPoint {
    pub trash: bool,
    pub point: UuidRef,
    pub ident: String,
    pub name: String,
    pub address: DraftAddress,
}

/// Address as `action/create` wants it: every field present as a
/// string, with the fallback coordinates filled in where the source
/// address has none.
#[derive(Debug, Clone, Serialize)]
pub struct DraftAddress {
    #[serde(rename = "streetAddress")]
    pub street_address: String,
    #[serde(rename = "streetNumber")]
    pub street_number: String,
    #[serde(rename = "cityName")]
    pub city_name: String,
    #[serde(rename = "postalCode")]
    pub postal_code: String,
    #[serde(rename = "geoLat")]
    pub geo_lat: String,
    #[serde(rename = "geoLng")]
    pub geo_lng: String,
}

impl DraftAddress {
    /// Builds the wire address from a domain address, substituting the
    /// fallback coordinates when the point carries none.
    #[must_use]
    pub fn from_address(address: &Address) -> Self {
        Self {
            street_address: address.street_address.clone().unwrap_or_default(),
            street_number: address.street_number.clone().unwrap_or_default(),
            city_name: address.city_name.clone().unwrap_or_default(),
            postal_code: address.postal_code.clone().unwrap_or_default(),
            geo_lat: address
                .geo_lat
                .clone()
                .filter(|lat| !lat.is_empty())
                .unwrap_or_else(|| String::from(FALLBACK_GEO_LAT)),
            geo_lng: address
                .geo_lng
                .clone()
                .filter(|lng| !lng.is_empty())
                .unwrap_or_else(|| String::from(FALLBACK_GEO_LNG)),
        }
    }
}

/// One assigned staff member within the action.
#[derive(Debug, Clone, Serialize)]
pub struct ActionUser {
    pub trash: bool,
    pub uuid: String,
    pub firstname: String,
    pub lastname: String,
    pub ident: String,
}
