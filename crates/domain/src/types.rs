// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// A sales territory (region) as reported by the tour API.
///
/// Territories form the root of the selection cascade: every other
/// result set is scoped to the currently selected territory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Territory {
    /// The remote identifier.
    pub uuid: String,
    /// The human-readable territory code.
    pub ident: String,
}

/// A campaign event. Events are account-wide on the remote API but are
/// logically associated with the selected territory in the form flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// The remote identifier.
    pub uuid: String,
    /// The event name.
    pub name: String,
}

/// Postal address of a point, with all fields optional.
///
/// Serde names match the wire representation so the address can round
/// trip through the point selection token unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Street name.
    #[serde(rename = "streetAddress", default)]
    pub street_address: Option<String>,
    /// Street number.
    #[serde(rename = "streetNumber", default)]
    pub street_number: Option<String>,
    /// City name.
    #[serde(rename = "cityName", default)]
    pub city_name: Option<String>,
    /// Postal code.
    #[serde(rename = "postalCode", default)]
    pub postal_code: Option<String>,
    /// Latitude, as a decimal string.
    #[serde(rename = "geoLat", default)]
    pub geo_lat: Option<String>,
    /// Longitude, as a decimal string.
    #[serde(rename = "geoLng", default)]
    pub geo_lng: Option<String>,
}

impl Address {
    /// Returns a one-line `"street number, city"` summary, or `None`
    /// when no street/number/city information is present.
    #[must_use]
    pub fn summary(&self) -> Option<String> {
        let street: &str = self.street_address.as_deref().unwrap_or("");
        let number: &str = self.street_number.as_deref().unwrap_or("");
        let city: &str = self.city_name.as_deref().unwrap_or("");
        if street.is_empty() && number.is_empty() && city.is_empty() {
            return None;
        }
        Some(format!("{street} {number}, {city}").trim().to_string())
    }
}

/// A physical location eligible for a tour action, scoped to a
/// (territory, event) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    /// The remote identifier.
    pub uuid: String,
    /// The short point code.
    pub ident: String,
    /// The point name.
    pub name: String,
    /// The point address.
    pub address: Address,
}

impl Point {
    /// Returns the display label shown in search results and in the
    /// point field after selection: `"IDENT - name (street 1, city)"`.
    #[must_use]
    pub fn display_label(&self) -> String {
        self.address.summary().map_or_else(
            || format!("{} - {}", self.ident, self.name),
            |summary| format!("{} - {} ({summary})", self.ident, self.name),
        )
    }
}

/// A staff member eligible for assignment, scoped to a territory and
/// the current date's availability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Staff {
    /// The remote identifier.
    pub uuid: String,
    /// First name.
    pub firstname: String,
    /// Last name.
    pub lastname: String,
    /// The short personnel code.
    pub ident: String,
}

impl Staff {
    /// Returns the display label `"First Last (IDENT)"`.
    #[must_use]
    pub fn display_label(&self) -> String {
        format!("{} {} ({})", self.firstname, self.lastname, self.ident)
    }
}
