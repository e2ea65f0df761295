// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Composite selection tokens.
//!
//! A selected record is stored in the form state as a compact
//! pipe-delimited string carrying the identifier plus the denormalized
//! display fields, so the creation request can be assembled later
//! without a further remote lookup. The point token carries its address
//! JSON-encoded as the final part; parsing splits with a part limit so
//! pipes inside the JSON are preserved.

use crate::error::DomainError;
use crate::types::{Address, Event, Point, Staff, Territory};

/// Territory selection token: `uuid|ident`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerritoryToken {
    /// The remote identifier.
    pub uuid: String,
    /// The territory code.
    pub ident: String,
}

impl TerritoryToken {
    /// Encodes a territory into its composite token.
    #[must_use]
    pub fn encode(territory: &Territory) -> String {
        format!("{}|{}", territory.uuid, territory.ident)
    }

    /// Parses a composite territory token.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is empty, has fewer than two
    /// pipe-delimited parts, or has an empty identifier part.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let (uuid, ident) = split_pair(raw, "territory")?;
        Ok(Self { uuid, ident })
    }
}

/// Event selection token: `uuid|name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventToken {
    /// The remote identifier.
    pub uuid: String,
    /// The event name.
    pub name: String,
}

impl EventToken {
    /// Encodes an event into its composite token.
    #[must_use]
    pub fn encode(event: &Event) -> String {
        format!("{}|{}", event.uuid, event.name)
    }

    /// Parses a composite event token.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is empty, has fewer than two
    /// pipe-delimited parts, or has an empty identifier part.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let (uuid, name) = split_pair(raw, "event")?;
        Ok(Self { uuid, name })
    }
}

/// Point selection token: `uuid|ident|name|<address JSON>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointToken {
    /// The remote identifier.
    pub uuid: String,
    /// The short point code.
    pub ident: String,
    /// The point name.
    pub name: String,
    /// The point address, reconstructed from the JSON part.
    pub address: Address,
}

impl PointToken {
    /// Encodes a point into its composite token.
    ///
    /// The address is JSON-encoded into the fourth part; an
    /// unserializable address degrades to `{}` rather than failing.
    #[must_use]
    pub fn encode(point: &Point) -> String {
        let address_json: String =
            serde_json::to_string(&point.address).unwrap_or_else(|_| String::from("{}"));
        format!(
            "{}|{}|{}|{address_json}",
            point.uuid, point.ident, point.name
        )
    }

    /// Parses a composite point token.
    ///
    /// An unreadable address part degrades to an empty address; the
    /// identifier parts are validated strictly.
    ///
    /// # Errors
    ///
    /// Returns an error if the token has fewer than four pipe-delimited
    /// parts or an empty identifier part.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let parts: Vec<&str> = raw.splitn(4, '|').collect();
        if raw.is_empty() {
            return Err(DomainError::EmptyToken { field: "point" });
        }
        if parts.len() < 4 || parts[0].is_empty() {
            return Err(DomainError::MalformedToken {
                field: "point",
                expected_parts: 4,
            });
        }
        let address: Address = serde_json::from_str(parts[3]).unwrap_or_default();
        Ok(Self {
            uuid: parts[0].to_string(),
            ident: parts[1].to_string(),
            name: parts[2].to_string(),
            address,
        })
    }
}

/// Staff selection token: `uuid|firstname|lastname|ident`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaffToken {
    /// The remote identifier.
    pub uuid: String,
    /// First name.
    pub firstname: String,
    /// Last name.
    pub lastname: String,
    /// The short personnel code.
    pub ident: String,
}

impl StaffToken {
    /// Encodes a staff member into their composite token.
    #[must_use]
    pub fn encode(staff: &Staff) -> String {
        format!(
            "{}|{}|{}|{}",
            staff.uuid, staff.firstname, staff.lastname, staff.ident
        )
    }

    /// Parses a composite staff token.
    ///
    /// # Errors
    ///
    /// Returns an error if the token has fewer than four pipe-delimited
    /// parts or an empty identifier part.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let parts: Vec<&str> = raw.splitn(4, '|').collect();
        if raw.is_empty() {
            return Err(DomainError::EmptyToken { field: "staff" });
        }
        if parts.len() < 4 || parts[0].is_empty() {
            return Err(DomainError::MalformedToken {
                field: "staff",
                expected_parts: 4,
            });
        }
        Ok(Self {
            uuid: parts[0].to_string(),
            firstname: parts[1].to_string(),
            lastname: parts[2].to_string(),
            ident: parts[3].to_string(),
        })
    }
}

/// Splits a two-part token, validating shape and a non-empty first part.
fn split_pair(raw: &str, field: &'static str) -> Result<(String, String), DomainError> {
    if raw.is_empty() {
        return Err(DomainError::EmptyToken { field });
    }
    let parts: Vec<&str> = raw.splitn(2, '|').collect();
    if parts.len() < 2 || parts[0].is_empty() {
        return Err(DomainError::MalformedToken {
            field,
            expected_parts: 2,
        });
    }
    Ok((parts[0].to_string(), parts[1].to_string()))
}
