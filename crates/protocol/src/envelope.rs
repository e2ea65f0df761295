// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::Deserialize;
use serde_json::Value;
use tour_planner_domain::{Address, Event, Point, Staff, Territory};

/// Extracts the record array from a list response.
///
/// The remote API is inconsistent about its envelope; records arrive
/// under `.data`, under `.items`, or as a bare array depending on the
/// deployment. Priority is `.data`, then `.items`, then the bare
/// array. Any other shape yields an empty sequence rather than an
/// error so a surprising envelope degrades to "no results".
#[must_use]
pub fn normalize(response: Value) -> Vec<Value> {
    match response {
        Value::Array(records) => records,
        Value::Object(mut fields) => {
            if let Some(Value::Array(records)) = fields.remove("data") {
                records
            } else if let Some(Value::Array(records)) = fields.remove("items") {
                records
            } else {
                Vec::new()
            }
        }
        _ => Vec::new(),
    }
}

#[derive(Debug, Default, Deserialize)]
struct TerritoryRecord {
    uuid: Option<String>,
    id: Option<String>,
    ident: Option<String>,
    name: Option<String>,
    title: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct EventRecord {
    uuid: Option<String>,
    id: Option<String>,
    name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct PointRecord {
    uuid: Option<String>,
    id: Option<String>,
    ident: Option<String>,
    name: Option<String>,
    address: Option<Address>,
}

#[derive(Debug, Default, Deserialize)]
struct StaffRecord {
    uuid: Option<String>,
    id: Option<String>,
    firstname: Option<String>,
    lastname: Option<String>,
    ident: Option<String>,
}

fn record<T>(value: Value) -> T
where
    T: Default + for<'de> Deserialize<'de>,
{
    serde_json::from_value(value).unwrap_or_default()
}

fn uuid_of(uuid: Option<String>, id: Option<String>) -> String {
    uuid.filter(|u| !u.is_empty())
        .or(id)
        .unwrap_or_default()
}

/// Converts a territory list response into domain territories.
///
/// Field names vary across deployments, so the display identifier
/// falls back `ident`, `name`, `title`, then a positional placeholder,
/// and the uuid falls back from `uuid` to `id`.
#[must_use]
pub fn territories_from(response: Value) -> Vec<Territory> {
    normalize(response)
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            let raw: TerritoryRecord = record(value);
            Territory {
                uuid: uuid_of(raw.uuid, raw.id),
                ident: raw
                    .ident
                    .filter(|i| !i.is_empty())
                    .or_else(|| raw.name.filter(|n| !n.is_empty()))
                    .or_else(|| raw.title.filter(|t| !t.is_empty()))
                    .unwrap_or_else(|| format!("Territory {}", index + 1)),
            }
        })
        .collect()
}

/// Converts an event list response into domain events.
#[must_use]
pub fn events_from(response: Value) -> Vec<Event> {
    normalize(response)
        .into_iter()
        .map(|value| {
            let raw: EventRecord = record(value);
            Event {
                uuid: uuid_of(raw.uuid, raw.id),
                name: raw.name.unwrap_or_default(),
            }
        })
        .collect()
}

/// Converts a point list response into domain points. A missing
/// address becomes an empty one so the record is still selectable.
#[must_use]
pub fn points_from(response: Value) -> Vec<Point> {
    normalize(response)
        .into_iter()
        .map(|value| {
            let raw: PointRecord = record(value);
            Point {
                uuid: uuid_of(raw.uuid, raw.id),
                ident: raw.ident.unwrap_or_default(),
                name: raw.name.unwrap_or_default(),
                address: raw.address.unwrap_or_default(),
            }
        })
        .collect()
}

/// Converts a staff list response into domain staff members.
#[must_use]
pub fn staff_from(response: Value) -> Vec<Staff> {
    normalize(response)
        .into_iter()
        .map(|value| {
            let raw: StaffRecord = record(value);
            Staff {
                uuid: uuid_of(raw.uuid, raw.id),
                firstname: raw.firstname.unwrap_or_default(),
                lastname: raw.lastname.unwrap_or_default(),
                ident: raw.ident.unwrap_or_default(),
            }
        })
        .collect()
}
