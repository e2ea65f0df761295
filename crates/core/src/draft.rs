// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::fmt;
use time::Date;
use tour_planner_domain::{
    EventToken, PointToken, Selection, StaffToken, TerritoryToken, format_window_end,
    format_window_start,
};
use tour_planner_protocol::{
    ACTION_TYPE_IDENT, AREA_UUID, ActionBody, ActionPayload, ActionPoint, ActionUser, DateRef,
    DraftAddress, EventRef, TerritoryRef, TypeRef, UuidRef,
};

/// A form field that blocks draft assembly. Checked in form order and
/// reported one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftError {
    EmptyName,
    NoTerritory,
    NoEvent,
    NoPoint,
    NoStaff,
    NoDate,
}

impl fmt::Display for DraftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Action name is required"),
            Self::NoTerritory => write!(f, "Select a territory"),
            Self::NoEvent => write!(f, "Select an event"),
            Self::NoPoint => write!(f, "Select a point"),
            Self::NoStaff => write!(f, "Select a staff member"),
            Self::NoDate => write!(f, "Select a date"),
        }
    }
}

impl std::error::Error for DraftError {}

/// Assembles the `action/create` payload from the current form state.
///
/// Fails fast on the first missing field, in form order: name,
/// territory, event, point, staff, date. A malformed composite token
/// counts as its field being unselected.
///
/// # Errors
///
/// Returns the first [`DraftError`] whose field is missing or
/// malformed.
pub fn build_draft(selection: &Selection) -> Result<ActionPayload, DraftError> {
    let name: &str = selection.name.trim();
    if name.is_empty() {
        return Err(DraftError::EmptyName);
    }
    let territory: TerritoryToken =
        TerritoryToken::parse(&selection.territory).map_err(|_| DraftError::NoTerritory)?;
    let event: EventToken = EventToken::parse(&selection.event).map_err(|_| DraftError::NoEvent)?;
    let point: PointToken = PointToken::parse(&selection.point).map_err(|_| DraftError::NoPoint)?;
    let staff: StaffToken = StaffToken::parse(&selection.staff).map_err(|_| DraftError::NoStaff)?;
    let date: Date = selection.date.ok_or(DraftError::NoDate)?;

    Ok(ActionPayload {
        action: ActionBody {
            new: true,
            ident: String::new(),
            name: name.to_string(),
            description: String::new(),
            excerpt: String::new(),
            since: DateRef {
                date: format_window_start(date, selection.from_time),
            },
            until: DateRef {
                date: format_window_end(date, selection.to_time),
            },
            kind: TypeRef {
                ident: String::from(ACTION_TYPE_IDENT),
            },
            territory: TerritoryRef {
                uuid: territory.uuid,
                ident: territory.ident,
            },
            area: UuidRef {
                uuid: String::from(AREA_UUID),
            },
            event: EventRef {
                uuid: event.uuid,
                name: event.name,
            },
            action_points: vec![ActionPoint {
                trash: false,
                point: UuidRef { uuid: point.uuid },
                ident: point.ident,
                name: point.name,
                address: DraftAddress::from_address(&point.address),
            }],
            users: vec![ActionUser {
                trash: false,
                uuid: staff.uuid,
                firstname: staff.firstname,
                lastname: staff.lastname,
                ident: staff.ident,
            }],
        },
    })
}
