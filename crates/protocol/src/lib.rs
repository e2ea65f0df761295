// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod draft;
mod envelope;
mod requests;
mod responses;

#[cfg(test)]
mod tests;

pub use draft::{
    ACTION_TYPE_IDENT, AREA_UUID, ActionBody, ActionPayload, ActionPoint, ActionUser, DateRef,
    DraftAddress, EventRef, FALLBACK_GEO_LAT, FALLBACK_GEO_LNG, TerritoryRef, TypeRef,
};
pub use envelope::{events_from, normalize, points_from, staff_from, territories_from};
pub use requests::{
    Availability, EventListRequest, Pagination, PointListRequest, SetStatusRequest,
    StaffListRequest, StatusIdent, TerritoryListRequest, TerritoryUuids, UuidRef,
};
pub use responses::{CreatedAction, MutationResponse, StatusBlock};
