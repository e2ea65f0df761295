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
mod gateway;
mod planner;
mod search;
mod status;
mod submit;
mod velo;

#[cfg(test)]
mod tests;

pub use draft::{DraftError, build_draft};
pub use gateway::{Gateway, GatewayError};
pub use planner::{
    EVENT_PAGE_SIZE, FetchToken, POINT_PAGE_SIZE, Planner, STAFF_PAGE_SIZE, TERRITORY_PAGE_SIZE,
};
pub use search::{MIN_QUERY_LEN, SearchOutcome, search_points, search_staff};
pub use status::{CascadeReport, SUCCESS_DISMISS_MS, StatusKind, StatusMessage};
pub use submit::{ACCEPTED_STATUS, RESET_DELAY_MS, SubmitOutcome, SubmitReport};
pub use velo::{
    VELO_EVENT_NAME, VELO_EVENT_UUID, VELO_POINT_IDENT, VELO_POINT_UUID, VELO_SUFFIX, velo_event,
    velo_point,
};
