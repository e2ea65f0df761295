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

mod error;
mod selection;
mod timewindow;
mod token;
mod types;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use selection::Selection;
pub use timewindow::{
    DEFAULT_DURATION_HOURS, derive_end_time, format_date, format_window_end, format_window_start,
};
pub use token::{EventToken, PointToken, StaffToken, TerritoryToken};
pub use types::{Address, Event, Point, Staff, Territory};
