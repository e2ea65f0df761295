// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Time-window rules for tour actions.
//!
//! An action runs from `date + from_time` to `date + to_time`. The end
//! time defaults to four hours after the start time; the addition wraps
//! around midnight without tracking a date rollover, matching the
//! time-of-day form field.

use time::{Date, Duration, Time};

/// Default action duration in hours.
pub const DEFAULT_DURATION_HOURS: i64 = 4;

/// Derives the default end time from a start time.
///
/// Wraps past midnight: `22:30` becomes `02:30`.
#[must_use]
pub fn derive_end_time(from: Time) -> Time {
    from + Duration::hours(DEFAULT_DURATION_HOURS)
}

/// Formats a date as `YYYY-MM-DD`.
#[must_use]
pub fn format_date(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

/// Formats the window start as `"YYYY-MM-DD HH:MM:00"`.
#[must_use]
pub fn format_window_start(date: Date, from: Time) -> String {
    format_window(date, from)
}

/// Formats the window end as `"YYYY-MM-DD HH:MM:00"`.
///
/// The end uses the same calendar date as the start even when the end
/// time wrapped past midnight.
#[must_use]
pub fn format_window_end(date: Date, to: Time) -> String {
    format_window(date, to)
}

fn format_window(date: Date, at: Time) -> String {
    format!(
        "{} {:02}:{:02}:00",
        format_date(date),
        at.hour(),
        at.minute()
    )
}
