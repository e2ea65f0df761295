// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::timewindow::derive_end_time;
use time::{Date, OffsetDateTime, Time};

/// The in-progress form state for one tour action.
///
/// The territory/event/point/staff fields hold raw composite selection
/// tokens (see the token module); an empty string means "not selected".
/// The Selection is owned exclusively by the planner; no other
/// component mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// The free-form action name.
    pub name: String,
    /// Territory token (`uuid|ident`), empty when unselected.
    pub territory: String,
    /// Event token (`uuid|name`), empty when unselected.
    pub event: String,
    /// Point token (`uuid|ident|name|<address JSON>`), empty when unselected.
    pub point: String,
    /// Staff token (`uuid|firstname|lastname|ident`), empty when unselected.
    pub staff: String,
    /// The action date.
    pub date: Option<Date>,
    /// The window start time.
    pub from_time: Time,
    /// The window end time.
    pub to_time: Time,
    /// Whether the end time was edited directly. While false, the end
    /// time re-derives from the start time on every start-time change.
    to_time_edited: bool,
}

impl Selection {
    /// Creates a fresh selection with form defaults: today's date, the
    /// current time (truncated to the minute) and an end time four
    /// hours later.
    #[must_use]
    pub fn new(now: OffsetDateTime) -> Self {
        let from_time: Time = truncate_to_minute(now.time());
        Self {
            name: String::new(),
            territory: String::new(),
            event: String::new(),
            point: String::new(),
            staff: String::new(),
            date: Some(now.date()),
            from_time,
            to_time: derive_end_time(from_time),
            to_time_edited: false,
        }
    }

    /// Sets the window start time, re-deriving the end time unless the
    /// end time has been edited directly.
    pub fn set_from_time(&mut self, from: Time) {
        self.from_time = from;
        if !self.to_time_edited {
            self.to_time = derive_end_time(from);
        }
    }

    /// Sets the window end time directly, disabling auto-derivation
    /// until the next form reset.
    pub const fn set_to_time(&mut self, to: Time) {
        self.to_time = to;
        self.to_time_edited = true;
    }

    /// Returns whether the end time has been edited directly.
    #[must_use]
    pub const fn to_time_edited(&self) -> bool {
        self.to_time_edited
    }

    /// Resets every field back to the form defaults.
    pub fn reset(&mut self, now: OffsetDateTime) {
        *self = Self::new(now);
    }
}

fn truncate_to_minute(time: Time) -> Time {
    Time::from_hms(time.hour(), time.minute(), 0).unwrap_or(Time::MIDNIGHT)
}
