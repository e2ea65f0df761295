// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// How long a UI host should keep a success message visible, in
/// milliseconds. The engine records messages, it does not render them.
pub const SUCCESS_DISMISS_MS: u64 = 3000;

/// Severity of a user-visible status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Warning,
    Error,
}

/// A message destined for the status area of a UI host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Warning,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }
}

/// The messages produced by one cascade step. Remote failures surface
/// here instead of as `Err`, since a failed fetch leaves the planner
/// in a consistent (emptied) state rather than an unusable one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CascadeReport {
    pub messages: Vec<StatusMessage>,
}

impl CascadeReport {
    /// A report with no messages.
    #[must_use]
    pub const fn clean() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    /// Whether every fetch in the step succeeded.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.messages.is_empty()
    }

    pub(crate) fn record(&mut self, message: Option<StatusMessage>) {
        if let Some(message) = message {
            self.messages.push(message);
        }
    }
}
