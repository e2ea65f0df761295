// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::draft::build_draft;
use crate::gateway::Gateway;
use crate::planner::Planner;
use crate::status::StatusMessage;
use std::time::Duration;
use time::OffsetDateTime;
use tour_planner_protocol::{ActionPayload, CreatedAction};

/// Delay between a successful creation and the form reset, in
/// milliseconds. Long enough for the success message to register
/// before the fields empty out.
pub const RESET_DELAY_MS: u64 = 2000;

/// Status the engine moves a freshly created action to.
pub const ACCEPTED_STATUS: &str = "accepted";

/// Terminal state of one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The action was created; `ident` is remote-assigned.
    Succeeded { ident: String },
    /// Validation or creation failed; the form is untouched.
    Failed { message: String },
}

/// Everything a UI host needs to render one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitReport {
    pub outcome: SubmitOutcome,
    /// Whether the best-effort auto-accept went through. Its failure
    /// never downgrades a successful creation.
    pub auto_accepted: bool,
    pub messages: Vec<StatusMessage>,
}

impl<G: Gateway> Planner<G> {
    /// Runs the full submission workflow.
    ///
    /// Builds the draft, creates the action, then tries to move it to
    /// `accepted`. On success the form resets after [`RESET_DELAY_MS`],
    /// dated `now`. Validation and creation failures return `Failed`
    /// and leave the form as it was.
    pub async fn submit(&mut self, now: OffsetDateTime) -> SubmitReport {
        self.submitting = true;
        let payload: ActionPayload = match build_draft(&self.selection) {
            Ok(payload) => payload,
            Err(err) => {
                self.submitting = false;
                return failed(err.to_string());
            }
        };

        let created: CreatedAction = match self.gateway.create_action(&payload).await {
            Ok(created) => created,
            Err(err) => {
                tracing::error!(error = %err, "action creation failed");
                self.submitting = false;
                return failed(format!("Failed to create action: {err}"));
            }
        };
        tracing::info!(ident = %created.ident, uuid = %created.uuid, "action created");

        let mut messages: Vec<StatusMessage> = vec![StatusMessage::success(format!(
            "Action created! ID: {}",
            created.ident
        ))];
        let auto_accepted: bool = match self
            .gateway
            .set_action_status(&created.uuid, ACCEPTED_STATUS)
            .await
        {
            Ok(()) => {
                messages.push(StatusMessage::success(format!(
                    "Action created and accepted! ID: {}",
                    created.ident
                )));
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, uuid = %created.uuid, "auto-accept failed");
                false
            }
        };

        // The flag drops before the delayed reset so the UI unlocks
        // while the success message is still up.
        self.submitting = false;
        tokio::time::sleep(Duration::from_millis(RESET_DELAY_MS)).await;
        self.reset_form(now);

        SubmitReport {
            outcome: SubmitOutcome::Succeeded {
                ident: created.ident,
            },
            auto_accepted,
            messages,
        }
    }

    /// Returns the form and cascade state to their defaults. The
    /// territory list survives; everything below it clears, and Velo
    /// mode turns off.
    pub fn reset_form(&mut self, now: OffsetDateTime) {
        self.selection.reset(now);
        self.events.clear();
        self.points.clear();
        self.staff.clear();
        self.special_mode = false;
        self.point_search_enabled = false;
        self.begin_cascade();
        tracing::debug!("form reset");
    }
}

fn failed(message: String) -> SubmitReport {
    SubmitReport {
        outcome: SubmitOutcome::Failed {
            message: message.clone(),
        },
        auto_accepted: false,
        messages: vec![StatusMessage::error(message)],
    }
}
