// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::Deserialize;
use serde_json::Value;

/// Response to `action/create` and `action/set-status`.
///
/// `data` stays untyped here since the two endpoints disagree on its
/// shape; `created` extracts the created-action identity when present.
#[derive(Debug, Clone, Deserialize)]
pub struct MutationResponse {
    pub status: Option<StatusBlock>,
    #[serde(default)]
    pub data: Option<Value>,
}

impl MutationResponse {
    /// Whether the remote marked the mutation successful.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.as_ref().is_some_and(|status| status.success)
    }

    /// The created-action identity, when `data` carries one.
    #[must_use]
    pub fn created(&self) -> Option<CreatedAction> {
        self.data
            .clone()
            .and_then(|value| serde_json::from_value(value).ok())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusBlock {
    pub success: bool,
}

/// The remote-assigned identity of a created action.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedAction {
    pub uuid: String,
    pub ident: String,
}
