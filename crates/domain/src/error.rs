// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A composite selection token was empty where a value is required.
    EmptyToken {
        /// The selection field the token belongs to.
        field: &'static str,
    },
    /// A composite selection token did not have the expected shape.
    MalformedToken {
        /// The selection field the token belongs to.
        field: &'static str,
        /// The number of pipe-delimited parts required.
        expected_parts: usize,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyToken { field } => {
                write!(f, "Empty {field} selection token")
            }
            Self::MalformedToken {
                field,
                expected_parts,
            } => {
                write!(
                    f,
                    "Malformed {field} selection token: expected {expected_parts} pipe-delimited parts with a non-empty identifier"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
