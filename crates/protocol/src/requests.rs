// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::Serialize;

/// Zero-based page window shared by every list request.
#[derive(Debug, Clone, Serialize)]
pub struct Pagination {
    pub page: u32,
    #[serde(rename = "pageSize")]
    pub page_size: u32,
}

impl Pagination {
    /// First page at the given size.
    #[must_use]
    pub const fn first(page_size: u32) -> Self {
        Self { page: 0, page_size }
    }
}

/// Reference to a record by uuid.
#[derive(Debug, Clone, Serialize)]
pub struct UuidRef {
    pub uuid: String,
}

/// Body of `territory/list`.
#[derive(Debug, Clone, Serialize)]
pub struct TerritoryListRequest {
    pub pagination: Pagination,
}

/// Body of `event/list`.
#[derive(Debug, Clone, Serialize)]
pub struct EventListRequest {
    pub pagination: Pagination,
}

/// Body of `point/list`, scoped to one territory and one event.
#[derive(Debug, Clone, Serialize)]
pub struct PointListRequest {
    pub event: UuidRef,
    pub territory: UuidRef,
    pub pagination: Pagination,
}

/// Inclusive availability window, `YYYY-MM-DD` on both ends.
#[derive(Debug, Clone, Serialize)]
pub struct Availability {
    pub since: String,
    pub until: String,
}

/// Territory filter for the staff list, a uuid array on the wire.
#[derive(Debug, Clone, Serialize)]
pub struct TerritoryUuids {
    pub uuids: Vec<String>,
}

/// Body of `user/list`.
#[derive(Debug, Clone, Serialize)]
pub struct StaffListRequest {
    pub pagination: Pagination,
    pub availability: Availability,
    pub territory: TerritoryUuids,
}

/// Status reference by ident, e.g. `accepted`.
#[derive(Debug, Clone, Serialize)]
pub struct StatusIdent {
    pub ident: String,
}

/// Body of `action/set-status`.
#[derive(Debug, Clone, Serialize)]
pub struct SetStatusRequest {
    pub status: StatusIdent,
    pub action: UuidRef,
}
