// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use tour_planner_domain::{Point, Staff};

/// Queries shorter than this hide the results list entirely.
pub const MIN_QUERY_LEN: usize = 2;

/// Result of one incremental search pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome<'a, T> {
    /// The query is too short; any open results list closes.
    Hidden,
    /// Every cached record whose haystack contains the query. May be
    /// empty, which a UI host renders as "no results".
    Matches(Vec<&'a T>),
}

/// Case-insensitive substring search over the cached point set. The
/// full set is re-scanned on every call; the cache is small enough
/// (one page) that an index would not pay for itself.
#[must_use]
pub fn search_points<'a>(points: &'a [Point], query: &str) -> SearchOutcome<'a, Point> {
    filter(points, query, point_haystack)
}

/// Case-insensitive substring search over the cached staff set.
#[must_use]
pub fn search_staff<'a>(staff: &'a [Staff], query: &str) -> SearchOutcome<'a, Staff> {
    filter(staff, query, staff_haystack)
}

fn filter<'a, T>(
    records: &'a [T],
    query: &str,
    haystack: impl Fn(&T) -> String,
) -> SearchOutcome<'a, T> {
    if query.chars().count() < MIN_QUERY_LEN {
        return SearchOutcome::Hidden;
    }
    let needle: String = query.to_lowercase();
    SearchOutcome::Matches(
        records
            .iter()
            .filter(|record| haystack(record).to_lowercase().contains(&needle))
            .collect(),
    )
}

fn point_haystack(point: &Point) -> String {
    format!(
        "{} {} {}",
        point.ident,
        point.name,
        point.address.summary().unwrap_or_default()
    )
}

fn staff_haystack(staff: &Staff) -> String {
    format!("{} {} {}", staff.firstname, staff.lastname, staff.ident)
}
