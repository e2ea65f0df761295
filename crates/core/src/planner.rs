// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::gateway::{Gateway, GatewayError};
use crate::search::{self, SearchOutcome};
use crate::status::{CascadeReport, StatusMessage};
use crate::velo::{VELO_SUFFIX, velo_event, velo_point};
use time::{Date, OffsetDateTime, Time};
use tour_planner_domain::{
    Event, EventToken, Point, PointToken, Selection, Staff, StaffToken, Territory, TerritoryToken,
    format_date,
};

/// Page sizes per result set, matching what the remote tolerates.
pub const TERRITORY_PAGE_SIZE: u32 = 100;
pub const EVENT_PAGE_SIZE: u32 = 500;
pub const POINT_PAGE_SIZE: u32 = 1000;
pub const STAFF_PAGE_SIZE: u32 = 1000;

/// Proof that a fetch belongs to the current cascade step.
///
/// Issued by [`Planner::begin_cascade`]; any later step supersedes it,
/// and applying results with a superseded token discards them. This is
/// what keeps a slow fetch from clobbering the sets of a newer
/// selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchToken(pub(crate) u64);

/// The selection engine.
///
/// Owns the form state, the cached result sets, and the cascade rules
/// between them. All mutation goes through its methods; the async
/// convenience methods (`select_territory`, `select_event`, ...) drive
/// the two-phase `begin_cascade` / `apply_*` surface internally.
#[derive(Debug)]
pub struct Planner<G> {
    pub(crate) gateway: G,
    pub(crate) selection: Selection,
    pub(crate) territories: Vec<Territory>,
    pub(crate) events: Vec<Event>,
    pub(crate) points: Vec<Point>,
    pub(crate) staff: Vec<Staff>,
    pub(crate) special_mode: bool,
    pub(crate) point_search_enabled: bool,
    pub(crate) submitting: bool,
    pub(crate) generation: u64,
}

impl<G: Gateway> Planner<G> {
    /// Creates a planner with an empty form dated `now`.
    #[must_use]
    pub fn new(gateway: G, now: OffsetDateTime) -> Self {
        Self {
            gateway,
            selection: Selection::new(now),
            territories: Vec::new(),
            events: Vec::new(),
            points: Vec::new(),
            staff: Vec::new(),
            special_mode: false,
            point_search_enabled: false,
            submitting: false,
            generation: 0,
        }
    }

    /// The current form state.
    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub fn territories(&self) -> &[Territory] {
        &self.territories
    }

    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[must_use]
    pub fn staff(&self) -> &[Staff] {
        &self.staff
    }

    #[must_use]
    pub const fn special_mode(&self) -> bool {
        self.special_mode
    }

    #[must_use]
    pub const fn point_search_enabled(&self) -> bool {
        self.point_search_enabled
    }

    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Starts a new cascade step, superseding every token issued
    /// before it.
    pub const fn begin_cascade(&mut self) -> FetchToken {
        self.generation += 1;
        FetchToken(self.generation)
    }

    const fn is_current(&self, token: FetchToken) -> bool {
        token.0 == self.generation
    }

    /// Replaces the territory set from a finished fetch. A superseded
    /// token discards the results; a fetch failure keeps the existing
    /// set, since a stale territory list is still navigable.
    pub fn apply_territories(
        &mut self,
        token: FetchToken,
        result: Result<Vec<Territory>, GatewayError>,
    ) -> Option<StatusMessage> {
        if !self.is_current(token) {
            tracing::debug!(
                token = token.0,
                generation = self.generation,
                "discarding superseded territory results"
            );
            return None;
        }
        match result {
            Ok(territories) => {
                tracing::debug!(count = territories.len(), "territories loaded");
                self.territories = territories;
                None
            }
            Err(err) => Some(StatusMessage::error(format!(
                "Failed to load territories: {err}"
            ))),
        }
    }

    /// Replaces the event set from a finished fetch. A fetch failure
    /// empties the set and surfaces a message.
    pub fn apply_events(
        &mut self,
        token: FetchToken,
        result: Result<Vec<Event>, GatewayError>,
    ) -> Option<StatusMessage> {
        if !self.is_current(token) {
            tracing::debug!(
                token = token.0,
                generation = self.generation,
                "discarding superseded event results"
            );
            return None;
        }
        match result {
            Ok(events) => {
                tracing::debug!(count = events.len(), "events loaded");
                self.events = events;
                None
            }
            Err(err) => {
                self.events.clear();
                Some(StatusMessage::error(format!("Failed to load events: {err}")))
            }
        }
    }

    /// Replaces the point set from a finished fetch and enables point
    /// search. A fetch failure empties the set and keeps search off.
    pub fn apply_points(
        &mut self,
        token: FetchToken,
        result: Result<Vec<Point>, GatewayError>,
    ) -> Option<StatusMessage> {
        if !self.is_current(token) {
            tracing::debug!(
                token = token.0,
                generation = self.generation,
                "discarding superseded point results"
            );
            return None;
        }
        match result {
            Ok(points) => {
                tracing::debug!(count = points.len(), "points loaded");
                self.points = points;
                self.point_search_enabled = true;
                None
            }
            Err(err) => {
                self.points.clear();
                self.point_search_enabled = false;
                Some(StatusMessage::error(format!("Failed to load points: {err}")))
            }
        }
    }

    /// Replaces the staff set from a finished fetch. A fetch failure
    /// empties the set and surfaces a message.
    pub fn apply_staff(
        &mut self,
        token: FetchToken,
        result: Result<Vec<Staff>, GatewayError>,
    ) -> Option<StatusMessage> {
        if !self.is_current(token) {
            tracing::debug!(
                token = token.0,
                generation = self.generation,
                "discarding superseded staff results"
            );
            return None;
        }
        match result {
            Ok(staff) => {
                tracing::debug!(count = staff.len(), "staff loaded");
                self.staff = staff;
                None
            }
            Err(err) => {
                self.staff.clear();
                Some(StatusMessage::error(format!("Failed to load staff: {err}")))
            }
        }
    }

    /// Reloads the territory set, page size [`TERRITORY_PAGE_SIZE`].
    pub async fn refresh_territories(&mut self) -> CascadeReport {
        let mut report: CascadeReport = CascadeReport::clean();
        let token: FetchToken = self.begin_cascade();
        let result: Result<Vec<Territory>, GatewayError> =
            self.gateway.list_territories(TERRITORY_PAGE_SIZE).await;
        report.record(self.apply_territories(token, result));
        report
    }

    /// Selects a territory by its composite token and runs the
    /// dependent fetches.
    ///
    /// An empty token clears the territory and everything below it.
    /// Otherwise events (unless Velo mode substitutes them) and staff
    /// available on `today` load concurrently; each failure surfaces
    /// its own message and empties its own set without aborting the
    /// other fetch.
    pub async fn select_territory(&mut self, raw: &str, today: Date) -> CascadeReport {
        let mut report: CascadeReport = CascadeReport::clean();
        self.clear_dependents();
        if raw.is_empty() {
            self.selection.territory.clear();
            self.begin_cascade();
            return report;
        }
        let territory: TerritoryToken = match TerritoryToken::parse(raw) {
            Ok(territory) => territory,
            Err(err) => {
                self.selection.territory.clear();
                self.begin_cascade();
                report.record(Some(StatusMessage::error(format!(
                    "Invalid territory selection: {err}"
                ))));
                return report;
            }
        };
        self.selection.territory = raw.to_string();
        tracing::info!(territory = %territory.ident, "territory selected");

        let token: FetchToken = self.begin_cascade();
        let date: String = format_date(today);
        if self.special_mode {
            self.apply_velo_overlay();
            let staff: Result<Vec<Staff>, GatewayError> = self
                .gateway
                .list_staff(&territory.uuid, &date, STAFF_PAGE_SIZE)
                .await;
            report.record(self.apply_staff(token, staff));
        } else {
            let (events, staff) = tokio::join!(
                self.gateway.list_events(EVENT_PAGE_SIZE),
                self.gateway
                    .list_staff(&territory.uuid, &date, STAFF_PAGE_SIZE)
            );
            report.record(self.apply_events(token, events));
            report.record(self.apply_staff(token, staff));
        }
        report
    }

    /// Selects an event by its composite token and fetches its points.
    ///
    /// An empty token, or no selected territory, clears the point set
    /// and selection. In Velo mode the fixed point is (re)applied with
    /// no network call.
    pub async fn select_event(&mut self, raw: &str) -> CascadeReport {
        let mut report: CascadeReport = CascadeReport::clean();
        self.points.clear();
        self.selection.point.clear();
        self.point_search_enabled = false;
        if raw.is_empty() || self.selection.territory.is_empty() {
            self.selection.event.clear();
            self.begin_cascade();
            return report;
        }
        let event: EventToken = match EventToken::parse(raw) {
            Ok(event) => event,
            Err(err) => {
                self.selection.event.clear();
                self.begin_cascade();
                report.record(Some(StatusMessage::error(format!(
                    "Invalid event selection: {err}"
                ))));
                return report;
            }
        };
        let territory: TerritoryToken = match TerritoryToken::parse(&self.selection.territory) {
            Ok(territory) => territory,
            Err(err) => {
                self.selection.event.clear();
                self.begin_cascade();
                report.record(Some(StatusMessage::error(format!(
                    "Invalid territory selection: {err}"
                ))));
                return report;
            }
        };
        self.selection.event = raw.to_string();
        tracing::info!(event = %event.name, "event selected");

        if self.special_mode {
            self.apply_velo_point();
            return report;
        }
        let token: FetchToken = self.begin_cascade();
        let points: Result<Vec<Point>, GatewayError> = self
            .gateway
            .list_points(&territory.uuid, &event.uuid, POINT_PAGE_SIZE)
            .await;
        report.record(self.apply_points(token, points));
        report
    }

    /// Toggles Velo mode.
    ///
    /// Turning it on substitutes the fixed event and point for the
    /// current territory with no network calls. Turning it off clears
    /// the substituted state and re-fetches events when a territory is
    /// selected.
    pub async fn set_special_mode(&mut self, enabled: bool) -> CascadeReport {
        let mut report: CascadeReport = CascadeReport::clean();
        if self.special_mode == enabled {
            return report;
        }
        self.special_mode = enabled;
        tracing::info!(enabled, "velo mode toggled");
        if enabled {
            self.begin_cascade();
            if !self.selection.territory.is_empty() {
                self.apply_velo_overlay();
            }
            return report;
        }
        let token: FetchToken = self.begin_cascade();
        self.events.clear();
        self.selection.event.clear();
        self.points.clear();
        self.selection.point.clear();
        self.point_search_enabled = false;
        if !self.selection.territory.is_empty() {
            let events: Result<Vec<Event>, GatewayError> =
                self.gateway.list_events(EVENT_PAGE_SIZE).await;
            report.record(self.apply_events(token, events));
        }
        report
    }

    /// Records a point pick from the results list.
    pub fn select_point(&mut self, point: &Point) {
        self.selection.point = PointToken::encode(point);
    }

    /// Records a staff pick from the results list.
    pub fn select_staff(&mut self, staff: &Staff) {
        self.selection.staff = StaffToken::encode(staff);
    }

    pub fn set_name(&mut self, name: &str) {
        self.selection.name = name.to_string();
    }

    pub const fn set_date(&mut self, date: Date) {
        self.selection.date = Some(date);
    }

    /// Sets the window start; the end time follows four hours later
    /// until it is edited directly.
    pub fn set_from_time(&mut self, from: Time) {
        self.selection.set_from_time(from);
    }

    pub const fn set_to_time(&mut self, to: Time) {
        self.selection.set_to_time(to);
    }

    /// Searches the cached point set. Hidden while point search is
    /// disabled (no event selected yet, or Velo mode).
    #[must_use]
    pub fn search_points(&self, query: &str) -> SearchOutcome<'_, Point> {
        if !self.point_search_enabled {
            return SearchOutcome::Hidden;
        }
        search::search_points(&self.points, query)
    }

    /// Searches the cached staff set.
    #[must_use]
    pub fn search_staff(&self, query: &str) -> SearchOutcome<'_, Staff> {
        search::search_staff(&self.staff, query)
    }

    /// Display label for a point, with the Velo suffix while Velo mode
    /// is on.
    #[must_use]
    pub fn point_label(&self, point: &Point) -> String {
        let label: String = point.display_label();
        if self.special_mode {
            format!("{label}{VELO_SUFFIX}")
        } else {
            label
        }
    }

    fn clear_dependents(&mut self) {
        self.events.clear();
        self.points.clear();
        self.staff.clear();
        self.selection.event.clear();
        self.selection.point.clear();
        self.selection.staff.clear();
        self.point_search_enabled = false;
    }

    fn apply_velo_overlay(&mut self) {
        let event: Event = velo_event();
        self.selection.event = EventToken::encode(&event);
        self.events = vec![event];
        self.apply_velo_point();
    }

    fn apply_velo_point(&mut self) {
        let point: Point = velo_point();
        self.selection.point = PointToken::encode(&point);
        self.points = vec![point];
        self.point_search_enabled = false;
    }
}
