//! Matchweek list, detail and current-matchweek screens

use super::{filter_by_status, sort_matchweeks, MatchweekStats, SortDirection, SortField, StatusFilter};
use crate::countdown::{deadline_text, Countdown, CountdownStyle};
use crate::error::{Result, ViewError};
use chrono::{DateTime, Utc};
use fantasy_client::MatchweekService;
use fantasy_core::{Matchweek, Route};
use std::sync::Arc;
use tracing::warn;

/// All matchweeks with status filter and sorting.
pub struct MatchweekListView {
    matchweeks: Arc<MatchweekService>,
    pub status_filter: StatusFilter,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
}

impl MatchweekListView {
    pub fn new(matchweeks: Arc<MatchweekService>) -> Self {
        Self {
            matchweeks,
            status_filter: StatusFilter::All,
            sort_field: SortField::WeekNumber,
            sort_direction: SortDirection::Asc,
        }
    }

    /// Load every matchweek and, best effort, the current one.
    pub async fn load(&self) -> Result<()> {
        if let Err(e) = self.matchweeks.load_current().await {
            warn!(error = %e, "Failed to load current matchweek");
        }

        self.matchweeks
            .list_all()
            .await
            .map(|_| ())
            .map_err(|e| ViewError::request("Failed to load matchweeks", e))
    }

    pub fn visible(&self) -> Vec<Matchweek> {
        let mut filtered = filter_by_status(&self.matchweeks.matchweeks().get(), self.status_filter);
        sort_matchweeks(&mut filtered, self.sort_field, self.sort_direction);
        filtered
    }

    /// Counts over the whole cached list, not the filtered one.
    pub fn stats(&self) -> MatchweekStats {
        self.matchweeks.matchweeks().with(|all| MatchweekStats::from_matchweeks(all))
    }

    pub fn current(&self) -> Option<Matchweek> {
        self.matchweeks.current().get()
    }

    /// Where "go to current" leads, if there is a current matchweek.
    pub fn current_route(&self) -> Option<Route> {
        self.current().map(|_| Route::CurrentMatchweek)
    }

    pub fn countdown_text(&self, matchweek: &Matchweek, now: DateTime<Utc>) -> String {
        deadline_text(matchweek.deadline_date, now, CountdownStyle::List)
    }
}

/// One matchweek with previous/next navigation over the cached list.
pub struct MatchweekDetailView {
    matchweeks: Arc<MatchweekService>,
}

impl MatchweekDetailView {
    pub fn new(matchweeks: Arc<MatchweekService>) -> Self {
        Self { matchweeks }
    }

    /// Select matchweek `id`; the full list is fetched once for navigation.
    pub async fn open(&self, id: i64) -> Result<Matchweek> {
        let selected = self
            .matchweeks
            .get(id)
            .await
            .map_err(|e| ViewError::request("Failed to load matchweek", e))?;

        if self.matchweeks.matchweeks().with(Vec::is_empty) {
            if let Err(e) = self.matchweeks.list_all().await {
                warn!(error = %e, "Failed to load matchweeks for navigation");
            }
        }

        Ok(selected)
    }

    pub fn selected(&self) -> Option<Matchweek> {
        self.matchweeks.selected().get()
    }

    fn position(&self) -> Option<(usize, usize)> {
        let selected = self.selected()?;
        self.matchweeks.matchweeks().with(|all| {
            all.iter()
                .position(|m| m.id == selected.id)
                .map(|index| (index, all.len()))
        })
    }

    pub fn has_previous(&self) -> bool {
        self.position().is_some_and(|(index, _)| index > 0)
    }

    pub fn has_next(&self) -> bool {
        self.position().is_some_and(|(index, len)| index + 1 < len)
    }

    pub fn previous_route(&self) -> Option<Route> {
        let (index, _) = self.position().filter(|(index, _)| *index > 0)?;
        self.route_at(index - 1)
    }

    pub fn next_route(&self) -> Option<Route> {
        let (index, _) = self.position().filter(|(index, len)| index + 1 < *len)?;
        self.route_at(index + 1)
    }

    fn route_at(&self, index: usize) -> Option<Route> {
        self.matchweeks
            .matchweeks()
            .with(|all| all.get(index).map(|m| Route::MatchweekDetail(m.id)))
    }

    pub fn is_deadline_passed(&self, now: DateTime<Utc>) -> bool {
        self.selected().is_some_and(|m| m.is_deadline_passed(now))
    }

    /// Empty when nothing is selected.
    pub fn countdown_text(&self, now: DateTime<Utc>) -> String {
        self.selected()
            .map(|m| deadline_text(m.deadline_date, now, CountdownStyle::Detail))
            .unwrap_or_default()
    }
}

/// The current matchweek with a live countdown.
pub struct CurrentMatchweekView {
    matchweeks: Arc<MatchweekService>,
}

impl CurrentMatchweekView {
    pub fn new(matchweeks: Arc<MatchweekService>) -> Self {
        Self { matchweeks }
    }

    pub async fn load(&self) -> Result<Matchweek> {
        self.matchweeks
            .load_current()
            .await
            .map_err(|e| ViewError::request("Failed to load current matchweek", e))
    }

    pub fn current(&self) -> Option<Matchweek> {
        self.matchweeks.current().get()
    }

    pub fn countdown(&self, now: DateTime<Utc>) -> Countdown {
        Countdown::until(self.current().map(|m| m.deadline_date), now)
    }

    pub fn is_deadline_passed(&self, now: DateTime<Utc>) -> bool {
        self.current().is_some_and(|m| m.is_deadline_passed(now))
    }
}
