//! Admin matchweek management

use super::{export_csv, filter_by_status, search_by_week, sort_matchweeks, SortDirection, SortField, StatusFilter};
use crate::confirm::Confirm;
use crate::countdown::{deadline_text, CountdownStyle};
use crate::error::{Result, ViewError};
use crate::form::{ensure_idle, Validator};
use chrono::{DateTime, Utc};
use fantasy_client::{ClientError, ErrorKind, MatchweekService};
use fantasy_core::{parse_timestamp, CreateMatchweek, Matchweek, UpdateMatchweek};
use std::sync::Arc;
use tracing::warn;

const DUPLICATE_WEEK: &str = "A matchweek with this week number already exists.";
const GENERIC_ERROR: &str = "An error occurred. Please try again.";
const DELETE_FAILED: &str = "Failed to delete matchweek. Please try again.";
const LOAD_FAILED: &str = "Failed to load matchweeks. Please try again.";

/// Create/edit form. The deadline is typed as `YYYY-MM-DDTHH:MM` (UTC) or RFC 3339.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchweekForm {
    pub week_number: Option<i64>,
    pub deadline: String,
    pub is_active: bool,
    pub is_completed: bool,
}

impl Default for MatchweekForm {
    fn default() -> Self {
        Self {
            week_number: Some(1),
            deadline: String::new(),
            is_active: false,
            is_completed: false,
        }
    }
}

impl MatchweekForm {
    pub fn from_matchweek(matchweek: &Matchweek) -> Self {
        Self {
            week_number: Some(i64::from(matchweek.week_number)),
            deadline: matchweek.deadline_date.format("%Y-%m-%dT%H:%M").to_string(),
            is_active: matchweek.is_active,
            is_completed: matchweek.is_completed,
        }
    }

    pub fn validate(&self) -> Result<()> {
        Validator::new()
            .required_some("weekNumber", self.week_number.as_ref())
            .min("weekNumber", self.week_number, 1)
            .required("deadlineDate", &self.deadline)
            .finish()
    }

    fn week_number(&self) -> Result<u32> {
        self.week_number
            .and_then(|w| u32::try_from(w).ok())
            .ok_or_else(|| ViewError::Rejected("Week number is out of range".into()))
    }

    fn deadline(&self) -> Result<DateTime<Utc>> {
        parse_timestamp(self.deadline.trim())
            .ok_or_else(|| ViewError::Rejected(format!("Invalid deadline: {}", self.deadline)))
    }
}

/// Banner text for a failed create/update.
pub fn save_error_message(error: &ClientError) -> String {
    match error.kind() {
        ErrorKind::Validation => error
            .server_message()
            .map_or_else(|| GENERIC_ERROR.to_string(), str::to_string),
        ErrorKind::Conflict => DUPLICATE_WEEK.to_string(),
        _ => GENERIC_ERROR.to_string(),
    }
}

/// The admin matchweek table with its form, filters and delete modal.
pub struct AdminMatchweeksView {
    matchweeks: Arc<MatchweekService>,
    confirm: Arc<dyn Confirm>,
    pub status_filter: StatusFilter,
    pub search_term: String,
    pub form: MatchweekForm,
    form_open: bool,
    editing: Option<Matchweek>,
    pending_delete: Option<Matchweek>,
    error: Option<String>,
}

impl AdminMatchweeksView {
    pub fn new(matchweeks: Arc<MatchweekService>, confirm: Arc<dyn Confirm>) -> Self {
        Self {
            matchweeks,
            confirm,
            status_filter: StatusFilter::All,
            search_term: String::new(),
            form: MatchweekForm::default(),
            form_open: false,
            editing: None,
            pending_delete: None,
            error: None,
        }
    }

    pub async fn load(&mut self) -> Result<()> {
        let result = self.matchweeks.list_all().await;
        result.map(|_| ()).map_err(|e| self.fail(LOAD_FAILED, e))
    }

    /// Cached matchweeks after status filter and search, by week ascending.
    pub fn visible(&self) -> Vec<Matchweek> {
        let filtered = filter_by_status(&self.matchweeks.matchweeks().get(), self.status_filter);
        let mut found = search_by_week(filtered, &self.search_term);
        sort_matchweeks(&mut found, SortField::WeekNumber, SortDirection::Asc);
        found
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_form_open(&self) -> bool {
        self.form_open
    }

    pub fn editing(&self) -> Option<&Matchweek> {
        self.editing.as_ref()
    }

    pub fn open_create(&mut self) {
        self.form = MatchweekForm::default();
        self.form_open = true;
        self.editing = None;
        self.error = None;
    }

    pub fn open_edit(&mut self, matchweek: &Matchweek) {
        self.form = MatchweekForm::from_matchweek(matchweek);
        self.form_open = true;
        self.editing = Some(matchweek.clone());
        self.error = None;
    }

    pub fn cancel_form(&mut self) {
        self.form = MatchweekForm::default();
        self.form_open = false;
        self.editing = None;
        self.error = None;
    }

    /// Create or update from the form. Invalid forms send nothing.
    pub async fn submit(&mut self) -> Result<Matchweek> {
        ensure_idle(self.matchweeks.loading().get())?;
        self.form.validate()?;

        let week_number = self.form.week_number()?;
        let deadline_date = self.form.deadline()?;

        let result = match &self.editing {
            Some(editing) => {
                let update = UpdateMatchweek {
                    week_number: Some(week_number),
                    deadline_date: Some(deadline_date),
                    is_active: Some(self.form.is_active),
                    is_completed: Some(self.form.is_completed),
                };
                self.matchweeks.update(editing.id, &update).await
            }
            None => {
                let create = CreateMatchweek {
                    week_number,
                    deadline_date,
                    is_active: None,
                };
                self.matchweeks.create(&create).await
            }
        };

        match result {
            Ok(saved) => {
                self.cancel_form();
                Ok(saved)
            }
            Err(e) => {
                let message = save_error_message(&e);
                Err(self.fail(message, e))
            }
        }
    }

    /// Open the delete modal for `matchweek`.
    pub fn request_delete(&mut self, matchweek: &Matchweek) {
        self.pending_delete = Some(matchweek.clone());
    }

    pub fn pending_delete(&self) -> Option<&Matchweek> {
        self.pending_delete.as_ref()
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Delete the matchweek shown in the modal. Refused while a request is in
    /// flight; otherwise the modal closes whatever the outcome.
    pub async fn confirm_delete(&mut self) -> Result<()> {
        ensure_idle(self.matchweeks.loading().get())?;
        let Some(matchweek) = self.pending_delete.take() else {
            return Ok(());
        };

        let result = self.matchweeks.delete(matchweek.id).await;
        result.map_err(|e| self.fail(DELETE_FAILED, e))
    }

    pub fn export_csv(&self) -> String {
        export_csv(&self.visible())
    }

    pub fn has_active(&self) -> bool {
        self.matchweeks.matchweeks().with(|all| all.iter().any(|m| m.is_active))
    }

    /// Set `isActive = false` on every active matchweek after confirmation.
    /// Individual failures are logged and skipped; returns how many succeeded.
    pub async fn deactivate_all(&mut self) -> Result<usize> {
        let active: Vec<Matchweek> = self
            .matchweeks
            .matchweeks()
            .with(|all| all.iter().filter(|m| m.is_active).cloned().collect());

        if active.is_empty() {
            return Ok(0);
        }

        let prompt = format!("Deactivate all {} active matchweeks?", active.len());
        if !self.confirm.confirm(&prompt) {
            return Err(ViewError::Cancelled);
        }

        let mut deactivated = 0;
        for matchweek in &active {
            let update = UpdateMatchweek {
                is_active: Some(false),
                ..UpdateMatchweek::from_matchweek(matchweek)
            };
            match self.matchweeks.update(matchweek.id, &update).await {
                Ok(_) => deactivated += 1,
                Err(e) => warn!(week = matchweek.week_number, error = %e, "Failed to deactivate matchweek"),
            }
        }

        Ok(deactivated)
    }

    pub fn countdown_text(&self, matchweek: &Matchweek, now: DateTime<Utc>) -> String {
        deadline_text(matchweek.deadline_date, now, CountdownStyle::Short)
    }

    fn fail(&mut self, message: impl Into<String>, source: ClientError) -> ViewError {
        let message = message.into();
        warn!(error = %source, "{}", message);
        self.error = Some(message.clone());
        ViewError::request(message, source)
    }
}
