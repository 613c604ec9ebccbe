//! Admin team management

use crate::confirm::Confirm;
use crate::error::{Result, ViewError};
use crate::form::{ensure_idle, Validator};
use fantasy_client::{ClientError, ErrorKind, TeamService};
use fantasy_core::{CreateTeam, Team};
use std::sync::Arc;
use tracing::warn;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamForm {
    pub name: String,
    /// Optional; blank means no logo
    pub logo_url: String,
}

impl TeamForm {
    pub fn from_team(team: &Team) -> Self {
        Self {
            name: team.name.clone(),
            logo_url: team.logo_url.clone().unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        Validator::new()
            .required("name", &self.name)
            .min_length("name", &self.name, 2)
            .finish()
    }

    fn to_request(&self) -> CreateTeam {
        let logo_url = self.logo_url.trim();
        CreateTeam {
            name: self.name.trim().to_string(),
            logo_url: (!logo_url.is_empty()).then(|| logo_url.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Action {
    Create,
    Update,
    Delete,
}

/// Banner text for a failed team operation, and whether the list should be
/// reloaded because the cache is stale.
fn error_banner(action: Action, error: &ClientError) -> (&'static str, bool) {
    match (action, error.kind()) {
        (Action::Delete, ErrorKind::Validation) => (
            "Cannot delete team: This team has existing players. Remove all players first.",
            false,
        ),
        (Action::Delete, ErrorKind::NotFound) => {
            ("Team not found. It may have been already deleted.", true)
        }
        (Action::Delete, _) => ("Failed to delete team. Please try again.", false),
        (Action::Create | Action::Update, ErrorKind::Validation) => {
            ("Invalid team data. Please check your input and try again.", false)
        }
        (Action::Update, ErrorKind::NotFound) => ("Team not found. It may have been deleted.", true),
        (Action::Update, _) => ("Failed to update team. Please try again.", false),
        (Action::Create, _) => ("Failed to create team. Please try again.", false),
    }
}

pub struct AdminTeamsView {
    teams: Arc<TeamService>,
    confirm: Arc<dyn Confirm>,
    pub form: TeamForm,
    form_open: bool,
    editing: Option<Team>,
    error: Option<String>,
}

impl AdminTeamsView {
    pub fn new(teams: Arc<TeamService>, confirm: Arc<dyn Confirm>) -> Self {
        Self {
            teams,
            confirm,
            form: TeamForm::default(),
            form_open: false,
            editing: None,
            error: None,
        }
    }

    pub async fn load(&mut self) -> Result<()> {
        self.error = None;
        let result = self.teams.list().await;
        result.map(|_| ()).map_err(|e| {
            warn!(error = %e, "Failed to load teams");
            self.error = Some("Failed to load teams".into());
            ViewError::request("Failed to load teams", e)
        })
    }

    pub fn teams(&self) -> Vec<Team> {
        self.teams.teams().get()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_form_open(&self) -> bool {
        self.form_open
    }

    pub fn open_create(&mut self) {
        self.form = TeamForm::default();
        self.editing = None;
        self.form_open = true;
    }

    pub fn open_edit(&mut self, team: &Team) {
        self.form = TeamForm::from_team(team);
        self.editing = Some(team.clone());
        self.form_open = true;
    }

    pub fn close_form(&mut self) {
        self.form = TeamForm::default();
        self.editing = None;
        self.form_open = false;
    }

    pub async fn submit(&mut self) -> Result<Team> {
        ensure_idle(self.teams.loading().get())?;
        self.form.validate()?;

        let request = self.form.to_request();
        let (action, result) = match self.editing.as_ref().map(|t| t.id) {
            Some(id) => (Action::Update, self.teams.update(id, &request).await),
            None => (Action::Create, self.teams.create(&request).await),
        };

        match result {
            Ok(saved) => {
                self.close_form();
                self.reload().await;
                Ok(saved)
            }
            Err(e) => Err(self.fail(action, e).await),
        }
    }

    /// Delete after confirmation. A team with players is refused by the
    /// server and stays in the list.
    pub async fn delete(&mut self, team: &Team) -> Result<()> {
        let prompt = format!(
            "Are you sure you want to delete {}? This action cannot be undone.",
            team.name
        );
        if !self.confirm.confirm(&prompt) {
            return Err(ViewError::Cancelled);
        }

        let result = self.teams.delete(team.id).await;
        match result {
            Ok(()) => {
                self.reload().await;
                Ok(())
            }
            Err(e) => Err(self.fail(Action::Delete, e).await),
        }
    }

    async fn reload(&mut self) {
        let result = self.teams.list().await;
        if let Err(e) = result {
            warn!(error = %e, "Failed to reload teams");
        }
    }

    async fn fail(&mut self, action: Action, source: ClientError) -> ViewError {
        let (message, reload) = error_banner(action, &source);
        warn!(error = %source, "{}", message);
        self.error = Some(message.to_string());
        if reload {
            self.reload().await;
        }
        ViewError::request(message, source)
    }
}
