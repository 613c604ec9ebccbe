//! Admin player management

use super::{page_numbers, PageItem};
use crate::confirm::Confirm;
use crate::error::{Result, ViewError};
use crate::form::{ensure_idle, Validator};
use fantasy_client::{ClientError, ErrorKind, PlayerService, TeamService};
use fantasy_core::{CreatePlayer, Player, PlayerQuery, Position, Team};
use std::sync::Arc;
use tracing::warn;

const PAGE_SIZE: u32 = 20;
const UNKNOWN_TEAM: &str = "Unknown Team";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerForm {
    pub name: String,
    pub position: Option<Position>,
    pub team_id: Option<i64>,
}

impl PlayerForm {
    pub fn from_player(player: &Player) -> Self {
        Self {
            name: player.name.clone(),
            position: Some(player.position),
            team_id: Some(player.team_id),
        }
    }

    pub fn validate(&self) -> Result<()> {
        Validator::new()
            .required("name", &self.name)
            .min_length("name", &self.name, 2)
            .required_some("position", self.position.as_ref())
            .required_some("teamId", self.team_id.as_ref())
            .finish()
    }

    fn to_request(&self) -> Option<CreatePlayer> {
        Some(CreatePlayer {
            name: self.name.trim().to_string(),
            position: self.position?,
            team_id: self.team_id?,
        })
    }
}

pub struct AdminPlayersView {
    players: Arc<PlayerService>,
    teams: Arc<TeamService>,
    confirm: Arc<dyn Confirm>,
    pub form: PlayerForm,
    form_open: bool,
    editing: Option<Player>,
    current_page: u32,
    total_pages: u32,
    error: Option<String>,
}

impl AdminPlayersView {
    pub fn new(players: Arc<PlayerService>, teams: Arc<TeamService>, confirm: Arc<dyn Confirm>) -> Self {
        Self {
            players,
            teams,
            confirm,
            form: PlayerForm::default(),
            form_open: false,
            editing: None,
            current_page: 1,
            total_pages: 1,
            error: None,
        }
    }

    pub async fn load(&mut self) -> Result<()> {
        let teams = self.teams.list().await;
        if let Err(e) = teams {
            self.fail("Failed to load teams", e);
        }
        self.load_players().await
    }

    pub async fn load_players(&mut self) -> Result<()> {
        self.error = None;
        let query = PlayerQuery {
            page_number: self.current_page,
            page_size: PAGE_SIZE,
            ..PlayerQuery::default()
        };

        let result = self.players.list(&query).await;
        match result {
            Ok(page) => {
                self.total_pages = page.total_pages.max(1);
                Ok(())
            }
            Err(e) => Err(self.fail("Failed to load players. Please try again.", e)),
        }
    }

    pub async fn go_to_page(&mut self, page: u32) -> Result<()> {
        self.current_page = page.max(1);
        self.load_players().await
    }

    pub fn players(&self) -> Vec<Player> {
        self.players.players().get()
    }

    pub fn teams(&self) -> Vec<Team> {
        self.teams.teams().get()
    }

    pub fn team_name(&self, team_id: i64) -> String {
        self.teams.teams().with(|teams| {
            teams
                .iter()
                .find(|t| t.id == team_id)
                .map_or_else(|| UNKNOWN_TEAM.to_string(), |t| t.name.clone())
        })
    }

    pub fn page_numbers(&self) -> Vec<PageItem> {
        page_numbers(self.current_page, self.total_pages)
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_form_open(&self) -> bool {
        self.form_open
    }

    pub fn open_create(&mut self) {
        self.form = PlayerForm::default();
        self.editing = None;
        self.form_open = true;
    }

    pub fn open_edit(&mut self, player: &Player) {
        self.form = PlayerForm::from_player(player);
        self.editing = Some(player.clone());
        self.form_open = true;
    }

    pub fn close_form(&mut self) {
        self.form = PlayerForm::default();
        self.editing = None;
        self.form_open = false;
    }

    pub async fn submit(&mut self) -> Result<Player> {
        ensure_idle(self.players.loading().get())?;
        self.form.validate()?;
        let Some(request) = self.form.to_request() else {
            return Err(ViewError::Rejected("Position and team are required".into()));
        };

        let editing_id = self.editing.as_ref().map(|p| p.id);
        let result = match editing_id {
            Some(id) => self.players.update(id, &request).await,
            None => self.players.create(&request).await,
        };

        match result {
            Ok(saved) => {
                self.close_form();
                self.reload_quietly().await;
                Ok(saved)
            }
            Err(e) if editing_id.is_some() => {
                let message = update_error_message(&e);
                let err = self.fail(message, e);
                if message_requires_reload(&err) {
                    self.reload_quietly().await;
                }
                Err(err)
            }
            Err(e) => Err(self.fail("Failed to create player", e)),
        }
    }

    /// Delete after confirmation, then reload the page.
    pub async fn delete(&mut self, player: &Player) -> Result<()> {
        if !self.confirm.confirm(&format!("Are you sure you want to delete {}?", player.name)) {
            return Err(ViewError::Cancelled);
        }

        let result = self.players.delete(player.id).await;
        match result {
            Ok(()) => {
                self.reload_quietly().await;
                Ok(())
            }
            Err(e) => Err(self.fail("Failed to delete player", e)),
        }
    }

    async fn reload_quietly(&mut self) {
        let banner = self.error.take();
        if let Err(e) = self.load_players().await {
            warn!(error = %e, "Failed to reload players");
        }
        if banner.is_some() {
            self.error = banner;
        }
    }

    fn fail(&mut self, message: impl Into<String>, source: ClientError) -> ViewError {
        let message = message.into();
        warn!(error = %source, "{}", message);
        self.error = Some(message.clone());
        ViewError::request(message, source)
    }
}

fn update_error_message(error: &ClientError) -> &'static str {
    match error.kind() {
        ErrorKind::Validation => "Invalid player data. Please check position (1-4) and team selection.",
        ErrorKind::NotFound => "Player not found. It may have been deleted.",
        _ => "Failed to update player. Please try again.",
    }
}

fn message_requires_reload(error: &ViewError) -> bool {
    error
        .client_error()
        .is_some_and(|e| e.kind() == ErrorKind::NotFound)
}
