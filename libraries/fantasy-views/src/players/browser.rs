//! Player browser with "add to my team"

use super::{filter_players, page_numbers, PageItem, PlayerFilter};
use crate::error::{Result, ViewError};
use fantasy_client::{PlayerService, Session, TeamService, UserTeamService};
use fantasy_core::{Player, PlayerQuery, Position, Team, UpdateUserTeam, UserTeam};
use std::sync::Arc;
use tracing::{info, warn};

pub const DEFAULT_PAGE_SIZE: u32 = 20;

pub struct PlayerBrowserView {
    players: Arc<PlayerService>,
    teams: Arc<TeamService>,
    user_teams: Arc<UserTeamService>,
    session: Arc<Session>,
    filter: PlayerFilter,
    current_page: u32,
    page_size: u32,
    total_pages: u32,
    error: Option<String>,
}

impl PlayerBrowserView {
    pub fn new(
        players: Arc<PlayerService>,
        teams: Arc<TeamService>,
        user_teams: Arc<UserTeamService>,
        session: Arc<Session>,
    ) -> Self {
        Self {
            players,
            teams,
            user_teams,
            session,
            filter: PlayerFilter::default(),
            current_page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            total_pages: 1,
            error: None,
        }
    }

    /// Start from a given filter and page instead of the defaults.
    pub fn with_filter(mut self, filter: PlayerFilter, page: u32) -> Self {
        self.filter = filter;
        self.current_page = page.max(1);
        self
    }

    /// Load the team dropdown (best effort) and the first page of players.
    pub async fn load(&mut self) -> Result<()> {
        if let Err(e) = self.teams.list().await {
            warn!(error = %e, "Failed to load teams");
        }
        self.load_players().await
    }

    pub async fn load_players(&mut self) -> Result<()> {
        self.error = None;
        let query = PlayerQuery {
            page_number: self.current_page,
            page_size: self.page_size,
            position: self.filter.position,
            team_id: self.filter.team_id,
            name: Some(self.filter.query.trim().to_string()).filter(|q| !q.is_empty()),
        };

        match self.players.list(&query).await {
            Ok(page) => {
                self.total_pages = page.total_pages.max(1);
                Ok(())
            }
            Err(e) => Err(self.fail("Failed to load players. Please try again.", e)),
        }
    }

    pub async fn set_position(&mut self, position: Option<Position>) -> Result<()> {
        self.filter.position = position;
        self.reload_from_first_page().await
    }

    pub async fn set_team(&mut self, team_id: Option<i64>) -> Result<()> {
        self.filter.team_id = team_id;
        self.reload_from_first_page().await
    }

    pub async fn set_query(&mut self, query: impl Into<String>) -> Result<()> {
        self.filter.query = query.into();
        self.reload_from_first_page().await
    }

    pub async fn clear_filters(&mut self) -> Result<()> {
        self.filter = PlayerFilter::default();
        self.reload_from_first_page().await
    }

    pub async fn go_to_page(&mut self, page: u32) -> Result<()> {
        self.current_page = page.max(1);
        self.load_players().await
    }

    async fn reload_from_first_page(&mut self) -> Result<()> {
        self.current_page = 1;
        self.load_players().await
    }

    pub fn filter(&self) -> &PlayerFilter {
        &self.filter
    }

    /// Cached players narrowed by the current filter.
    pub fn visible(&self) -> Vec<Player> {
        self.players.players().with(|all| filter_players(all, &self.filter))
    }

    pub fn teams(&self) -> Vec<Team> {
        self.teams.teams().get()
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn page_numbers(&self) -> Vec<PageItem> {
        page_numbers(self.current_page, self.total_pages)
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Add `player` to the signed-in user's first fantasy team.
    pub async fn add_to_team(&mut self, player: &Player) -> Result<UserTeam> {
        let Some(user_id) = self.session.user().map(|u| u.id) else {
            return Err(self.reject("User not authenticated"));
        };

        let teams = match self.user_teams.by_user(user_id).await {
            Ok(teams) => teams,
            Err(e) => return Err(self.fail("Failed to load your team", e)),
        };
        let Some(team) = teams.into_iter().next() else {
            return Err(self.reject("No team found. Please create a team first."));
        };

        let details = match self.user_teams.get(team.id).await {
            Ok(details) => details,
            Err(e) => return Err(self.fail("Failed to load your team", e)),
        };

        if details.contains_player(player.id) {
            return Err(self.reject("Player is already in your team"));
        }
        if details.is_full() {
            return Err(self.reject("Team is full (4 players maximum)"));
        }

        let mut player_ids = details.player_ids();
        player_ids.push(player.id);
        let update = UpdateUserTeam {
            player_ids: Some(player_ids),
            team_name: Some(team.team_name.clone()),
            ..Default::default()
        };

        match self.user_teams.update(team.id, &update).await {
            Ok(updated) => {
                self.error = None;
                info!(player = %player.name, team = %updated.team_name, "Player added to team");
                Ok(updated)
            }
            Err(e) => Err(self.fail("Failed to add player to team", e)),
        }
    }

    fn reject(&mut self, message: &str) -> ViewError {
        self.error = Some(message.to_string());
        ViewError::Rejected(message.to_string())
    }

    fn fail(&mut self, message: &str, source: fantasy_client::ClientError) -> ViewError {
        warn!(error = %source, "{}", message);
        self.error = Some(message.to_string());
        ViewError::request(message, source)
    }
}
