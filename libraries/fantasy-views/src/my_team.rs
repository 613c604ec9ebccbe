//! Team builder for the signed-in user
//!
//! Works on the user's first fantasy team for the current matchweek. Players
//! are added from the player browser; this screen removes them, checks the
//! composition and locks the team in.

use crate::error::{Result, ViewError};
use fantasy_client::{ClientError, MatchweekService, Session, UserTeamService};
use fantasy_core::{
    CreateUserTeam, Matchweek, Player, Position, TeamValidation, UpdateUserTeam, UserTeam,
    UserTeamDetails, MAX_ROSTER_SIZE,
};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{info, warn};

pub struct MyTeamView {
    matchweeks: Arc<MatchweekService>,
    user_teams: Arc<UserTeamService>,
    session: Arc<Session>,
    validation: Option<TeamValidation>,
    error: Option<String>,
}

impl MyTeamView {
    pub fn new(
        matchweeks: Arc<MatchweekService>,
        user_teams: Arc<UserTeamService>,
        session: Arc<Session>,
    ) -> Self {
        Self {
            matchweeks,
            user_teams,
            session,
            validation: None,
            error: None,
        }
    }

    /// Load the current matchweek, then the user's teams and the details of
    /// the first one. A missing current matchweek is reported but does not
    /// stop the team from loading.
    pub async fn load(&mut self) -> Result<()> {
        self.error = None;

        if let Err(e) = self.matchweeks.load_current().await {
            warn!(error = %e, "Failed to load current matchweek");
            self.error = Some("Failed to load current matchweek".to_string());
        }

        let Some(user_id) = self.session.user().map(|u| u.id) else {
            return Err(self.reject("User not authenticated"));
        };

        let teams = match self.user_teams.by_user(user_id).await {
            Ok(teams) => teams,
            Err(e) => return Err(self.fail("Failed to load user teams", e)),
        };

        match teams.first() {
            Some(team) => self.load_details(team.id).await,
            None => {
                self.user_teams.clear_selected();
                Ok(())
            }
        }
    }

    async fn load_details(&mut self, id: i64) -> Result<()> {
        let result = self.user_teams.get(id).await;
        result
            .map(|_| ())
            .map_err(|e| self.fail("Failed to load team details", e))
    }

    pub fn current_matchweek(&self) -> Option<Matchweek> {
        self.matchweeks.current().get()
    }

    pub fn team(&self) -> Option<UserTeamDetails> {
        self.user_teams.selected().get()
    }

    pub fn has_team(&self) -> bool {
        self.user_teams.selected().with(Option::is_some)
    }

    pub fn validation(&self) -> Option<&TeamValidation> {
        self.validation.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Roster grouped by position, goalkeepers first.
    pub fn players_by_position(&self) -> BTreeMap<Position, Vec<Player>> {
        self.user_teams.selected().with(|team| {
            let mut groups: BTreeMap<Position, Vec<Player>> = BTreeMap::new();
            for player in team.iter().flat_map(|t| t.players.iter()) {
                groups.entry(player.position).or_default().push(player.clone());
            }
            groups
        })
    }

    /// Exactly four players make a lockable roster.
    pub fn is_valid(&self) -> bool {
        self.user_teams
            .selected()
            .with(|team| team.as_ref().is_some_and(|t| t.players.len() == MAX_ROSTER_SIZE))
    }

    /// Create an empty team for the current matchweek.
    pub async fn create_team(&mut self) -> Result<UserTeamDetails> {
        let Some(matchweek_id) = self.matchweeks.current().with(|m| m.as_ref().map(|m| m.id))
        else {
            return Err(self.reject("No active matchweek found"));
        };
        let Some(user) = self.session.user() else {
            return Err(self.reject("User not authenticated"));
        };

        let request = CreateUserTeam {
            matchweek_id,
            team_name: format!("{}'s Team", user.username),
            player_ids: Vec::new(),
            captain_id: 0,
            vice_captain_id: 0,
        };

        let created = match self.user_teams.create(&request).await {
            Ok(team) => team,
            Err(e) => return Err(self.fail("Failed to create team", e)),
        };
        info!(team = %created.team_name, "Fantasy team created");

        let result = self.user_teams.get(created.id).await;
        result.map_err(|e| self.fail("Failed to create team", e))
    }

    pub async fn remove_player(&mut self, player_id: i64) -> Result<UserTeam> {
        let Some(team) = self.team() else {
            return Err(self.reject("No team found. Please create a team first."));
        };

        let update = UpdateUserTeam {
            player_ids: Some(
                team.player_ids()
                    .into_iter()
                    .filter(|id| *id != player_id)
                    .collect(),
            ),
            team_name: Some(team.team.team_name.clone()),
            ..Default::default()
        };

        let result = self.user_teams.update(team.id(), &update).await;
        match result {
            Ok(updated) => {
                self.error = None;
                self.reload(team.id()).await;
                Ok(updated)
            }
            Err(e) => Err(self.fail("Failed to remove player", e)),
        }
    }

    /// Ask the server for a composition report; kept for display.
    pub async fn validate(&mut self) -> Result<TeamValidation> {
        let Some(id) = self.team().map(|t| t.id()) else {
            return Err(self.reject("No team found. Please create a team first."));
        };

        let result = self.user_teams.validate(id).await;
        match result {
            Ok(report) => {
                self.validation = Some(report.clone());
                Ok(report)
            }
            Err(e) => Err(self.fail("Team validation failed", e)),
        }
    }

    /// Lock the team in for the matchweek.
    pub async fn submit(&mut self) -> Result<UserTeam> {
        let Some(id) = self.team().map(|t| t.id()) else {
            return Err(self.reject("No team found. Please create a team first."));
        };

        let result = self.user_teams.submit(id).await;
        match result {
            Ok(team) => {
                self.error = None;
                info!(team = %team.team_name, "Fantasy team submitted");
                self.reload(id).await;
                Ok(team)
            }
            Err(e) => Err(self.fail("Failed to submit team", e)),
        }
    }

    async fn reload(&mut self, id: i64) {
        let result = self.user_teams.get(id).await;
        if let Err(e) = result {
            warn!(error = %e, "Failed to reload team details");
        }
    }

    fn reject(&mut self, message: &str) -> ViewError {
        self.error = Some(message.to_string());
        ViewError::Rejected(message.to_string())
    }

    fn fail(&mut self, message: &str, source: ClientError) -> ViewError {
        warn!(error = %source, "{}", message);
        self.error = Some(message.to_string());
        ViewError::request(message, source)
    }
}
