//! Summary screens: the user's dashboard and the admin overview

use crate::countdown::{deadline_text, CountdownStyle};
use crate::error::{Result, ViewError};
use chrono::{DateTime, Utc};
use fantasy_client::{
    ClientError, MatchweekService, PlayerService, Session, TeamService, UserService,
    UserTeamService,
};
use fantasy_core::{Matchweek, PlayerQuery, UserTeamDetails};
use std::sync::Arc;
use tracing::warn;

pub struct DashboardView {
    matchweeks: Arc<MatchweekService>,
    user_teams: Arc<UserTeamService>,
    session: Arc<Session>,
    current: Option<Matchweek>,
    team: Option<UserTeamDetails>,
}

impl DashboardView {
    pub fn new(
        matchweeks: Arc<MatchweekService>,
        user_teams: Arc<UserTeamService>,
        session: Arc<Session>,
    ) -> Self {
        Self {
            matchweeks,
            user_teams,
            session,
            current: None,
            team: None,
        }
    }

    /// Current matchweek and the user's teams load together; the first
    /// team's details follow. Nothing loads without a signed-in user.
    pub async fn load(&mut self) -> Result<()> {
        let Some(user_id) = self.session.user().map(|u| u.id) else {
            return Ok(());
        };

        let (matchweek, teams) = tokio::join!(
            self.matchweeks.load_current(),
            self.user_teams.by_user(user_id)
        );

        let teams = teams.map_err(dashboard_error)?;
        self.current = Some(matchweek.map_err(dashboard_error)?);

        if let Some(first) = teams.first() {
            let details = self.user_teams.get(first.id).await.map_err(dashboard_error)?;
            self.team = Some(details);
        }
        Ok(())
    }

    pub fn current_matchweek(&self) -> Option<&Matchweek> {
        self.current.as_ref()
    }

    pub fn total_points(&self) -> i64 {
        self.team.as_ref().map_or(0, |t| t.team.total_points)
    }

    pub fn player_count(&self) -> usize {
        self.team.as_ref().map_or(0, |t| t.players.len())
    }

    pub fn team_name(&self) -> String {
        self.team
            .as_ref()
            .map(|t| t.team.team_name.clone())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| "No Team Created".to_string())
    }

    pub fn is_locked(&self) -> bool {
        self.team.as_ref().is_some_and(|t| t.team.is_locked)
    }

    /// `N/A` without a current matchweek.
    pub fn countdown(&self, now: DateTime<Utc>) -> String {
        self.current.as_ref().map_or_else(
            || "N/A".to_string(),
            |m| deadline_text(m.deadline_date, now, CountdownStyle::Dashboard),
        )
    }
}

fn dashboard_error(source: ClientError) -> ViewError {
    warn!(error = %source, "Error loading dashboard data");
    ViewError::request("Error loading dashboard data", source)
}

/// Site-wide counts for the admin overview
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdminStats {
    pub total_players: u64,
    pub total_teams: usize,
    pub total_users: usize,
    pub total_user_teams: usize,
    pub active_matchweeks: usize,
}

pub struct AdminDashboardView {
    players: Arc<PlayerService>,
    teams: Arc<TeamService>,
    users: Arc<UserService>,
    user_teams: Arc<UserTeamService>,
    matchweeks: Arc<MatchweekService>,
    stats: AdminStats,
}

impl AdminDashboardView {
    pub fn new(
        players: Arc<PlayerService>,
        teams: Arc<TeamService>,
        users: Arc<UserService>,
        user_teams: Arc<UserTeamService>,
        matchweeks: Arc<MatchweekService>,
    ) -> Self {
        Self {
            players,
            teams,
            users,
            user_teams,
            matchweeks,
            stats: AdminStats::default(),
        }
    }

    /// Fetch every count in parallel. Any failure leaves the previous
    /// figures in place.
    pub async fn load(&mut self) -> Result<AdminStats> {
        // A single-item page is enough to read the total
        let query = PlayerQuery {
            page_number: 1,
            page_size: 1,
            ..Default::default()
        };

        let (players, teams, users, user_teams, matchweeks) = tokio::join!(
            self.players.list(&query),
            self.teams.list(),
            self.users.list(),
            self.user_teams.list_all(),
            self.matchweeks.list_all(),
        );

        let stats = AdminStats {
            total_players: players.map_err(stats_error)?.total_items,
            total_teams: teams.map_err(stats_error)?.len(),
            total_users: users.map_err(stats_error)?.len(),
            total_user_teams: user_teams.map_err(stats_error)?.len(),
            active_matchweeks: matchweeks
                .map_err(stats_error)?
                .iter()
                .filter(|m| m.is_active)
                .count(),
        };

        self.stats = stats;
        Ok(stats)
    }

    pub fn stats(&self) -> AdminStats {
        self.stats
    }
}

fn stats_error(source: ClientError) -> ViewError {
    warn!(error = %source, "Error loading admin stats");
    ViewError::request("Error loading admin stats", source)
}
