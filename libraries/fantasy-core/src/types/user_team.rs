//! Fantasy roster types

use super::player::Player;
use serde::{Deserialize, Serialize};

/// Roster size the backend requires before a team can be locked
pub const MAX_ROSTER_SIZE: usize = 4;

/// A user's fantasy team (summary)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserTeam {
    pub id: i64,
    pub user_id: i64,
    #[serde(default)]
    pub username: String,
    pub team_name: String,
    pub total_points: i64,
    pub is_locked: bool,
    #[serde(default)]
    pub player_count: u32,
    #[serde(default)]
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// A user's fantasy team with its roster and armbands
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserTeamDetails {
    #[serde(flatten)]
    pub team: UserTeam,
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captain: Option<Player>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vice_captain: Option<Player>,
}

impl UserTeamDetails {
    pub fn id(&self) -> i64 {
        self.team.id
    }

    pub fn player_ids(&self) -> Vec<i64> {
        self.players.iter().map(|p| p.id).collect()
    }

    pub fn contains_player(&self, player_id: i64) -> bool {
        self.players.iter().any(|p| p.id == player_id)
    }

    pub fn is_full(&self) -> bool {
        self.players.len() >= MAX_ROSTER_SIZE
    }
}

/// Data for creating a fantasy team
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserTeam {
    pub matchweek_id: i64,
    pub team_name: String,
    pub player_ids: Vec<i64>,
    pub captain_id: i64,
    pub vice_captain_id: i64,
}

/// Data for updating a fantasy team (all fields optional)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserTeam {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_ids: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub captain_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vice_captain_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_submitted: Option<bool>,
}

/// Composition report returned by `POST /userteams/{id}/validate`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamValidation {
    pub total_players: u32,
    pub goalkeepers: u32,
    pub defenders: u32,
    pub midfielders: u32,
    pub forwards: u32,
    pub represented_team_ids: Vec<i64>,
    pub has_duplicate_teams: bool,
    pub meets_goalkeeper_requirement: bool,
    pub meets_player_count_requirement: bool,
    pub meets_unique_team_requirement: bool,
    pub is_valid_for_locking: bool,
}

/// Admin override of a team's score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserTeamPoints {
    pub total_points: i64,
}
