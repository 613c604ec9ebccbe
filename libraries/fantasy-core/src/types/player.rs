//! Player types
//!
//! Positions travel as names inside player DTOs but as their numeric code in
//! query strings and create/update bodies.

use crate::error::CoreError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The four playing roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Position {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl Position {
    pub const ALL: [Position; 4] = [
        Position::Goalkeeper,
        Position::Defender,
        Position::Midfielder,
        Position::Forward,
    ];

    /// Numeric code used by the backend (1-4)
    pub fn code(&self) -> u8 {
        match self {
            Position::Goalkeeper => 1,
            Position::Defender => 2,
            Position::Midfielder => 3,
            Position::Forward => 4,
        }
    }

    pub fn from_code(code: u8) -> Result<Self, CoreError> {
        match code {
            1 => Ok(Position::Goalkeeper),
            2 => Ok(Position::Defender),
            3 => Ok(Position::Midfielder),
            4 => Ok(Position::Forward),
            other => Err(CoreError::UnknownPosition(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Goalkeeper => "Goalkeeper",
            Position::Defender => "Defender",
            Position::Midfielder => "Midfielder",
            Position::Forward => "Forward",
        }
    }

    /// Serialize as the numeric code (request bodies).
    pub fn serialize_code<S: Serializer>(position: &Position, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(position.code())
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "goalkeeper" => Ok(Position::Goalkeeper),
            "defender" => Ok(Position::Defender),
            "midfielder" => Ok(Position::Midfielder),
            "forward" => Ok(Position::Forward),
            other => other
                .parse::<u8>()
                .map_err(|_| CoreError::UnknownPosition(s.to_string()))
                .and_then(Position::from_code),
        }
    }
}

impl Serialize for Position {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Position {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Name(String),
            Code(u8),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Name(name) => name.parse().map_err(serde::de::Error::custom),
            Raw::Code(code) => Position::from_code(code).map_err(serde::de::Error::custom),
        }
    }
}

/// Player as returned by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub position: Position,
    pub team_id: i64,
    pub team_name: String, // Denormalized
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_logo_url: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Data for creating a player
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlayer {
    pub name: String,
    #[serde(serialize_with = "Position::serialize_code")]
    pub position: Position,
    pub team_id: i64,
}

/// Data for updating a player (full replacement)
pub type UpdatePlayer = CreatePlayer;

/// Server-side filters for `GET /players`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerQuery {
    pub page_number: u32,
    pub page_size: u32,
    pub position: Option<Position>,
    pub team_id: Option<i64>,
    pub name: Option<String>,
}

impl Default for PlayerQuery {
    fn default() -> Self {
        Self {
            page_number: 1,
            page_size: 20,
            position: None,
            team_id: None,
            name: None,
        }
    }
}

impl PlayerQuery {
    /// Query string pairs, omitting unset filters and empty names.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("pageNumber".to_string(), self.page_number.to_string()),
            ("pageSize".to_string(), self.page_size.to_string()),
        ];

        if let Some(position) = self.position {
            pairs.push(("position".to_string(), position.code().to_string()));
        }
        if let Some(team_id) = self.team_id {
            pairs.push(("teamId".to_string(), team_id.to_string()));
        }
        if let Some(name) = self.name.as_deref().filter(|n| !n.is_empty()) {
            pairs.push(("name".to_string(), name.to_string()));
        }

        pairs
    }
}
