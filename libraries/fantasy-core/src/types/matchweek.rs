//! Matchweek types
//!
//! A matchweek is a scheduling unit whose deadline locks team edits.

use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Matchweek as returned by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Matchweek {
    pub id: i64,
    pub week_number: u32,
    #[serde(deserialize_with = "deserialize_deadline")]
    pub deadline_date: DateTime<Utc>,
    pub is_active: bool,
    pub is_completed: bool,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Matchweek {
    /// True once `now` is strictly past the deadline.
    pub fn is_deadline_passed(&self, now: DateTime<Utc>) -> bool {
        now > self.deadline_date
    }

    /// Signed time left until the deadline; negative once passed.
    pub fn time_until_deadline(&self, now: DateTime<Utc>) -> Duration {
        self.deadline_date - now
    }

    /// Neither active nor completed yet.
    pub fn is_upcoming(&self) -> bool {
        !self.is_active && !self.is_completed
    }
}

/// Data for creating a matchweek
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMatchweek {
    pub week_number: u32,
    pub deadline_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Data for updating a matchweek (all fields optional)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMatchweek {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub week_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_completed: Option<bool>,
}

impl UpdateMatchweek {
    /// Full replacement body built from an existing matchweek.
    pub fn from_matchweek(matchweek: &Matchweek) -> Self {
        Self {
            week_number: Some(matchweek.week_number),
            deadline_date: Some(matchweek.deadline_date),
            is_active: Some(matchweek.is_active),
            is_completed: Some(matchweek.is_completed),
        }
    }
}

/// Accepts RFC 3339 timestamps and offset-less ones (read as UTC).
fn deserialize_deadline<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).ok_or_else(|| {
        serde::de::Error::custom(format!("invalid deadline timestamp: {}", raw))
    })
}

/// Parse an RFC 3339 or offset-less (UTC) timestamp.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
}
