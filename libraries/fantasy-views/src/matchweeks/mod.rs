//! Matchweek screens and the pure list operations they share.

pub mod admin;
pub mod list;

pub use admin::{AdminMatchweeksView, MatchweekForm};
pub use list::{CurrentMatchweekView, MatchweekDetailView, MatchweekListView};

use chrono::SecondsFormat;
use fantasy_core::Matchweek;
use std::str::FromStr;

pub const CSV_FILE_NAME: &str = "matchweeks.csv";

const CSV_HEADERS: [&str; 6] = [
    "Week Number",
    "Deadline Date",
    "Is Active",
    "Is Completed",
    "Created At",
    "Updated At",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Completed,
    /// Neither active nor completed
    Upcoming,
}

impl StatusFilter {
    pub fn matches(&self, matchweek: &Matchweek) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => matchweek.is_active,
            StatusFilter::Completed => matchweek.is_completed,
            StatusFilter::Upcoming => matchweek.is_upcoming(),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(StatusFilter::All),
            "active" => Ok(StatusFilter::Active),
            "completed" => Ok(StatusFilter::Completed),
            "upcoming" => Ok(StatusFilter::Upcoming),
            other => Err(format!("unknown status filter: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortField {
    #[default]
    WeekNumber,
    DeadlineDate,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

pub fn filter_by_status(matchweeks: &[Matchweek], filter: StatusFilter) -> Vec<Matchweek> {
    matchweeks.iter().filter(|m| filter.matches(m)).cloned().collect()
}

/// Keep matchweeks whose week number contains `term`.
pub fn search_by_week(matchweeks: Vec<Matchweek>, term: &str) -> Vec<Matchweek> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return matchweeks;
    }

    matchweeks
        .into_iter()
        .filter(|m| m.week_number.to_string().contains(&term))
        .collect()
}

pub fn sort_matchweeks(matchweeks: &mut [Matchweek], field: SortField, direction: SortDirection) {
    matchweeks.sort_by(|a, b| {
        let ordering = match field {
            SortField::WeekNumber => a.week_number.cmp(&b.week_number),
            SortField::DeadlineDate => a.deadline_date.cmp(&b.deadline_date),
        };
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

/// Counts shown above the matchweek list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchweekStats {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
    pub upcoming: usize,
}

impl MatchweekStats {
    pub fn from_matchweeks(matchweeks: &[Matchweek]) -> Self {
        Self {
            total: matchweeks.len(),
            active: matchweeks.iter().filter(|m| m.is_active).count(),
            completed: matchweeks.iter().filter(|m| m.is_completed).count(),
            upcoming: matchweeks.iter().filter(|m| m.is_upcoming()).count(),
        }
    }
}

/// CSV with a header row; every cell is quoted.
pub fn export_csv(matchweeks: &[Matchweek]) -> String {
    let header = CSV_HEADERS.iter().map(|h| h.to_string()).collect::<Vec<_>>();

    let rows = matchweeks.iter().map(|m| {
        vec![
            m.week_number.to_string(),
            m.deadline_date.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            m.is_active.to_string(),
            m.is_completed.to_string(),
            m.created_at.clone(),
            m.updated_at.clone().unwrap_or_default(),
        ]
    });

    std::iter::once(header)
        .chain(rows)
        .map(|row| {
            row.iter()
                .map(|cell| format!("\"{}\"", cell.replace('"', "\"\"")))
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
