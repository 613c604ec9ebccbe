//! Command-line surface

use clap::{Args, Parser, Subcommand, ValueEnum};
use fantasy_core::Position;
use fantasy_views::{SortDirection, SortField, StatusFilter};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "fantasy")]
#[command(about = "Fantasy football league client", long_about = None, version)]
pub struct Cli {
    /// Configuration file path (defaults to ./fantasy.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Answer yes to every confirmation prompt
    #[arg(short = 'y', long, global = true)]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Sign in and store the session
    Login {
        /// Username or email
        #[arg(short, long)]
        user: String,
        #[arg(short, long, env = "FANTASY_PASSWORD", hide_env_values = true)]
        password: String,
        /// Screen to land on afterwards (e.g. /my-team)
        #[arg(long)]
        return_to: Option<String>,
    },
    /// Create an account
    Register(RegisterArgs),
    /// End the session on this device (or everywhere)
    Logout {
        #[arg(long)]
        all: bool,
    },
    /// Show the signed-in user and dashboard summary
    Whoami,
    /// Matchweek schedule
    #[command(subcommand)]
    Matchweeks(MatchweekCommand),
    /// Player catalogue
    #[command(subcommand)]
    Players(PlayerCommand),
    /// Real-world clubs (admin)
    #[command(subcommand)]
    Teams(TeamCommand),
    /// Your fantasy team
    #[command(subcommand)]
    MyTeam(MyTeamCommand),
    /// Administration
    #[command(subcommand)]
    Admin(AdminCommand),
}

#[derive(Debug, Args)]
pub struct RegisterArgs {
    #[arg(short, long)]
    pub username: String,
    #[arg(short, long)]
    pub email: String,
    #[arg(short, long, env = "FANTASY_PASSWORD", hide_env_values = true)]
    pub password: String,
    /// Defaults to the password
    #[arg(long)]
    pub confirm_password: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    Week,
    Deadline,
}

impl From<SortArg> for SortField {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Week => SortField::WeekNumber,
            SortArg::Deadline => SortField::DeadlineDate,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum MatchweekCommand {
    /// List matchweeks with counts and countdowns
    List {
        /// all, active, completed or upcoming
        #[arg(short, long, default_value = "all")]
        status: StatusFilter,
        #[arg(long, value_enum, default_value_t = SortArg::Week)]
        sort: SortArg,
        /// Sort descending
        #[arg(long)]
        desc: bool,
    },
    /// Show the current matchweek countdown
    Current,
    /// Show one matchweek with its neighbours
    Show { id: i64 },
    /// Create a matchweek (admin)
    Create {
        #[arg(short, long)]
        week: i64,
        /// Deadline, `YYYY-MM-DDTHH:MM` (UTC) or RFC 3339
        #[arg(short, long)]
        deadline: String,
    },
    /// Update a matchweek (admin)
    Update {
        id: i64,
        #[arg(short, long)]
        week: Option<i64>,
        #[arg(short, long)]
        deadline: Option<String>,
        #[arg(long)]
        active: Option<bool>,
        #[arg(long)]
        completed: Option<bool>,
    },
    /// Delete a matchweek (admin)
    Delete { id: i64 },
    /// Mark every active matchweek inactive (admin)
    DeactivateAll,
    /// Export the filtered list as CSV (admin)
    Export {
        #[arg(short, long, default_value = "all")]
        status: StatusFilter,
        /// Week-number substring
        #[arg(long, default_value = "")]
        search: String,
        /// Output file (defaults to matchweeks.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl MatchweekCommand {
    pub fn sort_direction(desc: bool) -> SortDirection {
        if desc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum PlayerCommand {
    /// Browse players
    List {
        /// goalkeeper, defender, midfielder, forward or 1-4
        #[arg(long)]
        position: Option<Position>,
        #[arg(long)]
        team: Option<i64>,
        /// Name or club substring
        #[arg(long)]
        search: Option<String>,
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Add a player to your fantasy team
    AddToTeam { player_id: i64 },
}

#[derive(Debug, Subcommand)]
pub enum TeamCommand {
    List,
    Create {
        #[arg(short, long)]
        name: String,
        #[arg(long)]
        logo_url: Option<String>,
    },
    Delete { id: i64 },
}

#[derive(Debug, Subcommand)]
pub enum MyTeamCommand {
    /// Show your roster grouped by position
    Show,
    /// Create your team for the current matchweek
    Create,
    /// Remove a player from your roster
    Remove { player_id: i64 },
    /// Check the roster composition
    Validate,
    /// Lock the team in
    Submit,
}

#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// Site-wide counts
    Stats,
}
