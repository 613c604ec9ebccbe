//! Command handlers
//!
//! Each handler runs the route guards, builds the matching view and prints
//! its state. Failures bubble up as `CliError` and are reported by `main`.

mod admin;
mod auth;
mod matchweeks;
mod my_team;
mod players;
mod teams;

use crate::app::App;
use crate::cli::Commands;
use crate::error::Result;

pub async fn run(app: &App, command: Commands) -> Result<()> {
    match command {
        Commands::Login {
            user,
            password,
            return_to,
        } => auth::login(app, user, password, return_to).await,
        Commands::Register(args) => auth::register(app, args).await,
        Commands::Logout { all } => auth::logout(app, all).await,
        Commands::Whoami => auth::whoami(app).await,
        Commands::Matchweeks(command) => matchweeks::run(app, command).await,
        Commands::Players(command) => players::run(app, command).await,
        Commands::Teams(command) => teams::run(app, command).await,
        Commands::MyTeam(command) => my_team::run(app, command).await,
        Commands::Admin(command) => admin::run(app, command).await,
    }
}
