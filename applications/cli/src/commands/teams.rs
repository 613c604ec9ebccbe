use crate::app::App;
use crate::cli::TeamCommand;
use crate::error::{CliError, Result};
use fantasy_core::Route;
use fantasy_views::AdminTeamsView;
use std::sync::Arc;

pub async fn run(app: &App, command: TeamCommand) -> Result<()> {
    app.enter(Route::AdminTeams)?;
    let mut view = AdminTeamsView::new(Arc::clone(app.client().teams()), app.confirm());

    match command {
        TeamCommand::List => {
            view.load().await?;
            for team in view.teams() {
                println!(
                    "#{:<5} {:<30} {}",
                    team.id,
                    team.name,
                    team.logo_url.as_deref().unwrap_or("-")
                );
            }
            Ok(())
        }
        TeamCommand::Create { name, logo_url } => {
            view.open_create();
            view.form.name = name;
            view.form.logo_url = logo_url.unwrap_or_default();

            let team = view.submit().await?;
            println!("Created team #{} {}", team.id, team.name);
            Ok(())
        }
        TeamCommand::Delete { id } => {
            view.load().await?;
            let team = view
                .teams()
                .into_iter()
                .find(|t| t.id == id)
                .ok_or_else(|| CliError::InvalidArgument(format!("No team with id {}", id)))?;

            view.delete(&team).await?;
            println!("Deleted team {}", team.name);
            Ok(())
        }
    }
}
