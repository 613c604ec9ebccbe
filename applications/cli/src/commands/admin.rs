use crate::app::App;
use crate::cli::AdminCommand;
use crate::error::Result;
use fantasy_core::Route;
use fantasy_views::AdminDashboardView;
use std::sync::Arc;

pub async fn run(app: &App, command: AdminCommand) -> Result<()> {
    match command {
        AdminCommand::Stats => {
            app.enter(Route::AdminDashboard)?;
            let client = app.client();
            let mut view = AdminDashboardView::new(
                Arc::clone(client.players()),
                Arc::clone(client.teams()),
                Arc::clone(client.users()),
                Arc::clone(client.user_teams()),
                Arc::clone(client.matchweeks()),
            );

            let stats = view.load().await?;
            println!("Players:            {}", stats.total_players);
            println!("Teams:              {}", stats.total_teams);
            println!("Users:              {}", stats.total_users);
            println!("Fantasy teams:      {}", stats.total_user_teams);
            println!("Active matchweeks:  {}", stats.active_matchweeks);
            Ok(())
        }
    }
}
