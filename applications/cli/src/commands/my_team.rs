use crate::app::App;
use crate::cli::MyTeamCommand;
use crate::error::Result;
use fantasy_core::{Route, MAX_ROSTER_SIZE};
use fantasy_views::MyTeamView;
use std::sync::Arc;

pub async fn run(app: &App, command: MyTeamCommand) -> Result<()> {
    app.enter(Route::MyTeam)?;
    let client = app.client();
    let mut view = MyTeamView::new(
        Arc::clone(client.matchweeks()),
        Arc::clone(client.user_teams()),
        Arc::clone(client.session()),
    );
    view.load().await?;

    match command {
        MyTeamCommand::Show => {
            if let Some(banner) = view.error() {
                eprintln!("{}", banner);
            }
            if let Some(matchweek) = view.current_matchweek() {
                println!("Matchweek {}", matchweek.week_number);
            }

            let Some(team) = view.team() else {
                println!("No team yet. Run `fantasy my-team create`.");
                return Ok(());
            };

            println!(
                "{} ({} points{})",
                team.team.team_name,
                team.team.total_points,
                if team.team.is_locked { ", locked" } else { "" }
            );
            for (position, players) in view.players_by_position() {
                println!("{}:", position);
                for player in players {
                    println!("  #{:<5} {} ({})", player.id, player.name, player.team_name);
                }
            }
            println!(
                "{}/{} players{}",
                team.players.len(),
                MAX_ROSTER_SIZE,
                if view.is_valid() { ", ready to submit" } else { "" }
            );
            Ok(())
        }
        MyTeamCommand::Create => {
            let team = view.create_team().await?;
            println!("Created {}", team.team.team_name);
            Ok(())
        }
        MyTeamCommand::Remove { player_id } => {
            let team = view.remove_player(player_id).await?;
            println!("Removed player #{} from {}", player_id, team.team_name);
            Ok(())
        }
        MyTeamCommand::Validate => {
            let report = view.validate().await?;
            println!(
                "Players: {} (GK {}, DEF {}, MID {}, FWD {})",
                report.total_players,
                report.goalkeepers,
                report.defenders,
                report.midfielders,
                report.forwards
            );
            println!("Goalkeeper requirement:   {}", check(report.meets_goalkeeper_requirement));
            println!("Player count requirement: {}", check(report.meets_player_count_requirement));
            println!("Unique club requirement:  {}", check(report.meets_unique_team_requirement));
            println!(
                "{}",
                if report.is_valid_for_locking {
                    "Team can be submitted"
                } else {
                    "Team cannot be submitted yet"
                }
            );
            Ok(())
        }
        MyTeamCommand::Submit => {
            let team = view.submit().await?;
            println!("Submitted {}", team.team_name);
            Ok(())
        }
    }
}

fn check(ok: bool) -> &'static str {
    if ok {
        "ok"
    } else {
        "missing"
    }
}
