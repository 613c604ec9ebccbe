use crate::app::App;
use crate::cli::PlayerCommand;
use crate::error::Result;
use fantasy_core::Route;
use fantasy_views::{PageItem, PlayerBrowserView, PlayerFilter};
use std::sync::Arc;

pub async fn run(app: &App, command: PlayerCommand) -> Result<()> {
    app.enter(Route::Players)?;
    let client = app.client();
    let view = PlayerBrowserView::new(
        Arc::clone(client.players()),
        Arc::clone(client.teams()),
        Arc::clone(client.user_teams()),
        Arc::clone(client.session()),
    );

    match command {
        PlayerCommand::List {
            position,
            team,
            search,
            page,
        } => {
            let filter = PlayerFilter {
                position,
                team_id: team,
                query: search.unwrap_or_default(),
            };
            let mut view = view.with_filter(filter, page);
            view.load().await?;

            for player in view.visible() {
                println!(
                    "#{:<5} {:<28} {:<11} {}",
                    player.id, player.name, player.position, player.team_name
                );
            }
            println!();
            println!(
                "Page {} of {}: {}",
                view.current_page(),
                view.total_pages(),
                pager(&view.page_numbers(), view.current_page())
            );
            Ok(())
        }
        PlayerCommand::AddToTeam { player_id } => {
            let mut view = view;
            let player = client.players().get(player_id).await?;
            let team = view.add_to_team(&player).await?;
            println!("Added {} to {}", player.name, team.team_name);
            Ok(())
        }
    }
}

/// `1 … 4 5 [6] 7 8 … 20`
fn pager(items: &[PageItem], current: u32) -> String {
    items
        .iter()
        .map(|item| match item {
            PageItem::Page(page) if *page == current => format!("[{}]", page),
            PageItem::Page(page) => page.to_string(),
            PageItem::Ellipsis => "…".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use fantasy_views::page_numbers;

    #[test]
    fn test_pager() {
        assert_eq!(pager(&page_numbers(6, 20), 6), "1 … 4 5 [6] 7 8 … 20");
        assert_eq!(pager(&page_numbers(1, 1), 1), "[1]");
    }
}
