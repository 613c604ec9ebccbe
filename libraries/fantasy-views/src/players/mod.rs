//! Player screens, client-side filtering and pagination.

pub mod admin;
pub mod browser;

pub use admin::{AdminPlayersView, PlayerForm};
pub use browser::PlayerBrowserView;

use fantasy_core::{Player, Position};

/// Filters applied to the cached page of players.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerFilter {
    pub position: Option<Position>,
    pub team_id: Option<i64>,
    /// Case-insensitive match on player or team name
    pub query: String,
}

impl PlayerFilter {
    pub fn matches(&self, player: &Player) -> bool {
        if self.position.is_some_and(|p| p != player.position) {
            return false;
        }
        if self.team_id.is_some_and(|id| id != player.team_id) {
            return false;
        }

        let query = self.query.trim().to_lowercase();
        query.is_empty()
            || player.name.to_lowercase().contains(&query)
            || player.team_name.to_lowercase().contains(&query)
    }

    pub fn is_empty(&self) -> bool {
        self.position.is_none() && self.team_id.is_none() && self.query.trim().is_empty()
    }
}

pub fn filter_players(players: &[Player], filter: &PlayerFilter) -> Vec<Player> {
    players.iter().filter(|p| filter.matches(p)).cloned().collect()
}

/// One entry of the pager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Ellipsis,
}

const PAGE_WINDOW: i64 = 2;

/// Pager entries: first and last page, up to two pages either side of
/// `current`, and an ellipsis wherever pages are skipped.
pub fn page_numbers(current: u32, total: u32) -> Vec<PageItem> {
    let current = i64::from(current);
    let total = i64::from(total);

    let start = (current - PAGE_WINDOW).max(2);
    let end = (current + PAGE_WINDOW).min(total - 1);

    let mut items = Vec::new();
    items.push(PageItem::Page(1));
    if current - PAGE_WINDOW > 2 {
        items.push(PageItem::Ellipsis);
    }
    items.extend((start..=end).map(|page| PageItem::Page(page as u32)));
    if current + PAGE_WINDOW < total - 1 {
        items.push(PageItem::Ellipsis);
    }
    if total > 1 {
        items.push(PageItem::Page(total as u32));
    }

    let mut seen = Vec::new();
    items.retain(|item| match item {
        PageItem::Page(page) if seen.contains(page) => false,
        PageItem::Page(page) => {
            seen.push(*page);
            true
        }
        PageItem::Ellipsis => true,
    });
    items
}

/// Page count for a result of `len` items; never zero.
pub fn total_pages(len: usize, page_size: u32) -> u32 {
    if page_size == 0 {
        return 1;
    }
    (len as u32).div_ceil(page_size).max(1)
}
