//! Resource access modules
//!
//! Each module wraps one REST resource and caches what it last fetched in
//! [`Store`]s: the collection, the selected item and a loading flag.
//! Caches only change after the server confirmed an operation.

pub mod matchweeks;
pub mod players;
pub mod teams;
pub mod user_teams;
pub mod users;

pub use matchweeks::MatchweekService;
pub use players::PlayerService;
pub use teams::TeamService;
pub use user_teams::UserTeamService;
pub use users::UserService;

use crate::error::Result;
use fantasy_core::{
    Matchweek, Paginated, Player, Store, Team, TeamWithPlayers, User, UserTeam, UserTeamDetails,
};
use serde::Deserialize;
use std::future::Future;

/// Run `operation` with `loading` raised for its whole duration.
pub(crate) async fn tracked<T>(
    loading: &Store<bool>,
    operation: impl Future<Output = Result<T>>,
) -> Result<T> {
    loading.set(true);
    let result = operation.await;
    loading.set(false);
    result
}

/// List endpoints answer either with a page envelope or a bare array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ListBody<T> {
    Page(Paginated<T>),
    Items(Vec<T>),
}

impl<T> ListBody<T> {
    pub(crate) fn into_page(self) -> Paginated<T> {
        match self {
            ListBody::Page(page) => page,
            ListBody::Items(items) => {
                let len = items.len();
                Paginated {
                    items,
                    total_items: len as u64,
                    total_pages: 1,
                    current_page: 1,
                    page_size: len as u32,
                }
            }
        }
    }

    pub(crate) fn into_items(self) -> Vec<T> {
        self.into_page().items
    }
}

/// Entities addressed by a server-assigned id.
pub trait Identified {
    fn id(&self) -> i64;
}

impl Identified for Matchweek {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Identified for Player {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Identified for Team {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Identified for TeamWithPlayers {
    fn id(&self) -> i64 {
        self.team.id
    }
}

impl Identified for UserTeam {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Identified for UserTeamDetails {
    fn id(&self) -> i64 {
        self.team.id
    }
}

impl Identified for User {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Replace the cached entry with the same id.
pub(crate) fn replace_in<T: Identified>(collection: &Store<Vec<T>>, updated: T) {
    collection.update(|items| {
        if let Some(slot) = items.iter_mut().find(|item| item.id() == updated.id()) {
            *slot = updated;
        }
    });
}

pub(crate) fn remove_from<T: Identified>(collection: &Store<Vec<T>>, id: i64) {
    collection.update(|items| items.retain(|item| item.id() != id));
}

pub(crate) fn clear_selected_if<T: Identified>(selected: &Store<Option<T>>, id: i64) {
    selected.update(|current| {
        if current.as_ref().is_some_and(|item| item.id() == id) {
            *current = None;
        }
    });
}
