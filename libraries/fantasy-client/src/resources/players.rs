//! Players resource

use super::{clear_selected_if, remove_from, replace_in, tracked, ListBody};
use crate::error::Result;
use crate::http::{ApiClient, ApiRequest};
use fantasy_core::{CreatePlayer, Paginated, Player, PlayerQuery, Position, Store, UpdatePlayer};
use std::sync::Arc;
use tracing::debug;

/// Player access plus the cached page and selection.
#[derive(Debug)]
pub struct PlayerService {
    api: Arc<ApiClient>,
    players: Store<Vec<Player>>,
    selected: Store<Option<Player>>,
    loading: Store<bool>,
}

impl PlayerService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            api,
            players: Store::default(),
            selected: Store::default(),
            loading: Store::new(false),
        }
    }

    pub fn players(&self) -> &Store<Vec<Player>> {
        &self.players
    }

    pub fn selected(&self) -> &Store<Option<Player>> {
        &self.selected
    }

    pub fn loading(&self) -> &Store<bool> {
        &self.loading
    }

    /// `GET /players` with server-side filters.
    pub async fn list(&self, query: &PlayerQuery) -> Result<Paginated<Player>> {
        let request = ApiRequest::get("/players").with_query(query.to_query_pairs());

        let page = tracked(&self.loading, async {
            let body: ListBody<Player> = self.api.send_json(request).await?;
            Ok(body.into_page())
        })
        .await?;

        debug!(count = page.items.len(), total = page.total_items, "Loaded players");
        self.players.set(page.items.clone());
        Ok(page)
    }

    pub async fn get(&self, id: i64) -> Result<Player> {
        let player: Player = tracked(
            &self.loading,
            self.api.send_json(ApiRequest::get(format!("/players/{}", id))),
        )
        .await?;

        self.selected.set(Some(player.clone()));
        Ok(player)
    }

    /// `GET /players/team/{teamId}`
    pub async fn by_team(&self, team_id: i64) -> Result<Vec<Player>> {
        let players = tracked(&self.loading, async {
            let body: ListBody<Player> = self
                .api
                .send_json(ApiRequest::get(format!("/players/team/{}", team_id)))
                .await?;
            Ok(body.into_items())
        })
        .await?;

        self.players.set(players.clone());
        Ok(players)
    }

    /// `GET /players/search?q=`
    pub async fn search(&self, query: &str) -> Result<Vec<Player>> {
        self.fetch(ApiRequest::get("/players/search").with_query(vec![("q".into(), query.to_string())]))
            .await
    }

    /// `GET /players/position?position={code}`
    pub async fn by_position(&self, position: Position) -> Result<Vec<Player>> {
        self.fetch(
            ApiRequest::get("/players/position")
                .with_query(vec![("position".into(), position.code().to_string())]),
        )
        .await
    }

    /// Best `limit` players for a position.
    pub async fn top(&self, position: Position, limit: u32) -> Result<Vec<Player>> {
        self.fetch(ApiRequest::get("/players/top").with_query(vec![
            ("position".into(), position.code().to_string()),
            ("limit".into(), limit.to_string()),
        ]))
        .await
    }

    pub async fn create(&self, data: &CreatePlayer) -> Result<Player> {
        let request = ApiRequest::post("/players").with_json(data)?;
        let created: Player = tracked(&self.loading, self.api.send_json(request)).await?;

        self.players.update(|list| list.push(created.clone()));
        Ok(created)
    }

    pub async fn update(&self, id: i64, data: &UpdatePlayer) -> Result<Player> {
        let request = ApiRequest::put(format!("/players/{}", id)).with_json(data)?;
        let updated: Player = tracked(&self.loading, self.api.send_json(request)).await?;

        replace_in(&self.players, updated.clone());
        self.selected.update(|p| {
            if p.as_ref().is_some_and(|p| p.id == id) {
                *p = Some(updated.clone());
            }
        });
        Ok(updated)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        tracked(
            &self.loading,
            self.api.send_unit(ApiRequest::delete(format!("/players/{}", id))),
        )
        .await?;

        remove_from(&self.players, id);
        clear_selected_if(&self.selected, id);
        Ok(())
    }

    pub fn clear_selected(&self) {
        self.selected.set(None);
    }

    pub fn clear(&self) {
        self.players.set(Vec::new());
        self.selected.set(None);
    }

    // Lookups that leave the cached page alone
    async fn fetch(&self, request: ApiRequest) -> Result<Vec<Player>> {
        tracked(&self.loading, async {
            let body: ListBody<Player> = self.api.send_json(request).await?;
            Ok(body.into_items())
        })
        .await
    }
}
