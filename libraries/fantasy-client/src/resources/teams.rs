//! Football teams resource

use super::{clear_selected_if, remove_from, replace_in, tracked, ListBody};
use crate::error::Result;
use crate::http::{ApiClient, ApiRequest};
use fantasy_core::{CreateTeam, Store, Team, TeamWithPlayers, UpdateTeam};
use std::sync::Arc;

/// Team access plus the cached list and the selected team with its roster.
#[derive(Debug)]
pub struct TeamService {
    api: Arc<ApiClient>,
    teams: Store<Vec<Team>>,
    selected: Store<Option<TeamWithPlayers>>,
    loading: Store<bool>,
}

impl TeamService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            api,
            teams: Store::default(),
            selected: Store::default(),
            loading: Store::new(false),
        }
    }

    pub fn teams(&self) -> &Store<Vec<Team>> {
        &self.teams
    }

    pub fn selected(&self) -> &Store<Option<TeamWithPlayers>> {
        &self.selected
    }

    pub fn loading(&self) -> &Store<bool> {
        &self.loading
    }

    pub async fn list(&self) -> Result<Vec<Team>> {
        self.load_list(ApiRequest::get("/teams")).await
    }

    /// Unpaged `GET /teams/all`.
    pub async fn list_all(&self) -> Result<Vec<Team>> {
        self.load_list(ApiRequest::get("/teams/all")).await
    }

    pub async fn search(&self, query: &str) -> Result<Vec<Team>> {
        self.load_list(ApiRequest::get("/teams/search").with_query(vec![("q".into(), query.to_string())]))
            .await
    }

    /// Team plus roster.
    pub async fn get(&self, id: i64) -> Result<TeamWithPlayers> {
        let team: TeamWithPlayers = tracked(
            &self.loading,
            self.api.send_json(ApiRequest::get(format!("/teams/{}", id))),
        )
        .await?;

        self.selected.set(Some(team.clone()));
        Ok(team)
    }

    pub async fn create(&self, data: &CreateTeam) -> Result<Team> {
        let request = ApiRequest::post("/teams").with_json(data)?;
        let created: Team = tracked(&self.loading, self.api.send_json(request)).await?;

        self.teams.update(|list| list.push(created.clone()));
        Ok(created)
    }

    pub async fn update(&self, id: i64, data: &UpdateTeam) -> Result<Team> {
        let request = ApiRequest::put(format!("/teams/{}", id)).with_json(data)?;
        let updated: Team = tracked(&self.loading, self.api.send_json(request)).await?;

        replace_in(&self.teams, updated.clone());
        self.selected.update(|selected| {
            if let Some(selected) = selected.as_mut().filter(|s| s.team.id == id) {
                selected.team = updated.clone();
            }
        });
        Ok(updated)
    }

    /// Fails with 400 while the team still has players; the cache is then untouched.
    pub async fn delete(&self, id: i64) -> Result<()> {
        tracked(
            &self.loading,
            self.api.send_unit(ApiRequest::delete(format!("/teams/{}", id))),
        )
        .await?;

        remove_from(&self.teams, id);
        clear_selected_if(&self.selected, id);
        Ok(())
    }

    pub fn clear_selected(&self) {
        self.selected.set(None);
    }

    pub fn clear(&self) {
        self.teams.set(Vec::new());
        self.selected.set(None);
    }

    async fn load_list(&self, request: ApiRequest) -> Result<Vec<Team>> {
        let teams = tracked(&self.loading, async {
            let body: ListBody<Team> = self.api.send_json(request).await?;
            Ok(body.into_items())
        })
        .await?;

        self.teams.set(teams.clone());
        Ok(teams)
    }
}
