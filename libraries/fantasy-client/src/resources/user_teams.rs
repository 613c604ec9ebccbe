//! Fantasy (user) teams resource

use super::{clear_selected_if, remove_from, replace_in, tracked, ListBody};
use crate::error::Result;
use crate::http::{ApiClient, ApiRequest};
use fantasy_core::{
    CreateUserTeam, Store, TeamValidation, UpdateUserTeam, UpdateUserTeamPoints, UserTeam,
    UserTeamDetails,
};
use serde_json::json;
use std::sync::Arc;

/// Fantasy team access plus the cached list and the selected team details.
#[derive(Debug)]
pub struct UserTeamService {
    api: Arc<ApiClient>,
    user_teams: Store<Vec<UserTeam>>,
    selected: Store<Option<UserTeamDetails>>,
    loading: Store<bool>,
}

impl UserTeamService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            api,
            user_teams: Store::default(),
            selected: Store::default(),
            loading: Store::new(false),
        }
    }

    pub fn user_teams(&self) -> &Store<Vec<UserTeam>> {
        &self.user_teams
    }

    pub fn selected(&self) -> &Store<Option<UserTeamDetails>> {
        &self.selected
    }

    pub fn loading(&self) -> &Store<bool> {
        &self.loading
    }

    /// Every fantasy team (admin).
    pub async fn list_all(&self) -> Result<Vec<UserTeam>> {
        let teams = tracked(&self.loading, async {
            let body: ListBody<UserTeam> = self.api.send_json(ApiRequest::get("/userteams")).await?;
            Ok(body.into_items())
        })
        .await?;

        self.user_teams.set(teams.clone());
        Ok(teams)
    }

    /// `GET /userteams/user/{userId}`
    pub async fn by_user(&self, user_id: i64) -> Result<Vec<UserTeam>> {
        let teams = tracked(&self.loading, async {
            let body: ListBody<UserTeam> = self
                .api
                .send_json(ApiRequest::get(format!("/userteams/user/{}", user_id)))
                .await?;
            Ok(body.into_items())
        })
        .await?;

        self.user_teams.set(teams.clone());
        Ok(teams)
    }

    /// `GET /userteams/matchweek/{matchweekId}`
    pub async fn by_matchweek(&self, matchweek_id: i64) -> Result<Vec<UserTeam>> {
        let teams = tracked(&self.loading, async {
            let body: ListBody<UserTeam> = self
                .api
                .send_json(ApiRequest::get(format!("/userteams/matchweek/{}", matchweek_id)))
                .await?;
            Ok(body.into_items())
        })
        .await?;

        self.user_teams.set(teams.clone());
        Ok(teams)
    }

    /// Ranking for one matchweek. Does not touch the cached list.
    pub async fn leaderboard(&self, matchweek_id: i64) -> Result<Vec<UserTeam>> {
        tracked(&self.loading, async {
            let body: ListBody<UserTeam> = self
                .api
                .send_json(ApiRequest::get(format!("/userteams/leaderboard/{}", matchweek_id)))
                .await?;
            Ok(body.into_items())
        })
        .await
    }

    pub async fn get(&self, id: i64) -> Result<UserTeamDetails> {
        let details: UserTeamDetails = tracked(
            &self.loading,
            self.api.send_json(ApiRequest::get(format!("/userteams/{}", id))),
        )
        .await?;

        self.selected.set(Some(details.clone()));
        Ok(details)
    }

    pub async fn create(&self, data: &CreateUserTeam) -> Result<UserTeam> {
        let request = ApiRequest::post("/userteams").with_json(data)?;
        let created: UserTeam = tracked(&self.loading, self.api.send_json(request)).await?;

        self.user_teams.update(|list| list.push(created.clone()));
        Ok(created)
    }

    pub async fn update(&self, id: i64, data: &UpdateUserTeam) -> Result<UserTeam> {
        let request = ApiRequest::put(format!("/userteams/{}", id)).with_json(data)?;
        let updated: UserTeam = tracked(&self.loading, self.api.send_json(request)).await?;

        self.apply_summary(updated.clone());
        Ok(updated)
    }

    /// Lock the team for the current matchweek.
    pub async fn submit(&self, id: i64) -> Result<UserTeam> {
        let request = ApiRequest::post(format!("/userteams/{}/submit", id)).with_json(&json!({}))?;
        let submitted: UserTeam = tracked(&self.loading, self.api.send_json(request)).await?;

        self.apply_summary(submitted.clone());
        Ok(submitted)
    }

    /// Ask the server for a composition report.
    pub async fn validate(&self, id: i64) -> Result<TeamValidation> {
        let request = ApiRequest::post(format!("/userteams/{}/validate", id)).with_json(&json!({}))?;
        tracked(&self.loading, self.api.send_json(request)).await
    }

    /// Reopen a locked team (admin).
    pub async fn unlock(&self, id: i64) -> Result<UserTeam> {
        let request = ApiRequest::post(format!("/userteams/{}/unlock", id)).with_json(&json!({}))?;
        let unlocked: UserTeam = tracked(&self.loading, self.api.send_json(request)).await?;

        self.apply_summary(unlocked.clone());
        Ok(unlocked)
    }

    /// Overwrite a team's score (admin).
    pub async fn update_points(&self, id: i64, total_points: i64) -> Result<UserTeam> {
        let request = ApiRequest::patch(format!("/userteams/{}/points", id))
            .with_json(&UpdateUserTeamPoints { total_points })?;
        let updated: UserTeam = tracked(&self.loading, self.api.send_json(request)).await?;

        self.apply_summary(updated.clone());
        Ok(updated)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        tracked(
            &self.loading,
            self.api.send_unit(ApiRequest::delete(format!("/userteams/{}", id))),
        )
        .await?;

        remove_from(&self.user_teams, id);
        clear_selected_if(&self.selected, id);
        Ok(())
    }

    pub fn clear_selected(&self) {
        self.selected.set(None);
    }

    pub fn clear(&self) {
        self.user_teams.set(Vec::new());
        self.selected.set(None);
    }

    // The summary replaces the list entry and the summary part of the
    // selected details; the roster is only replaced by `get`.
    fn apply_summary(&self, summary: UserTeam) {
        let id = summary.id;
        replace_in(&self.user_teams, summary.clone());
        self.selected.update(|selected| {
            if let Some(details) = selected.as_mut().filter(|d| d.team.id == id) {
                details.team = summary;
            }
        });
    }
}
