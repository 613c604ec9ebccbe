//! Matchweeks resource

use super::{clear_selected_if, remove_from, replace_in, tracked, ListBody};
use crate::error::Result;
use crate::http::{ApiClient, ApiRequest};
use chrono::{DateTime, Duration, Utc};
use fantasy_core::{CreateMatchweek, Matchweek, Paginated, Store, UpdateMatchweek};
use std::sync::Arc;
use tracing::debug;

/// Matchweek access plus the cached list, selection and current matchweek.
#[derive(Debug)]
pub struct MatchweekService {
    api: Arc<ApiClient>,
    matchweeks: Store<Vec<Matchweek>>,
    selected: Store<Option<Matchweek>>,
    current: Store<Option<Matchweek>>,
    loading: Store<bool>,
}

impl MatchweekService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            api,
            matchweeks: Store::default(),
            selected: Store::default(),
            current: Store::default(),
            loading: Store::new(false),
        }
    }

    pub fn matchweeks(&self) -> &Store<Vec<Matchweek>> {
        &self.matchweeks
    }

    pub fn selected(&self) -> &Store<Option<Matchweek>> {
        &self.selected
    }

    pub fn current(&self) -> &Store<Option<Matchweek>> {
        &self.current
    }

    pub fn loading(&self) -> &Store<bool> {
        &self.loading
    }

    /// `GET /matchweeks?page&pageSize`
    pub async fn list_page(&self, page: u32, page_size: u32) -> Result<Paginated<Matchweek>> {
        let request = ApiRequest::get("/matchweeks").with_query(vec![
            ("page".to_string(), page.to_string()),
            ("pageSize".to_string(), page_size.to_string()),
        ]);

        let page = tracked(&self.loading, async {
            let body: ListBody<Matchweek> = self.api.send_json(request).await?;
            Ok(body.into_page())
        })
        .await?;

        self.matchweeks.set(page.items.clone());
        Ok(page)
    }

    /// `GET /matchweeks/all`
    pub async fn list_all(&self) -> Result<Vec<Matchweek>> {
        let items = tracked(&self.loading, async {
            let body: ListBody<Matchweek> = self.api.send_json(ApiRequest::get("/matchweeks/all")).await?;
            Ok(body.into_items())
        })
        .await?;

        debug!(count = items.len(), "Loaded matchweeks");
        self.matchweeks.set(items.clone());
        Ok(items)
    }

    /// `GET /matchweeks/current`; also becomes the selection.
    pub async fn load_current(&self) -> Result<Matchweek> {
        let matchweek: Matchweek = tracked(
            &self.loading,
            self.api.send_json(ApiRequest::get("/matchweeks/current")),
        )
        .await?;

        self.current.set(Some(matchweek.clone()));
        self.selected.set(Some(matchweek.clone()));
        Ok(matchweek)
    }

    pub async fn get(&self, id: i64) -> Result<Matchweek> {
        let matchweek: Matchweek = tracked(
            &self.loading,
            self.api.send_json(ApiRequest::get(format!("/matchweeks/{}", id))),
        )
        .await?;

        self.selected.set(Some(matchweek.clone()));
        Ok(matchweek)
    }

    pub async fn create(&self, data: &CreateMatchweek) -> Result<Matchweek> {
        let request = ApiRequest::post("/matchweeks").with_json(data)?;
        let created: Matchweek = tracked(&self.loading, self.api.send_json(request)).await?;

        self.matchweeks.update(|list| list.push(created.clone()));
        Ok(created)
    }

    pub async fn update(&self, id: i64, data: &UpdateMatchweek) -> Result<Matchweek> {
        let request = ApiRequest::put(format!("/matchweeks/{}", id)).with_json(data)?;
        let updated: Matchweek = tracked(&self.loading, self.api.send_json(request)).await?;

        replace_in(&self.matchweeks, updated.clone());
        for slot in [&self.selected, &self.current] {
            slot.update(|m| {
                if m.as_ref().is_some_and(|m| m.id == id) {
                    *m = Some(updated.clone());
                }
            });
        }
        Ok(updated)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let request = ApiRequest::delete(format!("/matchweeks/{}", id));
        tracked(&self.loading, self.api.send_unit(request)).await?;

        remove_from(&self.matchweeks, id);
        clear_selected_if(&self.selected, id);
        clear_selected_if(&self.current, id);
        Ok(())
    }

    pub fn is_deadline_passed(matchweek: &Matchweek, now: DateTime<Utc>) -> bool {
        matchweek.is_deadline_passed(now)
    }

    pub fn time_until_deadline(matchweek: &Matchweek, now: DateTime<Utc>) -> Duration {
        matchweek.time_until_deadline(now)
    }

    pub fn clear_selected(&self) {
        self.selected.set(None);
    }

    pub fn clear_current(&self) {
        self.current.set(None);
    }

    pub fn clear(&self) {
        self.matchweeks.set(Vec::new());
        self.selected.set(None);
        self.current.set(None);
    }
}
