//! User accounts resource (admin)

use super::{clear_selected_if, remove_from, replace_in, tracked, ListBody};
use crate::error::Result;
use crate::http::{ApiClient, ApiRequest};
use fantasy_core::{ChangePasswordRequest, Store, UpdateUser, User, UserRole};
use std::sync::Arc;

#[derive(Debug)]
pub struct UserService {
    api: Arc<ApiClient>,
    users: Store<Vec<User>>,
    selected: Store<Option<User>>,
    loading: Store<bool>,
}

impl UserService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            api,
            users: Store::default(),
            selected: Store::default(),
            loading: Store::new(false),
        }
    }

    pub fn users(&self) -> &Store<Vec<User>> {
        &self.users
    }

    pub fn selected(&self) -> &Store<Option<User>> {
        &self.selected
    }

    pub fn loading(&self) -> &Store<bool> {
        &self.loading
    }

    pub async fn list(&self) -> Result<Vec<User>> {
        self.load_list(ApiRequest::get("/users")).await
    }

    /// `GET /users/search?q=`
    pub async fn search(&self, query: &str) -> Result<Vec<User>> {
        let request = ApiRequest::get("/users/search").with_query(vec![("q".into(), query.to_string())]);
        self.load_list(request).await
    }

    /// `GET /users/role?role=`
    pub async fn by_role(&self, role: UserRole) -> Result<Vec<User>> {
        let request = ApiRequest::get("/users/role").with_query(vec![("role".into(), role.to_string())]);
        self.load_list(request).await
    }

    pub async fn get(&self, id: i64) -> Result<User> {
        let user: User = tracked(
            &self.loading,
            self.api.send_json(ApiRequest::get(format!("/users/{}", id))),
        )
        .await?;

        self.selected.set(Some(user.clone()));
        Ok(user)
    }

    pub async fn update(&self, id: i64, data: &UpdateUser) -> Result<User> {
        let request = ApiRequest::put(format!("/users/{}", id)).with_json(data)?;
        let updated: User = tracked(&self.loading, self.api.send_json(request)).await?;

        replace_in(&self.users, updated.clone());
        self.selected.update(|u| {
            if u.as_ref().is_some_and(|u| u.id == id) {
                *u = Some(updated.clone());
            }
        });
        Ok(updated)
    }

    /// Update the signed-in account. The session's user follows the change.
    pub async fn update_profile(&self, data: &UpdateUser) -> Result<User> {
        let request = ApiRequest::put("/users/profile").with_json(data)?;
        let updated: User = tracked(&self.loading, self.api.send_json(request)).await?;

        replace_in(&self.users, updated.clone());
        self.selected.set(Some(updated.clone()));
        self.api.session().set_user(updated.clone());
        Ok(updated)
    }

    pub async fn change_password(&self, current_password: &str, new_password: &str) -> Result<()> {
        let request = ApiRequest::post("/users/change-password").with_json(&ChangePasswordRequest {
            current_password: current_password.to_string(),
            new_password: new_password.to_string(),
        })?;
        tracked(&self.loading, self.api.send_unit(request)).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        tracked(
            &self.loading,
            self.api.send_unit(ApiRequest::delete(format!("/users/{}", id))),
        )
        .await?;

        remove_from(&self.users, id);
        clear_selected_if(&self.selected, id);
        Ok(())
    }

    pub fn clear(&self) {
        self.users.set(Vec::new());
        self.selected.set(None);
    }

    async fn load_list(&self, request: ApiRequest) -> Result<Vec<User>> {
        let users = tracked(&self.loading, async {
            let body: ListBody<User> = self.api.send_json(request).await?;
            Ok(body.into_items())
        })
        .await?;

        self.users.set(users.clone());
        Ok(users)
    }
}
