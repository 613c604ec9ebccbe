//! Authentication service
//!
//! Login, registration, refresh, logout and profile loading on top of the
//! shared [`ApiClient`] and [`Session`].

use crate::error::{ClientError, Result};
use crate::http::{ApiClient, ApiRequest, LOGIN_PATH, REGISTER_PATH};
use crate::session::Session;
use fantasy_core::{AuthResponse, ErrorResponse, LoginRequest, LogoutRequest, RegisterRequest, Route, User};
use std::sync::Arc;
use tracing::{info, warn};

const DEFAULT_AUTH_ERROR: &str = "An error occurred during authentication";

/// Authentication operations.
#[derive(Debug, Clone)]
pub struct AuthService {
    api: Arc<ApiClient>,
}

impl AuthService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub fn session(&self) -> &Arc<Session> {
        self.api.session()
    }

    pub async fn login(&self, request: LoginRequest) -> Result<AuthResponse> {
        let auth: AuthResponse = self
            .api
            .send_json(ApiRequest::post(LOGIN_PATH).with_json(&request)?)
            .await?;

        self.session().establish(&auth);
        info!(user = %auth.user.username, role = %auth.user.role, "Logged in");
        Ok(auth)
    }

    pub async fn register(&self, request: RegisterRequest) -> Result<AuthResponse> {
        let auth: AuthResponse = self
            .api
            .send_json(ApiRequest::post(REGISTER_PATH).with_json(&request)?)
            .await?;

        self.session().establish(&auth);
        info!(user = %auth.user.username, "Registered new account");
        Ok(auth)
    }

    /// Refresh the session explicitly. A failed refresh logs out.
    pub async fn refresh_token(&self) -> Result<AuthResponse> {
        match self.api.refresh_session().await {
            Ok(auth) => Ok(auth),
            Err(ClientError::NoRefreshToken) => Err(ClientError::NoRefreshToken),
            Err(e) => {
                warn!(error = %e, "Token refresh failed");
                self.session().force_logout();
                Err(e)
            }
        }
    }

    /// Revoke the stored refresh token on the server, then clear local state.
    /// Local state is cleared even when the server call fails.
    pub async fn logout(&self) -> Result<()> {
        let result = match self.session().tokens().get_refresh_token() {
            Some(refresh_token) => {
                let request = ApiRequest::post("/users/logout").with_json(&LogoutRequest { refresh_token })?;
                self.api.send_unit(request).await
            }
            None => Ok(()),
        };

        self.finish_logout(result, "Logged out")
    }

    /// Revoke every session of the current user.
    pub async fn logout_all(&self) -> Result<()> {
        let result = self.api.send_unit(ApiRequest::post("/users/logout-all")).await;
        self.finish_logout(result, "Logged out of all devices")
    }

    /// Reload the current user's profile.
    pub async fn profile(&self) -> Result<User> {
        let user: User = self.api.send_json(ApiRequest::get("/users/profile")).await?;
        self.session().set_user(user.clone());
        Ok(user)
    }

    fn finish_logout(&self, result: Result<()>, message: &str) -> Result<()> {
        if let Err(e) = &result {
            warn!(error = %e, "Server-side logout failed, clearing local session anyway");
        }

        self.session().clear();
        self.session().redirects().set(Some(Route::Login));
        info!("{}", message);
        result
    }
}

/// Normalize an auth failure into the `{ message, violations, statusCode }` shape.
pub fn auth_error_response(error: &ClientError) -> ErrorResponse {
    match error {
        ClientError::Api { .. } => {
            let mut response = error.to_error_response();
            if error.server_message().is_none() {
                response.message = DEFAULT_AUTH_ERROR.to_string();
            }
            response
        }
        _ => ErrorResponse {
            message: DEFAULT_AUTH_ERROR.to_string(),
            violations: Vec::new(),
            status_code: error.status(),
        },
    }
}
