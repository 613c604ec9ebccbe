//! Authenticated request wrapper
//!
//! Every API call goes through [`ApiClient::send`], which attaches the bearer
//! token, refreshes it ahead of expiry and recovers once from a 401.
//!
//! A single request performs at most one refresh call:
//! - proactive refresh succeeded: a later 401 propagates as is;
//! - proactive refresh failed: the session is logged out, the stale token
//!   is still tried once and its outcome propagates;
//! - no proactive refresh: a 401 triggers one refresh and one retry, and a
//!   failed refresh forces logout while the original 401 propagates.

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::session::Session;
use chrono::Utc;
use fantasy_core::{AuthResponse, RefreshTokenRequest};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};

pub const LOGIN_PATH: &str = "/users/login";
pub const REGISTER_PATH: &str = "/users/register";
pub const REFRESH_PATH: &str = "/users/refresh-token";

const AUTH_PATHS: [&str; 3] = [LOGIN_PATH, REGISTER_PATH, REFRESH_PATH];

/// A request description that can be sent more than once.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    /// Path below the API base URL, starting with `/`
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    pub fn with_query(mut self, pairs: Vec<(String, String)>) -> Self {
        self.query.extend(pairs);
        self
    }

    pub fn with_json<B: Serialize>(mut self, body: &B) -> Result<Self> {
        let value = serde_json::to_value(body)
            .map_err(|e| ClientError::ParseError(format!("Failed to serialize request body: {}", e)))?;
        self.body = Some(value);
        Ok(self)
    }

    /// Login, register and refresh are sent untouched.
    pub fn is_auth_endpoint(&self) -> bool {
        AUTH_PATHS.iter().any(|p| self.path.contains(p))
    }

    pub fn is_refresh_endpoint(&self) -> bool {
        self.path.contains(REFRESH_PATH)
    }
}

/// HTTP client bound to one API base URL and one session.
#[derive(Debug)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    session: Arc<Session>,
}

impl ApiClient {
    /// Create a client. The URL is validated and normalized first.
    pub fn new(config: ClientConfig, session: Arc<Session>) -> Result<Self> {
        let config = config.normalized()?;

        let http = Client::builder()
            .user_agent(concat!("fantasy-client/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::Request)?;

        Ok(Self {
            http,
            base_url: config.api_url,
            session,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    /// Send and parse a JSON response body.
    pub async fn send_json<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let body = self.send(&request).await?;
        serde_json::from_str(&body).map_err(|e| {
            ClientError::ParseError(format!(
                "Failed to parse {} {} response: {}",
                request.method, request.path, e
            ))
        })
    }

    /// Send and ignore any response body.
    pub async fn send_unit(&self, request: ApiRequest) -> Result<()> {
        self.send(&request).await.map(|_| ())
    }

    /// Send with token handling and return the raw success body.
    pub async fn send(&self, request: &ApiRequest) -> Result<String> {
        if request.is_auth_endpoint() {
            return self.dispatch(request, None).await;
        }

        let Some(token) = self.session.tokens().get_token() else {
            return self.dispatch(request, None).await;
        };

        if self.session.should_refresh_token(Utc::now()) {
            debug!(path = %request.path, "Access token close to expiry, refreshing first");
            return match self.refresh_session().await {
                Ok(_) => {
                    let fresh = self.session.tokens().get_token().unwrap_or(token);
                    self.dispatch(request, Some(&fresh)).await
                }
                Err(refresh_error) => {
                    warn!(error = %refresh_error, "Proactive token refresh failed, using current token");
                    self.session.force_logout();
                    self.dispatch(request, Some(&token)).await
                }
            };
        }

        match self.dispatch(request, Some(&token)).await {
            Err(error) if error.is_unauthorized() && !request.is_refresh_endpoint() => {
                debug!(path = %request.path, "Received 401, refreshing token and retrying");
                match self.refresh_session().await {
                    Ok(_) => match self.session.tokens().get_token() {
                        Some(fresh) => self.dispatch(request, Some(&fresh)).await,
                        None => Err(error),
                    },
                    Err(refresh_error) => {
                        warn!(error = %refresh_error, "Token refresh failed after 401");
                        self.session.force_logout();
                        Err(error)
                    }
                }
            }
            other => other,
        }
    }

    /// Exchange the stored refresh token for a new session.
    ///
    /// Has no side effects on failure; callers decide whether to log out.
    pub async fn refresh_session(&self) -> Result<AuthResponse> {
        let refresh_token = self
            .session
            .tokens()
            .get_refresh_token()
            .ok_or(ClientError::NoRefreshToken)?;

        let request = ApiRequest::post(REFRESH_PATH).with_json(&RefreshTokenRequest { refresh_token })?;
        let body = self.dispatch(&request, None).await?;
        let auth: AuthResponse = serde_json::from_str(&body)
            .map_err(|e| ClientError::ParseError(format!("Failed to parse refresh response: {}", e)))?;

        self.session.establish(&auth);
        debug!(user = %auth.user.username, "Access token refreshed");
        Ok(auth)
    }

    /// One HTTP round trip. Non-2xx statuses become `ClientError::Api`.
    async fn dispatch(&self, request: &ApiRequest, token: Option<&str>) -> Result<String> {
        let url = format!("{}{}", self.base_url, request.path);
        debug!(method = %request.method, url = %url, authorized = token.is_some(), "Sending request");

        let mut builder = self.http.request(request.method.clone(), &url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        if let Some(token) = token {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await.map_err(ClientError::from_transport)?;
        let status = response.status();
        let text = response.text().await.map_err(ClientError::from_transport)?;

        debug!(url = %url, status = status.as_u16(), "Received response");

        if status.is_success() {
            Ok(text)
        } else {
            Err(ClientError::from_status(status.as_u16(), &text))
        }
    }
}
