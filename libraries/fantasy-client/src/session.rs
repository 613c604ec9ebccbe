//! Session state
//!
//! Mirrors the persisted tokens into observable stores and decides when an
//! access token is close enough to expiry to be refreshed.

use crate::token_store::TokenStore;
use chrono::{DateTime, Utc};
use fantasy_core::{AuthResponse, Route, Store, User};
use jsonwebtoken::{DecodingKey, Validation};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug, Deserialize)]
struct ExpiryClaim {
    exp: f64,
}

/// Expiry encoded in a JWT's `exp` claim. The signature is not checked:
/// the client only needs to know when to refresh.
pub fn token_expiry(token: &str) -> Option<DateTime<Utc>> {
    let mut validation = Validation::default();
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.required_spec_claims.clear();

    let data = jsonwebtoken::decode::<ExpiryClaim>(token, &DecodingKey::from_secret(&[]), &validation)
        .ok()?;
    DateTime::from_timestamp_millis((data.claims.exp * 1000.0) as i64)
}

/// Authentication state shared by the request wrapper, the auth service and
/// the route guards.
#[derive(Debug)]
pub struct Session {
    tokens: TokenStore,
    refresh_buffer: Duration,
    current_user: Store<Option<User>>,
    is_authenticated: Store<bool>,
    redirects: Store<Option<Route>>,
}

impl Session {
    /// Rebuild the session from persisted data.
    ///
    /// Authenticated iff a token and a user are stored and the token has not
    /// expired yet. Anything else wipes the stored entries.
    pub fn restore(tokens: TokenStore, refresh_buffer: Duration) -> Self {
        let session = Self {
            tokens,
            refresh_buffer,
            current_user: Store::new(None),
            is_authenticated: Store::new(false),
            redirects: Store::new(None),
        };

        let token = session.tokens.get_token();
        let user = session.tokens.get_user();

        match (token, user) {
            (Some(token), Some(user)) if !Self::is_expired(&token, Utc::now()) => {
                debug!(user = %user.username, "Restored session");
                session.current_user.set(Some(user));
                session.is_authenticated.set(true);
            }
            (None, None) => session.tokens.clear_all(),
            _ => {
                debug!("Stored session is incomplete or expired, clearing it");
                session.tokens.clear_all();
            }
        }

        session
    }

    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    pub fn current_user(&self) -> &Store<Option<User>> {
        &self.current_user
    }

    pub fn is_authenticated(&self) -> &Store<bool> {
        &self.is_authenticated
    }

    /// Navigation requests published by the session (forced logout).
    pub fn redirects(&self) -> &Store<Option<Route>> {
        &self.redirects
    }

    pub fn user(&self) -> Option<User> {
        self.current_user.get()
    }

    pub fn authenticated(&self) -> bool {
        self.is_authenticated.get()
    }

    pub fn is_admin(&self) -> bool {
        self.current_user.with(|u| u.as_ref().is_some_and(User::is_admin))
    }

    /// Persist a successful login/register/refresh.
    pub fn establish(&self, auth: &AuthResponse) {
        self.tokens.set_token(&auth.token);
        self.tokens.set_refresh_token(&auth.refresh_token);
        self.tokens.set_user(&auth.user);
        self.current_user.set(Some(auth.user.clone()));
        self.is_authenticated.set(true);
    }

    /// Replace the cached user (profile reload).
    pub fn set_user(&self, user: User) {
        self.tokens.set_user(&user);
        self.current_user.set(Some(user));
    }

    pub fn clear(&self) {
        self.tokens.clear_all();
        self.current_user.set(None);
        self.is_authenticated.set(false);
    }

    /// Drop the session and ask the front-end to show the login screen.
    pub fn force_logout(&self) {
        warn!("Session is no longer valid, logging out");
        self.clear();
        self.redirects.set(Some(Route::Login));
    }

    /// Take the pending redirect, if any.
    pub fn take_redirect(&self) -> Option<Route> {
        let mut taken = None;
        self.redirects.update(|r| taken = r.take());
        taken
    }

    /// True iff the stored access token expires within the refresh buffer.
    /// Missing or undecodable tokens never trigger a refresh.
    pub fn should_refresh_token(&self, now: DateTime<Utc>) -> bool {
        let Some(expiry) = self.tokens.get_token().as_deref().and_then(token_expiry) else {
            return false;
        };

        let remaining_ms = expiry.timestamp_millis() - now.timestamp_millis();
        remaining_ms <= self.refresh_buffer.as_millis() as i64
    }

    fn is_expired(token: &str, now: DateTime<Utc>) -> bool {
        token_expiry(token).map_or(true, |expiry| expiry < now)
    }
}
