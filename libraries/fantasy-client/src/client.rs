//! Main fantasy football API client.

use crate::auth::AuthService;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::ApiClient;
use crate::resources::{MatchweekService, PlayerService, TeamService, UserService, UserTeamService};
use crate::session::Session;
use crate::token_store::{KeyValueStore, TokenStore};
use std::sync::Arc;
use tracing::info;

/// Entry point wiring the session, the request wrapper and every resource
/// module around one token store.
///
/// All parts are `Arc`-shared so view models can hold the ones they need.
///
/// # Example
///
/// ```ignore
/// use fantasy_client::{ClientConfig, FantasyClient, MemoryStore};
/// use fantasy_core::LoginRequest;
/// use std::sync::Arc;
///
/// let client = FantasyClient::new(
///     ClientConfig::new("http://localhost:5000/api"),
///     Arc::new(MemoryStore::new()),
/// )?;
///
/// client.auth().login(LoginRequest {
///     username_or_email: "alice".into(),
///     password: "secret".into(),
/// }).await?;
///
/// let current = client.matchweeks().load_current().await?;
/// println!("Week {} closes at {}", current.week_number, current.deadline_date);
/// ```
#[derive(Debug, Clone)]
pub struct FantasyClient {
    api: Arc<ApiClient>,
    auth: Arc<AuthService>,
    matchweeks: Arc<MatchweekService>,
    players: Arc<PlayerService>,
    teams: Arc<TeamService>,
    user_teams: Arc<UserTeamService>,
    users: Arc<UserService>,
}

impl FantasyClient {
    /// Create a client, restoring any session persisted in `storage`.
    pub fn new(config: ClientConfig, storage: Arc<dyn KeyValueStore>) -> Result<Self> {
        let config = config.normalized()?;
        let session = Arc::new(Session::restore(
            TokenStore::new(storage),
            config.token_expiration_buffer,
        ));

        info!(
            api_url = %config.api_url,
            authenticated = session.authenticated(),
            "Fantasy client ready"
        );

        let api = Arc::new(ApiClient::new(config, session)?);

        Ok(Self {
            auth: Arc::new(AuthService::new(Arc::clone(&api))),
            matchweeks: Arc::new(MatchweekService::new(Arc::clone(&api))),
            players: Arc::new(PlayerService::new(Arc::clone(&api))),
            teams: Arc::new(TeamService::new(Arc::clone(&api))),
            user_teams: Arc::new(UserTeamService::new(Arc::clone(&api))),
            users: Arc::new(UserService::new(Arc::clone(&api))),
            api,
        })
    }

    pub fn api(&self) -> &Arc<ApiClient> {
        &self.api
    }

    pub fn session(&self) -> &Arc<Session> {
        self.api.session()
    }

    pub fn auth(&self) -> &Arc<AuthService> {
        &self.auth
    }

    pub fn matchweeks(&self) -> &Arc<MatchweekService> {
        &self.matchweeks
    }

    pub fn players(&self) -> &Arc<PlayerService> {
        &self.players
    }

    pub fn teams(&self) -> &Arc<TeamService> {
        &self.teams
    }

    pub fn user_teams(&self) -> &Arc<UserTeamService> {
        &self.user_teams
    }

    pub fn users(&self) -> &Arc<UserService> {
        &self.users
    }
}
