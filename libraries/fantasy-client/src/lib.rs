//! Fantasy Football API Client
//!
//! HTTP client library for the fantasy football REST API.
//!
//! # Features
//!
//! - **Session**: persisted tokens, observable auth state, forced logout
//! - **Token refresh**: proactive refresh before expiry, one retry after a 401
//! - **Resources**: matchweeks, players, teams, user teams and users, each
//!   caching what it last fetched
//!
//! # Example
//!
//! ```ignore
//! use fantasy_client::{ClientConfig, FantasyClient, FileStore};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FantasyClient::new(
//!         ClientConfig::new("http://localhost:5000/api"),
//!         Arc::new(FileStore::open(".fantasy/session.json")),
//!     )?;
//!
//!     let matchweeks = client.matchweeks().list_all().await?;
//!     println!("Found {} matchweeks", matchweeks.len());
//!
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]

mod auth;
mod client;
mod config;
mod error;
mod http;
pub mod resources;
mod session;
mod token_store;

// Re-export main types
pub use auth::{auth_error_response, AuthService};
pub use client::FantasyClient;
pub use config::{ClientConfig, DEFAULT_TOKEN_EXPIRATION_BUFFER};
pub use error::{ClientError, ErrorKind, Result};
pub use http::{ApiClient, ApiRequest};
pub use resources::{MatchweekService, PlayerService, TeamService, UserService, UserTeamService};
pub use session::{token_expiry, Session};
pub use token_store::{
    DetachedStore, FileStore, KeyValueStore, MemoryStore, TokenStore, REFRESH_TOKEN_KEY, TOKEN_KEY,
    USER_KEY,
};
