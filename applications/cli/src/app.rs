//! Shared command context
//!
//! Owns the API client and the confirmation strategy, and runs the route
//! guards before a command builds its view.

use crate::config::CliConfig;
use crate::error::{CliError, Result};
use fantasy_client::{FantasyClient, FileStore, KeyValueStore};
use fantasy_core::Route;
use fantasy_views::{check_route, AutoConfirm, Confirm, GuardOutcome};
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use tracing::debug;

/// Asks on the terminal; anything but `y`/`yes` declines.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&self, message: &str) -> bool {
        let mut stdout = io::stdout();
        if write!(stdout, "{} [y/N] ", message).and_then(|()| stdout.flush()).is_err() {
            return false;
        }

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => is_yes(&answer),
            Err(_) => false,
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

pub struct App {
    client: FantasyClient,
    confirm: Arc<dyn Confirm>,
}

impl App {
    /// Build the client over the session file named in `config`.
    pub fn new(config: &CliConfig, assume_yes: bool) -> Result<Self> {
        let storage: Arc<dyn KeyValueStore> = Arc::new(FileStore::open(config.token_file.clone()));
        let confirm: Arc<dyn Confirm> = if assume_yes {
            Arc::new(AutoConfirm(true))
        } else {
            Arc::new(StdinConfirm)
        };

        Self::with_storage(config, storage, confirm)
    }

    pub fn with_storage(
        config: &CliConfig,
        storage: Arc<dyn KeyValueStore>,
        confirm: Arc<dyn Confirm>,
    ) -> Result<Self> {
        let client = FantasyClient::new(config.client_config(), storage)?;
        Ok(Self { client, confirm })
    }

    pub fn client(&self) -> &FantasyClient {
        &self.client
    }

    pub fn confirm(&self) -> Arc<dyn Confirm> {
        Arc::clone(&self.confirm)
    }

    /// Run the guards for `route`; a redirect aborts the command.
    pub fn enter(&self, route: Route) -> Result<()> {
        match check_route(route, self.client.session()) {
            GuardOutcome::Allow => {
                debug!(route = %route.path(), "Route allowed");
                Ok(())
            }
            GuardOutcome::RedirectTo(_) if route.is_guest_only() => Err(CliError::AlreadyLoggedIn),
            GuardOutcome::RedirectTo(target) => Err(CliError::Redirected(target)),
        }
    }
}
