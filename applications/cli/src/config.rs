/// Command-line client configuration
use crate::error::{CliError, Result};
use fantasy_client::ClientConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Config file read from the working directory when no `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = "fantasy.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CliConfig {
    /// Base URL of the API, including the `/api` prefix
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Refresh access tokens expiring within this many seconds
    #[serde(default = "default_token_expiration_buffer_secs")]
    pub token_expiration_buffer_secs: u64,

    /// Where the session (tokens and cached user) is persisted
    #[serde(default = "default_token_file")]
    pub token_file: PathBuf,
}

impl CliConfig {
    /// Load configuration from file and environment.
    ///
    /// An explicit `path` must exist; the default `fantasy.toml` is optional.
    /// `FANTASY_*` variables override both (e.g. `FANTASY_API_URL`).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        settings = settings.add_source(config::Environment::with_prefix("FANTASY").try_parsing(true));

        let config = settings
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| CliError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.client_config().normalized().map_err(|e| {
            CliError::Config(format!("Invalid api_url (set FANTASY_API_URL): {}", e))
        })?;

        if self.token_file.as_os_str().is_empty() {
            return Err(CliError::Config(
                "token_file cannot be empty (set FANTASY_TOKEN_FILE)".to_string(),
            ));
        }

        Ok(())
    }

    pub fn token_expiration_buffer(&self) -> Duration {
        Duration::from_secs(self.token_expiration_buffer_secs)
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.api_url.clone())
            .with_token_expiration_buffer(self.token_expiration_buffer())
    }
}

// Default values
fn default_api_url() -> String {
    "http://localhost:5000/api".to_string()
}

fn default_token_expiration_buffer_secs() -> u64 {
    5 * 60
}

fn default_token_file() -> PathBuf {
    PathBuf::from("./.fantasy/session.json")
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            token_expiration_buffer_secs: default_token_expiration_buffer_secs(),
            token_file: default_token_file(),
        }
    }
}
