//! Client configuration.

use crate::error::{ClientError, Result};
use std::time::Duration;

/// Default window before expiry in which access tokens are refreshed ahead of time.
pub const DEFAULT_TOKEN_EXPIRATION_BUFFER: Duration = Duration::from_secs(5 * 60);

/// Configuration for connecting to the fantasy football API.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API, including the `/api` prefix
    /// (e.g., "https://fantasy.example.com/api")
    pub api_url: String,
    /// Access tokens expiring within this window are refreshed before use
    pub token_expiration_buffer: Duration,
}

impl ClientConfig {
    /// Create a config with the default refresh buffer.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            token_expiration_buffer: DEFAULT_TOKEN_EXPIRATION_BUFFER,
        }
    }

    pub fn with_token_expiration_buffer(mut self, buffer: Duration) -> Self {
        self.token_expiration_buffer = buffer;
        self
    }

    /// Validate the URL and strip trailing slashes.
    pub fn normalized(self) -> Result<Self> {
        if self.api_url.trim().is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        let api_url = self.api_url.trim().trim_end_matches('/').to_string();
        if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        url::Url::parse(&api_url).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;

        Ok(Self { api_url, ..self })
    }
}
