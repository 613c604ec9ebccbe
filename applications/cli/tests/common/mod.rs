/// Common test utilities and fixtures
use chrono::Utc;
use fantasy_cli::{App, CliConfig};
use fantasy_client::{KeyValueStore, MemoryStore, TokenStore};
use fantasy_core::{User, UserRole};
use fantasy_views::AutoConfirm;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::Serialize;
use serde_json::{json, Value};
use std::path::Path;
use std::sync::Arc;

#[derive(Serialize)]
struct Claims {
    sub: String,
    exp: i64,
}

/// Access token valid for a day
pub fn long_lived_token() -> String {
    let claims = Claims {
        sub: "7".into(),
        exp: Utc::now().timestamp() + 24 * 3600,
    };
    encode(&Header::default(), &claims, &EncodingKey::from_secret(b"test-secret")).unwrap()
}

pub fn user(role: UserRole) -> User {
    User {
        id: 7,
        username: fixtures::TEST_USERNAME.into(),
        email: "alice@example.com".into(),
        role,
        created_at: "2024-01-01T00:00:00Z".into(),
    }
}

pub fn auth_body(role: UserRole) -> Value {
    json!({
        "token": long_lived_token(),
        "refreshToken": "refresh-1",
        "expiresAt": "2030-01-01T00:00:00Z",
        "user": user(role),
    })
}

pub fn config_for(api_url: &str, token_file: &Path) -> CliConfig {
    CliConfig {
        api_url: api_url.to_string(),
        token_file: token_file.to_path_buf(),
        ..CliConfig::default()
    }
}

/// App over an in-memory session, optionally signed in with `role`.
pub fn app_for(api_url: &str, signed_in: Option<UserRole>, confirm: bool) -> App {
    let backend: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    if let Some(role) = signed_in {
        let tokens = TokenStore::new(Arc::clone(&backend));
        tokens.set_token(&long_lived_token());
        tokens.set_refresh_token("refresh-1");
        tokens.set_user(&user(role));
    }

    let config = config_for(api_url, Path::new("unused.json"));
    App::with_storage(&config, backend, Arc::new(AutoConfirm(confirm))).unwrap()
}

/// Test user credentials
pub mod fixtures {
    pub const TEST_USERNAME: &str = "alice";
    pub const TEST_PASSWORD: &str = "secret1";
}
