//! Persistent token storage
//!
//! Access token, refresh token and the cached user live under three fixed
//! keys in a [`KeyValueStore`]. Reads never fail: anything missing, unreadable
//! or corrupt is simply absent.

use fantasy_core::User;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};

pub const TOKEN_KEY: &str = "access_token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
pub const USER_KEY: &str = "user_data";

/// String key/value persistence used by [`TokenStore`].
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Process-local store, lost on exit.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

/// JSON object on disk. Every write rewrites the file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
}

impl FileStore {
    /// Open (or lazily create) the store at `path`.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = Self::load(&path);
        debug!(path = %path.display(), entries = entries.len(), "Opened token file");
        Self {
            path,
            entries: Mutex::new(entries),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(path: &Path) -> HashMap<String, String> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return HashMap::new(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to read token file");
                return HashMap::new();
            }
        };

        serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "Token file is corrupt, ignoring it");
            HashMap::new()
        })
    }

    fn flush(&self, entries: &HashMap<String, String>) {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if let Err(e) = fs::create_dir_all(parent) {
                warn!(path = %parent.display(), error = %e, "Failed to create token directory");
                return;
            }
        }

        let json = match serde_json::to_string_pretty(entries) {
            Ok(json) => json,
            Err(e) => {
                warn!(error = %e, "Failed to serialize token file");
                return;
            }
        };

        if let Err(e) = fs::write(&self.path, json) {
            warn!(path = %self.path.display(), error = %e, "Failed to write token file");
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
            self.flush(&entries);
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            if entries.remove(key).is_some() {
                self.flush(&entries);
            }
        }
    }
}

/// Store for contexts without persistence (e.g. headless rendering).
/// Writes are dropped and reads are always empty.
#[derive(Debug, Default, Clone, Copy)]
pub struct DetachedStore;

impl KeyValueStore for DetachedStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) {}

    fn remove(&self, _key: &str) {}
}

/// Typed access to the persisted session entries.
#[derive(Clone)]
pub struct TokenStore {
    backend: Arc<dyn KeyValueStore>,
}

impl TokenStore {
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    /// Token store backed by process memory.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    pub fn set_token(&self, token: &str) {
        self.backend.set(TOKEN_KEY, token);
    }

    pub fn get_token(&self) -> Option<String> {
        self.backend.get(TOKEN_KEY)
    }

    pub fn remove_token(&self) {
        self.backend.remove(TOKEN_KEY);
    }

    pub fn set_refresh_token(&self, token: &str) {
        self.backend.set(REFRESH_TOKEN_KEY, token);
    }

    pub fn get_refresh_token(&self) -> Option<String> {
        self.backend.get(REFRESH_TOKEN_KEY)
    }

    pub fn remove_refresh_token(&self) {
        self.backend.remove(REFRESH_TOKEN_KEY);
    }

    pub fn set_user(&self, user: &User) {
        match serde_json::to_string(user) {
            Ok(json) => self.backend.set(USER_KEY, &json),
            Err(e) => warn!(error = %e, "Failed to serialize user"),
        }
    }

    /// Cached user; a corrupt entry reads as `None`.
    pub fn get_user(&self) -> Option<User> {
        let raw = self.backend.get(USER_KEY)?;
        serde_json::from_str(&raw)
            .map_err(|e| warn!(error = %e, "Stored user data is corrupt"))
            .ok()
    }

    pub fn remove_user(&self) {
        self.backend.remove(USER_KEY);
    }

    pub fn clear_all(&self) {
        self.remove_token();
        self.remove_refresh_token();
        self.remove_user();
    }

    /// Both access and refresh token are present.
    pub fn has_tokens(&self) -> bool {
        self.get_token().is_some() && self.get_refresh_token().is_some()
    }
}

impl std::fmt::Debug for TokenStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenStore")
            .field("has_token", &self.get_token().is_some())
            .field("has_refresh_token", &self.get_refresh_token().is_some())
            .finish()
    }
}
