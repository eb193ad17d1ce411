//! Persisted session lookup.
//!
//! The session lives in a local-storage file: a flat JSON object of string
//! keys to string values. Key `user` holds the JSON-encoded [`SessionUser`],
//! key `jwt` the bearer token for the bills API.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use shared::domain::SessionUser;
use thiserror::Error;
use tracing::{debug, warn};

pub const USER_KEY: &str = "user";
pub const JWT_KEY: &str = "jwt";

pub trait SessionAccessor: Send + Sync {
    fn get_user(&self) -> Option<SessionUser>;

    fn jwt(&self) -> Option<String> {
        None
    }
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to read local storage '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write local storage '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("local storage '{}' is not a JSON string map: {source}", path.display())]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to encode session value: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default)]
pub struct LocalStorage {
    path: Option<PathBuf>,
    items: BTreeMap<String, String>,
}

impl LocalStorage {
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Loads the storage file; a missing file is an empty storage.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SessionError> {
        let path = path.as_ref().to_path_buf();
        let items = match fs::read_to_string(&path) {
            Ok(raw) if raw.trim().is_empty() => BTreeMap::new(),
            Ok(raw) => serde_json::from_str(&raw).map_err(|source| SessionError::Malformed {
                path: path.clone(),
                source,
            })?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "local storage file missing, starting empty");
                BTreeMap::new()
            }
            Err(source) => return Err(SessionError::Read { path, source }),
        };
        Ok(Self {
            path: Some(path),
            items,
        })
    }

    pub fn get_item(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }

    pub fn set_item(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.items.insert(key.into(), value.into());
    }

    pub fn remove_item(&mut self, key: &str) {
        self.items.remove(key);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn set_user(&mut self, user: &SessionUser) -> Result<(), SessionError> {
        let encoded = serde_json::to_string(user)?;
        self.set_item(USER_KEY, encoded);
        Ok(())
    }

    /// Writes the storage back to its file. In-memory storages are left alone.
    pub fn save(&self) -> Result<(), SessionError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| SessionError::Write {
                path: path.clone(),
                source,
            })?;
        }
        let encoded = serde_json::to_string_pretty(&self.items)?;
        fs::write(path, encoded).map_err(|source| SessionError::Write {
            path: path.clone(),
            source,
        })
    }
}

impl SessionAccessor for LocalStorage {
    fn get_user(&self) -> Option<SessionUser> {
        let raw = self.get_item(USER_KEY)?;
        match serde_json::from_str(raw) {
            Ok(user) => Some(user),
            Err(err) => {
                warn!(error = %err, "stored user record is not valid JSON");
                None
            }
        }
    }

    fn jwt(&self) -> Option<String> {
        self.get_item(JWT_KEY)
            .filter(|token| !token.is_empty())
            .map(str::to_string)
    }
}
