//! Session persistence
//!
//! The session manager is the sole writer of the auth section of the durable
//! store. The trait seam exists so tests (and degraded environments) can swap
//! the file-backed store for an in-memory one.

use crate::config::{Config, PersistedAuth};
use crate::error::{ConfigError, Error, SessionError};

/// Durable storage for the persisted session.
pub trait SessionStore {
    /// Read the persisted session, if any.
    fn load(&self) -> Result<Option<PersistedAuth>, SessionError>;

    /// Replace the persisted session.
    fn save(&mut self, auth: &PersistedAuth) -> Result<(), SessionError>;

    /// Remove the persisted session and nothing else.
    fn clear(&mut self) -> Result<(), SessionError>;
}

/// File-backed store over the mediop config file.
///
/// Load/save go through [`Config`] so that clearing the session leaves the
/// rest of the file (API host, preferences) exactly as it was.
pub struct FileStore {
    config_path: Option<String>,
}

impl FileStore {
    pub fn new(config_path: Option<String>) -> Self {
        Self { config_path }
    }

    fn path(&self) -> Option<&str> {
        self.config_path.as_deref()
    }

    /// Existing config, or a fresh one when no file exists yet. A file that
    /// exists but cannot be read is surfaced as unavailable, not overwritten.
    fn load_config(&self) -> Result<Config, SessionError> {
        match Config::load_at(self.path()) {
            Ok(config) => Ok(config),
            Err(Error::Config(ConfigError::NotFound)) => Ok(Config::default()),
            Err(err) => Err(SessionError::PersistenceUnavailable(err.to_string())),
        }
    }
}

impl SessionStore for FileStore {
    fn load(&self) -> Result<Option<PersistedAuth>, SessionError> {
        Ok(self.load_config()?.auth)
    }

    fn save(&mut self, auth: &PersistedAuth) -> Result<(), SessionError> {
        let mut config = self.load_config()?;
        config.set_auth(auth.clone());
        config
            .save_at(self.path())
            .map_err(|e| SessionError::PersistenceUnavailable(e.to_string()))
    }

    fn clear(&mut self) -> Result<(), SessionError> {
        let mut config = match Config::load_at(self.path()) {
            Ok(config) => config,
            // Nothing persisted, nothing to clear
            Err(Error::Config(ConfigError::NotFound)) => return Ok(()),
            Err(err) => return Err(SessionError::PersistenceUnavailable(err.to_string())),
        };

        if config.auth.is_none() {
            return Ok(());
        }

        config.clear_auth();
        config
            .save_at(self.path())
            .map_err(|e| SessionError::PersistenceUnavailable(e.to_string()))
    }
}

/// In-memory store. Used by tests and available as a degraded-mode fallback
/// when no durable location exists; sessions last for the process only.
#[derive(Debug, Default)]
pub struct MemoryStore {
    auth: Option<PersistedAuth>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Result<Option<PersistedAuth>, SessionError> {
        Ok(self.auth.clone())
    }

    fn save(&mut self, auth: &PersistedAuth) -> Result<(), SessionError> {
        self.auth = Some(auth.clone());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), SessionError> {
        self.auth = None;
        Ok(())
    }
}
