//! Configuration management for mediop
//!
//! The config file is the durable store that lets a session survive between
//! invocations. The auth section is owned exclusively by the session layer;
//! everything else (API host, preferences) must survive a sign-out untouched.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Custom API host for self-hosted deployments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_host: Option<String>,

    /// Persisted session state
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<PersistedAuth>,

    /// User preferences
    #[serde(default)]
    pub preferences: Preferences,
}

/// Persisted session state: the bearer token plus cached display fields.
///
/// The token is the source of truth. The cached fields exist so `status` can
/// describe a session without re-decoding; they are written and removed
/// together with the token, never on their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedAuth {
    /// The bearer token string
    pub token: String,

    /// Account identifier decoded from the token
    pub subject: String,

    /// Role decoded from the token
    pub role: String,

    /// Human-readable name, when the token carries one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Token expiration time
    pub expires_at: DateTime<Utc>,
}

/// User preferences
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preferences {
    /// Default output format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".mediop").join("config.yaml"))
    }

    /// Resolve the config path, honoring an explicit override
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from an optional path override
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        Self::load_from(Self::resolve_path(path)?)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound.into());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Save configuration to an optional path override
    pub fn save_at(&self, path: Option<&str>) -> Result<()> {
        self.save_to(Self::resolve_path(path)?)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: PathBuf) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(&path, contents)?;

        // The auth section holds a live bearer token
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(&path, perms)?;
        }

        Ok(())
    }

    /// Install a new persisted session, replacing any previous one
    pub fn set_auth(&mut self, auth: PersistedAuth) {
        self.auth = Some(auth);
    }

    /// Remove the persisted session. Preferences and API host are untouched.
    pub fn clear_auth(&mut self) {
        self.auth = None;
    }
}
