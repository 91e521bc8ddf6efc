//! File-backed storage for the backend session.
//!
//! The session lives in `<config dir>/kambaz/session.json` with mode `0600`
//! on Unix. `KAMBAZ_SESSION_FILE` points it elsewhere.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use kz_core::entities::User;
use serde::{Deserialize, Serialize};

use crate::error::AuthError;

const SESSION_FILE_NAME: &str = "session.json";
const SESSION_FILE_ENV: &str = "KAMBAZ_SESSION_FILE";

/// What signin leaves behind for later commands.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoredSession {
    pub user: User,
    /// `Cookie` header value replayed on every request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cookie: Option<String>,
    /// API base the session was issued by.
    pub server: String,
    pub signed_in_at: DateTime<Utc>,
}

impl StoredSession {
    #[must_use]
    pub fn new(user: User, cookie: Option<String>, server: &str) -> Self {
        Self {
            user,
            cookie,
            server: server.to_string(),
            signed_in_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Store at an explicit path.
    #[must_use]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `KAMBAZ_SESSION_FILE`, or the user config directory.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::SessionStore`] if no config directory exists.
    pub fn default_location() -> Result<Self, AuthError> {
        if let Ok(path) = std::env::var(SESSION_FILE_ENV) {
            if !path.trim().is_empty() {
                return Ok(Self::at(path));
            }
        }
        dirs::config_dir()
            .map(|d| Self::at(d.join("kambaz").join(SESSION_FILE_NAME)))
            .ok_or_else(|| {
                AuthError::SessionStore("config directory not found, cannot store session".into())
            })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the session, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::SessionStore`] on any filesystem failure.
    pub fn save(&self, session: &StoredSession) -> Result<(), AuthError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                AuthError::SessionStore(format!("mkdir {}: {e}", parent.display()))
            })?;
        }
        let json = serde_json::to_string_pretty(session)
            .map_err(|e| AuthError::SessionStore(format!("serialize session: {e}")))?;
        fs::write(&self.path, json).map_err(|e| {
            AuthError::SessionStore(format!("write {}: {e}", self.path.display()))
        })?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600)).map_err(|e| {
                AuthError::SessionStore(format!("chmod {}: {e}", self.path.display()))
            })?;
        }

        tracing::debug!(
            path = %self.path.display(),
            user = %session.user.username,
            "session saved"
        );
        Ok(())
    }

    /// Read the stored session. A missing or empty file is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::SessionStore`] if the file exists but cannot be
    /// read or parsed.
    pub fn load(&self) -> Result<Option<StoredSession>, AuthError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)
            .map_err(|e| AuthError::SessionStore(format!("read {}: {e}", self.path.display())))?;
        if raw.trim().is_empty() {
            return Ok(None);
        }
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| AuthError::SessionStore(format!("parse {}: {e}", self.path.display())))
    }

    /// Remove the session file if present.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::SessionStore`] if the file cannot be removed.
    pub fn delete(&self) -> Result<(), AuthError> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(|e| {
                AuthError::SessionStore(format!("failed to delete {}: {e}", self.path.display()))
            })?;
        }
        Ok(())
    }
}
