//! Unified path management for portal configuration files.
//!
//! Configuration, local storage and logs all live under one directory so a
//! user can inspect or wipe the client's state in one place.

use std::path::PathBuf;

use portal_core::PortalError;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for PortalError {
    fn from(err: PathError) -> Self {
        PortalError::config(err.to_string())
    }
}

/// Path layout of the portal client.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/portal/              # Config directory
/// ├── config.toml                # Client configuration
/// ├── local_storage.json         # Persisted token and user record
/// └── logs/                      # Application logs
///     └── portal.log.YYYY-MM-DD
/// ```
pub struct PortalPaths;

impl PortalPaths {
    const APP_DIR: &'static str = "portal";

    /// Returns the portal configuration directory (`~/.config/portal/` on Linux).
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(Self::APP_DIR))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the path to the local storage file holding the session.
    ///
    /// # Security Note
    ///
    /// The file contains the bearer token in plaintext.
    pub fn local_storage_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("local_storage.json"))
    }

    /// Returns the path to the logs directory.
    pub fn logs_dir() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("logs"))
    }
}
