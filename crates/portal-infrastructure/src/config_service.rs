//! Configuration service implementation.
//!
//! Loads `PortalConfig` from `~/.config/portal/config.toml` and layers the
//! environment and command-line overrides on top.

use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use portal_core::Result;
use portal_core::config::PortalConfig;

use crate::paths::PortalPaths;

/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "PORTAL_API_URL";

/// Configuration service that loads and caches the client configuration.
///
/// A missing file yields the defaults. An unreadable file is logged and also
/// yields the defaults, so a broken config never keeps the client from
/// starting.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: Option<PathBuf>,
    /// Cached configuration, loaded lazily on first access.
    config: Arc<RwLock<Option<PortalConfig>>>,
}

impl ConfigService {
    /// Creates a service reading the default config file.
    pub fn new() -> Self {
        Self {
            path: PortalPaths::config_file().ok(),
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Creates a service reading a custom file (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            path: Some(path),
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Gets the file configuration, loading it if not cached.
    pub fn get_config(&self) -> PortalConfig {
        {
            let read_lock = self.config.read().unwrap_or_else(|e| e.into_inner());
            if let Some(ref cached) = *read_lock {
                return cached.clone();
            }
        }

        let loaded = self.load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to load config, using defaults");
            PortalConfig::default()
        });

        let mut write_lock = self.config.write().unwrap_or_else(|e| e.into_inner());
        *write_lock = Some(loaded.clone());

        loaded
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut write_lock = self.config.write().unwrap_or_else(|e| e.into_inner());
        *write_lock = None;
    }

    /// Resolves the effective configuration.
    ///
    /// Precedence for the API URL: command line, then `PORTAL_API_URL`, then
    /// the file, then the default.
    pub fn resolve(&self, cli_api_url: Option<&str>) -> PortalConfig {
        let env_api_url = std::env::var(API_URL_ENV).ok();
        self.resolve_with(cli_api_url, env_api_url.as_deref())
    }

    fn resolve_with(&self, cli_api_url: Option<&str>, env_api_url: Option<&str>) -> PortalConfig {
        let mut config = self.get_config();
        if let Some(url) = cli_api_url
            .or(env_api_url)
            .map(str::trim)
            .filter(|u| !u.is_empty())
        {
            config.api_url = url.to_string();
        }
        config.api_url = config.api_url.trim_end_matches('/').to_string();
        config
    }

    fn load(&self) -> Result<PortalConfig> {
        let Some(path) = &self.path else {
            return Ok(PortalConfig::default());
        };
        if !path.exists() {
            return Ok(PortalConfig::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_core::config::DEFAULT_API_URL;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::with_path(temp_dir.path().join("config.toml"));
        assert_eq!(service.get_config(), PortalConfig::default());
    }

    #[test]
    fn test_invalid_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "api_url = [").unwrap();
        let service = ConfigService::with_path(path);
        assert_eq!(service.get_config().api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_config_is_cached_until_invalidated() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "notification_ttl_secs = 2\n").unwrap();
        let service = ConfigService::with_path(path.clone());
        assert_eq!(service.get_config().notification_ttl_secs, 2);

        fs::write(&path, "notification_ttl_secs = 9\n").unwrap();
        assert_eq!(service.get_config().notification_ttl_secs, 2);

        service.invalidate_cache();
        assert_eq!(service.get_config().notification_ttl_secs, 9);
    }

    #[test]
    fn test_api_url_precedence() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "api_url = \"http://file:1\"\n").unwrap();
        let service = ConfigService::with_path(path);

        assert_eq!(
            service
                .resolve_with(Some("http://cli:3/"), Some("http://env:2"))
                .api_url,
            "http://cli:3"
        );
        assert_eq!(
            service.resolve_with(None, Some("http://env:2")).api_url,
            "http://env:2"
        );
        assert_eq!(service.resolve_with(None, Some("  ")).api_url, "http://file:1");
        assert_eq!(service.resolve_with(None, None).api_url, "http://file:1");
    }
}
