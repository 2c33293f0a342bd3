use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_URL: &str = "http://localhost:5000";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Contents of `config.toml`. Every key is optional.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_notification_ttl_secs")]
    pub notification_ttl_secs: u64,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_notification_ttl_secs() -> u64 {
    5
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            notification_ttl_secs: default_notification_ttl_secs(),
            log_level: default_log_level(),
        }
    }
}

impl PortalConfig {
    pub fn notification_ttl(&self) -> Duration {
        Duration::from_secs(self.notification_ttl_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: PortalConfig = toml::from_str(r#"api_url = "http://portal.local:8080""#).unwrap();
        assert_eq!(config.api_url, "http://portal.local:8080");
        assert_eq!(config.notification_ttl(), Duration::from_secs(5));
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config: PortalConfig = toml::from_str("").unwrap();
        assert_eq!(config, PortalConfig::default());
    }
}
