//! Client configuration

use serde::Deserialize;

use crate::error::CoreError;

/// Client configuration
///
/// Read from `CRM_`-prefixed environment variables, e.g.
/// `CRM_DEFAULT_SUBDOMAIN=acme CRM_LOG_LEVEL=debug`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClientConfig {
    /// Tenant used when a record carries no subdomain of its own
    #[serde(default)]
    pub default_subdomain: Option<String>,
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            default_subdomain: None,
            log_level: default_log_level(),
        }
    }
}

impl ClientConfig {
    /// Loads configuration from environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("CRM"))
            .build()?
            .try_deserialize()
    }

    /// Loads a `.env` file if present, then reads the environment
    pub fn load() -> Result<Self, CoreError> {
        dotenvy::dotenv().ok();
        Ok(Self::from_env()?)
    }

    /// Sets the default subdomain
    pub fn with_default_subdomain(mut self, subdomain: impl Into<String>) -> Self {
        self.default_subdomain = Some(subdomain.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.default_subdomain, None);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_with_default_subdomain() {
        let config = ClientConfig::default().with_default_subdomain("acme");
        assert_eq!(config.default_subdomain.as_deref(), Some("acme"));
    }
}
