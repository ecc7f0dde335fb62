//! Configuration types for the predictor.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file. Every field has a
//! default, so an empty file is a valid configuration.

use std::env;
use std::time::Duration;

use serde::Deserialize;

use crate::holidays::RemoteSettings;
use crate::models::Region;

/// Default remote holidays endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://holidays.abstractapi.com/v1/";

/// Default environment variable holding the remote API key.
pub const DEFAULT_API_KEY_ENV: &str = "HOLIDAYS_API_KEY";

fn default_region() -> Option<String> {
    Some(Region::Pichincha.code().to_string())
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_country() -> String {
    "EC".to_string()
}

fn default_api_key_env() -> String {
    DEFAULT_API_KEY_ENV.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

/// Top-level predictor configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PredictorConfig {
    /// ISO 3166-2:EC code of the region whose holidays apply.
    ///
    /// `None` or an unknown code means national holidays only.
    #[serde(default = "default_region")]
    pub region: Option<String>,
    /// Remote holiday service settings.
    #[serde(default)]
    pub remote: RemoteConfig,
}

impl PredictorConfig {
    /// Returns the configured region, if the code is known.
    pub fn region(&self) -> Option<Region> {
        self.region.as_deref().and_then(Region::from_code)
    }
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            region: default_region(),
            remote: RemoteConfig::default(),
        }
    }
}

/// Remote holiday service configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteConfig {
    /// Base URL of the holidays endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Country code sent with each request.
    #[serde(default = "default_country")]
    pub country: String,
    /// Name of the environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Retries after a transport failure or timeout.
    #[serde(default)]
    pub max_retries: u32,
}

impl RemoteConfig {
    /// Reads the API key from the configured environment variable.
    ///
    /// An unset or empty variable yields `None`.
    pub fn resolve_api_key(&self) -> Option<String> {
        env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.is_empty())
    }

    /// Builds client settings with an already resolved API key.
    pub fn into_settings(self, api_key: Option<String>) -> RemoteSettings {
        RemoteSettings {
            endpoint: self.endpoint,
            country: self.country,
            api_key,
            timeout: Duration::from_secs(self.timeout_secs),
            max_retries: self.max_retries,
        }
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            country: default_country(),
            api_key_env: default_api_key_env(),
            timeout_secs: default_timeout_secs(),
            max_retries: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config: PredictorConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, PredictorConfig::default());
        assert_eq!(config.region(), Some(Region::Pichincha));
        assert_eq!(config.remote.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.remote.timeout_secs, 10);
        assert_eq!(config.remote.max_retries, 0);
    }

    #[test]
    fn test_partial_remote_section() {
        let yaml = "remote:\n  timeout_secs: 3\n  max_retries: 2\n";
        let config: PredictorConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.remote.timeout_secs, 3);
        assert_eq!(config.remote.max_retries, 2);
        assert_eq!(config.remote.country, "EC");
        assert_eq!(config.remote.api_key_env, DEFAULT_API_KEY_ENV);
    }

    #[test]
    fn test_unknown_or_null_region() {
        let config: PredictorConfig = serde_yaml::from_str("region: EC-G").unwrap();
        assert_eq!(config.region(), None);

        let config: PredictorConfig = serde_yaml::from_str("region: null").unwrap();
        assert_eq!(config.region, None);
        assert_eq!(config.region(), None);
    }

    #[test]
    fn test_into_settings() {
        let settings = RemoteConfig::default().into_settings(Some("secret".to_string()));
        assert_eq!(settings.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(settings.api_key.as_deref(), Some("secret"));
        assert_eq!(settings.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_resolve_api_key_from_named_variable() {
        let config = RemoteConfig {
            api_key_env: "PICO_PLACA_TEST_UNSET_KEY".to_string(),
            ..RemoteConfig::default()
        };
        assert_eq!(config.resolve_api_key(), None);

        let config = RemoteConfig {
            api_key_env: "PATH".to_string(),
            ..RemoteConfig::default()
        };
        assert!(config.resolve_api_key().is_some());
    }
}
