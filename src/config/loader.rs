//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the predictor
//! configuration from a YAML file and wiring the holiday source from it.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{PredictorError, PredictorResult};
use crate::holidays::{HolidayCalculator, HolidaySource, RemoteHolidayClient};
use crate::restriction::RestrictionPredictor;

use super::types::PredictorConfig;

/// Loads and provides access to the predictor configuration.
///
/// # Example
///
/// ```no_run
/// use pico_placa::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/pico_placa.yaml")?;
/// println!("Region: {:?}", loader.config().region());
/// # Ok::<(), pico_placa::error::PredictorError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PredictorConfig,
}

impl ConfigLoader {
    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`PredictorError::ConfigNotFound`] if the file cannot be read
    /// and [`PredictorError::ConfigParseError`] if it is not a valid
    /// configuration.
    pub fn load<P: AsRef<Path>>(path: P) -> PredictorResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PredictorError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config = serde_yaml::from_str(&content).map_err(|e| {
            PredictorError::ConfigParseError {
                path: path_str.clone(),
                message: e.to_string(),
            }
        })?;

        debug!(path = %path_str, "Loaded configuration");
        Ok(Self { config })
    }

    /// Returns a loader holding the built-in configuration.
    pub fn defaults() -> Self {
        Self {
            config: PredictorConfig::default(),
        }
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &PredictorConfig {
        &self.config
    }

    /// Builds the local holiday calculator for the configured region.
    pub fn calculator(&self) -> HolidayCalculator {
        HolidayCalculator::new(self.config.region())
    }

    /// Builds a holiday source with both the local calculator and the
    /// remote client.
    ///
    /// The API key is read from the environment here, once.
    ///
    /// # Errors
    ///
    /// Returns [`PredictorError::Network`] if the HTTP client cannot be
    /// initialised.
    pub fn holiday_source(&self) -> PredictorResult<HolidaySource> {
        let remote = self.config.remote.clone();
        let api_key = remote.resolve_api_key();
        if api_key.is_none() {
            debug!(variable = %remote.api_key_env, "No holiday API key in environment");
        }

        let client = RemoteHolidayClient::new(remote.into_settings(api_key))?;
        Ok(HolidaySource::with_remote(self.calculator(), client))
    }

    /// Builds a predictor backed by [`ConfigLoader::holiday_source`].
    ///
    /// # Errors
    ///
    /// See [`ConfigLoader::holiday_source`].
    pub fn predictor(&self) -> PredictorResult<RestrictionPredictor> {
        Ok(RestrictionPredictor::new(self.holiday_source()?))
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Region;
    use std::time::Duration;

    fn config_path() -> &'static str {
        "./config/pico_placa.yaml"
    }

    fn write_temp(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("pico_placa_{}_{name}", std::process::id()));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_shipped_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.config().region(), Some(Region::Pichincha));
        assert_eq!(loader.config().remote.country, "EC");
        assert_eq!(loader.config().remote.timeout_secs, 10);
    }

    #[test]
    fn test_missing_file() {
        let result = ConfigLoader::load("./config/does_not_exist.yaml");
        match result {
            Err(PredictorError::ConfigNotFound { path }) => {
                assert!(path.contains("does_not_exist.yaml"));
            }
            other => panic!("Expected ConfigNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_yaml() {
        let path = write_temp("invalid.yaml", "remote:\n  timeout_secs: soon\n");
        let result = ConfigLoader::load(&path);
        fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(PredictorError::ConfigParseError { .. })));
    }

    #[test]
    fn test_national_only_configuration() {
        let path = write_temp("national.yaml", "region: null\n");
        let loader = ConfigLoader::load(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(loader.calculator().region(), None);
    }

    #[test]
    fn test_holiday_source_has_remote_client() {
        let source = ConfigLoader::defaults().holiday_source().unwrap();
        assert!(source.has_remote());
        assert_eq!(source.calculator().region(), Some(Region::Pichincha));
    }

    #[test]
    fn test_remote_settings_follow_configuration() {
        let path = write_temp(
            "remote.yaml",
            "remote:\n  endpoint: http://127.0.0.1:9/holidays\n  timeout_secs: 2\n  max_retries: 1\n",
        );
        let loader = ConfigLoader::load(&path).unwrap();
        fs::remove_file(&path).unwrap();

        let settings = loader.config().remote.clone().into_settings(None);
        assert_eq!(settings.endpoint, "http://127.0.0.1:9/holidays");
        assert_eq!(settings.timeout, Duration::from_secs(2));
        assert_eq!(settings.max_retries, 1);
    }
}
