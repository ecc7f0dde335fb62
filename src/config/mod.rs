//! Configuration loading for the Pico y Placa predictor.
//!
//! This module loads the YAML configuration file (region and remote holiday
//! service settings) and builds the holiday source from it.
//!
//! # Example
//!
//! ```no_run
//! use pico_placa::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/pico_placa.yaml").unwrap();
//! println!("Holidays endpoint: {}", loader.config().remote.endpoint);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DEFAULT_API_KEY_ENV, DEFAULT_ENDPOINT, PredictorConfig, RemoteConfig};
