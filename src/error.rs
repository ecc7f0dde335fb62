//! Error types for the Pico y Placa predictor.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while validating input, looking
//! up holidays and loading configuration.

use std::time::Duration;

use thiserror::Error;

/// The main error type for the Pico y Placa predictor.
///
/// Every fallible operation in the crate returns this error type, so callers
/// handle validation, remote lookup and configuration failures uniformly.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use pico_placa::error::PredictorError;
///
/// let error = PredictorError::Timeout { timeout: Duration::from_secs(10) };
/// assert_eq!(error.to_string(), "Holiday lookup timed out after 10s");
/// ```
#[derive(Debug, Error)]
pub enum PredictorError {
    /// A plate, date or time string did not match its expected format.
    #[error("Invalid {field} '{value}': expected {expected}")]
    InvalidFormat {
        /// The name of the rejected field (e.g. "plate").
        field: &'static str,
        /// The rejected input.
        value: String,
        /// A description of the accepted format.
        expected: &'static str,
    },

    /// The remote holiday API rejected the request credential.
    #[error("Holiday API authentication failed: {message}")]
    Authentication {
        /// A description of the rejection.
        message: String,
    },

    /// The remote holiday API could not be reached.
    #[error("Holiday API request failed: {message}")]
    Network {
        /// A description of the transport failure.
        message: String,
    },

    /// The remote holiday API did not answer within the configured timeout.
    #[error("Holiday lookup timed out after {timeout:?}")]
    Timeout {
        /// The configured request timeout.
        timeout: Duration,
    },

    /// The remote holiday API answered with a status or body we cannot use.
    #[error("Unexpected holiday API response (status {status}): {message}")]
    UnexpectedResponse {
        /// The HTTP status code of the response.
        status: u16,
        /// A description of what was wrong with the response.
        message: String,
    },

    /// A remote lookup was requested from a source without a remote client.
    #[error("Remote holiday lookup requested but no remote client is configured")]
    RemoteUnavailable,

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl PredictorError {
    /// Returns true for transport-level failures that may succeed on retry.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::Timeout { .. })
    }
}

/// A type alias for Results that return PredictorError.
pub type PredictorResult<T> = Result<T, PredictorError>;
