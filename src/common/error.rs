//! Error types for the smoke-test CLI
//!
//! Failure messages name the endpoint or field that violated an
//! expectation so a failing scenario is diagnosable from the summary
//! alone.

use std::io;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the smoke-test CLI
#[derive(Error, Debug)]
pub enum Error {
    // === Transport Errors ===
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    // === Response Errors ===
    #[error("{endpoint}: expected status {expected}, got {actual}")]
    UnexpectedStatus {
        endpoint: String,
        expected: String,
        actual: u16,
    },

    #[error("{endpoint}: response body is not valid JSON: {source}")]
    InvalidBody {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Response is missing field '{0}'")]
    MissingField(String),

    #[error("Field '{field}': expected {expected}, got {actual}")]
    FieldMismatch {
        field: String,
        expected: String,
        actual: String,
    },

    #[error("Assertion failed: {0}")]
    Assertion(String),

    // === Scenario Errors ===
    #[error("Unknown scenario '{0}'. Use 'smoketest list' to see available scenarios")]
    UnknownScenario(String),

    #[error("{failed} of {total} scenarios failed")]
    ScenariosFailed { failed: usize, total: usize },

    // === Configuration Errors ===
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration file: {0}")]
    ConfigParse(String),

    #[error("Failed to read file '{path}': {error}")]
    FileRead { path: String, error: String },

    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    // === Serialization Errors ===
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a transport error tagged with the request URL
    pub fn transport(url: &str, source: reqwest::Error) -> Self {
        Self::Transport {
            url: url.to_string(),
            source,
        }
    }

    /// Create an unexpected status error
    pub fn unexpected_status(endpoint: &str, expected: &str, actual: reqwest::StatusCode) -> Self {
        Self::UnexpectedStatus {
            endpoint: endpoint.to_string(),
            expected: expected.to_string(),
            actual: actual.as_u16(),
        }
    }

    /// Create a field mismatch error from the expected and observed values
    pub fn field_mismatch(
        field: &str,
        expected: &serde_json::Value,
        actual: &serde_json::Value,
    ) -> Self {
        Self::FieldMismatch {
            field: field.to_string(),
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }
}
