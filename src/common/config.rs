//! Configuration file handling
//!
//! The base URL, proxy, timeout, and test-account credentials live in a
//! TOML file rather than in the scenarios themselves, so one binary can
//! target any deployment.

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::paths::config_path;
use super::Result;

/// Main configuration structure
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Base URL of the API under test
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Optional forwarding proxy applied to every request
    #[serde(default)]
    pub proxy: Option<String>,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Test account used by scenarios that authenticate
    #[serde(default)]
    pub credentials: Credentials,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            proxy: None,
            timeout_secs: default_timeout(),
            credentials: Credentials::default(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_timeout() -> u64 {
    30
}

/// Credentials for the test account
///
/// Also serves as the login request payload, so the wire names match the
/// struct fields directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(default = "default_email")]
    pub email: String,
    #[serde(default = "default_password")]
    pub password: String,
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            email: default_email(),
            password: default_password(),
        }
    }
}

fn default_email() -> String {
    "testuser@example.com".to_string()
}

fn default_password() -> String {
    "TestPassword123!".to_string()
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must exist and parse. Without one, the platform
    /// config location is consulted and a missing file yields defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::read(path),
            None => match config_path() {
                Some(path) if path.exists() => Self::read(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| super::Error::FileRead {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| super::Error::ConfigParse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.base_url, "http://localhost:5000");
        assert_eq!(config.timeout_secs, 30);
        assert!(config.proxy.is_none());
        assert_eq!(config.credentials.email, "testuser@example.com");
        assert_eq!(config.credentials.password, "TestPassword123!");
    }

    #[test]
    fn test_parse_full_config() {
        let config: Config = toml::from_str(
            r#"
            base_url = "https://staging.example.net"
            proxy = "http://127.0.0.1:1080"
            timeout_secs = 10

            [credentials]
            email = "qa@example.net"
            password = "hunter2"
            "#,
        )
        .unwrap();

        assert_eq!(config.base_url, "https://staging.example.net");
        assert_eq!(config.proxy.as_deref(), Some("http://127.0.0.1:1080"));
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.credentials.email, "qa@example.net");
        assert_eq!(config.credentials.password, "hunter2");
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = toml::from_str(r#"base_url = "http://10.0.0.5:5000""#).unwrap();
        assert_eq!(config.base_url, "http://10.0.0.5:5000");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.credentials.email, "testuser@example.com");
    }

    #[test]
    fn test_load_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "timeout_secs = 5").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_load_missing_explicit_path_fails() {
        let result = Config::load(Some(Path::new("/nonexistent/smoketest.toml")));
        assert!(matches!(result, Err(crate::common::Error::FileRead { .. })));
    }

    #[test]
    fn test_invalid_toml_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "base_url = [not toml").unwrap();

        let result = Config::load(Some(file.path()));
        assert!(matches!(result, Err(crate::common::Error::ConfigParse(_))));
    }
}
