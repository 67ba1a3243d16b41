//! Integration configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use swetrack_api::Credentials;

use crate::{Error, Result};

/// Default polling interval in seconds.
pub const DEFAULT_SCAN_INTERVAL_SECS: u64 = 300;

/// Configuration for one tracked account.
///
/// Deserializable so host platforms can embed it in their own configuration
/// layer. Call [`TrackerConfig::validate`] before starting the poller;
/// invalid setup input is fatal and nothing gets scheduled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Account username (email).
    pub username: String,
    /// Account password.
    pub password: String,
    /// Polling interval in seconds.
    #[serde(default = "default_scan_interval_secs")]
    pub scan_interval_secs: u64,
}

fn default_scan_interval_secs() -> u64 {
    DEFAULT_SCAN_INTERVAL_SECS
}

impl TrackerConfig {
    /// Create a configuration with the default polling interval.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            scan_interval_secs: DEFAULT_SCAN_INTERVAL_SECS,
        }
    }

    /// Validate setup input.
    pub fn validate(&self) -> Result<()> {
        if self.username.trim().is_empty() {
            return Err(Error::config("username must not be empty"));
        }
        if self.password.is_empty() {
            return Err(Error::config("password must not be empty"));
        }
        if self.scan_interval_secs == 0 {
            return Err(Error::config("scan_interval must be a positive duration"));
        }
        Ok(())
    }

    /// The polling interval.
    pub fn scan_interval(&self) -> Duration {
        Duration::from_secs(self.scan_interval_secs)
    }

    /// Build the API-client credentials for this account.
    pub fn credentials(&self) -> Credentials {
        Credentials::new(&self.username, &self.password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scan_interval() {
        let config = TrackerConfig::new("user@example.com", "secret");
        assert_eq!(config.scan_interval(), Duration::from_secs(300));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_serde_default_applies_when_interval_missing() {
        let config: TrackerConfig =
            serde_json::from_str(r#"{"username": "user@example.com", "password": "secret"}"#)
                .unwrap();
        assert_eq!(config.scan_interval_secs, DEFAULT_SCAN_INTERVAL_SECS);
    }

    #[test]
    fn test_credentials_carry_the_account() {
        let config = TrackerConfig::new("user@example.com", "secret");
        let creds = config.credentials();
        assert_eq!(creds.username(), "user@example.com");
        assert_eq!(creds.password(), "secret");
    }

    #[test]
    fn test_rejects_zero_interval() {
        let mut config = TrackerConfig::new("user@example.com", "secret");
        config.scan_interval_secs = 0;
        assert!(matches!(
            config.validate(),
            Err(Error::Configuration(_))
        ));
    }

    #[test]
    fn test_rejects_empty_credentials() {
        assert!(TrackerConfig::new("", "secret").validate().is_err());
        assert!(TrackerConfig::new("   ", "secret").validate().is_err());
        assert!(TrackerConfig::new("user@example.com", "").validate().is_err());
    }
}
