//! Client seam for the tracking service.

use std::fmt;

use async_trait::async_trait;

use crate::error::ApiError;
use crate::record::RawDeviceRecord;

/// Account credentials for the tracking service.
///
/// Supplied once at construction and owned by the client handle for its
/// whole lifetime.
#[derive(Clone)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Client for the tracking service's device listing.
///
/// This trait abstracts the remote API so the poller can run against any
/// client implementation without coupling to a wire protocol.
#[async_trait]
pub trait TrackerApi: Send + Sync + 'static {
    /// Fetch the current list of devices for the account.
    ///
    /// Called once per poll cycle. The returned order is whatever the
    /// service reports and is preserved downstream.
    async fn list_devices(&self) -> Result<Vec<RawDeviceRecord>, ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_password() {
        let creds = Credentials::new("user@example.com", "hunter2");
        let debug = format!("{creds:?}");
        assert!(debug.contains("user@example.com"));
        assert!(!debug.contains("hunter2"));
    }
}
