//! Integration-wide error types.

use thiserror::Error;

use swetrack_api::ApiError;

/// Integration-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Integration-wide error type.
///
/// Only `Configuration` propagates to the component's owner; everything a
/// cycle can raise is caught and logged at the cycle boundary.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid or missing setup input. Fatal: the component does not start.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The device listing call failed. Aborts the current cycle only.
    #[error("Fetch error: {0}")]
    Fetch(#[from] ApiError),

    /// A single record lacks a field required for reporting.
    #[error("Malformed record {device}: missing {field}")]
    MalformedRecord {
        device: String,
        field: &'static str,
    },

    /// Report delivery to the host sink failed. Aborts the current cycle.
    #[error("Sink error: {0}")]
    Sink(String),

    /// The poll loop can no longer arm its timer. Fatal to the poller.
    #[error("Scheduling error: {0}")]
    Scheduling(String),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn sink(msg: impl Into<String>) -> Self {
        Self::Sink(msg.into())
    }
}
