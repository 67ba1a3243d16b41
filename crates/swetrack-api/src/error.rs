use thiserror::Error;

/// Errors surfaced by a tracking-service client.
///
/// Any of these aborts exactly one poll cycle; the next cycle is scheduled
/// regardless.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("authentication failed: {0}")]
    Auth(String),
    #[error("connection failed: {0}")]
    Connection(String),
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("{0}")]
    Other(String),
}
