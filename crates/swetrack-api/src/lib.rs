//! Collaborator interface for the SweTrack tracking service.
//!
//! This crate defines the boundary between the location integration and the
//! remote tracking service: the device record schema returned by the
//! account's device listing, the account credentials, and the [`TrackerApi`]
//! client trait. The wire protocol itself lives behind the trait; production
//! hosts plug in their client implementation, tests use recording fakes.

pub mod client;
pub mod error;
pub mod record;

pub use client::{Credentials, TrackerApi};
pub use error::ApiError;
pub use record::RawDeviceRecord;
