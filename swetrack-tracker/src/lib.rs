//! Device-location polling integration for the SweTrack tracking service.
//!
//! Polls the account's device listing on a timer and forwards each device's
//! position and metadata to a host-provided location sink. The wire protocol
//! and the host's entity model stay behind the [`TrackerApi`] and
//! [`LocationSink`] seams; this crate owns the polling cadence, the record
//! mapping, and the guarantee that a failed cycle never stops future cycles.

pub mod config;
pub mod error;
pub mod logging;
pub mod mapper;
pub mod poller;
pub mod sink;
pub mod slug;

pub use config::{DEFAULT_SCAN_INTERVAL_SECS, TrackerConfig};
pub use error::{Error, Result};
pub use mapper::{LocationReport, map_device};
pub use poller::{CycleSummary, Poller, PollerHandle, run_cycle};
pub use sink::{BroadcastSink, LocationSink};
pub use slug::slugify;

pub use swetrack_api::{ApiError, Credentials, RawDeviceRecord, TrackerApi};
