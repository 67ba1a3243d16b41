//! Self-rescheduling poll loop for device location updates.
//!
//! The poller owns the recurring fetch-map-report contract: one cycle runs
//! inline at startup, and after every cycle — success or failure — the next
//! wake-up is armed at `now + interval` on the tokio clock. Exactly one
//! cycle is ever in flight; a slow cycle delays the next one instead of
//! overlapping it, and a failed cycle is logged without stopping the loop.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use swetrack_api::TrackerApi;

use crate::config::TrackerConfig;
use crate::mapper::map_device;
use crate::sink::LocationSink;
use crate::{Error, Result};

/// Outcome of one fetch-and-report cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleSummary {
    /// Reports delivered to the sink.
    pub delivered: usize,
    /// Records skipped because a required field was missing.
    pub skipped: usize,
}

/// The device-location poller.
///
/// Owns the API-client handle and the sink for its whole lifetime; cycles
/// never overlap, so neither is ever shared across concurrent work.
pub struct Poller<A, S> {
    api: Arc<A>,
    sink: Arc<S>,
    interval: Duration,
    cancellation_token: CancellationToken,
}

impl<A: TrackerApi, S: LocationSink> Poller<A, S> {
    /// Create a poller from validated configuration.
    ///
    /// Fails with [`Error::Configuration`] if the config does not validate;
    /// nothing is scheduled in that case.
    pub fn new(config: &TrackerConfig, api: Arc<A>, sink: Arc<S>) -> Result<Self> {
        config.validate()?;
        info!("polling interval: {:?}", config.scan_interval());
        Ok(Self::with_interval(config.scan_interval(), api, sink))
    }

    /// Create a poller with an explicit interval.
    ///
    /// The interval must be positive; [`Poller::new`] enforces this via
    /// config validation.
    pub fn with_interval(interval: Duration, api: Arc<A>, sink: Arc<S>) -> Self {
        Self {
            api,
            sink,
            interval,
            cancellation_token: CancellationToken::new(),
        }
    }

    /// Token that stops the loop when cancelled.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancellation_token.clone()
    }

    /// Run the poll loop until cancelled.
    ///
    /// The first cycle runs inline before any timer is armed, so initial
    /// state does not wait a full interval. Cancellation stops future
    /// cycles; an in-flight cycle is not interrupted.
    pub async fn run(self) {
        info!("poller starting");
        loop {
            match run_cycle(self.api.as_ref(), self.sink.as_ref()).await {
                Ok(summary) => {
                    debug!(
                        "cycle complete: {} delivered, {} skipped",
                        summary.delivered, summary.skipped
                    );
                }
                Err(e) => warn!("update cycle failed: {e}"),
            }

            // Re-arm relative to cycle completion, on the monotonic clock.
            let next_cycle = Instant::now() + self.interval;
            tokio::select! {
                _ = self.cancellation_token.cancelled() => {
                    info!("poller stopped");
                    break;
                }
                _ = tokio::time::sleep_until(next_cycle) => {}
            }
        }
    }

    /// Hand the loop to the runtime and return a handle to it.
    ///
    /// Keep the handle: a loop that ends without being cancelled has
    /// silently stopped all future updates, and [`PollerHandle::join`]
    /// surfaces that as [`Error::Scheduling`].
    pub fn spawn(self) -> PollerHandle {
        let token = self.cancellation_token.clone();
        let task = tokio::spawn(self.run());
        PollerHandle { task, token }
    }
}

/// Handle to a spawned poller.
pub struct PollerHandle {
    task: JoinHandle<()>,
    token: CancellationToken,
}

impl PollerHandle {
    /// Stop scheduling future cycles. An in-flight cycle is not interrupted.
    pub fn stop(&self) {
        self.token.cancel();
    }

    /// Wait for the loop to finish.
    ///
    /// Returns [`Error::Scheduling`] if the loop died without being
    /// cancelled (runtime teardown or a panic inside the task).
    pub async fn join(self) -> Result<()> {
        match self.task.await {
            Ok(()) if self.token.is_cancelled() => Ok(()),
            Ok(()) => Err(Error::Scheduling(
                "poll loop exited without cancellation".to_string(),
            )),
            Err(e) => Err(Error::Scheduling(format!("poll task failed: {e}"))),
        }
    }
}

/// One fetch-and-report pass.
///
/// Makes exactly one listing call; on fetch failure the sink is never
/// invoked. Each well-formed record is delivered in listing order; a record
/// missing a required field is skipped and logged so it does not block the
/// rest of the listing.
pub async fn run_cycle<A: TrackerApi, S: LocationSink>(api: &A, sink: &S) -> Result<CycleSummary> {
    debug!("updating device info");
    let devices = api.list_devices().await?;
    debug!("found {} devices", devices.len());

    let captured_at = Utc::now();
    let mut summary = CycleSummary {
        delivered: 0,
        skipped: 0,
    };
    for record in &devices {
        match map_device(record, captured_at) {
            Ok(report) => {
                sink.publish(report).await?;
                summary.delivered += 1;
            }
            Err(e) => {
                warn!("skipping device record: {e}");
                summary.skipped += 1;
            }
        }
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use swetrack_api::{ApiError, RawDeviceRecord};

    use super::*;
    use crate::mapper::LocationReport;

    struct FixedApi {
        records: Vec<RawDeviceRecord>,
    }

    #[async_trait]
    impl TrackerApi for FixedApi {
        async fn list_devices(&self) -> std::result::Result<Vec<RawDeviceRecord>, ApiError> {
            Ok(self.records.clone())
        }
    }

    struct FailingApi;

    #[async_trait]
    impl TrackerApi for FailingApi {
        async fn list_devices(&self) -> std::result::Result<Vec<RawDeviceRecord>, ApiError> {
            Err(ApiError::Connection("connection refused".to_string()))
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        reports: Mutex<Vec<LocationReport>>,
    }

    #[async_trait]
    impl LocationSink for RecordingSink {
        async fn publish(&self, report: LocationReport) -> Result<()> {
            self.reports.lock().unwrap().push(report);
            Ok(())
        }
    }

    fn record(uniqueid: &str, name: &str) -> RawDeviceRecord {
        RawDeviceRecord {
            uniqueid: Some(uniqueid.to_string()),
            name: Some(name.to_string()),
            latitude: Some(59.0),
            longitude: Some(18.0),
            ..Default::default()
        }
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = TrackerConfig::new("", "secret");
        let result = Poller::new(&config, Arc::new(FailingApi), Arc::new(RecordingSink::default()));
        assert!(matches!(result, Err(Error::Configuration(_))));

        let config = TrackerConfig::new("user@example.com", "secret");
        let result = Poller::new(&config, Arc::new(FailingApi), Arc::new(RecordingSink::default()));
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_cycle_delivers_all_records_in_order() {
        let api = FixedApi {
            records: vec![record("1", "Car 1"), record("2", "Car 2")],
        };
        let sink = RecordingSink::default();

        let summary = run_cycle(&api, &sink).await.unwrap();
        assert_eq!(summary.delivered, 2);
        assert_eq!(summary.skipped, 0);

        let reports = sink.reports.lock().unwrap();
        let keys: Vec<&str> = reports.iter().map(|r| r.device_key.as_str()).collect();
        assert_eq!(keys, vec!["car_1", "car_2"]);
    }

    #[tokio::test]
    async fn test_cycle_skips_malformed_record() {
        let mut bad = record("3", "Car 3");
        bad.latitude = None;
        let api = FixedApi {
            records: vec![
                record("1", "Car 1"),
                bad,
                record("2", "Car 2"),
                record("4", "Car 4"),
            ],
        };
        let sink = RecordingSink::default();

        let summary = run_cycle(&api, &sink).await.unwrap();
        assert_eq!(summary.delivered, 3);
        assert_eq!(summary.skipped, 1);
        assert_eq!(sink.reports.lock().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_failed_fetch_never_touches_the_sink() {
        let sink = RecordingSink::default();

        let err = run_cycle(&FailingApi, &sink).await.unwrap_err();
        assert!(matches!(err, Error::Fetch(_)));
        assert!(sink.reports.lock().unwrap().is_empty());
    }
}
