//! Minimal poller example against an in-memory fixture client.
//!
//! Run:
//!   cargo run -p swetrack-tracker --example poll_fixture
//!
//! Wires a fixture `TrackerApi` and a `BroadcastSink` into the poller and
//! prints each report as it arrives. Stops after the second cycle.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::info;

use swetrack_tracker::{
    ApiError, BroadcastSink, Poller, RawDeviceRecord, TrackerApi,
};

struct FixtureApi;

#[async_trait]
impl TrackerApi for FixtureApi {
    async fn list_devices(&self) -> Result<Vec<RawDeviceRecord>, ApiError> {
        Ok(vec![
            RawDeviceRecord {
                uniqueid: Some("356938035643809".to_string()),
                name: Some("Car 1".to_string()),
                latitude: Some(59.3293),
                longitude: Some(18.0686),
                lastupdate: Some("2019-04-02 10:21:00".to_string()),
                battery: Some(87.0),
                ..Default::default()
            },
            RawDeviceRecord {
                uniqueid: Some("356938035643810".to_string()),
                name: Some("Släp 2".to_string()),
                latitude: Some(57.7089),
                longitude: Some(11.9746),
                ..Default::default()
            },
        ])
    }
}

#[tokio::main]
async fn main() -> swetrack_tracker::Result<()> {
    swetrack_tracker::logging::init()?;

    let sink = Arc::new(BroadcastSink::new());
    let mut rx = sink.subscribe();

    let poller = Poller::with_interval(Duration::from_secs(2), Arc::new(FixtureApi), sink);
    let handle = poller.spawn();

    for _ in 0..4 {
        let report = rx.recv().await.expect("poller dropped the sink");
        info!(
            "{} at ({}, {}): battery {}",
            report.device_key,
            report.latitude,
            report.longitude,
            report.attributes["battery"]
        );
    }

    handle.stop();
    handle.join().await
}
