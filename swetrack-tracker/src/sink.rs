//! Delivery seam for normalized location reports.

use async_trait::async_trait;
use tokio::sync::broadcast;

use crate::Result;
use crate::mapper::LocationReport;

/// Broadcast channel capacity for location reports.
const REPORT_BROADCAST_CAPACITY: usize = 64;

/// Host-provided callback that records a device's current location.
///
/// This is the integration's only output. A delivery failure aborts the
/// current cycle; the next cycle is scheduled regardless.
#[async_trait]
pub trait LocationSink: Send + Sync + 'static {
    /// Deliver one report.
    async fn publish(&self, report: LocationReport) -> Result<()>;
}

/// A sink that fans reports out over a tokio broadcast channel.
///
/// Lets hosts and tests consume reports as an event stream without
/// implementing their own sink.
#[derive(Clone)]
pub struct BroadcastSink {
    tx: broadcast::Sender<LocationReport>,
}

impl BroadcastSink {
    pub fn new() -> Self {
        Self::with_capacity(REPORT_BROADCAST_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Subscribe to reports delivered after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<LocationReport> {
        self.tx.subscribe()
    }
}

impl Default for BroadcastSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LocationSink for BroadcastSink {
    async fn publish(&self, report: LocationReport) -> Result<()> {
        // Having no subscribers is not a delivery failure.
        let _ = self.tx.send(report);
        Ok(())
    }
}
