//! Device records returned by the account's device listing.

use serde::{Deserialize, Serialize};

/// One device entry from the account's device listing.
///
/// Field names follow the wire format of the listing endpoint; the ones
/// that are not idiomatic Rust (`PhotoLink`, `speedLimit`, `Battery`) are
/// mapped with serde renames. Every field is optional at the
/// deserialization boundary — the mapper enforces which fields a report
/// actually requires, so one short record cannot fail the whole listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawDeviceRecord {
    /// Device IMEI, the stable hardware identifier.
    #[serde(default)]
    pub uniqueid: Option<String>,
    /// Human-readable device name as configured in the account.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    /// Device photo location, host part only (no scheme).
    #[serde(rename = "PhotoLink", default)]
    pub photo_link: Option<String>,
    /// Last time the device reported in, as formatted by the service.
    #[serde(default)]
    pub lastupdate: Option<String>,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub speed: Option<f64>,
    #[serde(rename = "speedLimit", default)]
    pub speed_limit: Option<f64>,
    #[serde(rename = "Battery", default)]
    pub battery: Option<f64>,
    /// Service-side numeric id of the device row.
    #[serde(default)]
    pub id: Option<i64>,
}
