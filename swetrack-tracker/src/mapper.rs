//! Mapping from raw device records to location reports.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde_json::{Value, json};

use swetrack_api::RawDeviceRecord;

use crate::slug::slugify;
use crate::{Error, Result};

/// A normalized location report for one device.
///
/// Produced fresh each cycle and handed to the location sink; reports are
/// not retained or diffed across cycles.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationReport {
    /// Stable join key the host uses to correlate reports across cycles.
    pub device_key: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Attribute mapping forwarded to the host as-is.
    pub attributes: HashMap<String, Value>,
}

/// Map one raw record into a location report.
///
/// `captured_at` becomes the report's `last_updated` attribute; it is
/// threaded in by the cycle so the mapping stays deterministic for a fixed
/// timestamp. The device key is the slug of the record's name, falling back
/// to the IMEI when the name is absent or has no usable characters. A record
/// missing its IMEI or coordinates fails alone with
/// [`Error::MalformedRecord`].
pub fn map_device(
    record: &RawDeviceRecord,
    captured_at: DateTime<Utc>,
) -> Result<LocationReport> {
    let uniqueid = record
        .uniqueid
        .as_deref()
        .ok_or_else(|| malformed(record, "uniqueid"))?;
    let latitude = record
        .latitude
        .ok_or_else(|| malformed(record, "latitude"))?;
    let longitude = record
        .longitude
        .ok_or_else(|| malformed(record, "longitude"))?;

    let device_key = match record.name.as_deref().map(slugify) {
        Some(slug) if !slug.is_empty() => slug,
        _ => uniqueid.to_string(),
    };

    // Photo links come over the wire without a scheme.
    let entity_picture = record
        .photo_link
        .as_deref()
        .map(|link| format!("https://{link}"));

    let mut attributes = HashMap::with_capacity(14);
    attributes.insert("last_connected".into(), json!(record.lastupdate));
    attributes.insert("last_updated".into(), json!(captured_at));
    attributes.insert("friendly_name".into(), json!(record.name));
    attributes.insert("entity_picture".into(), json!(entity_picture));
    attributes.insert("id".into(), json!(record.id));
    attributes.insert("IMEI".into(), json!(uniqueid));
    attributes.insert("contact".into(), json!(record.contact));
    attributes.insert("phone".into(), json!(record.phone));
    attributes.insert("address".into(), json!(record.address));
    attributes.insert("category".into(), json!(record.category));
    attributes.insert("status".into(), json!(record.status));
    attributes.insert("speed".into(), json!(record.speed));
    attributes.insert("speed_limit".into(), json!(record.speed_limit));
    attributes.insert("battery".into(), json!(record.battery));

    Ok(LocationReport {
        device_key,
        latitude,
        longitude,
        attributes,
    })
}

fn malformed(record: &RawDeviceRecord, field: &'static str) -> Error {
    let device = record
        .uniqueid
        .clone()
        .or_else(|| record.name.clone())
        .unwrap_or_else(|| "<unknown>".to_string());
    Error::MalformedRecord { device, field }
}
