//! Reading assembly: scalar series + metadata + timeline -> value objects.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

/// Fixed metadata stamped onto every reading of a batch.
#[derive(Debug, Clone)]
pub struct ReadingMetadata {
    pub sensor_model: &'static str,
    pub measure_unit: &'static str,
    pub device: &'static str,
    pub location: &'static str,
    pub data_type: &'static str,
}

/// Immutable telemetry value object.
///
/// Deliberately not an ORM model: the persistence sink owns the mapping to
/// the `sensor_records` entity, so the core stays free of database types.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensorReading {
    pub sensor_model: String,
    pub measure_unit: String,
    pub device: String,
    pub location: String,
    pub data_type: String,
    pub value: f64,
    pub timestamp: DateTime<Utc>,
}

/// Pairs value `i` with `start + i * step`, producing one reading per value.
///
/// Pure and validation-free: value ranges are the synthesizer's
/// responsibility, the timeline is strictly increasing by construction.
pub fn assemble_readings(
    values: &[f64],
    metadata: &ReadingMetadata,
    start: DateTime<Utc>,
    step: Duration,
) -> Vec<SensorReading> {
    values
        .iter()
        .enumerate()
        .map(|(i, &value)| SensorReading {
            sensor_model: metadata.sensor_model.to_owned(),
            measure_unit: metadata.measure_unit.to_owned(),
            device: metadata.device.to_owned(),
            location: metadata.location.to_owned(),
            data_type: metadata.data_type.to_owned(),
            value,
            timestamp: start + step * i as i32,
        })
        .collect()
}
