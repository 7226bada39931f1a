//! Synthetic signal generation and anomaly detection.
//!
//! This is the numeric core of the service: reproducible Gaussian noise
//! series, centered moving-average smoothing, derived-quantity synthesis
//! (power factor, energy consumption, raw voltage) and oscillation
//! detection. Everything here is synchronous, CPU-bound and free of I/O;
//! persistence happens behind the `ReadingSink` boundary in the service
//! layer.

pub mod noise;
pub mod oscillation;
pub mod reading;
pub mod smoothing;
pub mod synth;

pub use noise::generate_noise;
pub use oscillation::{detect_oscillations, OscillationEvent};
pub use reading::{assemble_readings, ReadingMetadata, SensorReading};
pub use smoothing::smooth;
pub use synth::{
    synthesize_consumption, synthesize_power_factor, synthesize_voltage_with_oscillations,
    VoltageSynthesis,
};

/// Errors produced by the signal core.
///
/// `InvalidParameter` carries the offending parameter by name so callers can
/// surface a structured message instead of silently truncating input.
#[derive(Debug, thiserror::Error)]
pub enum SignalError {
    #[error("invalid parameter `{name}`: got {value}, expected a positive value")]
    InvalidParameter { name: &'static str, value: i64 },

    #[error("computation produced out-of-range value {value} at sample {index}")]
    Computation { index: usize, value: f64 },
}

impl SignalError {
    pub(crate) fn invalid(name: &'static str, value: i64) -> Self {
        Self::InvalidParameter { name, value }
    }
}
