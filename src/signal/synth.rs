//! Derived-quantity synthesizers.
//!
//! Three variants share the noise -> smooth -> assemble plumbing:
//! minute-resolution power factor, minute-resolution energy consumption and
//! decisecond-resolution raw voltage with oscillation detection. Given the
//! same seed and parameters each synthesizer is fully deterministic.

use chrono::{DateTime, Duration, Utc};

use super::noise::generate_noise;
use super::oscillation::{detect_oscillations, OscillationEvent};
use super::reading::{assemble_readings, ReadingMetadata, SensorReading};
use super::smoothing::{derive_window, smooth};
use super::SignalError;

/// Seed used when a request does not pin one explicitly.
pub const DEFAULT_SEED: u64 = 42;

/// Default threshold (in volts) for the oscillation detector.
pub const DEFAULT_OSCILLATION_THRESHOLD: f64 = 5.0;

const MINUTES_PER_DAY: usize = 24 * 60;
const SAMPLES_PER_SECOND: usize = 10;

const POWER_FACTOR_METADATA: ReadingMetadata = ReadingMetadata {
    sensor_model: "Fluke 1735",
    measure_unit: "kW",
    device: "panel-01",
    location: "Building A - Floor 1",
    data_type: "Power Factor",
};

const CONSUMPTION_METADATA: ReadingMetadata = ReadingMetadata {
    sensor_model: "Shelly EM",
    measure_unit: "kWh",
    device: "panel-01",
    location: "Building A - Floor 1",
    data_type: "Energy Consumption",
};

const VOLTAGE_METADATA: ReadingMetadata = ReadingMetadata {
    sensor_model: "Fluke 1735",
    measure_unit: "V",
    device: "panel-01",
    location: "Building A - Floor 1",
    data_type: "Voltage",
};

/// Result of the voltage variant: the assembled batch plus the oscillations
/// flagged before assembly.
#[derive(Debug)]
pub struct VoltageSynthesis {
    pub readings: Vec<SensorReading>,
    pub events: Vec<OscillationEvent>,
}

fn round5(value: f64) -> f64 {
    (value * 100_000.0).round() / 100_000.0
}

/// Synthesizes one minute-resolution power-factor reading per minute over
/// `days` days.
///
/// Voltage is drawn from N(220, 5), current from N(10, 2) and the phase
/// angle from N(23.07°, 40°); each series is smoothed with the window
/// derived from the sample count. The power factor is the ratio of active
/// to apparent power, `v·i·cos(θ) / v·i`, which algebraically reduces to
/// `cos(θ)`; computing the full ratio keeps the `[-1, 1]` range check
/// meaningful against numeric error.
pub fn synthesize_power_factor(
    days: u32,
    seed: u64,
    start: DateTime<Utc>,
) -> Result<Vec<SensorReading>, SignalError> {
    if days == 0 {
        return Err(SignalError::invalid("days", 0));
    }
    let count = days as usize * MINUTES_PER_DAY;
    let window = derive_window(count);

    // Per-series seeds derived from the invocation seed keep each
    // generate_noise call self-contained while one seed pins the batch.
    let voltage = smooth(&generate_noise(count, 220.0, 5.0, seed)?, window)?;
    let current = smooth(&generate_noise(count, 10.0, 2.0, seed.wrapping_add(1))?, window)?;
    let angle = smooth(&generate_noise(count, 23.07, 40.0, seed.wrapping_add(2))?, window)?;

    let mut factors = Vec::with_capacity(count);
    for i in 0..count {
        let apparent = voltage[i] * current[i];
        let active = apparent * angle[i].to_radians().cos();
        let factor = round5(active / apparent);
        if !(-1.0..=1.0).contains(&factor) || !factor.is_finite() {
            return Err(SignalError::Computation { index: i, value: factor });
        }
        factors.push(factor);
    }

    Ok(assemble_readings(
        &factors,
        &POWER_FACTOR_METADATA,
        start,
        Duration::minutes(1),
    ))
}

/// Synthesizes one minute-resolution consumption reading per minute over
/// `days` days, smoothed N(1, 0.05) rounded to 5 decimals.
pub fn synthesize_consumption(
    days: u32,
    seed: u64,
    start: DateTime<Utc>,
) -> Result<Vec<SensorReading>, SignalError> {
    if days == 0 {
        return Err(SignalError::invalid("days", 0));
    }
    let count = days as usize * MINUTES_PER_DAY;

    let series = smooth(&generate_noise(count, 1.0, 0.05, seed)?, derive_window(count))?;
    let values: Vec<f64> = series.into_iter().map(round5).collect();

    Ok(assemble_readings(
        &values,
        &CONSUMPTION_METADATA,
        start,
        Duration::minutes(1),
    ))
}

/// Synthesizes `minutes` minutes of unsmoothed voltage at 10 samples per
/// second (N(220, 1)) and runs the oscillation detector over the raw series
/// before assembly.
pub fn synthesize_voltage_with_oscillations(
    minutes: u32,
    threshold: f64,
    seed: u64,
    start: DateTime<Utc>,
) -> Result<VoltageSynthesis, SignalError> {
    if minutes == 0 {
        return Err(SignalError::invalid("minutes", 0));
    }
    let count = minutes as usize * 60 * SAMPLES_PER_SECOND;

    let series = generate_noise(count, 220.0, 1.0, seed)?;
    let events: Vec<OscillationEvent> = detect_oscillations(&series, threshold).collect();

    let readings = assemble_readings(
        &series,
        &VOLTAGE_METADATA,
        start,
        Duration::milliseconds(100),
    );

    Ok(VoltageSynthesis { readings, events })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn fixed_start() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2026-01-01T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn power_factor_batch_has_minute_resolution() {
        let readings = synthesize_power_factor(1, DEFAULT_SEED, fixed_start()).unwrap();
        assert_eq!(readings.len(), 1440);
        for pair in readings.windows(2) {
            assert_eq!(pair[1].timestamp - pair[0].timestamp, Duration::minutes(1));
        }
    }

    #[test]
    fn power_factor_values_stay_in_unit_range() {
        let readings = synthesize_power_factor(1, 7, fixed_start()).unwrap();
        for r in &readings {
            assert!((-1.0..=1.0).contains(&r.value), "out of range: {}", r.value);
        }
    }

    #[test]
    fn power_factor_is_deterministic_under_fixed_seed() {
        let a = synthesize_power_factor(1, 99, fixed_start()).unwrap();
        let b = synthesize_power_factor(1, 99, fixed_start()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn zero_days_is_invalid_not_empty() {
        assert!(matches!(
            synthesize_power_factor(0, DEFAULT_SEED, fixed_start()),
            Err(SignalError::InvalidParameter { name: "days", .. })
        ));
        assert!(matches!(
            synthesize_consumption(0, DEFAULT_SEED, fixed_start()),
            Err(SignalError::InvalidParameter { name: "days", .. })
        ));
    }

    #[test]
    fn zero_minutes_is_invalid_not_empty() {
        assert!(matches!(
            synthesize_voltage_with_oscillations(0, 5.0, DEFAULT_SEED, fixed_start()),
            Err(SignalError::InvalidParameter { name: "minutes", .. })
        ));
    }

    #[test]
    fn consumption_values_are_rounded_to_five_decimals() {
        let readings = synthesize_consumption(1, 3, fixed_start()).unwrap();
        assert_eq!(readings.len(), 1440);
        for r in &readings {
            let scaled = r.value * 100_000.0;
            assert!((scaled - scaled.round()).abs() < 1e-6);
            assert_eq!(r.data_type, "Energy Consumption");
        }
    }

    #[test]
    fn voltage_batch_steps_by_deciseconds() {
        let out =
            synthesize_voltage_with_oscillations(1, 5.0, DEFAULT_SEED, fixed_start()).unwrap();
        assert_eq!(out.readings.len(), 600);
        for pair in out.readings.windows(2) {
            assert_eq!(
                pair[1].timestamp - pair[0].timestamp,
                Duration::milliseconds(100)
            );
        }
    }

    #[test]
    fn voltage_events_match_a_rescan_of_the_values() {
        let out = synthesize_voltage_with_oscillations(1, 2.5, 11, fixed_start()).unwrap();
        let values: Vec<f64> = out.readings.iter().map(|r| r.value).collect();
        let rescan: Vec<_> = detect_oscillations(&values, 2.5).collect();
        assert_eq!(out.events, rescan);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(8))]

        #[test]
        fn batch_size_and_monotonicity_hold_for_any_day_count(days in 1u32..4) {
            let readings =
                synthesize_consumption(days, DEFAULT_SEED, fixed_start()).unwrap();
            prop_assert_eq!(readings.len(), days as usize * 1440);
            for pair in readings.windows(2) {
                prop_assert!(pair[0].timestamp < pair[1].timestamp);
            }
        }
    }
}
