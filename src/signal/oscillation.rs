//! Adjacent-sample oscillation detection.

use serde::Serialize;
use utoipa::ToSchema;

/// A sample whose delta against its predecessor exceeded the threshold.
///
/// Events are reported for visibility only and are never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct OscillationEvent {
    pub index: usize,
    pub value: f64,
}

/// Scans `series` and yields an event at every index `i >= 1` where
/// `|series[i] - series[i - 1]| > threshold` (strict).
///
/// The iterator is lazy and ascending by index. A non-positive threshold is
/// accepted but flags nearly every transition; bounding the threshold is the
/// caller's concern.
pub fn detect_oscillations(
    series: &[f64],
    threshold: f64,
) -> impl Iterator<Item = OscillationEvent> + '_ {
    series
        .windows(2)
        .enumerate()
        .filter(move |(_, pair)| (pair[1] - pair[0]).abs() > threshold)
        .map(|(i, pair)| OscillationEvent {
            index: i + 1,
            value: pair[1],
        })
}
