//! Centered moving-average smoothing.

use super::SignalError;

/// Smooths `series` with a uniform kernel of length `window`, preserving
/// length ("same"-mode convolution).
///
/// Edge policy: for output index `i` the kernel covers input indices
/// `[i - window/2, i + (window + 1)/2)` clamped to the series bounds, and
/// the mean is taken over the samples actually in range. The kernel is
/// truncated at the edges rather than zero-padded, so boundary samples are
/// not biased towards zero. A window of 1 is the identity.
pub fn smooth(series: &[f64], window: usize) -> Result<Vec<f64>, SignalError> {
    if window < 1 {
        return Err(SignalError::invalid("window", window as i64));
    }

    let half = window / 2;
    let out = (0..series.len())
        .map(|i| {
            let lo = i.saturating_sub(half);
            let hi = (i + (window + 1) / 2).min(series.len());
            let slice = &series[lo..hi];
            slice.iter().sum::<f64>() / slice.len() as f64
        })
        .collect();

    Ok(out)
}

/// Smoothing window derived from the sample count: one twentieth of the
/// series, floored. Series shorter than 20 samples would derive a zero
/// window, which `smooth` rejects.
pub fn derive_window(sample_count: usize) -> usize {
    sample_count / 10 / 2
}
