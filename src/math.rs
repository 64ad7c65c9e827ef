//! Input sanitizing shared by every picker component.
//! Nothing here fails: out-of-range input is clamped and logged.

use tracing::debug;

/// Clamp a ratio into `0.0..=1.0`. NaN becomes `0.0`.
pub fn clamp_ratio(ratio: f64) -> f64 {
    if ratio.is_nan() {
        debug!("ratio is NaN, using 0.0");
        return 0.0;
    }
    if !(0.0..=1.0).contains(&ratio) {
        debug!(ratio, "ratio out of range, clamping");
    }
    ratio.clamp(0.0, 1.0)
}

/// Clamp a pad coordinate into `0.0..=extent`. NaN becomes `0.0`.
pub(crate) fn clamp_coordinate(value: f64, extent: f64) -> f64 {
    if value.is_nan() {
        debug!("coordinate is NaN, using 0.0");
        return 0.0;
    }
    value.clamp(0.0, extent.max(0.0))
}

/// Pad extent usable for division. Negative and non-finite sizes are empty.
pub(crate) fn sanitize_extent(extent: f64) -> f64 {
    if extent.is_finite() {
        extent.max(0.0)
    } else {
        debug!(extent, "non-finite pad extent, treating as empty");
        0.0
    }
}

/// `value / extent`, or `0.0` for an empty extent.
pub(crate) fn fraction(value: f64, extent: f64) -> f64 {
    if extent > 0.0 {
        value / extent
    } else {
        0.0
    }
}

/// Round to the nearest channel value.
pub(crate) fn round_channel(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}
