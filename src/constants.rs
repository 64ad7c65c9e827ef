//! Fixed domains and thresholds for the picker math.

/// Number of discrete colors along the hue spectrum.
pub const COLOR_COUNT: u32 = 16_777_216;

/// Equal-width sections of the hue wheel.
pub(crate) const SECTION_COUNT: f64 = 6.0;

/// Default maximum slider progress.
pub const SLIDER_MAX: u32 = COLOR_COUNT;

/// Half-width of the radial snap zone, as a fraction of the radius.
pub(crate) const SNAP_TOLERANCE: f64 = 0.1;

/// Blue channel of the color at the very end of the spectrum, so the
/// wrapped-around red stays distinguishable from the red at the start.
pub(crate) const WRAP_BLUE: u8 = 1;

/// Fully lit channel.
pub(crate) const FULL: u8 = 255;

/// Unlit channel.
pub(crate) const NONE: u8 = 0;
