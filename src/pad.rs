//! Shared shape of the two-ratio pads.

use crate::ratios::{RatioKind, Ratios};

/// A point in pad-local coordinates: origin at the top-left corner, x growing
/// rightward and y growing downward.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PadPosition {
    pub x: f64,
    pub y: f64,
}

impl PadPosition {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A 2-D surface that controls two of the three ratios via a thumb.
pub trait Pad {
    /// The ratio the pad leaves to its companion slider.
    const SLIDER_KIND: RatioKind;

    /// Move a raw pointer position to where the thumb may rest.
    fn constrain(&self, position: PadPosition) -> PadPosition;

    /// Write the pad's two ratios for `position` into `ratios`.
    fn read_ratios(&self, position: PadPosition, ratios: &mut Ratios);

    /// Thumb position that reproduces the pad's two ratios in `ratios`.
    fn thumb_position(&self, ratios: &Ratios) -> PadPosition;
}
