//! Square pad: tint along x (full at the left edge), shade along y (full at
//! the bottom edge).

use crate::math::{self, clamp_ratio};
use crate::pad::{Pad, PadPosition};
use crate::ratios::{RatioKind, Ratios};

/// Ratios controlled by a [`SquarePad`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SquareRatios {
    pub tint: f64,
    pub shade: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SquarePad {
    width: f64,
    height: f64,
}

impl SquarePad {
    /// Negative and non-finite sizes are treated as empty.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: math::sanitize_extent(width),
            height: math::sanitize_extent(height),
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Clamp a pointer into the pad's bounds.
    pub fn clamp(&self, position: PadPosition) -> PadPosition {
        PadPosition::new(
            math::clamp_coordinate(position.x, self.width),
            math::clamp_coordinate(position.y, self.height),
        )
    }

    pub fn position_to_ratios(&self, position: PadPosition) -> SquareRatios {
        let position = self.clamp(position);
        SquareRatios {
            tint: clamp_ratio(1.0 - math::fraction(position.x, self.width)),
            shade: clamp_ratio(math::fraction(position.y, self.height)),
        }
    }

    pub fn ratios_to_position(&self, ratios: SquareRatios) -> PadPosition {
        PadPosition::new(
            (1.0 - clamp_ratio(ratios.tint)) * self.width,
            clamp_ratio(ratios.shade) * self.height,
        )
    }
}

impl Pad for SquarePad {
    const SLIDER_KIND: RatioKind = RatioKind::Color;

    fn constrain(&self, position: PadPosition) -> PadPosition {
        self.clamp(position)
    }

    fn read_ratios(&self, position: PadPosition, ratios: &mut Ratios) {
        let SquareRatios { tint, shade } = self.position_to_ratios(position);
        ratios.set(RatioKind::Tint, tint);
        ratios.set(RatioKind::Shade, shade);
    }

    fn thumb_position(&self, ratios: &Ratios) -> PadPosition {
        self.ratios_to_position(SquareRatios {
            tint: ratios.tint(),
            shade: ratios.shade(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "expected {a} ~= {b}");
    }

    #[test]
    fn pointer_maps_to_tint_and_shade() {
        let pad = SquarePad::new(100.0, 100.0);
        let ratios = pad.position_to_ratios(PadPosition::new(25.0, 75.0));
        assert_eq!(ratios, SquareRatios { tint: 0.75, shade: 0.75 });
    }

    #[test]
    fn corners() {
        let pad = SquarePad::new(200.0, 50.0);
        assert_eq!(
            pad.position_to_ratios(PadPosition::new(200.0, 0.0)),
            SquareRatios { tint: 0.0, shade: 0.0 }
        );
        assert_eq!(
            pad.position_to_ratios(PadPosition::new(0.0, 50.0)),
            SquareRatios { tint: 1.0, shade: 1.0 }
        );
    }

    #[test]
    fn pointer_outside_is_clamped() {
        let pad = SquarePad::new(100.0, 100.0);
        assert_eq!(
            pad.clamp(PadPosition::new(-10.0, 150.0)),
            PadPosition::new(0.0, 100.0)
        );
        assert_eq!(
            pad.position_to_ratios(PadPosition::new(-10.0, 150.0)),
            SquareRatios { tint: 1.0, shade: 1.0 }
        );
    }

    #[test]
    fn ratios_round_trip() {
        let pad = SquarePad::new(320.0, 240.0);
        for t in 0..=10 {
            for s in 0..=10 {
                let ratios = SquareRatios {
                    tint: t as f64 / 10.0,
                    shade: s as f64 / 10.0,
                };
                let back = pad.position_to_ratios(pad.ratios_to_position(ratios));
                approx_eq(back.tint, ratios.tint);
                approx_eq(back.shade, ratios.shade);
            }
        }
    }

    #[test]
    fn inverse_clamps_ratios() {
        let pad = SquarePad::new(100.0, 100.0);
        let position = pad.ratios_to_position(SquareRatios { tint: 2.0, shade: -1.0 });
        assert_eq!(position, PadPosition::new(0.0, 0.0));
    }

    #[test]
    fn empty_pad_does_not_divide_by_zero() {
        let pad = SquarePad::new(0.0, -5.0);
        let ratios = pad.position_to_ratios(PadPosition::new(10.0, 10.0));
        assert_eq!(ratios, SquareRatios { tint: 1.0, shade: 0.0 });
    }

    #[test]
    fn non_finite_input_never_yields_nan() {
        let pad = SquarePad::new(f64::INFINITY, f64::NAN);
        assert_eq!((pad.width(), pad.height()), (0.0, 0.0));
        assert_eq!(
            pad.position_to_ratios(PadPosition::new(10.0, 10.0)),
            SquareRatios { tint: 1.0, shade: 0.0 }
        );

        let pad = SquarePad::new(100.0, 100.0);
        let ratios = pad.position_to_ratios(PadPosition::new(f64::NAN, f64::INFINITY));
        assert_eq!(ratios, SquareRatios { tint: 1.0, shade: 1.0 });
    }

    #[test]
    fn pad_trait_writes_only_its_ratios() {
        let pad = SquarePad::new(100.0, 100.0);
        let mut ratios = Ratios::new(0.4, 0.0, 0.0);
        pad.read_ratios(PadPosition::new(50.0, 20.0), &mut ratios);
        assert_eq!(ratios, Ratios::new(0.4, 0.2, 0.5));
        assert_eq!(pad.thumb_position(&ratios), PadPosition::new(50.0, 20.0));
    }
}
