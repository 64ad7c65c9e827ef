//! Shade and tint blending.
//!
//! Shade scales every channel toward black. Tint lifts the two weaker
//! channels toward the strongest one, which only reaches white when the
//! strongest channel is already 255. Shade is always applied before tint.

use tracing::debug;

use crate::color::SolidColor;
use crate::math::{self, clamp_ratio};
use crate::spectrum;

/// Blend `color` toward black. A ratio of 1.0 gives black.
pub fn apply_shade(color: SolidColor, shade_ratio: f64) -> SolidColor {
    let factor = 1.0 - clamp_ratio(shade_ratio);
    let scale = |channel: u8| math::round_channel(f64::from(channel) * factor);
    let (r, g, b) = color.to_rgb();
    SolidColor::from_rgb(scale(r), scale(g), scale(b))
}

/// Blend the non-dominant channels of `color` toward the dominant one.
///
/// Ties for the dominant channel resolve in R, G, B order. A gray color has
/// no dominant channel and is returned unchanged.
pub fn apply_tint(color: SolidColor, tint_ratio: f64) -> SolidColor {
    let tint = clamp_ratio(tint_ratio);
    let (r, g, b) = color.to_rgb();
    if r == g && g == b {
        debug!(%color, "no dominant channel, skipping tint");
        return color;
    }

    let max = r.max(g).max(b);
    // `channel <= max`, so the lifted value never exceeds `max`.
    let lift = |channel: u8| channel + math::round_channel(f64::from(max - channel) * tint);

    if max == r {
        SolidColor::from_rgb(r, lift(g), lift(b))
    } else if max == g {
        SolidColor::from_rgb(lift(r), g, lift(b))
    } else {
        SolidColor::from_rgb(lift(r), lift(g), b)
    }
}

/// Final color for a set of ratios: pure color, shaded, then tinted.
pub fn current_color(color_ratio: f64, shade_ratio: f64, tint_ratio: f64) -> SolidColor {
    let shaded = apply_shade(spectrum::pure_color(color_ratio), shade_ratio);
    apply_tint(shaded, tint_ratio)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples() -> Vec<SolidColor> {
        vec![
            SolidColor::RED,
            SolidColor::from_rgb(12, 200, 99),
            SolidColor::from_rgb(0, 64, 255),
            SolidColor::from_rgb(90, 90, 30),
            SolidColor::from_rgb(7, 7, 7),
        ]
    }

    #[test]
    fn shade_extremes() {
        for color in samples() {
            assert_eq!(apply_shade(color, 0.0), color);
            assert_eq!(apply_shade(color, 1.0), SolidColor::BLACK);
        }
    }

    #[test]
    fn half_shade_rounds_to_nearest() {
        assert_eq!(apply_shade(SolidColor::RED, 0.5), SolidColor::from_rgb(128, 0, 0));
    }

    #[test]
    fn tint_extremes() {
        for color in samples() {
            assert_eq!(apply_tint(color, 0.0), color);

            let (r, g, b) = color.to_rgb();
            let max = r.max(g).max(b);
            assert_eq!(apply_tint(color, 1.0), SolidColor::from_rgb(max, max, max));
        }
    }

    #[test]
    fn half_tint_of_red() {
        assert_eq!(apply_tint(SolidColor::RED, 0.5), SolidColor::from_rgb(255, 128, 128));
    }

    #[test]
    fn tint_ties_favor_red_then_green() {
        let yellowish = SolidColor::from_rgb(200, 200, 0);
        assert_eq!(apply_tint(yellowish, 0.5), SolidColor::from_rgb(200, 200, 100));

        let teal = SolidColor::from_rgb(0, 180, 180);
        assert_eq!(apply_tint(teal, 0.5), SolidColor::from_rgb(90, 180, 180));
    }

    #[test]
    fn tint_of_shaded_color_is_not_white() {
        let shaded = apply_shade(SolidColor::RED, 0.5);
        assert_eq!(apply_tint(shaded, 1.0), SolidColor::from_rgb(128, 128, 128));
    }

    #[test]
    fn shade_is_applied_before_tint() {
        assert_eq!(current_color(0.0, 0.5, 0.5), SolidColor::from_rgb(128, 64, 64));

        // Rounding makes the two orders disagree.
        let dark_red = SolidColor::from_rgb(6, 0, 0);
        let shade_first = apply_tint(apply_shade(dark_red, 0.25), 0.5);
        let tint_first = apply_shade(apply_tint(dark_red, 0.5), 0.25);
        assert_eq!(shade_first, SolidColor::from_rgb(5, 3, 3));
        assert_eq!(tint_first, SolidColor::from_rgb(5, 2, 2));
    }

    #[test]
    fn ratios_are_clamped() {
        assert_eq!(apply_shade(SolidColor::RED, 3.0), SolidColor::BLACK);
        assert_eq!(apply_tint(SolidColor::RED, -1.0), SolidColor::RED);
    }
}
