//! Hue spectrum: maps a color ratio onto a six-section hue wheel running
//! red → yellow → green → cyan → blue → magenta → red.
//!
//! The wheel is indexed over [`COLOR_COUNT`] discrete steps. Each section
//! keeps one channel full, one empty, and fades the third in or out.

use tracing::warn;

use crate::color::SolidColor;
use crate::constants::{COLOR_COUNT, FULL, NONE, SECTION_COUNT, WRAP_BLUE};
use crate::math;

/// Pure color for a color ratio (clamped to `0.0..=1.0`).
pub fn pure_color(color_ratio: f64) -> SolidColor {
    let ratio = math::clamp_ratio(color_ratio);
    ith_pure_color((f64::from(COLOR_COUNT) * ratio).round() as i64)
}

/// Pure color at step `i` of the spectrum, `0..=COLOR_COUNT`.
///
/// Step `COLOR_COUNT` is the wrapped-around red, which carries a blue
/// channel of 1. Steps outside the domain yield black.
pub fn ith_pure_color(i: i64) -> SolidColor {
    let count = i64::from(COLOR_COUNT);
    if !(0..=count).contains(&i) {
        warn!(i, count, "spectrum index out of domain, returning black");
        return SolidColor::BLACK;
    }
    if i == count {
        return SolidColor::from_rgb(FULL, NONE, WRAP_BLUE);
    }

    let per_section = f64::from(COLOR_COUNT) / SECTION_COUNT;
    let section = (i as f64 / per_section).floor();
    let position = (i as f64 - section * per_section) / per_section;

    let fade_in = math::round_channel(255.0 * position);
    let fade_out = math::round_channel(255.0 * (1.0 - position));

    let (r, g, b) = match section as u8 {
        0 => (FULL, fade_in, NONE),
        1 => (fade_out, FULL, NONE),
        2 => (NONE, FULL, fade_in),
        3 => (NONE, fade_out, FULL),
        4 => (fade_in, NONE, FULL),
        _ => (FULL, NONE, fade_out),
    };
    SolidColor::from_rgb(r, g, b)
}
