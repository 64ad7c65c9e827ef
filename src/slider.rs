//! Integer-progress slider bound to one ratio.
//!
//! Progress runs from 0 at the left of the track to `max` at the right;
//! the ratio is `progress / max`.

use tracing::debug;

use crate::constants::SLIDER_MAX;
use crate::math::clamp_ratio;
use crate::ratios::RatioKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSlider {
    kind: RatioKind,
    progress: u32,
    max: u32,
}

impl ColorSlider {
    pub fn new(kind: RatioKind) -> Self {
        Self::with_max(kind, SLIDER_MAX)
    }

    /// A slider with a custom progress range. A zero `max` is raised to 1.
    pub fn with_max(kind: RatioKind, max: u32) -> Self {
        Self {
            kind,
            progress: 0,
            max: max.max(1),
        }
    }

    pub fn kind(&self) -> RatioKind {
        self.kind
    }

    /// Rebind the slider to another ratio. Progress is left as is.
    pub fn set_kind(&mut self, kind: RatioKind) {
        self.kind = kind;
    }

    pub fn progress(&self) -> u32 {
        self.progress
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    /// Set raw progress, clamped to `max`. Returns the new ratio.
    pub fn set_progress(&mut self, progress: u32) -> f64 {
        if progress > self.max {
            debug!(progress, max = self.max, "slider progress out of range, clamping");
        }
        self.progress = progress.min(self.max);
        self.progress_ratio()
    }

    pub fn progress_ratio(&self) -> f64 {
        f64::from(self.progress) / f64::from(self.max)
    }

    pub fn set_progress_ratio(&mut self, ratio: f64) {
        let ratio = clamp_ratio(ratio);
        self.progress = (ratio * f64::from(self.max)).round() as u32;
    }

    /// Ratio under a pointer at `x` on a track `width` wide whose ends are
    /// inset by the thumb radius.
    pub fn ratio_at(x: f64, width: f64, thumb_radius: f64) -> f64 {
        let usable = width - 2.0 * thumb_radius;
        if usable > 0.0 {
            ((x - thumb_radius) / usable).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Move the slider to the pointer. Returns the new ratio.
    pub fn set_from_pointer(&mut self, x: f64, width: f64, thumb_radius: f64) -> f64 {
        self.set_progress_ratio(Self::ratio_at(x, width, thumb_radius));
        self.progress_ratio()
    }

    /// Horizontal center of the thumb on a track `width` wide.
    pub fn thumb_x(&self, width: f64, thumb_radius: f64) -> f64 {
        thumb_radius + self.progress_ratio() * (width - 2.0 * thumb_radius).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "expected {a} ~= {b}");
    }

    #[test]
    fn progress_and_ratio_agree() {
        let mut slider = ColorSlider::new(RatioKind::Color);
        slider.set_progress_ratio(0.5);
        assert_eq!(slider.progress(), SLIDER_MAX / 2);
        assert_eq!(slider.progress_ratio(), 0.5);

        assert_eq!(slider.set_progress(SLIDER_MAX), 1.0);
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        let mut slider = ColorSlider::with_max(RatioKind::Tint, 100);
        assert_eq!(slider.set_progress(250), 1.0);
        assert_eq!(slider.progress(), 100);

        slider.set_progress_ratio(-0.2);
        assert_eq!(slider.progress(), 0);
        slider.set_progress_ratio(1.7);
        assert_eq!(slider.progress(), 100);
    }

    #[test]
    fn zero_max_is_raised() {
        let slider = ColorSlider::with_max(RatioKind::Shade, 0);
        assert_eq!(slider.max(), 1);
        assert_eq!(slider.progress_ratio(), 0.0);
    }

    #[test]
    fn pointer_maps_across_inset_track() {
        let mut slider = ColorSlider::with_max(RatioKind::Shade, 1000);
        approx_eq(ColorSlider::ratio_at(7.0, 114.0, 7.0), 0.0);
        approx_eq(ColorSlider::ratio_at(57.0, 114.0, 7.0), 0.5);
        approx_eq(ColorSlider::ratio_at(500.0, 114.0, 7.0), 1.0);
        assert_eq!(ColorSlider::ratio_at(3.0, 10.0, 7.0), 0.0);

        approx_eq(slider.set_from_pointer(32.0, 114.0, 7.0), 0.25);
        approx_eq(slider.thumb_x(114.0, 7.0), 32.0);
    }
}
