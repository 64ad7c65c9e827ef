//! Color stops painted behind the sliders.
//!
//! The UI owns the actual drawing; these are just the colors, evenly spaced
//! from left to right.

use crate::blend;
use crate::color::SolidColor;
use crate::math;
use crate::ratios::{RatioKind, Ratios};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gradient {
    stops: Vec<SolidColor>,
}

impl Gradient {
    pub fn new(stops: Vec<SolidColor>) -> Self {
        Self { stops }
    }

    pub fn stops(&self) -> &[SolidColor] {
        &self.stops
    }

    /// Sample the gradient at `t` (0.0 = first stop, 1.0 = last stop).
    ///
    /// An empty gradient samples as black.
    pub fn color_at(&self, t: f64) -> SolidColor {
        let t = math::clamp_ratio(t);
        let (first, last) = match (self.stops.first(), self.stops.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => return SolidColor::BLACK,
        };
        if self.stops.len() == 1 || t >= 1.0 {
            return last;
        }

        let scaled = t * (self.stops.len() - 1) as f64;
        let index = scaled.floor() as usize;
        let local = scaled - scaled.floor();
        let from = self.stops.get(index).copied().unwrap_or(first);
        let to = self.stops.get(index + 1).copied().unwrap_or(last);

        let mix = |a: u8, b: u8| {
            math::round_channel(f64::from(a) + (f64::from(b) - f64::from(a)) * local)
        };
        SolidColor::from_rgb(mix(from.r(), to.r()), mix(from.g(), to.g()), mix(from.b(), to.b()))
    }
}

/// Full hue spectrum: red, yellow, green, cyan, blue, magenta, red.
pub fn spectrum_gradient() -> Gradient {
    Gradient::new(vec![
        SolidColor::from_rgb(255, 0, 0),
        SolidColor::from_rgb(255, 255, 0),
        SolidColor::from_rgb(0, 255, 0),
        SolidColor::from_rgb(0, 255, 255),
        SolidColor::from_rgb(0, 0, 255),
        SolidColor::from_rgb(255, 0, 255),
        SolidColor::from_rgb(255, 0, 0),
    ])
}

/// Tinted pure color through to black.
pub fn shade_gradient(ratios: &Ratios) -> Gradient {
    Gradient::new(vec![ratios.tinted_color(), SolidColor::BLACK])
}

/// Shaded pure color through to the same color fully tinted.
pub fn tint_gradient(ratios: &Ratios) -> Gradient {
    let shaded = ratios.shaded_color();
    Gradient::new(vec![shaded, blend::apply_tint(shaded, 1.0)])
}

/// Gradient for a slider that controls `kind`.
pub fn slider_gradient(kind: RatioKind, ratios: &Ratios) -> Gradient {
    match kind {
        RatioKind::Color => spectrum_gradient(),
        RatioKind::Shade => shade_gradient(ratios),
        RatioKind::Tint => tint_gradient(ratios),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spectrum_starts_and_ends_red() {
        let gradient = spectrum_gradient();
        assert_eq!(gradient.stops().len(), 7);
        assert_eq!(gradient.color_at(0.0), SolidColor::RED);
        assert_eq!(gradient.color_at(1.0), SolidColor::RED);
        assert_eq!(gradient.color_at(0.5), SolidColor::from_rgb(0, 255, 255));
    }

    #[test]
    fn sampling_interpolates_between_stops() {
        let gradient = Gradient::new(vec![SolidColor::RED, SolidColor::BLACK]);
        assert_eq!(gradient.color_at(0.5), SolidColor::from_rgb(128, 0, 0));
        assert_eq!(gradient.color_at(-1.0), SolidColor::RED);
        assert_eq!(Gradient::new(Vec::new()).color_at(0.3), SolidColor::BLACK);
    }

    #[test]
    fn shade_and_tint_gradients_follow_ratios() {
        let ratios = Ratios::new(0.0, 0.5, 0.5);
        assert_eq!(
            shade_gradient(&ratios).stops(),
            &[SolidColor::from_rgb(255, 128, 128), SolidColor::BLACK]
        );
        assert_eq!(
            tint_gradient(&ratios).stops(),
            &[SolidColor::from_rgb(128, 0, 0), SolidColor::from_rgb(128, 128, 128)]
        );
        assert_eq!(slider_gradient(RatioKind::Color, &ratios), spectrum_gradient());
    }
}
