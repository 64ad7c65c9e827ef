//! The three independent ratios a picker owns.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::blend;
use crate::color::SolidColor;
use crate::math::clamp_ratio;
use crate::spectrum;

/// Names one of the three picker ratios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RatioKind {
    /// Position along the hue spectrum.
    #[default]
    Color,
    /// Blend toward black.
    Shade,
    /// Blend toward the brightest channel.
    Tint,
}

impl RatioKind {
    pub const ALL: [RatioKind; 3] = [RatioKind::Color, RatioKind::Shade, RatioKind::Tint];

    pub fn as_str(&self) -> &'static str {
        match self {
            RatioKind::Color => "color",
            RatioKind::Shade => "shade",
            RatioKind::Tint => "tint",
        }
    }
}

impl fmt::Display for RatioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown ratio kind `{0}`, expected color, shade, or tint")]
pub struct ParseRatioKindError(String);

impl FromStr for RatioKind {
    type Err = ParseRatioKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RatioKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseRatioKindError(s.to_string()))
    }
}

/// Color, shade, and tint ratios, each kept within `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawRatios"))]
pub struct Ratios {
    color: f64,
    shade: f64,
    tint: f64,
}

/// Unchecked wire form of [`Ratios`]; clamped on conversion.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawRatios {
    #[serde(default)]
    color: f64,
    #[serde(default)]
    shade: f64,
    #[serde(default)]
    tint: f64,
}

#[cfg(feature = "serde")]
impl From<RawRatios> for Ratios {
    fn from(raw: RawRatios) -> Self {
        Ratios::new(raw.color, raw.shade, raw.tint)
    }
}

impl Ratios {
    pub fn new(color: f64, shade: f64, tint: f64) -> Self {
        Self {
            color: clamp_ratio(color),
            shade: clamp_ratio(shade),
            tint: clamp_ratio(tint),
        }
    }

    pub fn color(&self) -> f64 {
        self.color
    }

    pub fn shade(&self) -> f64 {
        self.shade
    }

    pub fn tint(&self) -> f64 {
        self.tint
    }

    pub fn get(&self, kind: RatioKind) -> f64 {
        match kind {
            RatioKind::Color => self.color,
            RatioKind::Shade => self.shade,
            RatioKind::Tint => self.tint,
        }
    }

    /// Store a clamped ratio and return the value actually stored.
    pub fn set(&mut self, kind: RatioKind, value: f64) -> f64 {
        let value = clamp_ratio(value);
        match kind {
            RatioKind::Color => self.color = value,
            RatioKind::Shade => self.shade = value,
            RatioKind::Tint => self.tint = value,
        }
        value
    }

    /// Color from the color ratio alone.
    pub fn pure_color(&self) -> SolidColor {
        spectrum::pure_color(self.color)
    }

    /// Pure color with only the shade applied.
    pub fn shaded_color(&self) -> SolidColor {
        blend::apply_shade(self.pure_color(), self.shade)
    }

    /// Pure color with only the tint applied.
    pub fn tinted_color(&self) -> SolidColor {
        blend::apply_tint(self.pure_color(), self.tint)
    }

    /// Pure color, shaded, then tinted.
    pub fn current_color(&self) -> SolidColor {
        blend::current_color(self.color, self.shade, self.tint)
    }
}
