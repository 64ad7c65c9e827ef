//! SolidColor type — the opaque RGB color every picker component produces.
//!
//! Stores 0–255 channels; alpha is implicitly fully opaque and never blended.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Opaque RGB color with 0–255 channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolidColor {
    r: u8,
    g: u8,
    b: u8,
}

/// Error returned when a hex string cannot be parsed into a [`SolidColor`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    #[error("hex color `{0}` contains a non-hex digit")]
    InvalidDigit(String),
    #[error("hex color `{input}` has {len} digits, expected 3 or 6")]
    InvalidLength { input: String, len: usize },
}

impl SolidColor {
    pub const BLACK: Self = Self::from_rgb(0, 0, 0);
    pub const WHITE: Self = Self::from_rgb(255, 255, 255);
    pub const RED: Self = Self::from_rgb(255, 0, 0);

    /// Create from 0–255 RGB values.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Red channel (0–255).
    pub fn r(&self) -> u8 {
        self.r
    }
    /// Green channel (0–255).
    pub fn g(&self) -> u8 {
        self.g
    }
    /// Blue channel (0–255).
    pub fn b(&self) -> u8 {
        self.b
    }

    /// Convert to a 0–255 RGB tuple.
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Pack as `0xAARRGGBB` with alpha fixed at `0xFF`.
    pub fn to_argb(&self) -> u32 {
        0xFF00_0000 | (u32::from(self.r) << 16) | (u32::from(self.g) << 8) | u32::from(self.b)
    }

    /// Unpack `0xAARRGGBB`. The alpha byte is ignored.
    pub fn from_argb(argb: u32) -> Self {
        Self {
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
        }
    }

    /// Parse a hex string (with or without `#`, 3 or 6 digits).
    pub fn from_hex(hex: &str) -> Option<Self> {
        hex.parse().ok()
    }

    /// Format as uppercase hex (RRGGBB, no `#` prefix).
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for SolidColor {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let stripped = s.trim_start_matches('#');
        if !stripped.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidDigit(s.to_string()));
        }
        // All-ASCII from here on, so byte slicing is safe.
        let digit = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&stripped[range], 16)
                .map_err(|_| ParseColorError::InvalidDigit(s.to_string()))
        };
        match stripped.len() {
            3 => Ok(Self {
                r: digit(0..1)? * 17,
                g: digit(1..2)? * 17,
                b: digit(2..3)? * 17,
            }),
            6 => Ok(Self {
                r: digit(0..2)?,
                g: digit(2..4)?,
                b: digit(4..6)?,
            }),
            len => Err(ParseColorError::InvalidLength {
                input: s.to_string(),
                len,
            }),
        }
    }
}

impl fmt::Display for SolidColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}
