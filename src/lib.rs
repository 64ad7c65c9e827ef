//! # spectrum-picker
//!
//! Color math behind slider, square-pad, and radial-pad color pickers.
//!
//! A picker holds three ratios in `0.0..=1.0`: the color ratio picks a pure
//! hue off a six-section spectrum, the shade ratio blends it toward black,
//! and the tint ratio blends it toward its brightest channel. Pads turn a
//! pointer position into two of those ratios and back again.
//!
//! Out-of-range input is never an error: ratios and positions are clamped
//! and a `tracing` diagnostic is emitted.
//!
//! ## Usage
//!
//! ```rust
//! use spectrum_picker::{current_color, PadPosition, SolidColor, SquarePad};
//!
//! let pad = SquarePad::new(100.0, 100.0);
//! let ratios = pad.position_to_ratios(PadPosition::new(25.0, 75.0));
//! assert_eq!((ratios.tint, ratios.shade), (0.75, 0.75));
//!
//! assert_eq!(current_color(0.0, 0.5, 0.0), SolidColor::from_rgb(128, 0, 0));
//! ```

mod blend;
mod color;
mod compact;
mod config;
mod constants;
mod gradient;
mod large;
mod math;
mod pad;
mod picker;
mod radial_pad;
mod ratios;
mod slider;
mod spectrum;
mod square_pad;

pub use blend::{apply_shade, apply_tint, current_color};
pub use color::{ParseColorError, SolidColor};
pub use compact::CompactPicker;
pub use config::PickerConfig;
pub use constants::{COLOR_COUNT, SLIDER_MAX};
pub use gradient::{
    shade_gradient, slider_gradient, spectrum_gradient, tint_gradient, Gradient,
};
pub use large::{LargePicker, Preview, RadialPicker, SquarePicker};
pub use math::clamp_ratio;
pub use pad::{Pad, PadPosition};
pub use picker::{ColorListener, PickerState};
pub use radial_pad::{RadialPad, RadialRatios};
pub use ratios::{ParseRatioKindError, RatioKind, Ratios};
pub use slider::ColorSlider;
pub use spectrum::{ith_pure_color, pure_color};
pub use square_pad::{SquarePad, SquareRatios};
