//! Pad-plus-slider pickers.
//!
//! A square picker's pad drives tint and shade while its slider drives the
//! color. A radial picker's pad drives color and tint while its slider
//! drives the shade.

use tracing::debug;

use crate::color::SolidColor;
use crate::config::PickerConfig;
use crate::gradient::{self, Gradient};
use crate::pad::{Pad, PadPosition};
use crate::picker::PickerState;
use crate::radial_pad::RadialPad;
use crate::ratios::{RatioKind, Ratios};
use crate::slider::ColorSlider;
use crate::square_pad::SquarePad;

/// The color a picker opened with next to the color it shows now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preview {
    pub old: SolidColor,
    pub new: SolidColor,
}

#[derive(Debug)]
pub struct LargePicker<P: Pad> {
    state: PickerState,
    pad: P,
    slider: ColorSlider,
    thumb: PadPosition,
    preview: Option<Preview>,
}

pub type SquarePicker = LargePicker<SquarePad>;
pub type RadialPicker = LargePicker<RadialPad>;

impl<P: Pad> LargePicker<P> {
    pub fn new(pad: P, config: &PickerConfig) -> Self {
        let state = PickerState::new();
        let mut slider = ColorSlider::with_max(P::SLIDER_KIND, config.slider_max);
        slider.set_progress_ratio(state.ratios().get(P::SLIDER_KIND));
        let thumb = pad.thumb_position(state.ratios());
        let color = state.current_color();
        Self {
            state,
            pad,
            slider,
            thumb,
            preview: config
                .preview_enabled
                .then_some(Preview { old: color, new: color }),
        }
    }

    pub fn state(&self) -> &PickerState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut PickerState {
        &mut self.state
    }

    pub fn ratios(&self) -> &Ratios {
        self.state.ratios()
    }

    pub fn current_color(&self) -> SolidColor {
        self.state.current_color()
    }

    pub fn pad(&self) -> &P {
        &self.pad
    }

    pub fn slider(&self) -> &ColorSlider {
        &self.slider
    }

    pub fn thumb(&self) -> PadPosition {
        self.thumb
    }

    pub fn preview(&self) -> Option<Preview> {
        self.preview
    }

    /// Gradient behind the slider for the current ratios.
    pub fn slider_gradient(&self) -> Gradient {
        gradient::slider_gradient(P::SLIDER_KIND, self.ratios())
    }

    /// Pointer down or move on the pad.
    pub fn move_thumb(&mut self, pointer: PadPosition) -> SolidColor {
        self.thumb = self.state.apply_pointer(&self.pad, pointer);
        self.refresh_preview()
    }

    /// Slider progress changed by the user.
    pub fn on_slider_progress(&mut self, progress: u32) -> SolidColor {
        let ratio = self.slider.set_progress(progress);
        self.state.update_ratio(P::SLIDER_KIND, ratio);
        self.refresh_preview()
    }

    /// Assign a ratio from code, moving the slider or thumb to match.
    pub fn set_ratio(&mut self, kind: RatioKind, value: f64) -> SolidColor {
        let pad = &self.pad;
        let slider = &mut self.slider;
        let thumb = &mut self.thumb;
        self.state.set_ratio(kind, value, |kind, ratios| {
            if kind == P::SLIDER_KIND {
                slider.set_progress_ratio(ratios.get(kind));
            } else {
                *thumb = pad.thumb_position(ratios);
            }
        });
        self.refresh_preview()
    }

    /// Swap in a re-laid-out pad, keeping the ratios.
    pub fn resize(&mut self, pad: P) {
        self.thumb = pad.thumb_position(self.state.ratios());
        self.pad = pad;
    }

    /// Returns `false` when previews are disabled.
    pub fn set_old_preview_color(&mut self, color: SolidColor) -> bool {
        match self.preview.as_mut() {
            Some(preview) => {
                preview.old = color;
                true
            }
            None => {
                debug!(%color, "preview not enabled");
                false
            }
        }
    }

    fn refresh_preview(&mut self) -> SolidColor {
        let color = self.state.current_color();
        if let Some(preview) = self.preview.as_mut() {
            preview.new = color;
        }
        color
    }
}

impl SquarePicker {
    pub fn square(width: f64, height: f64, config: &PickerConfig) -> Self {
        Self::new(SquarePad::new(width, height), config)
    }
}

impl RadialPicker {
    pub fn radial(diameter: f64, config: &PickerConfig) -> Self {
        let pad = RadialPad::new(diameter).with_snap_to_center(config.snap_to_center);
        Self::new(pad, config)
    }
}
