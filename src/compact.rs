//! Single-slider picker whose slider can be switched between the color,
//! shade, and tint ratios.

use crate::color::SolidColor;
use crate::config::PickerConfig;
use crate::gradient::{self, Gradient};
use crate::picker::PickerState;
use crate::ratios::{RatioKind, Ratios};
use crate::slider::ColorSlider;

#[derive(Debug)]
pub struct CompactPicker {
    state: PickerState,
    slider: ColorSlider,
    preview_enabled: bool,
}

impl CompactPicker {
    pub fn new(config: &PickerConfig) -> Self {
        let mut picker = Self {
            state: PickerState::new(),
            slider: ColorSlider::with_max(config.initial_kind, config.slider_max),
            preview_enabled: config.preview_enabled,
        };
        picker.sync_slider();
        picker
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

    pub fn slider(&self) -> &ColorSlider {
        &self.slider
    }

    pub fn current_color(&self) -> SolidColor {
        self.state.current_color()
    }

    /// Color for the preview swatch, if previews are enabled.
    pub fn preview_color(&self) -> Option<SolidColor> {
        self.preview_enabled.then(|| self.current_color())
    }

    /// Point the slider at another ratio and move it to that ratio's value.
    pub fn select_kind(&mut self, kind: RatioKind) -> Gradient {
        self.slider.set_kind(kind);
        self.sync_slider();
        self.slider_gradient()
    }

    pub fn slider_gradient(&self) -> Gradient {
        gradient::slider_gradient(self.slider.kind(), self.ratios())
    }

    /// Slider progress changed by the user.
    pub fn on_slider_progress(&mut self, progress: u32) -> SolidColor {
        let ratio = self.slider.set_progress(progress);
        self.state.update_ratio(self.slider.kind(), ratio)
    }

    /// Assign a ratio from code. The slider follows when it shows that ratio.
    pub fn set_ratio(&mut self, kind: RatioKind, value: f64) -> SolidColor {
        let slider = &mut self.slider;
        self.state.set_ratio(kind, value, |kind, ratios| {
            if kind == slider.kind() {
                slider.set_progress_ratio(ratios.get(kind));
            }
        })
    }

    fn sync_slider(&mut self) {
        let ratio = self.state.ratios().get(self.slider.kind());
        self.slider.set_progress_ratio(ratio);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slider_controls_selected_ratio() {
        let mut picker = CompactPicker::new(&PickerConfig::default());
        assert_eq!(picker.slider().kind(), RatioKind::Color);

        picker.select_kind(RatioKind::Shade);
        let half = picker.slider().max() / 2;
        let color = picker.on_slider_progress(half);
        assert_eq!(picker.ratios().shade(), 0.5);
        assert_eq!(picker.ratios().color(), 0.0);
        assert_eq!(color, SolidColor::from_rgb(128, 0, 0));
    }

    #[test]
    fn switching_kind_resyncs_progress() {
        let mut picker = CompactPicker::new(&PickerConfig::default());
        picker.set_ratio(RatioKind::Tint, 0.25);
        assert_eq!(picker.slider().progress(), 0);

        let gradient = picker.select_kind(RatioKind::Tint);
        assert_eq!(picker.slider().progress_ratio(), 0.25);
        assert_eq!(gradient.stops(), &[SolidColor::RED, SolidColor::WHITE]);

        picker.select_kind(RatioKind::Color);
        assert_eq!(picker.slider().progress(), 0);
    }

    #[test]
    fn initial_kind_and_preview_come_from_config() {
        let config = PickerConfig {
            initial_kind: RatioKind::Tint,
            preview_enabled: false,
            slider_max: 100,
            ..PickerConfig::default()
        };
        let mut picker = CompactPicker::new(&config);
        assert_eq!(picker.slider().kind(), RatioKind::Tint);
        assert_eq!(picker.preview_color(), None);

        picker.on_slider_progress(50);
        assert_eq!(picker.ratios().tint(), 0.5);
    }
}
