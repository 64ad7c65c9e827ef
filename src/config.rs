//! Picker options the hosting UI chooses at construction time.

use crate::constants::SLIDER_MAX;
use crate::ratios::RatioKind;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PickerConfig {
    /// Track old and new preview colors.
    pub preview_enabled: bool,
    /// Snap a radial pad's thumb onto the center when the pointer is near it.
    pub snap_to_center: bool,
    /// Maximum slider progress.
    pub slider_max: u32,
    /// Ratio a compact picker's slider starts on.
    pub initial_kind: RatioKind,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            preview_enabled: true,
            snap_to_center: true,
            slider_max: SLIDER_MAX,
            initial_kind: RatioKind::Color,
        }
    }
}
