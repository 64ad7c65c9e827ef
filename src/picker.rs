//! Ratio state shared by every picker shape.
//!
//! Ratios change two ways. Pointer and slider events come from the UI, so
//! only the color listener hears about them. Programmatic assignments also
//! hand the new ratios back to the caller so the UI can move its thumb or
//! slider to match.

use std::fmt;

use crate::color::SolidColor;
use crate::pad::{Pad, PadPosition};
use crate::ratios::{RatioKind, Ratios};

/// Called with the current color whenever a ratio changes.
pub type ColorListener = Box<dyn FnMut(SolidColor)>;

#[derive(Default)]
pub struct PickerState {
    ratios: Ratios,
    listener: Option<ColorListener>,
}

impl fmt::Debug for PickerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PickerState")
            .field("ratios", &self.ratios)
            .field("listener", &self.listener.is_some())
            .finish()
    }
}

impl PickerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ratios(ratios: Ratios) -> Self {
        Self {
            ratios,
            listener: None,
        }
    }

    pub fn ratios(&self) -> &Ratios {
        &self.ratios
    }

    pub fn current_color(&self) -> SolidColor {
        self.ratios.current_color()
    }

    pub fn set_listener(&mut self, listener: impl FnMut(SolidColor) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    /// Assign a ratio from code. The listener fires first, then
    /// `on_ui_update` receives the changed kind and the new ratios.
    pub fn set_ratio(
        &mut self,
        kind: RatioKind,
        value: f64,
        on_ui_update: impl FnOnce(RatioKind, &Ratios),
    ) -> SolidColor {
        self.ratios.set(kind, value);
        let color = self.notify();
        on_ui_update(kind, &self.ratios);
        color
    }

    /// Assign a ratio that came from the UI itself.
    pub fn update_ratio(&mut self, kind: RatioKind, value: f64) -> SolidColor {
        self.ratios.set(kind, value);
        self.notify()
    }

    /// Apply a pointer on `pad`. Returns where the thumb should rest.
    pub fn apply_pointer<P: Pad>(&mut self, pad: &P, position: PadPosition) -> PadPosition {
        let thumb = pad.constrain(position);
        pad.read_ratios(thumb, &mut self.ratios);
        self.notify();
        thumb
    }

    fn notify(&mut self) -> SolidColor {
        let color = self.current_color();
        if let Some(listener) = self.listener.as_mut() {
            listener(color);
        }
        color
    }
}
