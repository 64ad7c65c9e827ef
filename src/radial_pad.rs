//! Circular pad where angle maps to the color ratio and distance from the
//! rim maps to the tint ratio.
//!
//! Angles are measured counter-clockwise from 3 o'clock with "up" positive,
//! and the color ratio runs the other way: `color = 1 - angle / TAU`. The
//! rim is untinted; the center is fully tinted.

use std::f64::consts::TAU;

use tracing::debug;

use crate::constants::SNAP_TOLERANCE;
use crate::math::{self, clamp_ratio};
use crate::pad::{Pad, PadPosition};
use crate::ratios::{RatioKind, Ratios};

/// Ratios controlled by a [`RadialPad`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RadialRatios {
    pub color: f64,
    pub tint: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialPad {
    diameter: f64,
    snap_to_center: bool,
}

impl RadialPad {
    /// A pad of the given diameter with center snapping enabled.
    /// Negative and non-finite diameters are treated as empty.
    pub fn new(diameter: f64) -> Self {
        Self {
            diameter: math::sanitize_extent(diameter),
            snap_to_center: true,
        }
    }

    pub fn with_snap_to_center(mut self, snap_to_center: bool) -> Self {
        self.snap_to_center = snap_to_center;
        self
    }

    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    pub fn radius(&self) -> f64 {
        self.diameter / 2.0
    }

    pub fn snaps_to_center(&self) -> bool {
        self.snap_to_center
    }

    pub fn center(&self) -> PadPosition {
        let r = self.radius();
        PadPosition::new(r, r)
    }

    /// Offset from the center in radius units, with y flipped so up is positive.
    fn offset_ratios(&self, position: PadPosition) -> (f64, f64) {
        let r = self.radius();
        ((position.x - r) / r, (r - position.y) / r)
    }

    /// Distance from the center in radius units: 0.0 at the center, 1.0 on the rim.
    pub fn radial_position_ratio(&self, position: PadPosition) -> f64 {
        let (dx, dy) = self.offset_ratios(position);
        dx.hypot(dy)
    }

    /// Angle around the center as a fraction of a turn, in `(0.0, 1.0]`.
    ///
    /// Due east (and the center itself) reads as a full turn.
    pub fn circumferential_position_ratio(&self, position: PadPosition) -> f64 {
        let (dx, dy) = self.offset_ratios(position);
        let mut angle = dy.atan2(dx); // -PI..=PI
        if angle <= 0.0 {
            angle += TAU;
        }
        angle / TAU
    }

    /// Whether a raw pointer lies in the square snap zone around the center.
    pub fn in_snap_zone(&self, position: PadPosition) -> bool {
        let r = self.radius();
        let zone = (1.0 - SNAP_TOLERANCE) * r..=(1.0 + SNAP_TOLERANCE) * r;
        self.snap_to_center && zone.contains(&position.x) && zone.contains(&position.y)
    }

    /// Snap a pointer near the center onto it, and pull a pointer outside the
    /// circle back onto the rim along its radius.
    pub fn constrain(&self, position: PadPosition) -> PadPosition {
        let r = self.radius();
        if r <= 0.0 || !position.x.is_finite() || !position.y.is_finite() {
            debug!(?position, diameter = self.diameter, "unusable pointer, using center");
            return self.center();
        }
        if self.in_snap_zone(position) {
            return self.center();
        }

        let radial = self.radial_position_ratio(position);
        if radial <= 1.0 {
            position
        } else {
            PadPosition::new(
                r + (position.x - r) / radial,
                r + (position.y - r) / radial,
            )
        }
    }

    pub fn position_to_ratios(&self, position: PadPosition) -> RadialRatios {
        let position = self.constrain(position);
        if self.radius() <= 0.0 || position == self.center() {
            return RadialRatios {
                color: 0.0,
                tint: 1.0,
            };
        }
        RadialRatios {
            color: clamp_ratio(1.0 - self.circumferential_position_ratio(position)),
            tint: clamp_ratio(1.0 - self.radial_position_ratio(position)),
        }
    }

    pub fn ratios_to_position(&self, ratios: RadialRatios) -> PadPosition {
        let color = clamp_ratio(ratios.color);
        let tint = clamp_ratio(ratios.tint);
        let r = self.radius();

        // Fold the turn into one quadrant, then unfold by sign below.
        let acute_ratio = if color < 0.25 {
            color
        } else if color < 0.5 {
            0.5 - color
        } else if color < 0.75 {
            color - 0.5
        } else {
            1.0 - color
        };
        let acute_angle = acute_ratio * TAU;

        let offset = r * (1.0 - tint);
        let horizontal = offset * acute_angle.cos();
        let vertical = offset * acute_angle.sin();

        let x = if color < 0.25 || color > 0.75 {
            r + horizontal
        } else {
            r - horizontal
        };
        let y = if color > 0.5 { r - vertical } else { r + vertical };
        PadPosition::new(x, y)
    }
}

impl Pad for RadialPad {
    const SLIDER_KIND: RatioKind = RatioKind::Shade;

    fn constrain(&self, position: PadPosition) -> PadPosition {
        RadialPad::constrain(self, position)
    }

    fn read_ratios(&self, position: PadPosition, ratios: &mut Ratios) {
        let RadialRatios { color, tint } = self.position_to_ratios(position);
        ratios.set(RatioKind::Color, color);
        ratios.set(RatioKind::Tint, tint);
    }

    fn thumb_position(&self, ratios: &Ratios) -> PadPosition {
        self.ratios_to_position(RadialRatios {
            color: ratios.color(),
            tint: ratios.tint(),
        })
    }
}
