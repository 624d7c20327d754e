//! Hover regions: turn pointer coordinates inside a bounded element into a
//! target value, and revert to a rest value when the pointer leaves.
//!
//! A region only reacts to movement while its hovering flag is set. The flag
//! is raised on enter and cleared on leave, which guards against stray move
//! events delivered after the pointer has already left.

#[cfg(test)]
#[path = "hover_test.rs"]
mod hover_test;

use crate::consts::{CARD_PITCH_RANGE_DEG, CARD_YAW_RANGE_DEG, MAGNETIC_STRENGTH};
use crate::geom::{Point, Rect};

/// Maps a pointer position within a region to a feature-specific target.
pub trait HoverMapping {
    fn map(&self, rect: Rect, pointer: Point) -> Point;
}

/// Card tilt: `x` is the rotateX (pitch) angle, `y` the rotateY (yaw) angle,
/// both in degrees.
///
/// Moving right yaws toward positive; moving down pitches toward negative so
/// the card leans toward the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltMapping {
    pub yaw_range_deg: f64,
    pub pitch_range_deg: f64,
}

impl Default for TiltMapping {
    fn default() -> Self {
        Self {
            yaw_range_deg: CARD_YAW_RANGE_DEG,
            pitch_range_deg: CARD_PITCH_RANGE_DEG,
        }
    }
}

impl HoverMapping for TiltMapping {
    fn map(&self, rect: Rect, pointer: Point) -> Point {
        let n = rect.normalized(pointer);
        Point {
            x: -n.y * self.pitch_range_deg,
            y: n.x * self.yaw_range_deg,
        }
    }
}

/// Magnetic pull: a translation in pixels toward the pointer, a fixed share of
/// its offset from the element centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MagneticMapping {
    pub strength: f64,
}

impl Default for MagneticMapping {
    fn default() -> Self {
        Self { strength: MAGNETIC_STRENGTH }
    }
}

impl HoverMapping for MagneticMapping {
    fn map(&self, rect: Rect, pointer: Point) -> Point {
        let off = rect.offset_from_center(pointer);
        Point {
            x: off.x * self.strength,
            y: off.y * self.strength,
        }
    }
}

/// Hover state for one region.
#[derive(Debug, Clone)]
pub struct HoverRegion<M> {
    mapping: M,
    rest: Point,
    target: Point,
    hovering: bool,
}

impl<M: HoverMapping> HoverRegion<M> {
    #[must_use]
    pub fn new(mapping: M, rest: Point) -> Self {
        Self { mapping, rest, target: rest, hovering: false }
    }

    #[must_use]
    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    #[must_use]
    pub fn target(&self) -> Point {
        self.target
    }

    #[must_use]
    pub fn rest(&self) -> Point {
        self.rest
    }

    pub fn enter(&mut self) {
        self.hovering = true;
    }

    /// Clear the hovering flag and return the rest target. The last pointer
    /// position is discarded.
    pub fn leave(&mut self) -> Point {
        self.hovering = false;
        self.target = self.rest;
        self.target
    }

    /// Update the target from a pointer position. Returns `None` (and leaves
    /// the target untouched) when the region is not hovered.
    pub fn pointer_move(&mut self, rect: Rect, pointer: Point) -> Option<Point> {
        if !self.hovering {
            return None;
        }
        self.target = self.mapping.map(rect, pointer);
        Some(self.target)
    }
}
