//! Magnetic buttons drift toward the pointer while hovered and spring back
//! on leave.

#[cfg(test)]
#[path = "magnetic_test.rs"]
mod magnetic_test;

use crate::config::MotionConfig;
use crate::consts::MAGNETIC_RELEASE_TRANSITION;
use crate::geom::{Point, Rect};
use crate::hover::{HoverRegion, MagneticMapping};

/// Style writes the host applies when the pointer leaves a magnetic button.
///
/// The transform is cleared and a transition installed so the button eases
/// home. After `clear_transition_after_ms` the transition is removed again so
/// it does not damp the next hover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Release {
    pub transform: &'static str,
    pub transition: &'static str,
    pub clear_transition_after_ms: u32,
}

#[derive(Debug, Clone)]
pub struct MagneticButton {
    region: HoverRegion<MagneticMapping>,
    release_ms: u32,
}

impl Default for MagneticButton {
    fn default() -> Self {
        Self::from_config(&MotionConfig::default())
    }
}

impl MagneticButton {
    #[must_use]
    pub fn from_config(cfg: &MotionConfig) -> Self {
        let mapping = MagneticMapping { strength: cfg.magnetic_strength };
        Self {
            region: HoverRegion::new(mapping, Point::default()),
            release_ms: cfg.magnetic_release_ms,
        }
    }

    pub fn enter(&mut self) {
        self.region.enter();
    }

    /// Returns the transform to write, or `None` when not hovered.
    pub fn pointer_move(&mut self, rect: Rect, pointer: Point) -> Option<String> {
        self.region.pointer_move(rect, pointer).map(translate_css)
    }

    pub fn leave(&mut self) -> Release {
        self.region.leave();
        Release {
            transform: "",
            transition: MAGNETIC_RELEASE_TRANSITION,
            clear_transition_after_ms: self.release_ms,
        }
    }

    #[must_use]
    pub fn offset(&self) -> Point {
        self.region.target()
    }
}

#[must_use]
pub fn translate_css(offset: Point) -> String {
    format!("translate({}px, {}px)", offset.x, offset.y)
}
