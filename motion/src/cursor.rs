//! Custom cursor: a dot pinned to the pointer and a ring that trails it.
//!
//! The dot is written on every pointer move. The ring is advanced once per
//! animation frame with a damped approach toward the latest pointer
//! position. Interactive elements toggle a hover style on the body while the
//! pointer is over any of them.

#[cfg(test)]
#[path = "cursor_test.rs"]
mod cursor_test;

use crate::consts::CURSOR_RING_DAMPING;
use crate::damp::Damped2;
use crate::geom::Point;

/// Body class applied while the pointer is over an interactive element.
pub const HOVER_CLASS: &str = "cursor-hover";

#[derive(Debug, Clone)]
pub struct CursorState {
    pointer: Point,
    ring: Damped2,
    hover_depth: u32,
}

impl Default for CursorState {
    fn default() -> Self {
        Self::new(CURSOR_RING_DAMPING)
    }
}

impl CursorState {
    /// Pointer and ring both start at the origin.
    #[must_use]
    pub fn new(damping: f64) -> Self {
        Self {
            pointer: Point::default(),
            ring: Damped2::at_rest(Point::default(), damping),
            hover_depth: 0,
        }
    }

    /// Record a pointer move. Returns where the dot goes.
    pub fn pointer_move(&mut self, pt: Point) -> Point {
        self.pointer = pt;
        self.ring.set_target(pt);
        pt
    }

    #[must_use]
    pub fn pointer(&self) -> Point {
        self.pointer
    }

    #[must_use]
    pub fn ring(&self) -> Point {
        self.ring.current()
    }

    /// Advance the ring one frame. Returns where the ring goes.
    pub fn frame(&mut self) -> Point {
        self.ring.step()
    }

    /// Pointer entered an interactive element. Returns whether the hover
    /// class should now be on.
    pub fn hover_enter(&mut self) -> bool {
        self.hover_depth = self.hover_depth.saturating_add(1);
        true
    }

    /// Pointer left an interactive element. The class stays on while the
    /// pointer is still inside an enclosing interactive element.
    pub fn hover_leave(&mut self) -> bool {
        self.hover_depth = self.hover_depth.saturating_sub(1);
        self.hover_depth > 0
    }

    #[must_use]
    pub fn is_hovering(&self) -> bool {
        self.hover_depth > 0
    }
}
