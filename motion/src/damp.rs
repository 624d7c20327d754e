//! Damped approach: each frame, move a fixed fraction of the remaining
//! distance toward the target.
//!
//! This is exponential decay, not a fixed-duration tween. The target may
//! move at any time between frames; the next `step` simply chases the new
//! value. With a factor in `(0, 1]` the value never overshoots a fixed
//! target and approaches it monotonically.

#[cfg(test)]
#[path = "damp_test.rs"]
mod damp_test;

use crate::geom::Point;

/// A scalar chasing a target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Damped {
    current: f64,
    target: f64,
    factor: f64,
}

impl Damped {
    /// Start at rest: current and target both equal `value`, so the first
    /// frames are no-ops until a target arrives.
    ///
    /// `factor` is clamped into `(0, 1]`; a non-finite or non-positive factor
    /// falls back to `1.0` (snap).
    #[must_use]
    pub fn at_rest(value: f64, factor: f64) -> Self {
        let factor = if factor.is_finite() && factor > 0.0 { factor.min(1.0) } else { 1.0 };
        Self { current: value, target: value, factor }
    }

    #[must_use]
    pub fn current(&self) -> f64 {
        self.current
    }

    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    #[must_use]
    pub fn factor(&self) -> f64 {
        self.factor
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Jump straight to the target.
    pub fn snap(&mut self) {
        self.current = self.target;
    }

    /// Advance one frame and return the new value.
    pub fn step(&mut self) -> f64 {
        self.current += (self.target - self.current) * self.factor;
        self.current
    }

    /// Whether the value is within `eps` of the target.
    #[must_use]
    pub fn is_settled(&self, eps: f64) -> bool {
        (self.target - self.current).abs() <= eps
    }
}

/// Two independent axes chasing a target point with a shared factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Damped2 {
    pub x: Damped,
    pub y: Damped,
}

impl Damped2 {
    #[must_use]
    pub fn at_rest(value: Point, factor: f64) -> Self {
        Self {
            x: Damped::at_rest(value.x, factor),
            y: Damped::at_rest(value.y, factor),
        }
    }

    #[must_use]
    pub fn current(&self) -> Point {
        Point::new(self.x.current(), self.y.current())
    }

    #[must_use]
    pub fn target(&self) -> Point {
        Point::new(self.x.target(), self.y.target())
    }

    pub fn set_target(&mut self, target: Point) {
        self.x.set_target(target.x);
        self.y.set_target(target.y);
    }

    pub fn step(&mut self) -> Point {
        Point::new(self.x.step(), self.y.step())
    }

    #[must_use]
    pub fn is_settled(&self, eps: f64) -> bool {
        self.x.is_settled(eps) && self.y.is_settled(eps)
    }
}
