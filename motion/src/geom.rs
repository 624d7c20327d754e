#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

/// A point in client (viewport) coordinates, CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An element's bounding box in client coordinates, as reported by
/// `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point {
            x: self.left + self.width / 2.0,
            y: self.top + self.height / 2.0,
        }
    }

    /// Pointer position as a fraction of the box, centred on zero.
    ///
    /// Inside the box both axes fall in `-0.5..=0.5`. A degenerate box
    /// (zero width or height) maps that axis to `0.0`.
    #[must_use]
    pub fn normalized(&self, pt: Point) -> Point {
        let fx = if self.width > 0.0 { (pt.x - self.left) / self.width - 0.5 } else { 0.0 };
        let fy = if self.height > 0.0 { (pt.y - self.top) / self.height - 0.5 } else { 0.0 };
        Point { x: fx, y: fy }
    }

    /// Pointer offset from the box centre in pixels.
    #[must_use]
    pub fn offset_from_center(&self, pt: Point) -> Point {
        let c = self.center();
        Point { x: pt.x - c.x, y: pt.y - c.y }
    }
}

/// Format a length as a CSS pixel value.
#[must_use]
pub fn css_px(v: f64) -> String {
    format!("{v}px")
}
