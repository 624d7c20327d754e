//! Values derived from the page scroll position: header style, anchor
//! scrolling, active navigation, and hero parallax.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::consts::{LINE_PARALLAX_BASE, LINE_PARALLAX_STEP, ORB_PARALLAX_BASE, ORB_PARALLAX_STEP};

/// Header class applied once the page is scrolled.
pub const SCROLLED_CLASS: &str = "scrolled";

/// Nav link class for the section currently in view.
pub const ACTIVE_CLASS: &str = "active";

/// Whether the header should use its scrolled style.
#[must_use]
pub fn header_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Section id referenced by an in-page link (`#contact` -> `contact`).
///
/// A bare `#` or anything that is not a fragment has no target.
#[must_use]
pub fn anchor_target_id(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() || id.contains(char::is_whitespace) {
        None
    } else {
        Some(id)
    }
}

/// Document scroll position that puts a target `offset` pixels below the
/// top of the viewport. `rect_top` is the target's client-space top.
#[must_use]
pub fn anchor_scroll_top(rect_top: f64, page_y: f64, offset: f64) -> f64 {
    rect_top + page_y - offset
}

/// A section's id and its document offset.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionOffset {
    pub id: String,
    pub top: f64,
}

/// The last section, in document order, whose top (less `lead`) has been
/// scrolled past.
#[must_use]
pub fn active_section(sections: &[SectionOffset], page_y: f64, lead: f64) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|s| page_y >= s.top - lead)
        .map(|s| s.id.as_str())
}

/// Whether a nav link pointing at `href` belongs to the current section.
#[must_use]
pub fn nav_is_active(href: &str, current: Option<&str>) -> bool {
    match (anchor_target_id(href), current) {
        (Some(target), Some(current)) => target == current,
        _ => false,
    }
}

/// Hero layers that drift with scroll at increasing speeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParallaxLayer {
    Line,
    Orb,
}

impl ParallaxLayer {
    /// Scroll multiplier for the `index`-th element of this layer.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn speed(self, index: usize) -> f64 {
        let (base, step) = match self {
            Self::Line => (LINE_PARALLAX_BASE, LINE_PARALLAX_STEP),
            Self::Orb => (ORB_PARALLAX_BASE, ORB_PARALLAX_STEP),
        };
        base + index as f64 * step
    }

    #[must_use]
    pub fn offset(self, index: usize, page_y: f64) -> f64 {
        page_y * self.speed(index)
    }

    #[must_use]
    pub fn transform_css(self, index: usize, page_y: f64) -> String {
        format!("translateY({}px)", self.offset(index, page_y))
    }
}
