//! Element discovery.
//!
//! Features find their elements through [`ElementSource`] instead of querying
//! the DOM directly. The browser host implements it over `web_sys::Document`;
//! [`MemoryPage`] implements it in memory for tests and other non-browser
//! harnesses.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// The markup markers features look for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// `[data-reveal]`
    Reveal,
    /// `.hero`, the above-the-fold region.
    Hero,
    /// `[data-magnetic]`
    Magnetic,
    /// `[data-nav]`, navigation links carrying a `#section` href.
    NavLink,
    /// `section[id]`
    Section,
    /// `.stat-value`
    StatValue,
    /// Elements that put the cursor into its hover style.
    Interactive,
    /// `a[href^="#"]`
    AnchorLink,
    /// `.hero-lines span`
    HeroLine,
    /// `.hero-orb`
    HeroOrb,
}

impl Marker {
    /// CSS selector for this marker.
    #[must_use]
    pub fn selector(self) -> &'static str {
        match self {
            Self::Reveal => "[data-reveal]",
            Self::Hero => ".hero",
            Self::Magnetic => "[data-magnetic]",
            Self::NavLink => "[data-nav]",
            Self::Section => "section[id]",
            Self::StatValue => ".stat-value",
            Self::Interactive => "a, button, [data-magnetic], .cat-card-v2, .sol-card",
            Self::AnchorLink => "a[href^=\"#\"]",
            Self::HeroLine => ".hero-lines span",
            Self::HeroOrb => ".hero-orb",
        }
    }
}

/// Capabilities a feature needs from one element.
pub trait PageElement: Clone + 'static {
    fn text(&self) -> String;
    fn set_text(&self, text: &str);
    fn attribute(&self, name: &str) -> Option<String>;
    /// Whether the element sits inside a region tagged with `region`.
    fn within(&self, region: Marker) -> bool;
}

/// "Enumerate elements tagged with marker M."
pub trait ElementSource {
    type Element: PageElement;

    /// All elements carrying `marker`, in document order.
    fn find_all(&self, marker: Marker) -> Vec<Self::Element>;

    /// Position of `el` among its parent's children that carry `marker`.
    /// `0` when it has no parent.
    fn sibling_index(&self, el: &Self::Element, marker: Marker) -> usize;
}

#[derive(Debug, Default)]
struct ElementData {
    text: String,
    attrs: HashMap<String, String>,
    regions: Vec<Marker>,
    parent: usize,
}

/// An element in a [`MemoryPage`]. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct MemoryElement {
    data: Rc<RefCell<ElementData>>,
}

impl MemoryElement {
    #[must_use]
    pub fn new(text: &str) -> Self {
        let el = Self::default();
        el.data.borrow_mut().text = text.to_owned();
        el
    }

    #[must_use]
    pub fn with_attr(self, name: &str, value: &str) -> Self {
        self.data.borrow_mut().attrs.insert(name.to_owned(), value.to_owned());
        self
    }

    #[must_use]
    pub fn inside(self, region: Marker) -> Self {
        self.data.borrow_mut().regions.push(region);
        self
    }

    #[must_use]
    pub fn under(self, parent: usize) -> Self {
        self.data.borrow_mut().parent = parent;
        self
    }
}

impl PageElement for MemoryElement {
    fn text(&self) -> String {
        self.data.borrow().text.clone()
    }

    fn set_text(&self, text: &str) {
        text.clone_into(&mut self.data.borrow_mut().text);
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.data.borrow().attrs.get(name).cloned()
    }

    fn within(&self, region: Marker) -> bool {
        self.data.borrow().regions.contains(&region)
    }
}

/// In-memory page.
#[derive(Debug, Default)]
pub struct MemoryPage {
    tagged: Vec<(Marker, MemoryElement)>,
}

impl MemoryPage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element carrying `marker`. Returns a shared handle.
    pub fn add(&mut self, marker: Marker, el: MemoryElement) -> MemoryElement {
        self.tagged.push((marker, el.clone()));
        el
    }
}

impl ElementSource for MemoryPage {
    type Element = MemoryElement;

    fn find_all(&self, marker: Marker) -> Vec<MemoryElement> {
        self.tagged
            .iter()
            .filter(|(m, _)| *m == marker)
            .map(|(_, el)| el.clone())
            .collect()
    }

    fn sibling_index(&self, el: &MemoryElement, marker: Marker) -> usize {
        let parent = el.data.borrow().parent;
        self.tagged
            .iter()
            .filter(|(m, _)| *m == marker)
            .take_while(|(_, other)| !Rc::ptr_eq(&other.data, &el.data))
            .filter(|(_, other)| other.data.borrow().parent == parent)
            .count()
    }
}
