//! Mobile navigation toggle.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

/// Class on the toggle button while the menu is open.
pub const TOGGLE_ACTIVE_CLASS: &str = "active";

/// Class on the nav list while the menu is open.
pub const NAV_OPEN_CLASS: &str = "open";

/// Styles to apply after a menu change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuView {
    pub open: bool,
    /// Body `overflow`; the page does not scroll behind an open menu.
    pub body_overflow: &'static str,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> MenuView {
        self.open = !self.open;
        self.view()
    }

    /// A link inside the menu was followed.
    pub fn close(&mut self) -> MenuView {
        self.open = false;
        self.view()
    }

    #[must_use]
    pub fn view(&self) -> MenuView {
        MenuView {
            open: self.open,
            body_overflow: if self.open { "hidden" } else { "" },
        }
    }
}
