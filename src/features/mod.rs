//! Page behaviors, one module each.
//!
//! Every setup is independent: a page without the card, a browser without
//! `IntersectionObserver`, or any other missing piece disables that one
//! behavior and logs why. The rest still mount.
//!
//! Mount order matters only for the start-up chain: reveal and counters
//! register on the hero before the loader reports the page loaded.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

#[cfg(feature = "hydrate")]
pub mod anchors;
#[cfg(feature = "hydrate")]
pub mod card;
#[cfg(feature = "hydrate")]
pub mod counters;
#[cfg(feature = "hydrate")]
pub mod cursor;
pub mod form;
#[cfg(feature = "hydrate")]
pub mod header;
#[cfg(feature = "hydrate")]
pub mod loader;
#[cfg(feature = "hydrate")]
pub mod magnetic;
#[cfg(feature = "hydrate")]
pub mod menu;
#[cfg(feature = "hydrate")]
pub mod nav;
#[cfg(feature = "hydrate")]
pub mod parallax;
#[cfg(feature = "hydrate")]
pub mod reveal;

use crate::dom::DomError;

/// Feature names in mount order.
pub const FEATURES: [&str; 12] = [
    "cursor", "header", "menu", "anchors", "nav", "reveal", "card", "magnetic", "form", "parallax",
    "counters", "loader",
];

/// Run one setup; a failure is logged and reported, never propagated.
#[must_use]
pub fn run_isolated(name: &str, setup: impl FnOnce() -> Result<(), DomError>) -> bool {
    match setup() {
        Ok(()) => {
            log::debug!("{name}: mounted");
            true
        }
        Err(err) => {
            log::warn!("{name}: disabled ({err})");
            false
        }
    }
}

/// Mount every feature. Returns how many mounted.
#[cfg(feature = "hydrate")]
pub fn mount_all(ctx: &crate::app::Ctx) -> usize {
    type Setup = fn(&crate::app::Ctx) -> Result<(), DomError>;
    let setups: [Setup; FEATURES.len()] = [
        cursor::setup,
        header::setup,
        menu::setup,
        anchors::setup,
        nav::setup,
        reveal::setup,
        card::setup,
        magnetic::setup,
        form::setup,
        parallax::setup,
        counters::setup,
        loader::setup,
    ];
    FEATURES
        .iter()
        .zip(setups)
        .map(|(name, setup)| run_isolated(name, || setup(ctx)))
        .filter(|mounted| *mounted)
        .count()
}
