#![allow(clippy::float_cmp)]

use super::*;

fn sections() -> Vec<SectionOffset> {
    [("hero", 0.0), ("services", 900.0), ("about", 1800.0), ("contact", 2600.0)]
        .into_iter()
        .map(|(id, top)| SectionOffset { id: id.to_owned(), top })
        .collect()
}

#[test]
fn header_threshold_is_exclusive() {
    assert!(!header_scrolled(0.0, 60.0));
    assert!(!header_scrolled(60.0, 60.0));
    assert!(header_scrolled(61.0, 60.0));
}

#[test]
fn anchor_ids() {
    assert_eq!(anchor_target_id("#contact"), Some("contact"));
    assert_eq!(anchor_target_id("#"), None);
    assert_eq!(anchor_target_id("/about"), None);
    assert_eq!(anchor_target_id("#a b"), None);
}

#[test]
fn anchor_scroll_leaves_offset() {
    assert_eq!(anchor_scroll_top(500.0, 1000.0, 90.0), 1410.0);
}

#[test]
fn active_section_leads_by_200() {
    let s = sections();
    assert_eq!(active_section(&s, 0.0, 200.0), Some("hero"));
    assert_eq!(active_section(&s, 699.0, 200.0), Some("hero"));
    assert_eq!(active_section(&s, 700.0, 200.0), Some("services"));
    assert_eq!(active_section(&s, 5000.0, 200.0), Some("contact"));
    assert_eq!(active_section(&[], 100.0, 200.0), None);
}

#[test]
fn nav_matches_current_section() {
    assert!(nav_is_active("#about", Some("about")));
    assert!(!nav_is_active("#about", Some("contact")));
    assert!(!nav_is_active("#", None));
    assert!(!nav_is_active("#about", None));
}

#[test]
fn parallax_speeds_increase_per_index() {
    assert!((ParallaxLayer::Line.speed(0) - 0.02).abs() < 1e-12);
    assert!((ParallaxLayer::Line.speed(2) - 0.04).abs() < 1e-12);
    assert!((ParallaxLayer::Orb.speed(1) - 0.045).abs() < 1e-12);
    assert_eq!(ParallaxLayer::Orb.offset(3, 0.0), 0.0);
}

#[test]
fn parallax_css() {
    assert_eq!(ParallaxLayer::Line.transform_css(0, 100.0), "translateY(2px)");
}
