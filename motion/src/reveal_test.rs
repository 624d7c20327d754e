#![allow(clippy::float_cmp)]

use super::*;
use crate::page::{MemoryElement, MemoryPage};

fn scroll(base_units: f64, sibling_index: usize) -> RevealSpec {
    RevealSpec { base_units, sibling_index, hero: false }
}

fn hero(base_units: f64) -> RevealSpec {
    RevealSpec { base_units, sibling_index: 0, hero: true }
}

// --- Delay ---

#[test]
fn delay_combines_base_and_stagger() {
    let t = RevealTracker::default();
    assert_eq!(t.delay_ms(&scroll(0.0, 0)), 0.0);
    assert_eq!(t.delay_ms(&scroll(2.0, 0)), 400.0);
    assert_eq!(t.delay_ms(&scroll(1.0, 3)), 200.0 + 360.0);
}

#[test]
fn stagger_orders_siblings() {
    let mut t = RevealTracker::default();
    let ids: Vec<_> = (0..6).map(|i| t.register(scroll(1.0, i))).collect();
    let delays: Vec<f64> = ids
        .iter()
        .map(|id| t.on_intersect(*id, true).map(|s| s.delay_ms).unwrap())
        .collect();
    for pair in delays.windows(2) {
        assert!(pair[1] >= pair[0]);
    }
}

// --- One-shot ---

#[test]
fn first_intersection_schedules_once() {
    let mut t = RevealTracker::default();
    let id = t.register(scroll(0.0, 1));
    assert_eq!(t.state(id), Some(RevealState::Unobserved));

    let s = t.on_intersect(id, true).unwrap();
    assert_eq!(s, ScheduledReveal { id, delay_ms: 120.0 });
    assert_eq!(t.state(id), Some(RevealState::Pending));

    assert!(t.on_intersect(id, true).is_none());
    assert!(t.on_intersect(id, false).is_none());
    assert!(t.on_intersect(id, true).is_none());
}

#[test]
fn non_intersecting_report_changes_nothing() {
    let mut t = RevealTracker::default();
    let id = t.register(scroll(0.0, 0));
    assert!(t.on_intersect(id, false).is_none());
    assert_eq!(t.state(id), Some(RevealState::Unobserved));
}

#[test]
fn reveal_transition_fires_at_most_once() {
    let mut t = RevealTracker::default();
    let id = t.register(scroll(0.0, 0));
    assert!(!t.mark_revealed(id), "cannot reveal before pending");
    t.on_intersect(id, true);
    assert!(t.mark_revealed(id));
    assert!(!t.mark_revealed(id));
    for _ in 0..5 {
        assert!(t.on_intersect(id, true).is_none());
    }
    assert_eq!(t.state(id), Some(RevealState::Revealed));
}

#[test]
fn unknown_id_is_ignored() {
    let mut t = RevealTracker::default();
    assert!(t.on_intersect(RevealId(9), true).is_none());
    assert!(!t.mark_revealed(RevealId(9)));
    assert_eq!(t.state(RevealId(9)), None);
}

// --- Hero ---

#[test]
fn hero_elements_are_not_watched() {
    let mut t = RevealTracker::default();
    let h = t.register(hero(1.0));
    let s = t.register(scroll(0.0, 0));
    assert_eq!(t.watched(), vec![s]);
    assert!(t.on_intersect(h, true).is_none());
}

#[test]
fn hero_schedule_uses_base_only_and_runs_once() {
    let mut t = RevealTracker::default();
    t.register(hero(0.0));
    t.register(RevealSpec { base_units: 2.0, sibling_index: 4, hero: true });
    t.register(scroll(1.0, 0));

    let first = t.hero_schedule();
    assert_eq!(first.len(), 2);
    assert_eq!(first[0].delay_ms, 0.0);
    assert_eq!(first[1].delay_ms, 400.0);
    assert!(t.hero_schedule().is_empty());

    assert!(t.mark_revealed(first[1].id));
}

// --- Parsing ---

#[test]
fn parse_delay_units_reads_leading_float() {
    assert_eq!(parse_delay_units(None), 0.0);
    assert_eq!(parse_delay_units(Some("")), 0.0);
    assert_eq!(parse_delay_units(Some("2")), 2.0);
    assert_eq!(parse_delay_units(Some(" 1.5")), 1.5);
    assert_eq!(parse_delay_units(Some("3s")), 3.0);
    assert_eq!(parse_delay_units(Some(".5")), 0.5);
    assert_eq!(parse_delay_units(Some("abc")), 0.0);
    assert_eq!(parse_delay_units(Some("-2")), 0.0);
}

#[test]
fn intersection_spec_from_defaults() {
    let t = RevealTracker::default();
    assert_eq!(t.intersection().threshold, 0.1);
    assert_eq!(t.intersection().root_margin, "0px 0px -60px 0px");
}

#[test]
fn scan_reads_markup() {
    let mut page = MemoryPage::new();
    page.add(Marker::Reveal, MemoryElement::new("").inside(Marker::Hero).with_attr(DELAY_ATTR, "1").under(0));
    page.add(Marker::Reveal, MemoryElement::new("").under(1));
    page.add(Marker::Reveal, MemoryElement::new("").with_attr(DELAY_ATTR, "2").under(1));
    page.add(Marker::Reveal, MemoryElement::new("").under(2));
    page.add(Marker::Reveal, MemoryElement::new("").under(1));

    let (mut t, elements) = RevealTracker::scan(&MotionConfig::default(), &page);
    assert_eq!(elements.len(), 5);
    assert_eq!(t.watched(), vec![RevealId(1), RevealId(2), RevealId(3), RevealId(4)]);

    assert_eq!(t.on_intersect(RevealId(2), true).map(|s| s.delay_ms), Some(400.0 + 120.0));
    assert_eq!(t.on_intersect(RevealId(3), true).map(|s| s.delay_ms), Some(0.0));
    assert_eq!(t.on_intersect(RevealId(4), true).map(|s| s.delay_ms), Some(240.0));
    assert_eq!(t.hero_schedule()[0].delay_ms, 200.0);
}
