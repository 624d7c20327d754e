#![allow(clippy::float_cmp)]

use super::*;
use crate::page::{MemoryElement, MemoryPage};
use crate::sched::ManualScheduler;

fn manual() -> (Rc<ManualScheduler>, Rc<dyn Scheduler>) {
    let m = Rc::new(ManualScheduler::new());
    let s: Rc<dyn Scheduler> = m.clone();
    (m, s)
}

// --- parse_target ---

#[test]
fn parse_accepts_clean_integers() {
    assert_eq!(parse_target("47"), Some(47));
    assert_eq!(parse_target("  120 "), Some(120));
    assert_eq!(parse_target("0"), Some(0));
}

#[test]
fn parse_rejects_everything_else() {
    for text in ["", " ", "12+", "+12", "-3", "4.5", "007", "1 000", "abc", "99999999999999999999999"] {
        assert_eq!(parse_target(text), None, "{text:?}");
    }
}

// --- Easing ---

#[test]
fn ease_endpoints_and_clamp() {
    assert_eq!(ease_out_cubic(0.0), 0.0);
    assert_eq!(ease_out_cubic(1.0), 1.0);
    assert_eq!(ease_out_cubic(-1.0), 0.0);
    assert_eq!(ease_out_cubic(2.0), 1.0);
    assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-12);
}

#[test]
fn display_for_47() {
    assert_eq!(display_value(0.0, 47), 0);
    assert_eq!(display_value(1.0, 47), 47);
    let mut prev = 0;
    for i in 0..=1200 {
        let v = display_value(f64::from(i) / 1200.0, 47);
        assert!(v >= prev, "non-decreasing at {i}");
        assert!(v <= 47);
        prev = v;
    }
}

#[test]
fn animation_progress_is_clamped() {
    let anim = CounterAnimation { start_ms: 100.0, duration_ms: 1200.0, target: 47 };
    assert_eq!(anim.progress(0.0), 0.0);
    assert_eq!(anim.progress(700.0), 0.5);
    assert_eq!(anim.progress(5000.0), 1.0);
    assert_eq!(anim.value_at(100.0), 0);
    assert_eq!(anim.value_at(1300.0), 47);
    assert!(anim.is_done(1300.0));
    assert!(!anim.is_done(1299.0));
}

#[test]
fn zero_duration_finishes_immediately() {
    let anim = CounterAnimation { start_ms: 0.0, duration_ms: 0.0, target: 5 };
    assert_eq!(anim.value_at(0.0), 5);
}

// --- Gate ---

#[test]
fn gate_fires_once() {
    let gate = CounterGate::new();
    assert!(!gate.has_fired());
    assert!(gate.try_fire());
    assert!(!gate.try_fire());
    assert!(gate.clone().has_fired());
}

// --- trigger ---

fn stats_page() -> (MemoryPage, Vec<MemoryElement>) {
    let mut page = MemoryPage::new();
    let els = ["47", "12+", "350", "n/a"]
        .into_iter()
        .map(|t| page.add(Marker::StatValue, MemoryElement::new(t)))
        .collect();
    (page, els)
}

#[test]
fn trigger_animates_integers_and_skips_the_rest() {
    let (m, s) = manual();
    let (page, els) = stats_page();
    let gate = CounterGate::new();

    let handles = trigger(&gate, &s, &page, 1200.0);
    assert_eq!(handles.len(), 2);
    assert_eq!(els[0].text(), "0");
    assert_eq!(els[1].text(), "12+");
    assert_eq!(els[2].text(), "0");
    assert_eq!(els[3].text(), "n/a");

    let mut prev = 0;
    for _ in 0..80 {
        m.run_frames(1, 16.0);
        let v: u64 = els[0].text().parse().unwrap();
        assert!(v >= prev);
        prev = v;
    }
    assert_eq!(els[0].text(), "47");
    assert_eq!(els[2].text(), "350");
    assert!(handles.iter().all(|h| !h.is_running()));
    assert_eq!(m.pending_frames(), 0);
}

#[test]
fn triggering_twice_matches_triggering_once() {
    let (m, s) = manual();
    let (page, els) = stats_page();
    let gate = CounterGate::new();

    trigger(&gate, &s, &page, 1200.0);
    m.run_frames(30, 16.0);
    assert!(trigger(&gate, &s, &page, 1200.0).is_empty());
    m.run_frames(60, 16.0);

    let texts: Vec<_> = els.iter().map(PageElement::text).collect();
    assert_eq!(texts, vec!["47", "12+", "350", "n/a"]);
}
