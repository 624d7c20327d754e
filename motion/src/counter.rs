//! Stat counters: count up from zero to the authored number, once.
//!
//! Only elements whose trimmed text is exactly a non-negative integer literal
//! are animated. Anything else ("12+", "4.5", "007", "") is left as authored.
//! The display at time `t` is `round(ease_out_cubic(progress) * target)`
//! with `progress = elapsed / duration` clamped to `[0, 1]`, so the last
//! frame always shows the exact target.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

use std::cell::Cell;
use std::rc::Rc;

use crate::page::{ElementSource, Marker, PageElement};
use crate::sched::{Flow, FrameLoop, LoopHandle, Scheduler};

/// The authored target, if `text` is a clean non-negative integer literal.
#[must_use]
pub fn parse_target(text: &str) -> Option<u64> {
    let t = text.trim();
    if t.is_empty() || !t.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if t.len() > 1 && t.starts_with('0') {
        return None;
    }
    match t.parse::<u64>() {
        Ok(v) => Some(v),
        Err(_) => None,
    }
}

/// `1 - (1 - p)^3`, with `p` clamped to `[0, 1]`.
#[must_use]
pub fn ease_out_cubic(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}

/// Value shown at `progress` for a counter heading to `target`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn display_value(progress: f64, target: u64) -> u64 {
    (ease_out_cubic(progress) * target as f64).round() as u64
}

/// One counter's timing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterAnimation {
    pub start_ms: f64,
    pub duration_ms: f64,
    pub target: u64,
}

impl CounterAnimation {
    #[must_use]
    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn value_at(&self, now_ms: f64) -> u64 {
        display_value(self.progress(now_ms), self.target)
    }

    #[must_use]
    pub fn is_done(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }

    /// Drive `write` once per frame until the animation completes.
    pub fn run(self, sched: &Rc<dyn Scheduler>, mut write: impl FnMut(u64) + 'static) -> LoopHandle {
        FrameLoop::start(sched, move |now| {
            write(self.value_at(now));
            if self.is_done(now) { Flow::Stop } else { Flow::Continue }
        })
    }
}

/// One-shot trigger for the whole counter sequence.
#[derive(Debug, Clone, Default)]
pub struct CounterGate {
    fired: Rc<Cell<bool>>,
}

impl CounterGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check-then-set in one step. `true` only the first time.
    pub fn try_fire(&self) -> bool {
        !self.fired.replace(true)
    }

    #[must_use]
    pub fn has_fired(&self) -> bool {
        self.fired.get()
    }
}

/// Start every stat counter on the page, unless the gate already fired.
/// Returns the handles of the animations started.
pub fn trigger<S: ElementSource>(
    gate: &CounterGate,
    sched: &Rc<dyn Scheduler>,
    source: &S,
    duration_ms: f64,
) -> Vec<LoopHandle> {
    if !gate.try_fire() {
        log::debug!("counters already triggered");
        return Vec::new();
    }
    let start_ms = sched.now_ms();
    let mut handles = Vec::new();
    for el in source.find_all(Marker::StatValue) {
        let text = el.text();
        let Some(target) = parse_target(&text) else {
            log::debug!("counter text {text:?} is not an integer, left as authored");
            continue;
        };
        el.set_text("0");
        let anim = CounterAnimation { start_ms, duration_ms, target };
        handles.push(anim.run(sched, move |v| el.set_text(&v.to_string())));
    }
    handles
}
