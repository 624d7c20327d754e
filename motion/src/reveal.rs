//! One-shot reveal state machine.
//!
//! Each reveal-marked element moves `Unobserved -> Pending -> Revealed` and
//! never back. Scroll-revealed elements become `Pending` the first time the
//! intersection watcher reports them past the threshold; the host then
//! releases that element's subscription and fires the reveal after the
//! computed delay. Hero elements are never watched. They are sequenced once
//! by [`RevealTracker::hero_schedule`] when the page finishes loading, so the
//! first impression does not depend on scroll position.
//!
//! Delay for a scroll reveal is `base_units * unit_ms + sibling_index *
//! stagger_ms`, which cascades siblings that enter together.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::config::MotionConfig;
use crate::page::{ElementSource, Marker, PageElement};

/// Attribute carrying the authored delay in units.
pub const DELAY_ATTR: &str = "data-reveal-delay";

/// Class that plays the reveal transition.
pub const REVEALED_CLASS: &str = "revealed";

/// Handle for a registered element, in registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RevealId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Unobserved,
    Pending,
    Revealed,
}

/// Authored reveal properties of one element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealSpec {
    /// Authored delay in units (`data-reveal-delay`).
    pub base_units: f64,
    /// Position among reveal-marked siblings under the same parent.
    pub sibling_index: usize,
    /// Inside the above-the-fold hero region.
    pub hero: bool,
}

/// A reveal the host should fire after `delay_ms`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduledReveal {
    pub id: RevealId,
    pub delay_ms: f64,
}

/// Intersection watcher options.
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionSpec {
    pub threshold: f64,
    pub root_margin: String,
}

#[derive(Debug, Clone)]
struct Entry {
    spec: RevealSpec,
    state: RevealState,
}

#[derive(Debug, Clone)]
pub struct RevealTracker {
    entries: Vec<Entry>,
    unit_ms: f64,
    stagger_ms: f64,
    intersection: IntersectionSpec,
}

impl Default for RevealTracker {
    fn default() -> Self {
        Self::from_config(&MotionConfig::default())
    }
}

impl RevealTracker {
    #[must_use]
    pub fn from_config(cfg: &MotionConfig) -> Self {
        Self {
            entries: Vec::new(),
            unit_ms: cfg.reveal_delay_unit_ms,
            stagger_ms: cfg.reveal_stagger_ms,
            intersection: IntersectionSpec {
                threshold: cfg.reveal_threshold,
                root_margin: cfg.reveal_root_margin(),
            },
        }
    }

    /// Register every reveal-marked element on the page. The returned
    /// elements are indexed by [`RevealId`].
    #[must_use]
    pub fn scan<S: ElementSource>(cfg: &MotionConfig, source: &S) -> (Self, Vec<S::Element>) {
        let mut tracker = Self::from_config(cfg);
        let elements = source.find_all(Marker::Reveal);
        for el in &elements {
            tracker.register(RevealSpec {
                base_units: parse_delay_units(el.attribute(DELAY_ATTR).as_deref()),
                sibling_index: source.sibling_index(el, Marker::Reveal),
                hero: el.within(Marker::Hero),
            });
        }
        log::debug!("reveal: {} elements, {} watched", tracker.len(), tracker.watched().len());
        (tracker, elements)
    }

    #[must_use]
    pub fn intersection(&self) -> &IntersectionSpec {
        &self.intersection
    }

    pub fn register(&mut self, spec: RevealSpec) -> RevealId {
        let id = RevealId(self.entries.len());
        self.entries.push(Entry { spec, state: RevealState::Unobserved });
        id
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn state(&self, id: RevealId) -> Option<RevealState> {
        self.entries.get(id.0).map(|e| e.state)
    }

    /// Elements the intersection watcher should observe: everything outside
    /// the hero region.
    #[must_use]
    pub fn watched(&self) -> Vec<RevealId> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| !e.spec.hero)
            .map(|(i, _)| RevealId(i))
            .collect()
    }

    /// Scroll delay for an element: authored base plus sibling stagger.
    #[must_use]
    pub fn delay_ms(&self, spec: &RevealSpec) -> f64 {
        spec.base_units.max(0.0) * self.unit_ms + spec.sibling_index as f64 * self.stagger_ms
    }

    /// Handle a watcher report. Returns the reveal to schedule the first time
    /// an unobserved, non-hero element crosses the threshold; the host must
    /// then stop observing it. Every later report for that element is `None`.
    pub fn on_intersect(&mut self, id: RevealId, is_intersecting: bool) -> Option<ScheduledReveal> {
        if !is_intersecting {
            return None;
        }
        let (spec, state) = {
            let e = self.entries.get(id.0)?;
            (e.spec, e.state)
        };
        if spec.hero || state != RevealState::Unobserved {
            return None;
        }
        let delay_ms = self.delay_ms(&spec);
        self.set_state(id, RevealState::Pending);
        log::debug!("reveal {} pending, fires in {delay_ms}ms", id.0);
        Some(ScheduledReveal { id, delay_ms })
    }

    /// Schedule every hero element once. Hero delays use the authored base
    /// only; the hero sequence has no sibling stagger. A second call returns
    /// nothing.
    pub fn hero_schedule(&mut self) -> Vec<ScheduledReveal> {
        let unit_ms = self.unit_ms;
        let mut out = Vec::new();
        for (i, e) in self.entries.iter_mut().enumerate() {
            if e.spec.hero && e.state == RevealState::Unobserved {
                e.state = RevealState::Pending;
                out.push(ScheduledReveal {
                    id: RevealId(i),
                    delay_ms: e.spec.base_units.max(0.0) * unit_ms,
                });
            }
        }
        out
    }

    /// Complete a pending reveal. Returns `true` only on the transition into
    /// `Revealed`; the host applies the class then.
    pub fn mark_revealed(&mut self, id: RevealId) -> bool {
        if self.state(id) == Some(RevealState::Pending) {
            self.set_state(id, RevealState::Revealed);
            true
        } else {
            false
        }
    }

    fn set_state(&mut self, id: RevealId, state: RevealState) {
        if let Some(e) = self.entries.get_mut(id.0) {
            e.state = state;
        }
    }
}

/// Parse an authored delay attribute the way browsers parse a leading float:
/// the longest numeric prefix counts, anything unparseable is `0`. Negative
/// delays clamp to `0`.
#[must_use]
pub fn parse_delay_units(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else {
        return 0.0;
    };
    let s = raw.trim_start();
    let mut end = 0;
    let mut seen_dot = false;
    for (i, ch) in s.char_indices() {
        match ch {
            '+' | '-' if i == 0 => {}
            '0'..='9' => {}
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end = i + ch.len_utf8();
    }
    s[..end].parse::<f64>().map_or(0.0, |v| if v.is_finite() { v.max(0.0) } else { 0.0 })
}
