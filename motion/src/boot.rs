//! Start-up sequence: page load, loader, hero reveal, and what chains off it.
//!
//! ```text
//! load ──loader_hold_ms──▶ loader hidden ──hero_settle_ms──▶ hero ready
//!                                                              │
//!                                      registered callbacks, in order
//! ```
//!
//! The browser may report load twice (the `load` event and the
//! already-complete fallback); only the first report starts the sequence.

#[cfg(test)]
#[path = "boot_test.rs"]
mod boot_test;

use std::cell::Cell;
use std::rc::Rc;

use crate::config::MotionConfig;
use crate::sched::{ReadyQueue, Scheduler};

/// Class that fades the loader out.
pub const LOADER_HIDDEN_CLASS: &str = "hidden";

#[derive(Clone)]
pub struct BootSequence {
    started: Rc<Cell<bool>>,
    loader_hold_ms: u32,
    hero_settle_ms: u32,
    loader_hidden: ReadyQueue,
    hero: ReadyQueue,
}

impl BootSequence {
    #[must_use]
    pub fn new(cfg: &MotionConfig) -> Self {
        Self {
            started: Rc::new(Cell::new(false)),
            loader_hold_ms: cfg.loader_hold_ms,
            hero_settle_ms: cfg.hero_settle_ms,
            loader_hidden: ReadyQueue::new(),
            hero: ReadyQueue::new(),
        }
    }

    /// Run `f` when the loader is hidden.
    pub fn on_loader_hidden(&self, f: impl FnOnce() + 'static) {
        self.loader_hidden.push(f);
    }

    /// Run `f` when the hero is ready to reveal. Callbacks run in
    /// registration order.
    pub fn on_hero(&self, f: impl FnOnce() + 'static) {
        self.hero.push(f);
    }

    /// Run `f` `delay_ms` after the hero is ready.
    pub fn after_hero(&self, sched: &Rc<dyn Scheduler>, delay_ms: u32, f: impl FnOnce() + 'static) {
        let sched = Rc::clone(sched);
        self.on_hero(move || sched.set_timeout(delay_ms, Box::new(f)));
    }

    /// The page finished loading. Returns `false` if the sequence had
    /// already started.
    pub fn page_loaded(&self, sched: &Rc<dyn Scheduler>) -> bool {
        if self.started.replace(true) {
            return false;
        }
        log::debug!("page loaded, loader hides in {}ms", self.loader_hold_ms);
        let loader_hidden = self.loader_hidden.clone();
        let hero = self.hero.clone();
        let settle_ms = self.hero_settle_ms;
        let next = Rc::clone(sched);
        sched.set_timeout(
            self.loader_hold_ms,
            Box::new(move || {
                loader_hidden.fire();
                next.set_timeout(
                    settle_ms,
                    Box::new(move || {
                        hero.fire();
                    }),
                );
            }),
        );
        true
    }

    #[must_use]
    pub fn hero_ready(&self) -> bool {
        self.hero.has_fired()
    }
}
