//! Stat counters, started once a beat after the hero reveal.

use std::rc::Rc;

use motion::counter::{self, CounterGate};

use crate::app::Ctx;
use crate::dom::DomError;

pub fn setup(ctx: &Ctx) -> Result<(), DomError> {
    let gate = CounterGate::new();
    let (sched, page) = (Rc::clone(&ctx.sched), Rc::clone(&ctx.page));
    let duration_ms = ctx.cfg.counter_duration_ms;
    ctx.boot.after_hero(&ctx.sched, ctx.cfg.counter_chain_ms, move || {
        let started = counter::trigger(&gate, &sched, &*page, duration_ms);
        log::debug!("counters: {} animating", started.len());
    });
    Ok(())
}
