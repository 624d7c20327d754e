//! Scroll and hero reveals.
//!
//! One `IntersectionObserver` watches every reveal element outside the hero.
//! An element is unobserved the moment it fires, so scrolling back never
//! replays it. Hero elements are revealed by the boot sequence instead.

use std::cell::RefCell;
use std::rc::Rc;

use motion::reveal::{REVEALED_CLASS, RevealId, RevealTracker, ScheduledReveal};
use motion::sched::Scheduler;
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::app::Ctx;
use crate::dom::{DomElement, DomError, set_class, timer_ms};

#[derive(Clone)]
struct Reveals {
    tracker: Rc<RefCell<RevealTracker>>,
    elements: Rc<Vec<DomElement>>,
    sched: Rc<dyn Scheduler>,
}

impl Reveals {
    fn id_of(&self, target: &Element) -> Option<RevealId> {
        self.elements
            .iter()
            .position(|el| el.0.is_same_node(Some(target.as_ref())))
            .map(RevealId)
    }

    fn schedule(&self, due: ScheduledReveal) {
        let this = self.clone();
        self.sched.set_timeout(
            timer_ms(due.delay_ms),
            Box::new(move || {
                let fire = this.tracker.borrow_mut().mark_revealed(due.id);
                if let Some(el) = this.elements.get(due.id.0).filter(|_| fire) {
                    set_class(&el.0, REVEALED_CLASS, true);
                }
            }),
        );
    }
}

pub fn setup(ctx: &Ctx) -> Result<(), DomError> {
    let (tracker, elements) = RevealTracker::scan(&ctx.cfg, &*ctx.page);
    if tracker.is_empty() {
        return Ok(());
    }
    let watch = tracker.intersection().clone();
    let watched = tracker.watched();
    let reveals = Reveals {
        tracker: Rc::new(RefCell::new(tracker)),
        elements: Rc::new(elements),
        sched: Rc::clone(&ctx.sched),
    };

    // Registered before the observer so the hero still plays if the
    // observer is unavailable.
    let hero = reveals.clone();
    ctx.boot.on_hero(move || {
        let due = hero.tracker.borrow_mut().hero_schedule();
        for reveal in due {
            hero.schedule(reveal);
        }
    });

    if watched.is_empty() {
        return Ok(());
    }
    let observed = reveals.clone();
    let cb = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(id) = observed.id_of(&target) else {
                    continue;
                };
                let due = observed.tracker.borrow_mut().on_intersect(id, entry.is_intersecting());
                if let Some(due) = due {
                    observer.unobserve(&target);
                    observed.schedule(due);
                }
            }
        },
    );
    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(watch.threshold));
    init.set_root_margin(&watch.root_margin);
    let observer = IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &init)?;
    cb.forget();
    for id in watched {
        if let Some(el) = reveals.elements.get(id.0) {
            observer.observe(&el.0);
        }
    }
    Ok(())
}
