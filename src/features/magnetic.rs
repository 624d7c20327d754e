//! Buttons that lean toward the pointer.

use std::cell::RefCell;
use std::rc::Rc;

use motion::magnetic::MagneticButton;
use motion::page::{ElementSource, Marker};
use web_sys::MouseEvent;

use crate::app::Ctx;
use crate::dom::{self, DomError, listen, pointer};

pub fn setup(ctx: &Ctx) -> Result<(), DomError> {
    if !dom::pointer_is_fine(&ctx.window) {
        return Ok(());
    }
    for el in ctx.page.find_all(Marker::Magnetic) {
        let Some(button) = dom::html(&el.0) else {
            continue;
        };
        let state = Rc::new(RefCell::new(MagneticButton::from_config(&ctx.cfg)));

        let entered = Rc::clone(&state);
        listen(&button, "mouseenter", move |_: MouseEvent| entered.borrow_mut().enter())?;

        let (moved, target) = (Rc::clone(&state), button.clone());
        listen(&button, "mousemove", move |ev: MouseEvent| {
            let rect = dom::client_rect(&target);
            if let Some(css) = moved.borrow_mut().pointer_move(rect, pointer(&ev)) {
                dom::set_style(&target, "transform", &css);
            }
        })?;

        let (left, target, sched) = (Rc::clone(&state), button.clone(), Rc::clone(&ctx.sched));
        listen(&button, "mouseleave", move |_: MouseEvent| {
            let release = left.borrow_mut().leave();
            dom::set_style(&target, "transform", release.transform);
            dom::set_style(&target, "transition", release.transition);
            let settled = target.clone();
            sched.set_timeout(
                release.clear_transition_after_ms,
                Box::new(move || dom::set_style(&settled, "transition", "")),
            );
        })?;
    }
    Ok(())
}
