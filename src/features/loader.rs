//! Page loader and the start of the boot sequence.
//!
//! Mounted last: by the time load can be reported, every hero listener is
//! registered.

use std::rc::Rc;

use motion::boot::LOADER_HIDDEN_CLASS;
use web_sys::Event;

use crate::app::{Ctx, READY_STATE_COMPLETE};
use crate::dom::{self, DomError, listen, set_class};

pub fn setup(ctx: &Ctx) -> Result<(), DomError> {
    match ctx.document.get_element_by_id("pageLoader") {
        Some(loader) => ctx.boot.on_loader_hidden(move || set_class(&loader, LOADER_HIDDEN_CLASS, true)),
        None => log::debug!("loader: no #pageLoader, hero still sequenced"),
    }

    let (boot, sched) = (ctx.boot.clone(), Rc::clone(&ctx.sched));
    listen(&ctx.window, "load", move |_: Event| {
        boot.page_loaded(&sched);
    })?;
    // Already loaded when the module was instantiated late.
    if dom::ready_state(&ctx.document) == READY_STATE_COMPLETE {
        ctx.boot.page_loaded(&ctx.sched);
    }
    Ok(())
}
