//! Custom cursor: a dot pinned to the pointer and a ring that trails it.

use std::cell::RefCell;
use std::rc::Rc;

use motion::cursor::{CursorState, HOVER_CLASS};
use motion::geom::{Point, css_px};
use motion::page::{ElementSource, Marker};
use motion::sched::{Flow, FrameLoop};
use web_sys::{HtmlElement, MouseEvent};

use crate::app::Ctx;
use crate::dom::{self, DomError, by_id, listen, pointer, set_class};

pub fn setup(ctx: &Ctx) -> Result<(), DomError> {
    if !dom::pointer_is_fine(&ctx.window) {
        log::debug!("cursor: coarse pointer, native cursor kept");
        return Ok(());
    }
    let dot: HtmlElement = by_id(&ctx.document, "cursorDot")?;
    let ring: HtmlElement = by_id(&ctx.document, "cursorRing")?;
    let body = ctx.document.body().ok_or(DomError::MissingElement("body"))?;
    let state = Rc::new(RefCell::new(CursorState::new(ctx.cfg.cursor_damping)));

    let moved = Rc::clone(&state);
    listen(&ctx.document, "mousemove", move |ev: MouseEvent| {
        let at = moved.borrow_mut().pointer_move(pointer(&ev));
        place(&dot, at);
    })?;

    let trailing = Rc::clone(&state);
    FrameLoop::start(&ctx.sched, move |_| {
        let at = trailing.borrow_mut().frame();
        place(&ring, at);
        Flow::Continue
    });

    for target in ctx.page.find_all(Marker::Interactive) {
        let (entered, body_in) = (Rc::clone(&state), body.clone());
        listen(&target.0, "mouseenter", move |_: MouseEvent| {
            set_class(&body_in, HOVER_CLASS, entered.borrow_mut().hover_enter());
        })?;
        let (left, body_out) = (Rc::clone(&state), body.clone());
        listen(&target.0, "mouseleave", move |_: MouseEvent| {
            set_class(&body_out, HOVER_CLASS, left.borrow_mut().hover_leave());
        })?;
    }
    Ok(())
}

fn place(el: &HtmlElement, at: Point) {
    dom::set_style(el, "left", &css_px(at.x));
    dom::set_style(el, "top", &css_px(at.y));
}
