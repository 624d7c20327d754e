//! Header background once the page scrolls.

use motion::scroll::{SCROLLED_CLASS, header_scrolled};
use web_sys::{Element, Event};

use crate::app::Ctx;
use crate::dom::{DomError, by_id, listen_passive, set_class};

pub fn setup(ctx: &Ctx) -> Result<(), DomError> {
    let header: Element = by_id(&ctx.document, "header")?;
    let threshold = ctx.cfg.header_scrolled_px;
    let window = ctx.window.clone();
    listen_passive(&ctx.window, "scroll", move |_: Event| {
        let y = window.scroll_y().unwrap_or(0.0);
        set_class(&header, SCROLLED_CLASS, header_scrolled(y, threshold));
    })
}
