//! Smooth in-page anchor scrolling, clear of the fixed header.

use motion::page::{ElementSource, Marker};
use motion::scroll::{anchor_scroll_top, anchor_target_id};
use web_sys::{MouseEvent, ScrollBehavior, ScrollToOptions};

use crate::app::Ctx;
use crate::dom::{self, DomError, listen};

pub fn setup(ctx: &Ctx) -> Result<(), DomError> {
    let offset = ctx.cfg.anchor_offset_px;
    for link in ctx.page.find_all(Marker::AnchorLink) {
        let (window, document, anchor) = (ctx.window.clone(), ctx.document.clone(), link.0.clone());
        listen(&link.0, "click", move |ev: MouseEvent| {
            let href = anchor.get_attribute("href").unwrap_or_default();
            let Some(target) = anchor_target_id(&href).and_then(|id| document.get_element_by_id(id)) else {
                return;
            };
            ev.prevent_default();
            let top = anchor_scroll_top(dom::client_rect(&target).top, dom::page_y(&window), offset);
            let opts = ScrollToOptions::new();
            opts.set_top(top);
            opts.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&opts);
        })?;
    }
    Ok(())
}
