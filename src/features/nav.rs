//! Highlight the nav link of the section being read.

use motion::page::{ElementSource, Marker};
use motion::scroll::{ACTIVE_CLASS, SectionOffset, active_section, nav_is_active};
use web_sys::Event;

use crate::app::Ctx;
use crate::dom::{self, DomError, listen_passive, set_class};

pub fn setup(ctx: &Ctx) -> Result<(), DomError> {
    let sections = ctx.page.find_all(Marker::Section);
    let links = ctx.page.find_all(Marker::NavLink);
    if links.is_empty() {
        log::debug!("nav: no [data-nav] links");
        return Ok(());
    }
    let lead = ctx.cfg.active_nav_lead_px;
    let window = ctx.window.clone();
    listen_passive(&ctx.window, "scroll", move |_: Event| {
        // Offsets shift as images load and fonts swap; read them per event.
        let offsets: Vec<SectionOffset> = sections
            .iter()
            .filter_map(|s| {
                let top = dom::html(&s.0)?.offset_top();
                Some(SectionOffset { id: s.0.id(), top: f64::from(top) })
            })
            .collect();
        let current = active_section(&offsets, dom::page_y(&window), lead);
        for link in &links {
            let href = link.0.get_attribute("href").unwrap_or_default();
            set_class(&link.0, ACTIVE_CLASS, nav_is_active(&href, current));
        }
    })
}
