//! Hero lines and orbs drift at different rates as the page scrolls.

use motion::page::{ElementSource, Marker};
use motion::scroll::ParallaxLayer;
use web_sys::{Event, HtmlElement};

use crate::app::Ctx;
use crate::dom::{self, DomError, listen_passive};

fn layer(ctx: &Ctx, marker: Marker) -> Vec<HtmlElement> {
    ctx.page.find_all(marker).iter().filter_map(|el| dom::html(&el.0)).collect()
}

pub fn setup(ctx: &Ctx) -> Result<(), DomError> {
    let lines = layer(ctx, Marker::HeroLine);
    let orbs = layer(ctx, Marker::HeroOrb);
    if lines.is_empty() && orbs.is_empty() {
        return Ok(());
    }
    let window = ctx.window.clone();
    listen_passive(&ctx.window, "scroll", move |_: Event| {
        let y = dom::page_y(&window);
        for (kind, els) in [(ParallaxLayer::Orb, &orbs), (ParallaxLayer::Line, &lines)] {
            for (i, el) in els.iter().enumerate() {
                dom::set_style(el, "transform", &kind.transform_css(i, y));
            }
        }
    })
}
