//! Mobile navigation toggle.

use std::cell::RefCell;
use std::rc::Rc;

use motion::menu::{MenuView, MobileMenu, NAV_OPEN_CLASS, TOGGLE_ACTIVE_CLASS};
use web_sys::{Element, Event, HtmlElement};

use crate::app::Ctx;
use crate::dom::{self, DomError, by_id, listen, set_class};

#[derive(Clone)]
struct MenuNodes {
    toggle: Element,
    nav: Element,
    body: HtmlElement,
}

impl MenuNodes {
    fn apply(&self, view: MenuView) {
        set_class(&self.toggle, TOGGLE_ACTIVE_CLASS, view.open);
        set_class(&self.nav, NAV_OPEN_CLASS, view.open);
        dom::set_style(&self.body, "overflow", view.body_overflow);
    }
}

pub fn setup(ctx: &Ctx) -> Result<(), DomError> {
    let nodes = MenuNodes {
        toggle: by_id(&ctx.document, "mobileToggle")?,
        nav: by_id(&ctx.document, "navLinks")?,
        body: ctx.document.body().ok_or(DomError::MissingElement("body"))?,
    };
    let menu = Rc::new(RefCell::new(MobileMenu::default()));

    let (toggled, on_toggle) = (Rc::clone(&menu), nodes.clone());
    listen(&nodes.toggle, "click", move |_: Event| {
        let view = toggled.borrow_mut().toggle();
        on_toggle.apply(view);
    })?;

    let links = nodes.nav.query_selector_all("a")?;
    for link in dom::elements(&links) {
        let (closed, on_close) = (Rc::clone(&menu), nodes.clone());
        listen(&link, "click", move |_: Event| {
            let view = closed.borrow_mut().close();
            on_close.apply(view);
        })?;
    }
    Ok(())
}
