//! Hero card that tilts toward the pointer, with a sheen that follows.

use std::cell::RefCell;
use std::rc::Rc;

use motion::card::CardTilt;
use motion::sched::{Flow, FrameLoop};
use web_sys::{Element, HtmlElement, MouseEvent};

use crate::app::Ctx;
use crate::dom::{self, DomError, by_id, listen, pointer};

pub fn setup(ctx: &Ctx) -> Result<(), DomError> {
    let scene: Element = by_id(&ctx.document, "cardScene")?;
    let card: HtmlElement = by_id(&ctx.document, "card3d")?;
    let shine = card.query_selector(".cfront-shine")?.and_then(|el| dom::html(&el));
    let tilt = Rc::new(RefCell::new(CardTilt::from_config(&ctx.cfg)));

    let entered = Rc::clone(&tilt);
    listen(&scene, "mouseenter", move |_: MouseEvent| entered.borrow_mut().enter())?;
    let left = Rc::clone(&tilt);
    listen(&scene, "mouseleave", move |_: MouseEvent| left.borrow_mut().leave())?;
    let (moved, region) = (Rc::clone(&tilt), scene.clone());
    listen(&scene, "mousemove", move |ev: MouseEvent| {
        moved.borrow_mut().pointer_move(dom::client_rect(&region), pointer(&ev));
    })?;

    FrameLoop::start(&ctx.sched, move |_| {
        let pose = tilt.borrow_mut().frame();
        dom::set_style(&card, "transform", &pose.transform_css());
        if let Some(shine) = &shine {
            dom::set_style(shine, "background", &pose.shine_css());
        }
        Flow::Continue
    });
    Ok(())
}
