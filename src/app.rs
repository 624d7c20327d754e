//! Entry point and the context every feature setup receives.
//!
//! `start` runs when the WASM module is instantiated. It installs the panic
//! hook and console logger, reads the configuration, and mounts the features
//! once the document is parsed.

#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use motion::boot::BootSequence;
#[cfg(feature = "hydrate")]
use motion::config::MotionConfig;
#[cfg(feature = "hydrate")]
use motion::sched::Scheduler;

#[cfg(feature = "hydrate")]
use crate::dom::{DomError, DomPage};

/// Shared handles for the feature setups.
#[cfg(feature = "hydrate")]
pub struct Ctx {
    pub window: web_sys::Window,
    pub document: web_sys::Document,
    pub page: Rc<DomPage>,
    pub sched: Rc<dyn Scheduler>,
    pub cfg: MotionConfig,
    pub boot: BootSequence,
}

#[cfg(feature = "hydrate")]
impl Ctx {
    /// # Errors
    ///
    /// Fails outside a window with a document.
    pub fn from_window(cfg: MotionConfig) -> Result<Self, DomError> {
        let window = web_sys::window().ok_or(DomError::NoWindow)?;
        let document = window.document().ok_or(DomError::NoDocument)?;
        let sched: Rc<dyn Scheduler> = Rc::new(crate::browser::BrowserScheduler::new(window.clone()));
        Ok(Self {
            page: Rc::new(DomPage::new(document.clone())),
            boot: BootSequence::new(&cfg),
            window,
            document,
            sched,
            cfg,
        })
    }
}

/// Document `readyState` while the HTML is still being parsed.
pub const READY_STATE_LOADING: &str = "loading";

/// Document `readyState` once every subresource has loaded.
pub const READY_STATE_COMPLETE: &str = "complete";

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let cfg = crate::settings::load(&document);
    if let Some(level) = cfg.level() {
        if let Err(err) = console_log::init_with_level(level) {
            log::warn!("console logger: {err}");
        }
    }

    if crate::dom::ready_state(&document) == READY_STATE_LOADING {
        let mut cfg = Some(cfg);
        let listened = crate::dom::listen(&document, "DOMContentLoaded", move |_: web_sys::Event| {
            if let Some(cfg) = cfg.take() {
                mount(cfg);
            }
        });
        if let Err(err) = listened {
            log::error!("cannot wait for DOMContentLoaded: {err}");
        }
    } else {
        mount(cfg);
    }
}

#[cfg(feature = "hydrate")]
fn mount(cfg: MotionConfig) {
    match Ctx::from_window(cfg) {
        Ok(ctx) => {
            let mounted = crate::features::mount_all(&ctx);
            log::info!("motion ready: {mounted}/{} features", crate::features::FEATURES.len());
        }
        Err(err) => log::error!("motion disabled: {err}"),
    }
}
