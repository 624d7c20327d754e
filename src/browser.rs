//! [`Scheduler`] backed by the browser event loop.

use gloo_timers::callback::Timeout;
use motion::sched::{FrameTask, Scheduler, Task};
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::Window;

pub struct BrowserScheduler {
    window: Window,
}

impl BrowserScheduler {
    #[must_use]
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Scheduler for BrowserScheduler {
    fn set_timeout(&self, delay_ms: u32, task: Task) {
        Timeout::new(delay_ms, task).forget();
    }

    fn request_frame(&self, task: FrameTask) {
        let cb = Closure::once_into_js(move |ts: f64| task(ts));
        if let Err(err) = self.window.request_animation_frame(cb.unchecked_ref()) {
            log::warn!("requestAnimationFrame failed: {err:?}");
        }
    }

    // Same clock as the frame timestamps, so animations started from a
    // timer and advanced by frames agree on elapsed time.
    fn now_ms(&self) -> f64 {
        self.window.performance().map_or(0.0, |p| p.now())
    }
}
