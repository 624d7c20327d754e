//! Browser host for the landing page motion layer.
//!
//! All behavior lives in the `motion` crate; this crate binds it to the
//! real page. Under the `hydrate` feature it wires DOM events, timers, and
//! frames to the motion state machines. Without it the crate builds natively
//! and exposes only the pure helpers, so `cargo test` runs without a browser.
//!
//! | Module     | Role                                                  |
//! |------------|-------------------------------------------------------|
//! | `app`      | entry point, logger, shared page context              |
//! | `dom`      | element access, listeners, `ElementSource` over DOM   |
//! | `browser`  | `Scheduler` over `setTimeout` and animation frames    |
//! | `settings` | inline JSON configuration                             |
//! | `features` | one setup per page behavior, each isolated            |

pub mod app;
#[cfg(feature = "hydrate")]
pub mod browser;
pub mod dom;
pub mod features;
pub mod settings;
