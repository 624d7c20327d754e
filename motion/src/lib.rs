//! Interaction core for the marketing site.
//!
//! Every behaviour on the page is a short-lived response to a browser event
//! (pointer move, scroll, intersection, form submit) applied to a visual
//! property. This crate holds all of that logic without touching the DOM, so
//! it runs and tests on a native target. The `landing` host crate wires DOM
//! events into these types and applies the values and actions they return.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`damp`] | Per-frame damped approach toward a moving target |
//! | [`hover`] | Pointer-in-region to target mapping with rest reversion |
//! | [`cursor`] | Custom cursor dot and lagging ring |
//! | [`card`] | 3D card tilt and shine |
//! | [`magnetic`] | Magnetic button offset and release |
//! | [`reveal`] | One-shot reveal state machine and stagger scheduling |
//! | [`counter`] | Eased stat counters behind a one-shot gate |
//! | [`form`] | Contact form submission lifecycle |
//! | [`scroll`] | Header state, anchor offsets, active nav, parallax |
//! | [`menu`] | Mobile navigation toggle |
//! | [`boot`] | Loader, hero reveal and counter sequencing |
//! | [`sched`] | Timers, frame loops, ready callbacks, virtual clock |
//! | [`page`] | Element markers and the element enumeration capability |
//! | [`geom`] | Points and client rectangles |
//! | [`config`] | Tunable timings and factors |
//! | [`consts`] | Default numeric constants |

pub mod boot;
pub mod card;
pub mod config;
pub mod consts;
pub mod counter;
pub mod cursor;
pub mod damp;
pub mod form;
pub mod geom;
pub mod hover;
pub mod magnetic;
pub mod menu;
pub mod page;
pub mod reveal;
pub mod sched;
pub mod scroll;
