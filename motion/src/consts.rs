//! Default numeric constants for the interaction core.

// ── Damping ─────────────────────────────────────────────────────

/// Fraction of the remaining distance the cursor ring covers per frame.
pub const CURSOR_RING_DAMPING: f64 = 0.1;

/// Fraction of the remaining rotation the 3D card covers per frame.
pub const CARD_DAMPING: f64 = 0.08;

// ── Card tilt ───────────────────────────────────────────────────

/// Yaw (rotateY) span in degrees for a pointer moving edge to edge.
pub const CARD_YAW_RANGE_DEG: f64 = 40.0;

/// Pitch (rotateX) span in degrees for a pointer moving edge to edge.
pub const CARD_PITCH_RANGE_DEG: f64 = 25.0;

/// Resting pitch in degrees when nothing hovers the card.
pub const CARD_REST_PITCH_DEG: f64 = 8.0;

/// Resting yaw in degrees when nothing hovers the card.
pub const CARD_REST_YAW_DEG: f64 = -15.0;

/// Base angle of the shine gradient.
pub const SHINE_BASE_ANGLE_DEG: f64 = 105.0;

/// Shine angle change per degree of yaw.
pub const SHINE_ANGLE_PER_YAW: f64 = 1.5;

// ── Magnetic buttons ────────────────────────────────────────────

/// Share of the pointer's offset from centre applied as translation.
pub const MAGNETIC_STRENGTH: f64 = 0.2;

/// How long the spring-back transition stays on the element after leave.
pub const MAGNETIC_RELEASE_MS: u32 = 500;

/// Transition applied while a magnetic button springs back to rest.
pub const MAGNETIC_RELEASE_TRANSITION: &str = "transform 0.5s cubic-bezier(0.16, 1, 0.3, 1)";

// ── Reveal ──────────────────────────────────────────────────────

/// Milliseconds per unit of authored `data-reveal-delay`.
pub const REVEAL_DELAY_UNIT_MS: f64 = 200.0;

/// Extra delay per sibling position among reveal-marked siblings.
pub const REVEAL_STAGGER_MS: f64 = 120.0;

/// Visible fraction at which an element counts as intersecting.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Bottom inset of the intersection root, in pixels.
pub const REVEAL_BOTTOM_MARGIN_PX: f64 = 60.0;

// ── Boot sequence ───────────────────────────────────────────────

/// Time the loader stays on screen after page load.
pub const LOADER_HOLD_MS: u32 = 1600;

/// Settle time between hiding the loader and revealing the hero.
pub const HERO_SETTLE_MS: u32 = 200;

/// Delay between the hero reveal and the stat counters starting.
pub const COUNTER_CHAIN_MS: u32 = 1000;

// ── Counters ────────────────────────────────────────────────────

/// Duration of one counter animation.
pub const COUNTER_DURATION_MS: f64 = 1200.0;

// ── Contact form ────────────────────────────────────────────────

/// How long the success or error state is shown before reverting.
pub const FORM_REVERT_MS: u32 = 3000;

// ── Scroll ──────────────────────────────────────────────────────

/// Scroll depth past which the header gets its compact style.
pub const HEADER_SCROLLED_PX: f64 = 60.0;

/// Space left above an anchor target after smooth scrolling to it.
pub const ANCHOR_OFFSET_PX: f64 = 90.0;

/// How far before a section's top the nav already marks it active.
pub const ACTIVE_NAV_LEAD_PX: f64 = 200.0;

/// Parallax speed of the first hero line.
pub const LINE_PARALLAX_BASE: f64 = 0.02;

/// Parallax speed increment per subsequent hero line.
pub const LINE_PARALLAX_STEP: f64 = 0.01;

/// Parallax speed of the first hero orb.
pub const ORB_PARALLAX_BASE: f64 = 0.03;

/// Parallax speed increment per subsequent hero orb.
pub const ORB_PARALLAX_STEP: f64 = 0.015;
