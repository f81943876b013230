//! Tuning constants for the page interaction engine.
//!
//! Everything time- or distance-based lives here so the individual
//! engine modules stay free of magic numbers.

/// Scroll depth (px) past which the navbar switches to its opaque style.
pub const NAVBAR_SCROLL_THRESHOLD_PX: f64 = 100.0;

/// Minimum spacing between scroll handler executions.
pub const SCROLL_THROTTLE_MS: f64 = 16.0;

/// Maximum translation applied to the hero visual at full scroll depth.
pub const PARALLAX_TRANSLATE_MAX_PX: f64 = 50.0;

/// Maximum rotation applied to the system preview at full scroll depth.
pub const PARALLAX_ROTATE_MAX_DEG: f64 = 5.0;

/// Period of the live metrics jitter tick.
pub const METRIC_TICK_MS: u32 = 2_000;

/// Period of the slower system health tick (screen lines, vents).
pub const HEALTH_TICK_MS: u32 = 5_000;

/// Total duration of an animated scroll to an anchor.
pub const SMOOTH_SCROLL_DURATION_MS: f64 = 800.0;

/// Fixed-navbar allowance subtracted from anchor scroll positions.
pub const NAV_SCROLL_OFFSET_PX: f64 = 80.0;

/// Per-sibling delay step when a grid cascade reveals its children.
pub const REVEAL_STAGGER_STEP_MS: u32 = 100;

/// How long a click ripple lives before it is removed from the DOM.
pub const RIPPLE_LIFETIME_MS: u32 = 600;

/// How long a pressed button stays scaled down.
pub const BUTTON_PRESS_RESET_MS: u32 = 150;

/// How long a clicked suit component pulses at the accelerated rate.
pub const COMPONENT_PULSE_MS: u32 = 500;

/// Length of the demo modal's fade-out before it unmounts.
pub const MODAL_CLOSE_MS: u32 = 300;

/// Number of keystrokes remembered when matching hidden trigger words.
pub const KEY_BUFFER_LEN: usize = 10;

/// Total lifetime of the bubble-storm easter egg.
pub const EASTER_DURATION_MS: u32 = 10_000;

/// Spawn period of the easter egg bubble emitter.
pub const EASTER_SPAWN_INTERVAL_MS: u32 = 200;

/// Bubbles emitted per spawner tick.
pub const EASTER_BUBBLES_PER_WAVE: u32 = 10;

/// Lifetime of a single floating bubble (and of the floating caption).
pub const EASTER_ITEM_LIFETIME_MS: u32 = 7_000;
