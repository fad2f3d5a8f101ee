//! Shared gesture and timing constants for the carousel.
//!
//! Distances are in CSS pixels and times in milliseconds. The presets in
//! [`crate::CarouselConfig`] start from these values.

/// Minimum horizontal displacement that counts as a swipe.
///
/// A drag shorter than this only changes the slide when the velocity
/// threshold is enabled and exceeded.
pub const SWIPE_DISTANCE_THRESHOLD: f32 = 50.0;

/// Minimum average velocity, in pixels per millisecond, that counts as a swipe
/// even when the distance threshold is not met.
pub const SWIPE_VELOCITY_THRESHOLD: f32 = 0.5;

/// Duration of the slide-track transform transition.
///
/// The animation lock is held for exactly this long.
pub const SLIDE_TRANSITION_MS: u32 = 300;

/// Quiet period after the last resize before the viewport is re-evaluated.
pub const RESIZE_DEBOUNCE_MS: u32 = 250;

/// Viewport width separating mobile (carousel active) from desktop layout.
pub const MOBILE_BREAKPOINT_PX: f64 = 750.0;
