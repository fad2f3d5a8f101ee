//! Carousel configuration.
//!
//! Both storefront variants of the carousel (the velocity-aware, locked,
//! debounced one and the distance-only, immediate one) are the same component
//! driven by a different [`CarouselConfig`].

use crate::gesture_constants::{
    MOBILE_BREAKPOINT_PX, RESIZE_DEBOUNCE_MS, SLIDE_TRANSITION_MS, SWIPE_DISTANCE_THRESHOLD,
    SWIPE_VELOCITY_THRESHOLD,
};
use crate::render::Easing;

/// Named configuration presets, selectable from page markup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CarouselVariant {
    /// Velocity-aware swipes, animation lock, debounced resize, ARIA labels
    /// and arrow-key navigation.
    #[default]
    Enhanced,
    /// Distance-only swipes with immediate resize handling.
    Basic,
}

impl CarouselVariant {
    /// Parses a `data-carousel-variant` attribute value.
    ///
    /// Anything other than `"basic"` selects the enhanced variant.
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("basic") => CarouselVariant::Basic,
            _ => CarouselVariant::Enhanced,
        }
    }

    pub fn config(self) -> CarouselConfig {
        match self {
            CarouselVariant::Enhanced => CarouselConfig::enhanced(),
            CarouselVariant::Basic => CarouselConfig::basic(),
        }
    }
}

/// Tunables for a single carousel instance.
#[derive(Clone, Debug, PartialEq)]
pub struct CarouselConfig {
    /// Allow a fast but short drag to change slides.
    pub use_velocity_threshold: bool,
    /// How long slide changes are locked out after a transition starts.
    /// `None` disables the lock.
    pub lock_duration_ms: Option<u32>,
    /// Quiet period before a resize is handled; 0 handles it immediately.
    pub resize_debounce_ms: u32,
    pub mobile_breakpoint_px: f64,
    /// Whether a width exactly equal to the breakpoint counts as mobile.
    pub breakpoint_inclusive: bool,
    pub transition_ms: u32,
    pub easing: Easing,
    pub swipe_distance_px: f32,
    pub swipe_velocity_px_per_ms: f32,
    /// Carousels with fewer slides than this never activate.
    pub min_slides: usize,
    pub keyboard_navigation: bool,
    /// Project slide position into indicator and control labels.
    pub accessible_labels: bool,
}

impl CarouselConfig {
    pub fn enhanced() -> Self {
        Self {
            use_velocity_threshold: true,
            lock_duration_ms: Some(SLIDE_TRANSITION_MS),
            resize_debounce_ms: RESIZE_DEBOUNCE_MS,
            mobile_breakpoint_px: MOBILE_BREAKPOINT_PX,
            breakpoint_inclusive: false,
            transition_ms: SLIDE_TRANSITION_MS,
            easing: Easing::EaseInOut,
            swipe_distance_px: SWIPE_DISTANCE_THRESHOLD,
            swipe_velocity_px_per_ms: SWIPE_VELOCITY_THRESHOLD,
            min_slides: 2,
            keyboard_navigation: true,
            accessible_labels: true,
        }
    }

    pub fn basic() -> Self {
        Self {
            use_velocity_threshold: false,
            lock_duration_ms: None,
            resize_debounce_ms: 0,
            min_slides: 1,
            keyboard_navigation: false,
            accessible_labels: false,
            ..Self::enhanced()
        }
    }

    /// Enable or disable the velocity threshold.
    pub fn with_velocity_threshold(mut self, enabled: bool) -> Self {
        self.use_velocity_threshold = enabled;
        self
    }

    /// Set the animation lock window, or disable it with `None`.
    pub fn with_lock_duration(mut self, lock_duration_ms: Option<u32>) -> Self {
        self.lock_duration_ms = lock_duration_ms;
        self
    }

    /// Set the resize quiet period.
    pub fn with_resize_debounce(mut self, resize_debounce_ms: u32) -> Self {
        self.resize_debounce_ms = resize_debounce_ms;
        self
    }

    /// Set the mobile breakpoint and whether the boundary itself is mobile.
    pub fn with_breakpoint(mut self, px: f64, inclusive: bool) -> Self {
        self.mobile_breakpoint_px = px;
        self.breakpoint_inclusive = inclusive;
        self
    }

    /// Set the transition duration and easing curve.
    pub fn with_transition(mut self, duration_ms: u32, easing: Easing) -> Self {
        self.transition_ms = duration_ms;
        self.easing = easing;
        self
    }

    pub fn with_keyboard_navigation(mut self, enabled: bool) -> Self {
        self.keyboard_navigation = enabled;
        self
    }

    pub fn with_accessible_labels(mut self, enabled: bool) -> Self {
        self.accessible_labels = enabled;
        self
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self::enhanced()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_preset_drops_enhanced_features() {
        let config = CarouselConfig::basic();
        assert!(!config.use_velocity_threshold);
        assert_eq!(config.lock_duration_ms, None);
        assert_eq!(config.resize_debounce_ms, 0);
        assert!(!config.keyboard_navigation);
        assert_eq!(config.mobile_breakpoint_px, 750.0);
        assert_eq!(config.transition_ms, 300);
    }

    #[test]
    fn variant_attribute_parsing() {
        assert_eq!(
            CarouselVariant::from_attribute(Some(" Basic ")),
            CarouselVariant::Basic
        );
        assert_eq!(
            CarouselVariant::from_attribute(Some("enhanced")),
            CarouselVariant::Enhanced
        );
        assert_eq!(CarouselVariant::from_attribute(None), CarouselVariant::Enhanced);
        assert_eq!(CarouselVariant::Basic.config(), CarouselConfig::basic());
    }

    #[test]
    fn builder_overrides_fields() {
        let config = CarouselConfig::enhanced()
            .with_lock_duration(None)
            .with_breakpoint(600.0, true)
            .with_transition(200, Easing::Linear);
        assert_eq!(config.lock_duration_ms, None);
        assert_eq!(config.mobile_breakpoint_px, 600.0);
        assert!(config.breakpoint_inclusive);
        assert_eq!(config.transition_ms, 200);
        assert_eq!(config.easing, Easing::Linear);
    }
}
