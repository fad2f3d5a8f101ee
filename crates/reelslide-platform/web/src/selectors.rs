//! Markup contract between the storefront theme and the carousel.

pub const ROOT: &str = "[data-shoppable-carousel]";
pub const TRACK: &str = "[data-carousel-track]";
pub const SLIDE: &str = "[data-carousel-slide]";
pub const PREV: &str = "[data-carousel-prev]";
pub const NEXT: &str = "[data-carousel-next]";
pub const INDICATOR: &str = "[data-carousel-indicator]";

/// Pointer-downs inside these never start a mouse drag.
pub const INTERACTIVE: &str = "button, a, [role=\"button\"]";

pub const MOUNTED_ATTR: &str = "data-carousel-mounted";
pub const VARIANT_ATTR: &str = "data-carousel-variant";
/// Set on `<html>` to log at debug level.
pub const DEBUG_ATTR: &str = "data-carousel-debug";

pub const ACTIVE_CLASS: &str = "is-active";

/// Dispatched by the theme editor on the section element it (re)loaded.
pub const SECTION_LOAD_EVENT: &str = "shopify:section:load";
pub const SECTION_UNLOAD_EVENT: &str = "shopify:section:unload";
