//! Platform-independent core of the Reelslide shoppable-video carousel:
//! swipe recognition, slide state, viewport gating and render projection.

pub mod carousel;
pub mod config;
pub mod error;
pub mod gesture_constants;
pub mod input;
pub mod keyboard;
pub mod render;
pub mod slide_state;
pub mod viewport;

// Re-export commonly used items
pub use carousel::{
    ResizeOutcome, SlideCarousel, ViewportTransition, GRABBING_CURSOR, GRAB_CURSOR,
};
pub use config::{CarouselConfig, CarouselVariant};
pub use error::CarouselError;
pub use input::{
    Point, PointerButton, PointerEvent, PointerEventKind, PointerSource, SwipeIntent,
};
pub use keyboard::{CarouselRegistry, NavigationKey, RegistrationId};
pub use render::{Easing, IndicatorFrame, RenderFrame};
pub use slide_state::SlideChange;
