pub mod gesture;
pub mod types;

pub use gesture::{
    classify_swipe, swipe_velocity, GestureSample, GestureTracker, GestureUpdate, SwipeIntent,
    SwipeThresholds,
};
pub use types::{Point, PointerButton, PointerEvent, PointerEventKind, PointerSource};

