//! Swipe recogniser.
//!
//! Turns a press/move/release sequence of the primary pointer into a
//! [`SwipeIntent`]. Displacement is measured as `start - end`, so a leftward
//! drag (revealing the next slide) is positive.

use super::types::{Point, PointerEvent, PointerEventKind, PointerSource};

/// What a finished gesture asks the carousel to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeIntent {
    Advance,
    Retreat,
    /// Snap back to the current slide.
    NoOp,
}

/// Thresholds a drag must exceed to count as a swipe.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeThresholds {
    pub distance_px: f32,
    /// `None` classifies on distance alone.
    pub velocity_px_per_ms: Option<f32>,
}

/// Open gesture: created on press, updated on move, consumed on release.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSample {
    pub start: Point,
    pub current: Point,
    pub start_time_ms: i64,
    pub source: PointerSource,
}

impl GestureSample {
    pub fn delta(&self) -> f32 {
        self.start.x - self.current.x
    }
}

/// Result of feeding one pointer event to the tracker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureUpdate {
    /// A sample was opened; the transition should be suspended.
    Started,
    Moved,
    /// The sample was closed with this intent.
    Ended(SwipeIntent),
    /// The event had no effect.
    Ignored,
}

#[derive(Clone, Debug)]
pub struct GestureTracker {
    thresholds: SwipeThresholds,
    sample: Option<GestureSample>,
}

impl GestureTracker {
    pub fn new(thresholds: SwipeThresholds) -> Self {
        Self {
            thresholds,
            sample: None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.sample.is_some()
    }

    pub fn sample(&self) -> Option<&GestureSample> {
        self.sample.as_ref()
    }

    pub fn handle(&mut self, event: &PointerEvent) -> GestureUpdate {
        match event.kind {
            PointerEventKind::Down => {
                if self.press(event) {
                    GestureUpdate::Started
                } else {
                    GestureUpdate::Ignored
                }
            }
            PointerEventKind::Move => {
                if self.drag_to(event.position) {
                    GestureUpdate::Moved
                } else {
                    GestureUpdate::Ignored
                }
            }
            PointerEventKind::Up | PointerEventKind::Leave => self
                .release(event.position, event.time_ms)
                .map_or(GestureUpdate::Ignored, GestureUpdate::Ended),
            PointerEventKind::Cancel => self
                .cancel()
                .map_or(GestureUpdate::Ignored, GestureUpdate::Ended),
        }
    }

    /// Opens a sample if the event is a primary press outside nested
    /// controls. A press while a sample is already open restarts it.
    pub fn press(&mut self, event: &PointerEvent) -> bool {
        if !event.is_primary_press() {
            return false;
        }
        self.sample = Some(GestureSample {
            start: event.position,
            current: event.position,
            start_time_ms: event.time_ms,
            source: event.source,
        });
        true
    }

    pub fn drag_to(&mut self, position: Point) -> bool {
        match self.sample.as_mut() {
            Some(sample) => {
                sample.current = position;
                true
            }
            None => false,
        }
    }

    /// Closes the open sample at `position` and classifies it.
    pub fn release(&mut self, position: Point, time_ms: i64) -> Option<SwipeIntent> {
        let mut sample = self.sample.take()?;
        sample.current = position;
        let elapsed_ms = time_ms - sample.start_time_ms;
        Some(classify_swipe(sample.delta(), elapsed_ms, self.thresholds))
    }

    pub fn cancel(&mut self) -> Option<SwipeIntent> {
        self.sample.take().map(|_| SwipeIntent::NoOp)
    }
}

/// Average speed of a drag in px/ms.
///
/// A zero or negative duration with non-zero displacement is treated as the
/// fastest possible drag so the result stays finite.
pub fn swipe_velocity(delta: f32, elapsed_ms: i64) -> f32 {
    if delta == 0.0 {
        return 0.0;
    }
    if elapsed_ms <= 0 {
        return f32::MAX;
    }
    delta.abs() / elapsed_ms as f32
}

pub fn classify_swipe(delta: f32, elapsed_ms: i64, thresholds: SwipeThresholds) -> SwipeIntent {
    if delta == 0.0 || !delta.is_finite() {
        return SwipeIntent::NoOp;
    }
    let far_enough = delta.abs() > thresholds.distance_px;
    let fast_enough = thresholds
        .velocity_px_per_ms
        .is_some_and(|min| swipe_velocity(delta, elapsed_ms) > min);
    if !(far_enough || fast_enough) {
        return SwipeIntent::NoOp;
    }
    if delta > 0.0 {
        SwipeIntent::Advance
    } else {
        SwipeIntent::Retreat
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::types::PointerButton;

    const WITH_VELOCITY: SwipeThresholds = SwipeThresholds {
        distance_px: 50.0,
        velocity_px_per_ms: Some(0.5),
    };

    const DISTANCE_ONLY: SwipeThresholds = SwipeThresholds {
        distance_px: 50.0,
        velocity_px_per_ms: None,
    };

    #[test]
    fn long_slow_drag_right_retreats() {
        // 60px over 600ms = 0.1 px/ms
        assert_eq!(classify_swipe(-60.0, 600, WITH_VELOCITY), SwipeIntent::Retreat);
        assert_eq!(classify_swipe(-60.0, 600, DISTANCE_ONLY), SwipeIntent::Retreat);
    }

    #[test]
    fn short_fast_flick_advances_only_with_velocity() {
        // 30px over 50ms = 0.6 px/ms
        assert_eq!(classify_swipe(30.0, 50, WITH_VELOCITY), SwipeIntent::Advance);
        assert_eq!(classify_swipe(30.0, 50, DISTANCE_ONLY), SwipeIntent::NoOp);
    }

    #[test]
    fn short_slow_drag_is_noop() {
        // 20px over 200ms = 0.1 px/ms
        assert_eq!(classify_swipe(20.0, 200, WITH_VELOCITY), SwipeIntent::NoOp);
        assert_eq!(classify_swipe(-20.0, 200, WITH_VELOCITY), SwipeIntent::NoOp);
    }

    #[test]
    fn distance_threshold_is_exclusive() {
        assert_eq!(classify_swipe(50.0, 1_000, DISTANCE_ONLY), SwipeIntent::NoOp);
        assert_eq!(classify_swipe(50.5, 1_000, DISTANCE_ONLY), SwipeIntent::Advance);
    }

    #[test]
    fn zero_duration_gesture_stays_finite() {
        let velocity = swipe_velocity(10.0, 0);
        assert!(velocity.is_finite());
        assert_eq!(classify_swipe(10.0, 0, WITH_VELOCITY), SwipeIntent::Advance);
        assert_eq!(classify_swipe(0.0, 0, WITH_VELOCITY), SwipeIntent::NoOp);
    }

    #[test]
    fn tracker_opens_moves_and_closes() {
        let mut tracker = GestureTracker::new(WITH_VELOCITY);
        let down = PointerEvent::touch(PointerEventKind::Down, 200.0, 0);
        assert_eq!(tracker.handle(&down), GestureUpdate::Started);
        assert!(tracker.is_dragging());

        let moved = PointerEvent::touch(PointerEventKind::Move, 120.0, 100);
        assert_eq!(tracker.handle(&moved), GestureUpdate::Moved);
        assert_eq!(tracker.sample().map(GestureSample::delta), Some(80.0));

        let up = PointerEvent::touch(PointerEventKind::Up, 120.0, 400);
        assert_eq!(
            tracker.handle(&up),
            GestureUpdate::Ended(SwipeIntent::Advance)
        );
        assert!(!tracker.is_dragging());
    }

    #[test]
    fn move_and_release_without_sample_are_ignored() {
        let mut tracker = GestureTracker::new(WITH_VELOCITY);
        let moved = PointerEvent::mouse(PointerEventKind::Move, 10.0, 0);
        let up = PointerEvent::mouse(PointerEventKind::Up, 10.0, 10);
        let cancel = PointerEvent::touch(PointerEventKind::Cancel, 10.0, 10);
        assert_eq!(tracker.handle(&moved), GestureUpdate::Ignored);
        assert_eq!(tracker.handle(&up), GestureUpdate::Ignored);
        assert_eq!(tracker.handle(&cancel), GestureUpdate::Ignored);
    }

    #[test]
    fn press_on_nested_control_never_opens_sample() {
        let mut tracker = GestureTracker::new(WITH_VELOCITY);
        let down = PointerEvent::mouse(PointerEventKind::Down, 100.0, 0).on_control(true);
        assert_eq!(tracker.handle(&down), GestureUpdate::Ignored);
        assert!(!tracker.is_dragging());
    }

    #[test]
    fn secondary_mouse_button_is_ignored() {
        let mut tracker = GestureTracker::new(WITH_VELOCITY);
        let down = PointerEvent::mouse(PointerEventKind::Down, 100.0, 0)
            .with_button(Some(PointerButton::Secondary));
        assert!(!tracker.press(&down));
    }

    #[test]
    fn cancel_snaps_back() {
        let mut tracker = GestureTracker::new(WITH_VELOCITY);
        tracker.handle(&PointerEvent::touch(PointerEventKind::Down, 300.0, 0));
        tracker.handle(&PointerEvent::touch(PointerEventKind::Move, 100.0, 10));
        assert_eq!(
            tracker.handle(&PointerEvent::touch(PointerEventKind::Cancel, 100.0, 20)),
            GestureUpdate::Ended(SwipeIntent::NoOp)
        );
    }
}
