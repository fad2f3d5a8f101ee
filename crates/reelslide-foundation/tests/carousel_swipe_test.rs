//! Drives a carousel through full pointer sequences the way the page binding
//! does: press, a few moves, release.

use reelslide_foundation::{
    CarouselConfig, PointerEvent, PointerEventKind, RenderFrame, SlideCarousel, GRABBING_CURSOR,
    GRAB_CURSOR,
};

const MOBILE_WIDTH: f64 = 390.0;

fn mobile_carousel(slides: usize, config: CarouselConfig) -> SlideCarousel {
    SlideCarousel::new(slides, slides, MOBILE_WIDTH, config).expect("carousel builds")
}

/// Presses at `from_x`, moves to `to_x`, releases after `duration_ms`.
/// Returns the frame emitted on release.
fn drag(
    carousel: &mut SlideCarousel,
    from_x: f32,
    to_x: f32,
    start_ms: i64,
    duration_ms: i64,
) -> Option<RenderFrame> {
    let down = PointerEvent::touch(PointerEventKind::Down, from_x, start_ms);
    let opened = carousel.handle_pointer(&down).expect("press opens a drag");
    assert_eq!(opened.transition, None, "drag suspends the transition");

    let midway = (from_x + to_x) / 2.0;
    let moved = PointerEvent::touch(PointerEventKind::Move, midway, start_ms + duration_ms / 2);
    assert!(carousel.handle_pointer(&moved).is_none());

    let up = PointerEvent::touch(PointerEventKind::Up, to_x, start_ms + duration_ms);
    carousel.handle_pointer(&up)
}

#[test]
fn slow_long_drag_right_goes_to_previous_slide() {
    let mut carousel = mobile_carousel(3, CarouselConfig::enhanced());
    carousel.advance(0).expect("advance renders");

    // 60px rightward over 600ms, well under the velocity threshold
    let frame = drag(&mut carousel, 100.0, 160.0, 1_000, 600).expect("release renders");

    assert_eq!(carousel.current_index(), 0);
    assert_eq!(frame.track_transform, "translateX(0%)");
    assert!(frame.transition.is_some(), "release restores the transition");
}

#[test]
fn short_fast_flick_advances_with_velocity_enabled() {
    let mut carousel = mobile_carousel(3, CarouselConfig::enhanced());

    // 30px leftward in 50ms = 0.6 px/ms
    let frame = drag(&mut carousel, 200.0, 170.0, 0, 50).expect("release renders");

    assert_eq!(carousel.current_index(), 1);
    assert_eq!(frame.track_transform, "translateX(-100%)");
    assert_eq!(frame.active_indicator(), Some(1));
}

#[test]
fn short_fast_flick_ignored_by_basic_variant() {
    let mut carousel = mobile_carousel(3, CarouselConfig::basic());

    let frame = drag(&mut carousel, 200.0, 170.0, 0, 50).expect("release renders");

    assert_eq!(carousel.current_index(), 0);
    assert_eq!(frame.track_transform, "translateX(0%)");
}

#[test]
fn short_slow_drag_snaps_back() {
    let mut carousel = mobile_carousel(4, CarouselConfig::enhanced());

    // 20px over 200ms = 0.1 px/ms
    let frame = drag(&mut carousel, 200.0, 180.0, 0, 200).expect("release renders");

    assert_eq!(carousel.current_index(), 0);
    assert_eq!(frame.active_indicator(), Some(0));
    assert!(frame.transition.is_some());
}

#[test]
fn swipe_during_lock_window_is_dropped() {
    let mut carousel = mobile_carousel(3, CarouselConfig::enhanced());

    drag(&mut carousel, 300.0, 100.0, 0, 100);
    assert_eq!(carousel.current_index(), 1);

    // Second swipe released 150ms after the first one landed.
    drag(&mut carousel, 300.0, 100.0, 120, 130);
    assert_eq!(carousel.current_index(), 1, "locked swipe must not move");

    drag(&mut carousel, 300.0, 100.0, 400, 100);
    assert_eq!(carousel.current_index(), 2);
}

#[test]
fn advance_twice_inside_lock_window_moves_once() {
    let mut carousel = mobile_carousel(5, CarouselConfig::enhanced());

    assert!(carousel.advance(0).is_some());
    assert!(carousel.advance(299).is_none());
    assert_eq!(carousel.current_index(), 1);
    assert!(!carousel.is_locked(300));
}

#[test]
fn basic_variant_has_no_lock() {
    let mut carousel = mobile_carousel(5, CarouselConfig::basic());

    carousel.advance(0);
    carousel.advance(1);
    assert_eq!(carousel.current_index(), 2);
}

#[test]
fn mouse_press_on_nested_button_does_not_start_drag() {
    let mut carousel = mobile_carousel(3, CarouselConfig::enhanced());

    let down = PointerEvent::mouse(PointerEventKind::Down, 200.0, 0).on_control(true);
    assert!(carousel.handle_pointer(&down).is_none());
    assert!(!carousel.is_dragging());

    let up = PointerEvent::mouse(PointerEventKind::Up, 20.0, 50);
    assert!(carousel.handle_pointer(&up).is_none());
    assert_eq!(carousel.current_index(), 0);
}

#[test]
fn mouse_leave_closes_the_drag() {
    let mut carousel = mobile_carousel(3, CarouselConfig::enhanced());

    carousel.handle_pointer(&PointerEvent::mouse(PointerEventKind::Down, 300.0, 0));
    carousel.handle_pointer(&PointerEvent::mouse(PointerEventKind::Move, 200.0, 40));
    let frame = carousel
        .handle_pointer(&PointerEvent::mouse(PointerEventKind::Leave, 200.0, 80))
        .expect("leave closes the sample");

    assert!(!carousel.is_dragging());
    assert_eq!(frame.active_indicator(), Some(1));
}

#[test]
fn goto_current_slide_changes_nothing_and_does_not_lock() {
    let mut carousel = mobile_carousel(3, CarouselConfig::enhanced());

    assert_eq!(carousel.goto_slide(0, 0), Ok(None));
    assert!(!carousel.is_locked(0));

    let frame = carousel
        .goto_slide(2, 10)
        .expect("in range")
        .expect("slide changes");
    assert_eq!(frame.track_transform, "translateX(-200%)");
}

#[test]
fn index_wraps_over_many_swipes() {
    let mut carousel = mobile_carousel(3, CarouselConfig::basic());

    for i in 0..5 {
        drag(&mut carousel, 300.0, 100.0, i * 1_000, 100);
    }
    assert_eq!(carousel.current_index(), 2);

    for i in 5..12 {
        drag(&mut carousel, 100.0, 300.0, i * 1_000, 100);
        assert!(carousel.current_index() < carousel.slide_count());
    }
}

#[test]
fn mouse_drag_switches_cursor_to_grabbing() {
    let mut carousel = mobile_carousel(3, CarouselConfig::enhanced());
    assert_eq!(carousel.cursor(), Some(GRAB_CURSOR));

    carousel.handle_pointer(&PointerEvent::mouse(PointerEventKind::Down, 200.0, 0));
    assert_eq!(carousel.cursor(), Some(GRABBING_CURSOR));

    carousel.handle_pointer(&PointerEvent::mouse(PointerEventKind::Move, 180.0, 20));
    assert_eq!(carousel.cursor(), Some(GRABBING_CURSOR));

    carousel.handle_pointer(&PointerEvent::mouse(PointerEventKind::Leave, 170.0, 40));
    assert_eq!(carousel.cursor(), Some(GRAB_CURSOR));
}

#[test]
fn touch_drag_keeps_grab_cursor_and_desktop_has_none() {
    let mut carousel = mobile_carousel(3, CarouselConfig::enhanced());
    carousel.handle_pointer(&PointerEvent::touch(PointerEventKind::Down, 200.0, 0));
    assert!(carousel.is_dragging());
    assert_eq!(carousel.cursor(), Some(GRAB_CURSOR));

    let desktop =
        SlideCarousel::new(3, 3, 1024.0, CarouselConfig::enhanced()).expect("carousel builds");
    assert_eq!(desktop.cursor(), None);
}
