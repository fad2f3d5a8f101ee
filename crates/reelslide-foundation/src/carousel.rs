//! The carousel component.
//!
//! [`SlideCarousel`] wires the gesture tracker, slide state, viewport policy
//! and render projection together. It owns no platform resources: callers
//! feed it events with timestamps and write back the [`RenderFrame`]s it
//! returns.

use crate::config::CarouselConfig;
use crate::error::CarouselError;
use crate::input::{
    GestureTracker, GestureUpdate, PointerEvent, PointerSource, SwipeIntent, SwipeThresholds,
};
use crate::keyboard::NavigationKey;
use crate::render::{RenderFrame, RenderSync};
use crate::slide_state::{SlideChange, SlideState};
use crate::viewport::{ResizeDebouncer, ResizeSchedule, ViewportChange, ViewportPolicy};

pub const GRAB_CURSOR: &str = "grab";
pub const GRABBING_CURSOR: &str = "grabbing";

/// Result of a viewport re-evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewportTransition {
    /// Crossed into mobile: wire input and render with the transition on.
    Activated(RenderFrame),
    /// Crossed into desktop: unwire input and snap to the first slide
    /// without a transition.
    Deactivated(RenderFrame),
    Unchanged,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResizeOutcome {
    /// Arm (or re-arm) the debounce timer, then call
    /// [`SlideCarousel::settle_resize`].
    Deferred { delay_ms: u32 },
    Applied(ViewportTransition),
}

pub struct SlideCarousel {
    config: CarouselConfig,
    slides: SlideState,
    tracker: GestureTracker,
    viewport: ViewportPolicy,
    debouncer: ResizeDebouncer,
    render: RenderSync,
}

impl SlideCarousel {
    pub fn new(
        slide_count: usize,
        indicator_count: usize,
        viewport_width: f64,
        config: CarouselConfig,
    ) -> Result<Self, CarouselError> {
        let slides = SlideState::new(slide_count, config.lock_duration_ms)?;
        let tracker = GestureTracker::new(SwipeThresholds {
            distance_px: config.swipe_distance_px,
            velocity_px_per_ms: config
                .use_velocity_threshold
                .then_some(config.swipe_velocity_px_per_ms),
        });
        let viewport = ViewportPolicy::new(
            config.mobile_breakpoint_px,
            config.breakpoint_inclusive,
            viewport_width,
        );
        let debouncer = ResizeDebouncer::new(config.resize_debounce_ms);
        let render = RenderSync::new(&config, indicator_count);

        Ok(Self {
            config,
            slides,
            tracker,
            viewport,
            debouncer,
            render,
        })
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn current_index(&self) -> usize {
        self.slides.current()
    }

    pub fn slide_count(&self) -> usize {
        self.slides.count()
    }

    pub fn is_dragging(&self) -> bool {
        self.tracker.is_dragging()
    }

    /// Last known pointer x of the open drag.
    pub fn drag_position(&self) -> Option<f32> {
        self.tracker.sample().map(|sample| sample.current.x)
    }

    /// Cursor for the track: `grabbing` while a mouse drag is open, `grab`
    /// otherwise. `None` while inactive restores the page default.
    pub fn cursor(&self) -> Option<&'static str> {
        if !self.is_active() {
            return None;
        }
        match self.tracker.sample() {
            Some(sample) if sample.source == PointerSource::Mouse => Some(GRABBING_CURSOR),
            _ => Some(GRAB_CURSOR),
        }
    }

    pub fn is_locked(&self, now_ms: i64) -> bool {
        self.slides.is_locked(now_ms)
    }

    /// Whether the carousel has enough slides to ever run. A disabled
    /// carousel wires nothing, not even the resize listener.
    pub fn is_enabled(&self) -> bool {
        self.slides.count() >= self.config.min_slides
    }

    pub fn is_active(&self) -> bool {
        self.is_enabled() && self.viewport.is_mobile()
    }

    /// Frame to apply at construction. `None` leaves the default layout.
    pub fn initial_frame(&self) -> Option<RenderFrame> {
        self.is_active().then(|| self.frame(true))
    }

    pub fn frame(&self, animated: bool) -> RenderFrame {
        self.render
            .project(self.slides.current(), self.slides.count(), animated)
    }

    /// Feeds one pointer event. Returns a frame when the view must change:
    /// with the transition suspended when a drag opens, and with it restored
    /// (at the new or unchanged index) when the drag closes.
    pub fn handle_pointer(&mut self, event: &PointerEvent) -> Option<RenderFrame> {
        if !self.is_active() {
            return None;
        }
        match self.tracker.handle(event) {
            GestureUpdate::Started => Some(self.frame(false)),
            GestureUpdate::Moved | GestureUpdate::Ignored => None,
            GestureUpdate::Ended(intent) => {
                let change = match intent {
                    SwipeIntent::Advance => self.slides.advance(event.time_ms),
                    SwipeIntent::Retreat => self.slides.retreat(event.time_ms),
                    SwipeIntent::NoOp => SlideChange::Unchanged,
                };
                log::debug!("swipe {:?} -> {:?}", intent, change);
                Some(self.frame(true))
            }
        }
    }

    pub fn advance(&mut self, now_ms: i64) -> Option<RenderFrame> {
        self.step(1, now_ms)
    }

    pub fn retreat(&mut self, now_ms: i64) -> Option<RenderFrame> {
        self.step(-1, now_ms)
    }

    /// Jumps to `index`. Returns `Ok(None)` when nothing changes: inactive,
    /// already there, or locked.
    pub fn goto_slide(
        &mut self,
        index: usize,
        now_ms: i64,
    ) -> Result<Option<RenderFrame>, CarouselError> {
        if !self.is_active() {
            return Ok(None);
        }
        let change = self.slides.goto_slide(index, now_ms)?;
        Ok(self.frame_for(change))
    }

    /// Routes an arrow key. `None` means the key was not handled and the
    /// page keeps its default behaviour.
    pub fn handle_key(&mut self, key: NavigationKey, now_ms: i64) -> Option<RenderFrame> {
        if !self.config.keyboard_navigation || !self.is_active() {
            return None;
        }
        let change = match key {
            NavigationKey::Next => self.slides.advance(now_ms),
            NavigationKey::Previous => self.slides.retreat(now_ms),
        };
        log::debug!("key {:?} -> {:?}", key, change);
        Some(self.frame(true))
    }

    pub fn handle_resize(&mut self, width: f64) -> ResizeOutcome {
        if !self.is_enabled() {
            return ResizeOutcome::Applied(ViewportTransition::Unchanged);
        }
        match self.debouncer.push(width) {
            ResizeSchedule::Immediate(width) => ResizeOutcome::Applied(self.apply_width(width)),
            ResizeSchedule::Deferred { delay_ms } => ResizeOutcome::Deferred { delay_ms },
        }
    }

    /// Applies the last width pushed through [`Self::handle_resize`] once the
    /// debounce timer fires.
    pub fn settle_resize(&mut self) -> ViewportTransition {
        match self.debouncer.fire() {
            Some(width) => self.apply_width(width),
            None => ViewportTransition::Unchanged,
        }
    }

    /// Drops transient state: an open gesture and any pending resize.
    pub fn cancel_pending(&mut self) {
        self.tracker.cancel();
        self.debouncer.cancel();
    }

    fn step(&mut self, delta: isize, now_ms: i64) -> Option<RenderFrame> {
        if !self.is_active() {
            return None;
        }
        let change = self.slides.step(delta, now_ms);
        self.frame_for(change)
    }

    fn frame_for(&self, change: SlideChange) -> Option<RenderFrame> {
        match change {
            SlideChange::Changed { from, to } => {
                log::debug!("slide {} -> {}", from, to);
                Some(self.frame(true))
            }
            SlideChange::Unchanged | SlideChange::Locked => None,
        }
    }

    fn apply_width(&mut self, width: f64) -> ViewportTransition {
        match self.viewport.update(width) {
            ViewportChange::EnteredDesktop => {
                log::debug!("viewport {}px left mobile; resetting carousel", width);
                self.tracker.cancel();
                self.slides.reset();
                ViewportTransition::Deactivated(self.frame(false))
            }
            ViewportChange::EnteredMobile => {
                log::debug!("viewport {}px entered mobile", width);
                ViewportTransition::Activated(self.frame(true))
            }
            ViewportChange::Unchanged => ViewportTransition::Unchanged,
        }
    }
}
