//! Viewport gating.
//!
//! The carousel only runs on narrow viewports. [`ViewportPolicy`] tracks which
//! side of the breakpoint the page is on and reports crossings;
//! [`ResizeDebouncer`] coalesces bursts of resize events into one evaluation.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportChange {
    EnteredMobile,
    EnteredDesktop,
    Unchanged,
}

#[derive(Clone, Debug)]
pub struct ViewportPolicy {
    breakpoint_px: f64,
    inclusive: bool,
    mobile: bool,
}

impl ViewportPolicy {
    pub fn new(breakpoint_px: f64, inclusive: bool, width: f64) -> Self {
        let mut policy = Self {
            breakpoint_px,
            inclusive,
            mobile: false,
        };
        policy.mobile = policy.is_mobile_width(width);
        policy
    }

    /// Below the breakpoint is mobile; the breakpoint itself is mobile only
    /// when `inclusive` is set.
    pub fn is_mobile_width(&self, width: f64) -> bool {
        if self.inclusive {
            width <= self.breakpoint_px
        } else {
            width < self.breakpoint_px
        }
    }

    pub fn is_mobile(&self) -> bool {
        self.mobile
    }

    pub fn update(&mut self, width: f64) -> ViewportChange {
        let mobile = self.is_mobile_width(width);
        let change = match (self.mobile, mobile) {
            (false, true) => ViewportChange::EnteredMobile,
            (true, false) => ViewportChange::EnteredDesktop,
            _ => ViewportChange::Unchanged,
        };
        self.mobile = mobile;
        change
    }
}

/// What the caller should do with a resize.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ResizeSchedule {
    /// Evaluate this width now.
    Immediate(f64),
    /// (Re)arm a single timer for `delay_ms`, replacing any pending one, then
    /// call [`ResizeDebouncer::fire`].
    Deferred { delay_ms: u32 },
}

/// Holds at most one pending resize.
#[derive(Clone, Debug)]
pub struct ResizeDebouncer {
    delay_ms: u32,
    pending: Option<f64>,
}

impl ResizeDebouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            pending: None,
        }
    }

    pub fn push(&mut self, width: f64) -> ResizeSchedule {
        if self.delay_ms == 0 {
            self.pending = None;
            return ResizeSchedule::Immediate(width);
        }
        self.pending = Some(width);
        ResizeSchedule::Deferred {
            delay_ms: self.delay_ms,
        }
    }

    /// Takes the latest pending width once the quiet period has elapsed.
    pub fn fire(&mut self) -> Option<f64> {
        self.pending.take()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
