//! Current slide index with wraparound and the animation lock.

use crate::error::CarouselError;

/// Outcome of a slide transition request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlideChange {
    Changed { from: usize, to: usize },
    /// Already on the requested slide.
    Unchanged,
    /// Dropped because a transition is still settling.
    Locked,
}

impl SlideChange {
    pub fn is_changed(&self) -> bool {
        matches!(self, SlideChange::Changed { .. })
    }
}

#[derive(Clone, Debug)]
pub struct SlideState {
    current: usize,
    count: usize,
    lock_duration_ms: Option<u32>,
    /// Deadline after which the lock no longer holds.
    locked_until: Option<i64>,
}

impl SlideState {
    pub fn new(count: usize, lock_duration_ms: Option<u32>) -> Result<Self, CarouselError> {
        if count == 0 {
            return Err(CarouselError::NoSlides);
        }
        Ok(Self {
            current: 0,
            count,
            lock_duration_ms,
            locked_until: None,
        })
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_locked(&self, now_ms: i64) -> bool {
        self.locked_until.is_some_and(|until| now_ms < until)
    }

    pub fn advance(&mut self, now_ms: i64) -> SlideChange {
        self.step(1, now_ms)
    }

    pub fn retreat(&mut self, now_ms: i64) -> SlideChange {
        self.step(-1, now_ms)
    }

    /// Moves by `delta` slides, wrapping at both ends.
    pub fn step(&mut self, delta: isize, now_ms: i64) -> SlideChange {
        let count = self.count as isize;
        let target = (self.current as isize + delta).rem_euclid(count) as usize;
        self.transition_to(target, now_ms)
    }

    /// Jumps to `index`. Requesting the current slide changes nothing and
    /// does not engage the lock.
    pub fn goto_slide(&mut self, index: usize, now_ms: i64) -> Result<SlideChange, CarouselError> {
        if index >= self.count {
            return Err(CarouselError::IndexOutOfRange {
                index,
                count: self.count,
            });
        }
        if index == self.current {
            return Ok(SlideChange::Unchanged);
        }
        Ok(self.transition_to(index, now_ms))
    }

    /// Returns to the first slide and releases the lock.
    pub fn reset(&mut self) {
        self.current = 0;
        self.locked_until = None;
    }

    fn transition_to(&mut self, target: usize, now_ms: i64) -> SlideChange {
        if self.is_locked(now_ms) {
            log::debug!(
                "slide change to {} dropped while locked (current={})",
                target,
                self.current
            );
            return SlideChange::Locked;
        }
        if let Some(duration) = self.lock_duration_ms {
            self.locked_until = Some(now_ms + i64::from(duration));
        }
        let from = self.current;
        self.current = target;
        if from == target {
            SlideChange::Unchanged
        } else {
            SlideChange::Changed { from, to: target }
        }
    }
}
