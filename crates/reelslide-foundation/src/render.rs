//! Projection of slide state into visual output.
//!
//! A [`RenderFrame`] is computed from the current index alone and never looks
//! at pointer state. Platform layers write it to their own view tree.

use smallvec::SmallVec;

use crate::config::CarouselConfig;

/// CSS timing functions used for the track transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    pub fn css_name(&self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseIn => "ease-in",
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndicatorFrame {
    pub active: bool,
    pub label: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderFrame {
    /// Value for the track's `transform` property.
    pub track_transform: String,
    /// Value for the track's `transition` property; `None` clears it.
    pub transition: Option<String>,
    pub indicators: SmallVec<[IndicatorFrame; 8]>,
    pub prev_label: Option<String>,
    pub next_label: Option<String>,
}

impl RenderFrame {
    pub fn active_indicator(&self) -> Option<usize> {
        self.indicators.iter().position(|indicator| indicator.active)
    }
}

#[derive(Clone, Debug)]
pub struct RenderSync {
    transition: String,
    accessible_labels: bool,
    indicator_count: usize,
}

impl RenderSync {
    pub fn new(config: &CarouselConfig, indicator_count: usize) -> Self {
        Self {
            transition: transition_css(config.transition_ms, config.easing),
            accessible_labels: config.accessible_labels,
            indicator_count,
        }
    }

    /// Frame for slide `index` of `count`. `animated` is false while a drag
    /// is in progress or when snapping without a transition.
    pub fn project(&self, index: usize, count: usize, animated: bool) -> RenderFrame {
        let indicators = (0..self.indicator_count)
            .map(|i| {
                let active = i == index;
                IndicatorFrame {
                    active,
                    label: self
                        .accessible_labels
                        .then(|| indicator_label(i, count, active)),
                }
            })
            .collect();

        let position = index + 1;
        RenderFrame {
            track_transform: track_transform(index),
            transition: animated.then(|| self.transition.clone()),
            indicators,
            prev_label: self
                .accessible_labels
                .then(|| format!("Previous slide, showing {position} of {count}")),
            next_label: self
                .accessible_labels
                .then(|| format!("Next slide, showing {position} of {count}")),
        }
    }
}

/// Offset of the track for slide `index`: each slide is one track width.
pub fn track_transform(index: usize) -> String {
    let percent = -(index as i64) * 100;
    format!("translateX({percent}%)")
}

pub fn transition_css(duration_ms: u32, easing: Easing) -> String {
    format!("transform {}ms {}", duration_ms, easing.css_name())
}

fn indicator_label(index: usize, count: usize, active: bool) -> String {
    let position = index + 1;
    if active {
        format!("Slide {position} of {count} (current slide)")
    } else {
        format!("Slide {position} of {count}")
    }
}
