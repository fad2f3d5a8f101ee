//! Element lookup and frame application.

use reelslide_foundation::RenderFrame;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::selectors;

/// The parts of one carousel root.
pub struct CarouselElements {
    pub root: Element,
    pub track: HtmlElement,
    pub slides: Vec<Element>,
    pub prev: Option<Element>,
    pub next: Option<Element>,
    pub indicators: Vec<Element>,
}

impl CarouselElements {
    /// Collects the parts under `root`. Returns `Ok(None)` when the root has
    /// no slide track; controls and indicators are optional.
    pub fn query(root: &Element) -> Result<Option<Self>, JsValue> {
        let Some(track) = root.query_selector(selectors::TRACK)? else {
            return Ok(None);
        };
        let track = track.dyn_into::<HtmlElement>()?;

        Ok(Some(Self {
            root: root.clone(),
            track,
            slides: query_all(root, selectors::SLIDE)?,
            prev: root.query_selector(selectors::PREV)?,
            next: root.query_selector(selectors::NEXT)?,
            indicators: query_all(root, selectors::INDICATOR)?,
        }))
    }

    pub fn apply(&self, frame: &RenderFrame) -> Result<(), JsValue> {
        let style = self.track.style();
        style.set_property("transform", &frame.track_transform)?;
        style.set_property("transition", frame.transition.as_deref().unwrap_or("none"))?;

        for (element, indicator) in self.indicators.iter().zip(frame.indicators.iter()) {
            element
                .class_list()
                .toggle_with_force(selectors::ACTIVE_CLASS, indicator.active)?;
            if indicator.active {
                element.set_attribute("aria-current", "true")?;
            } else {
                element.remove_attribute("aria-current")?;
            }
            if let Some(label) = &indicator.label {
                element.set_attribute("aria-label", label)?;
            }
        }

        for (control, label) in [(&self.prev, &frame.prev_label), (&self.next, &frame.next_label)] {
            let Some(control) = control else { continue };
            control.remove_attribute("disabled")?;
            if let Some(label) = label {
                control.set_attribute("aria-label", label)?;
            }
        }
        Ok(())
    }

    /// Sets the track cursor. `None` restores the stylesheet's cursor.
    pub fn set_cursor(&self, cursor: Option<&str>) -> Result<(), JsValue> {
        let style = self.track.style();
        match cursor {
            Some(cursor) => style.set_property("cursor", cursor),
            None => style.remove_property("cursor").map(|_| ()),
        }
    }

    /// Whether a pointer-down on `target` landed on a nested interactive
    /// control of this carousel.
    pub fn is_on_control(&self, target: Option<web_sys::EventTarget>) -> bool {
        let Some(element) = target.and_then(|t| t.dyn_into::<Element>().ok()) else {
            return false;
        };
        match element.closest(selectors::INTERACTIVE) {
            Ok(Some(control)) => self.root.contains(Some(control.as_ref())),
            _ => false,
        }
    }
}

pub fn query_all(scope: &Element, selector: &str) -> Result<Vec<Element>, JsValue> {
    let list = scope.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}
