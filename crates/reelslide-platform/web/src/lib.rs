//! Storefront page binding for the Reelslide carousel.
//!
//! On module start every `[data-shoppable-carousel]` root in the document is
//! wired up. Theme-editor section reloads rescan the reloaded subtree and
//! section unloads tear down the carousels inside it.

mod clock;
mod dom;
mod mount;
pub mod selectors;

use gloo_events::EventListener;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

pub use mount::{mount_within, teardown_within, MountedCarousel};

/// Module entry point: installs logging and mounts the page's carousels once
/// the document is parsed.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let document = document()?;
    let debug = document
        .document_element()
        .is_some_and(|html| html.has_attribute(selectors::DEBUG_ATTR));
    // A host page may already have installed a logger.
    let _ = console_log::init_with_level(log_level(debug));

    install_section_listeners(&document);

    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", |_| {
            if let Err(err) = mount_all() {
                log::warn!("carousel scan failed: {:?}", err);
            }
        })
        .forget();
    } else {
        mount_all()?;
    }
    Ok(())
}

/// Mounts every carousel root in the document that is not mounted yet.
/// Returns the number of newly mounted roots.
#[wasm_bindgen(js_name = mountAll)]
pub fn mount_all() -> Result<u32, JsValue> {
    let root = document()?
        .document_element()
        .ok_or("document has no root element")?;
    let mounted = mount_within(&root)?;
    log::debug!("mounted {} carousel(s)", mounted);
    Ok(mounted as u32)
}

/// Removes every listener and pending timer of every mounted carousel.
#[wasm_bindgen(js_name = teardownAll)]
pub fn teardown_all() -> u32 {
    mount::teardown_all() as u32
}

fn document() -> Result<Document, JsValue> {
    let window = web_sys::window().ok_or("no global window exists")?;
    Ok(window.document().ok_or("should have a document on window")?)
}

fn install_section_listeners(document: &Document) {
    EventListener::new(document, selectors::SECTION_LOAD_EVENT, |event| {
        let Some(section) = event_element(event) else {
            return;
        };
        match mount_within(&section) {
            Ok(count) => log::debug!("section load mounted {} carousel(s)", count),
            Err(err) => log::warn!("section load rescan failed: {:?}", err),
        }
    })
    .forget();

    EventListener::new(document, selectors::SECTION_UNLOAD_EVENT, |event| {
        let Some(section) = event_element(event) else {
            return;
        };
        let count = teardown_within(&section);
        log::debug!("section unload tore down {} carousel(s)", count);
    })
    .forget();
}

fn event_element(event: &web_sys::Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

fn log_level(debug: bool) -> log::Level {
    if debug {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}
