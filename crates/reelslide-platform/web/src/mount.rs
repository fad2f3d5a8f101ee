//! Per-root wiring: listeners, timers and the keyboard registry.
//!
//! Every closure handed to the browser holds a `Weak` reference to its
//! carousel, so dropping a [`MountedCarousel`] makes all of them inert.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_events::{EventListener, EventListenerOptions};
use gloo_timers::callback::Timeout;
use reelslide_foundation::{
    CarouselRegistry, CarouselVariant, NavigationKey, PointerButton, PointerEvent,
    PointerEventKind, PointerSource, RegistrationId, RenderFrame, ResizeOutcome, SlideCarousel,
    ViewportTransition,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, KeyboardEvent, MouseEvent,
    TouchEvent,
};

use crate::clock::Clock;
use crate::dom::{query_all, CarouselElements};
use crate::selectors;

type WeakInstance = Weak<RefCell<CarouselInstance>>;

thread_local! {
    static MOUNTED: RefCell<Vec<MountedCarousel>> = const { RefCell::new(Vec::new()) };
    static KEYBOARD: RefCell<CarouselRegistry<WeakInstance>> = RefCell::new(CarouselRegistry::new());
    static KEY_LISTENER: RefCell<Option<EventListener>> = const { RefCell::new(None) };
}

struct CarouselInstance {
    carousel: SlideCarousel,
    elements: CarouselElements,
    clock: Clock,
    this: WeakInstance,
    /// Last visibility reported by the intersection observer.
    visible: bool,
    /// Gesture, control and indicator listeners; present only while active.
    input_listeners: Vec<EventListener>,
    registration: Option<RegistrationId>,
    resize_timer: Option<Timeout>,
}

impl CarouselInstance {
    fn render(&self, frame: Option<RenderFrame>) {
        let Some(frame) = frame else { return };
        if let Err(err) = self.elements.apply(&frame) {
            log::warn!("carousel render failed: {:?}", err);
        }
    }

    fn sync_cursor(&self) {
        if let Err(err) = self.elements.set_cursor(self.carousel.cursor()) {
            log::warn!("carousel cursor update failed: {:?}", err);
        }
    }

    fn activate(&mut self) {
        if self.input_listeners.is_empty() {
            self.input_listeners = self.build_input_listeners();
        }
        if self.carousel.config().keyboard_navigation && self.registration.is_none() {
            install_key_listener();
            let visible = self.visible;
            let this = self.this.clone();
            self.registration = KEYBOARD
                .try_with(|registry| {
                    let mut registry = registry.borrow_mut();
                    let id = registry.register(this);
                    registry.set_visible(id, visible);
                    id
                })
                .ok();
        }
    }

    fn deactivate(&mut self) {
        self.input_listeners.clear();
        if let Some(id) = self.registration.take() {
            let _ = KEYBOARD.try_with(|registry| registry.borrow_mut().unregister(id));
        }
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        if let Some(id) = self.registration {
            let _ = KEYBOARD.try_with(|registry| registry.borrow_mut().set_visible(id, visible));
        }
    }

    fn on_resize(&mut self) {
        let Some(width) = viewport_width() else { return };
        match self.carousel.handle_resize(width) {
            ResizeOutcome::Deferred { delay_ms } => {
                let this = self.this.clone();
                // Replacing the previous timeout cancels it.
                self.resize_timer = Some(Timeout::new(delay_ms, move || {
                    with_instance(&this, |instance| {
                        let transition = instance.carousel.settle_resize();
                        instance.apply_viewport(transition);
                    });
                }));
            }
            ResizeOutcome::Applied(transition) => self.apply_viewport(transition),
        }
    }

    fn apply_viewport(&mut self, transition: ViewportTransition) {
        match transition {
            ViewportTransition::Activated(frame) => {
                self.activate();
                self.render(Some(frame));
                self.sync_cursor();
            }
            ViewportTransition::Deactivated(frame) => {
                self.deactivate();
                self.render(Some(frame));
                self.sync_cursor();
            }
            ViewportTransition::Unchanged => {}
        }
    }

    fn pointer(&mut self, event: PointerEvent) {
        let frame = self.carousel.handle_pointer(&event);
        self.render(frame);
        if event.source == PointerSource::Mouse && event.kind != PointerEventKind::Move {
            self.sync_cursor();
        }
    }

    fn build_input_listeners(&self) -> Vec<EventListener> {
        let track = &self.elements.track;
        let mut listeners = Vec::new();

        // Suppress native image and link dragging.
        listeners.push(EventListener::new_with_options(
            track,
            "dragstart",
            EventListenerOptions::enable_prevent_default(),
            |event| event.prevent_default(),
        ));

        for (event_type, kind) in [
            ("touchstart", PointerEventKind::Down),
            ("touchmove", PointerEventKind::Move),
            ("touchend", PointerEventKind::Up),
            ("touchcancel", PointerEventKind::Cancel),
        ] {
            let this = self.this.clone();
            listeners.push(EventListener::new(track, event_type, move |event| {
                let Some(event) = event.dyn_ref::<TouchEvent>() else {
                    return;
                };
                // Only the first touch drives the gesture.
                let touch = match kind {
                    PointerEventKind::Down | PointerEventKind::Move => event.touches().get(0),
                    _ => event.changed_touches().get(0),
                };
                with_instance(&this, |instance| {
                    let x = match touch {
                        Some(touch) => touch.client_x() as f32,
                        None => match (kind, instance.carousel.drag_position()) {
                            (PointerEventKind::Up | PointerEventKind::Cancel, Some(x)) => x,
                            _ => return,
                        },
                    };
                    let now = instance.clock.now_ms();
                    instance.pointer(PointerEvent::touch(kind, x, now));
                });
            }));
        }

        for (event_type, kind) in [
            ("mousedown", PointerEventKind::Down),
            ("mousemove", PointerEventKind::Move),
            ("mouseup", PointerEventKind::Up),
            ("mouseleave", PointerEventKind::Leave),
        ] {
            let this = self.this.clone();
            listeners.push(EventListener::new(track, event_type, move |event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                with_instance(&this, |instance| {
                    let now = instance.clock.now_ms();
                    let mut pointer = PointerEvent::mouse(kind, event.client_x() as f32, now);
                    if kind == PointerEventKind::Down {
                        pointer = pointer
                            .with_button(PointerButton::from_dom(event.button()))
                            .on_control(instance.elements.is_on_control(event.target()));
                    }
                    instance.pointer(pointer);
                });
            }));
        }

        if let Some(prev) = &self.elements.prev {
            let this = self.this.clone();
            listeners.push(EventListener::new(prev, "click", move |_| {
                with_instance(&this, |instance| {
                    let now = instance.clock.now_ms();
                    let frame = instance.carousel.retreat(now);
                    instance.render(frame);
                });
            }));
        }

        if let Some(next) = &self.elements.next {
            let this = self.this.clone();
            listeners.push(EventListener::new(next, "click", move |_| {
                with_instance(&this, |instance| {
                    let now = instance.clock.now_ms();
                    let frame = instance.carousel.advance(now);
                    instance.render(frame);
                });
            }));
        }

        for (index, indicator) in self.elements.indicators.iter().enumerate() {
            let this = self.this.clone();
            listeners.push(EventListener::new(indicator, "click", move |_| {
                with_instance(&this, |instance| {
                    let now = instance.clock.now_ms();
                    match instance.carousel.goto_slide(index, now) {
                        Ok(frame) => instance.render(frame),
                        Err(err) => log::debug!("indicator click ignored: {}", err),
                    }
                });
            }));
        }

        listeners
    }
}

impl Drop for CarouselInstance {
    fn drop(&mut self) {
        self.deactivate();
    }
}

struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array)>,
}

impl VisibilityObserver {
    fn observe(root: &Element, this: WeakInstance) -> Result<Self, JsValue> {
        let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
            let visible = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .last()
                .map(|entry| entry.is_intersecting());
            let Some(visible) = visible else { return };
            with_instance(&this, |instance| instance.set_visible(visible));
        });
        let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())?;
        observer.observe(root);
        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// A wired carousel root. Dropping it (or calling [`Self::teardown`])
/// removes every listener and cancels pending timers.
pub struct MountedCarousel {
    root: Element,
    instance: Option<Rc<RefCell<CarouselInstance>>>,
    resize_listener: Option<EventListener>,
    observer: Option<VisibilityObserver>,
}

impl MountedCarousel {
    /// Wires one root. Returns `Ok(None)` when the root has no slide track.
    pub fn mount(root: &Element) -> Result<Option<Self>, JsValue> {
        let Some(elements) = CarouselElements::query(root)? else {
            log::warn!("carousel root without {} skipped", selectors::TRACK);
            return Ok(None);
        };
        let variant =
            CarouselVariant::from_attribute(root.get_attribute(selectors::VARIANT_ATTR).as_deref());
        let width = viewport_width().ok_or("viewport width unavailable")?;
        let carousel = SlideCarousel::new(
            elements.slides.len(),
            elements.indicators.len(),
            width,
            variant.config(),
        )
        .map_err(|err| JsValue::from_str(&err.to_string()))?;
        root.set_attribute(selectors::MOUNTED_ATTR, "")?;

        if !carousel.is_enabled() {
            log::debug!(
                "carousel with {} slide(s) left in default layout",
                carousel.slide_count()
            );
            return Ok(Some(Self {
                root: root.clone(),
                instance: None,
                resize_listener: None,
                observer: None,
            }));
        }

        let keyboard_navigation = carousel.config().keyboard_navigation;
        let instance = Rc::new_cyclic(|this| {
            RefCell::new(CarouselInstance {
                carousel,
                elements,
                clock: Clock::new(),
                this: this.clone(),
                visible: false,
                input_listeners: Vec::new(),
                registration: None,
                resize_timer: None,
            })
        });

        {
            let mut instance = instance.borrow_mut();
            if let Some(frame) = instance.carousel.initial_frame() {
                instance.activate();
                instance.render(Some(frame));
                instance.sync_cursor();
            }
            log::debug!(
                "mounted {:?} carousel: {} slides, active={}",
                variant,
                instance.carousel.slide_count(),
                instance.carousel.is_active()
            );
        }

        let window = web_sys::window().ok_or("no global window exists")?;
        let resize_listener = {
            let this = Rc::downgrade(&instance);
            EventListener::new(&window, "resize", move |_| {
                with_instance(&this, CarouselInstance::on_resize);
            })
        };

        let observer = if keyboard_navigation {
            Some(VisibilityObserver::observe(root, Rc::downgrade(&instance))?)
        } else {
            None
        };

        Ok(Some(Self {
            root: root.clone(),
            instance: Some(instance),
            resize_listener: Some(resize_listener),
            observer,
        }))
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn teardown(mut self) {
        self.resize_listener = None;
        self.observer = None;
        if let Some(instance) = self.instance.take() {
            if let Ok(mut instance) = instance.try_borrow_mut() {
                instance.resize_timer = None;
                instance.carousel.cancel_pending();
                instance.deactivate();
                if let Err(err) = instance.elements.set_cursor(None) {
                    log::debug!("could not clear cursor: {:?}", err);
                }
            }
        }
        if let Err(err) = self.root.remove_attribute(selectors::MOUNTED_ATTR) {
            log::debug!("could not clear mounted marker: {:?}", err);
        }
    }
}

/// Mounts every unmounted carousel root in `scope`, including `scope` itself.
pub fn mount_within(scope: &Element) -> Result<usize, JsValue> {
    let mut roots = query_all(scope, selectors::ROOT)?;
    if scope.matches(selectors::ROOT)? {
        roots.insert(0, scope.clone());
    }

    let mut mounted = Vec::new();
    for root in roots {
        if root.has_attribute(selectors::MOUNTED_ATTR) {
            continue;
        }
        match MountedCarousel::mount(&root) {
            Ok(Some(carousel)) => mounted.push(carousel),
            Ok(None) => {}
            Err(err) => log::warn!("carousel mount failed: {:?}", err),
        }
    }

    let count = mounted.len();
    MOUNTED.with(|all| all.borrow_mut().extend(mounted));
    Ok(count)
}

/// Tears down every mounted carousel whose root lies in `scope`.
pub fn teardown_within(scope: &Element) -> usize {
    let removed: Vec<MountedCarousel> = MOUNTED.with(|all| {
        let mut all = all.borrow_mut();
        let (removed, kept): (Vec<_>, Vec<_>) = all
            .drain(..)
            .partition(|carousel| scope.contains(Some(carousel.root().as_ref())));
        *all = kept;
        removed
    });
    let count = removed.len();
    removed.into_iter().for_each(MountedCarousel::teardown);
    count
}

pub fn teardown_all() -> usize {
    let removed = MOUNTED.with(|all| std::mem::take(&mut *all.borrow_mut()));
    let count = removed.len();
    removed.into_iter().for_each(MountedCarousel::teardown);
    count
}

fn with_instance(this: &WeakInstance, f: impl FnOnce(&mut CarouselInstance)) {
    let Some(instance) = this.upgrade() else { return };
    let Ok(mut instance) = instance.try_borrow_mut() else {
        return;
    };
    f(&mut instance);
}

fn viewport_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

/// Binds the document-level arrow-key listener on first use.
fn install_key_listener() {
    let _ = KEY_LISTENER.try_with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.is_some() {
            return;
        }
        let Some(document) = web_sys::window().and_then(|window| window.document()) else {
            return;
        };
        *slot = Some(EventListener::new_with_options(
            &document,
            "keydown",
            EventListenerOptions::enable_prevent_default(),
            |event| {
                if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                    dispatch_key(event);
                }
            },
        ));
    });
}

fn dispatch_key(event: &KeyboardEvent) {
    let Some(key) = NavigationKey::from_key(&event.key()) else {
        return;
    };
    let targets = KEYBOARD
        .try_with(|registry| registry.borrow().visible_targets())
        .unwrap_or_default();

    let mut handled = false;
    for target in targets {
        with_instance(&target, |instance| {
            let now = instance.clock.now_ms();
            if let Some(frame) = instance.carousel.handle_key(key, now) {
                instance.render(Some(frame));
                handled = true;
            }
        });
    }
    if handled {
        event.prevent_default();
    }
}
