//! Browser glue shared by the controllers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Controllers own three kinds of browser resources: event listeners,
//! intersection observers and timers. Each is wrapped in a handle that
//! releases the resource on drop ([`Listener`], [`Observer`], [`Timers`]), so
//! a controller detaches by dropping its handles.
//!
//! TRADE-OFFS
//! ==========
//! Fired timeouts and finished intervals remove their own handle from the
//! [`Timers`] bag from inside their callback. wasm-bindgen defers freeing a
//! closure that is dropped while running, so this is sound and keeps the bag
//! from growing with every ripple or label swap.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, Event, EventTarget, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, NodeList, Storage, Window,
};

use crate::error::{DomError, StoreError};
use crate::theme::PreferenceStore;

// =============================================================================
// LISTENERS
// =============================================================================

/// An event listener that is removed when dropped.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    /// Register `handler` for `event` on `target`.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::Js`] if the browser rejects the registration.
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, DomError>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self { target: target.clone(), event, callback })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Err(e) = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            log::warn!("failed to remove {} listener: {}", self.event, DomError::from(e));
        }
    }
}

// =============================================================================
// OBSERVERS
// =============================================================================

/// An intersection observer that disconnects when dropped.
pub struct Observer {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Observer {
    /// Create an observer relative to the viewport.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::Js`] when the browser cannot construct an
    /// `IntersectionObserver` (unsupported, or an invalid root margin).
    pub fn new<F>(threshold: f64, root_margin: Option<&str>, mut handler: F) -> Result<Self, DomError>
    where
        F: FnMut(Vec<IntersectionObserverEntry>, &IntersectionObserver) + 'static,
    {
        let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
            let entries = entries
                .iter()
                .map(JsCast::unchecked_into)
                .collect::<Vec<IntersectionObserverEntry>>();
            handler(entries, &observer);
        }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        if let Some(margin) = root_margin {
            options.set_root_margin(margin);
        }
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        Ok(Self { observer, _callback: callback })
    }

    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }
}

impl Drop for Observer {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

// =============================================================================
// TIMERS
// =============================================================================

/// Pending timeouts and intervals owned by one controller.
///
/// Dropping the bag, or calling [`Timers::cancel_all`], cancels everything
/// that has not fired yet.
#[derive(Default)]
pub struct Timers {
    next_id: Cell<u64>,
    timeouts: RefCell<HashMap<u64, Timeout>>,
    intervals: RefCell<HashMap<u64, Interval>>,
}

impl Timers {
    #[must_use]
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    fn next_id(&self) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id.wrapping_add(1));
        id
    }

    /// Run `f` once after `delay_ms`.
    pub fn schedule<F>(self: &Rc<Self>, delay_ms: u32, f: F)
    where
        F: FnOnce() + 'static,
    {
        let id = self.next_id();
        let weak = Rc::downgrade(self);
        let timeout = Timeout::new(delay_ms, move || {
            let mut fired = None;
            if let Some(timers) = weak.upgrade() {
                fired = timers.timeouts.borrow_mut().remove(&id);
            }
            f();
            drop(fired);
        });
        self.timeouts.borrow_mut().insert(id, timeout);
    }

    /// Call `tick` every `period_ms` until it returns `false`.
    pub fn repeat<F>(self: &Rc<Self>, period_ms: u32, mut tick: F)
    where
        F: FnMut() -> bool + 'static,
    {
        let id = self.next_id();
        let weak = Rc::downgrade(self);
        let interval = Interval::new(period_ms, move || {
            if tick() {
                return;
            }
            let mut finished = None;
            if let Some(timers) = weak.upgrade() {
                finished = timers.intervals.borrow_mut().remove(&id);
            }
            drop(finished);
        });
        self.intervals.borrow_mut().insert(id, interval);
    }

    pub fn cancel_all(&self) {
        let timeouts = std::mem::take(&mut *self.timeouts.borrow_mut());
        let intervals = std::mem::take(&mut *self.intervals.borrow_mut());
        drop(timeouts);
        drop(intervals);
    }
}

// =============================================================================
// STORAGE
// =============================================================================

/// [`PreferenceStore`] over `window.localStorage`.
///
/// Private browsing modes can deny storage entirely; reads then miss and
/// writes report [`StoreError::Unavailable`].
pub struct BrowserStore {
    storage: Option<Storage>,
}

impl BrowserStore {
    #[must_use]
    pub fn new(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                log::warn!("localStorage unavailable: {}", DomError::from(e));
                None
            }
        };
        Self { storage }
    }
}

impl PreferenceStore for BrowserStore {
    fn load(&self, key: &str) -> Option<String> {
        let storage = self.storage.as_ref()?;
        match storage.get_item(key) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("failed to read {key:?}: {}", DomError::from(e));
                None
            }
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = self.storage.as_ref().ok_or(StoreError::Unavailable)?;
        storage.set_item(key, value).map_err(|e| StoreError::Rejected {
            key: key.to_owned(),
            reason: DomError::from(e).to_string(),
        })
    }
}

// =============================================================================
// ELEMENT HELPERS
// =============================================================================

/// Elements of a `NodeList`, skipping non-element nodes.
#[must_use]
pub fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect()
}

/// Narrow an element to `HtmlElement` for style access.
///
/// # Errors
///
/// Returns [`DomError::WrongElementType`] for non-HTML elements (e.g. SVG).
pub fn html(element: Element, selector: &str) -> Result<HtmlElement, DomError> {
    element.dyn_into::<HtmlElement>().map_err(|_| DomError::WrongElementType {
        selector: selector.to_owned(),
        expected: "HtmlElement",
    })
}

/// Set one inline style property.
///
/// # Errors
///
/// Returns [`DomError::Js`] if the declaration is rejected.
pub fn set_style(element: &HtmlElement, property: &str, value: &str) -> Result<(), DomError> {
    element.style().set_property(property, value)?;
    Ok(())
}

/// Set several inline style properties in order.
///
/// # Errors
///
/// Stops at and returns the first rejected declaration.
pub fn set_styles(element: &HtmlElement, styles: &[(&str, &str)]) -> Result<(), DomError> {
    for (property, value) in styles {
        set_style(element, property, value)?;
    }
    Ok(())
}

/// Log a failed DOM update from inside an event callback.
pub fn report(context: &str, result: Result<(), DomError>) {
    if let Err(e) = result {
        log::warn!("{context}: {e}");
    }
}

/// Remove one inline style property.
///
/// # Errors
///
/// Returns [`DomError::Js`] if the style declaration is read-only.
pub fn clear_style(element: &HtmlElement, property: &str) -> Result<(), DomError> {
    element.style().remove_property(property)?;
    Ok(())
}

/// # Errors
///
/// Returns [`DomError::Js`] if the class token is invalid.
pub fn add_class(element: &Element, class: &str) -> Result<(), DomError> {
    element.class_list().add_1(class)?;
    Ok(())
}

/// # Errors
///
/// Returns [`DomError::Js`] if the class token is invalid.
pub fn remove_class(element: &Element, class: &str) -> Result<(), DomError> {
    element.class_list().remove_1(class)?;
    Ok(())
}

/// HTML elements of a `NodeList`, skipping anything else (e.g. SVG).
#[must_use]
pub fn html_elements(list: &NodeList) -> Vec<HtmlElement> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_ref::<HtmlElement>().cloned())
        .collect()
}
