//! Ripple and press feedback on every button.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement, MouseEvent};

use super::Controller;
use crate::dom::{self, Listener, Timers};
use crate::error::DomError;
use crate::page::PageContext;
use crate::ripple::{PRESS_MS, PRESS_TRANSFORM, RELEASE_TRANSFORM, RIPPLE_CLASS, RIPPLE_MS, Rect, RippleGeometry};

pub struct ButtonEffects {
    listeners: Vec<Listener>,
    timers: Rc<Timers>,
}

impl ButtonEffects {
    pub const NAME: &'static str = "ButtonEffects";

    /// # Errors
    ///
    /// Returns [`DomError::Js`] if the selector is invalid or a listener
    /// cannot be registered.
    pub fn attach(ctx: &PageContext) -> Result<Self, DomError> {
        let timers = Timers::new();
        let buttons = dom::html_elements(&ctx.document.query_selector_all(&ctx.config.selectors.buttons)?);
        let mut listeners = Vec::with_capacity(buttons.len());
        for button in buttons {
            let document = ctx.document.clone();
            let timers = Rc::clone(&timers);
            let target = button.clone();
            listeners.push(Listener::new(&target, "click", move |event: Event| {
                if let Some(click) = event.dyn_ref::<MouseEvent>() {
                    dom::report("button ripple", ripple(&document, &button, click, &timers));
                }
                dom::report("button press", press(&button, &timers));
            })?);
        }
        Ok(Self { listeners, timers })
    }
}

fn ripple(document: &Document, button: &HtmlElement, click: &MouseEvent, timers: &Rc<Timers>) -> Result<(), DomError> {
    let bounds = button.get_bounding_client_rect();
    let geometry = RippleGeometry::compute(
        Rect { left: bounds.left(), top: bounds.top(), width: bounds.width(), height: bounds.height() },
        f64::from(click.client_x()),
        f64::from(click.client_y()),
    );

    let span = dom::html(document.create_element("span")?, "span")?;
    for (property, value) in geometry.styles() {
        dom::set_style(&span, property, &value)?;
    }
    dom::add_class(&span, RIPPLE_CLASS)?;
    button.append_child(&span)?;
    timers.schedule(RIPPLE_MS, move || span.remove());
    Ok(())
}

fn press(button: &HtmlElement, timers: &Rc<Timers>) -> Result<(), DomError> {
    dom::set_style(button, "transform", PRESS_TRANSFORM)?;
    let button = button.clone();
    timers.schedule(PRESS_MS, move || {
        dom::report("button release", dom::set_style(&button, "transform", RELEASE_TRANSFORM));
    });
    Ok(())
}

impl Controller for ButtonEffects {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn detach(&mut self) {
        self.listeners.clear();
        self.timers.cancel_all();
    }
}
