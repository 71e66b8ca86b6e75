//! Add-to-cart confirmation and category icon spin.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Element, Event, HtmlElement};

use super::Controller;
use crate::dom::{self, Listener, Timers};
use crate::error::DomError;
use crate::page::PageContext;
use crate::product::{
    ADDED_COLOR, ADDED_LABEL, ADDED_MS, CATEGORY_ICON_SELECTOR, CartFeedback, ICON_REST_TRANSFORM, ICON_SPIN_MS,
    ICON_SPIN_TRANSFORM,
};

pub struct ProductInteractions {
    listeners: Vec<Listener>,
    timers: Rc<Timers>,
}

impl ProductInteractions {
    pub const NAME: &'static str = "ProductInteractions";

    /// # Errors
    ///
    /// Returns [`DomError::Js`] if a selector is invalid or a listener cannot
    /// be registered.
    pub fn attach(ctx: &PageContext) -> Result<Self, DomError> {
        let selectors = &ctx.config.selectors;
        let timers = Timers::new();
        let mut listeners = Vec::new();

        for button in dom::html_elements(&ctx.document.query_selector_all(&selectors.add_to_cart_buttons)?) {
            let feedback = Rc::new(RefCell::new(CartFeedback::new()));
            let timers = Rc::clone(&timers);
            let target = button.clone();
            listeners.push(Listener::new(&target, "click", move |event: Event| {
                event.prevent_default();
                dom::report("add to cart", show_added(&button, &feedback, &timers));
            })?);
        }

        for card in dom::elements(&ctx.document.query_selector_all(&selectors.category_cards)?) {
            let timers = Rc::clone(&timers);
            let target = card.clone();
            listeners.push(Listener::new(&target, "mouseenter", move |_| {
                dom::report("category hover", spin_icon(&card, &timers));
            })?);
        }

        Ok(Self { listeners, timers })
    }
}

fn show_added(button: &HtmlElement, feedback: &Rc<RefCell<CartFeedback>>, timers: &Rc<Timers>) -> Result<(), DomError> {
    let current = button.text_content().unwrap_or_default();
    let generation = feedback.borrow_mut().begin(&current);
    button.set_text_content(Some(ADDED_LABEL));
    dom::set_style(button, "background-color", ADDED_COLOR)?;

    let button = button.clone();
    let feedback = Rc::clone(feedback);
    timers.schedule(ADDED_MS, move || {
        let Some(original) = feedback.borrow_mut().revert(generation) else {
            return;
        };
        button.set_text_content(Some(&original));
        dom::report("add to cart revert", dom::clear_style(&button, "background-color"));
    });
    Ok(())
}

/// Cards without an icon are left alone.
fn spin_icon(card: &Element, timers: &Rc<Timers>) -> Result<(), DomError> {
    let Some(icon) = card.query_selector(CATEGORY_ICON_SELECTOR)? else {
        return Ok(());
    };
    let icon = dom::html(icon, CATEGORY_ICON_SELECTOR)?;
    dom::set_style(&icon, "transform", ICON_SPIN_TRANSFORM)?;
    timers.schedule(ICON_SPIN_MS, move || {
        dom::report("category icon reset", dom::set_style(&icon, "transform", ICON_REST_TRANSFORM));
    });
    Ok(())
}

impl Controller for ProductInteractions {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn detach(&mut self) {
        self.listeners.clear();
        self.timers.cancel_all();
    }
}
