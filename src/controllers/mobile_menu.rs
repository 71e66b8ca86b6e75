//! Mobile navigation panel.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, Node};

use super::Controller;
use crate::dom::{self, Listener, Timers};
use crate::error::DomError;
use crate::menu::{ITEM_HIDDEN_STYLES, ITEM_SHOWN_STYLES, MenuEffect, MenuState, OPEN_STYLES, item_delay_ms};
use crate::page::PageContext;

pub struct MobileMenu {
    listeners: Vec<Listener>,
    timers: Rc<Timers>,
}

struct MenuView {
    state: MenuState,
    panel: HtmlElement,
    item_selector: String,
    timers: Rc<Timers>,
}

impl MenuView {
    fn apply(&self, effect: MenuEffect) -> Result<(), DomError> {
        match effect {
            MenuEffect::Open => self.open(),
            MenuEffect::Close => dom::set_style(&self.panel, "display", "none"),
            MenuEffect::None => Ok(()),
        }
    }

    fn open(&self) -> Result<(), DomError> {
        dom::set_styles(&self.panel, OPEN_STYLES)?;
        let items = dom::html_elements(&self.panel.query_selector_all(&self.item_selector)?);
        for (index, item) in items.into_iter().enumerate() {
            dom::set_styles(&item, ITEM_HIDDEN_STYLES)?;
            self.timers.schedule(item_delay_ms(index), move || {
                dom::report("menu item reveal", dom::set_styles(&item, ITEM_SHOWN_STYLES));
            });
        }
        Ok(())
    }
}

impl MobileMenu {
    pub const NAME: &'static str = "MobileMenu";

    /// Bind the menu button, outside clicks and viewport resizes.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::MissingElement`] when the button or panel is absent.
    pub fn attach(ctx: &PageContext) -> Result<Self, DomError> {
        let selectors = &ctx.config.selectors;
        let button = ctx
            .document
            .query_selector(&selectors.mobile_menu_button)?
            .ok_or_else(|| DomError::missing(&selectors.mobile_menu_button))?;
        let panel = ctx
            .document
            .query_selector(&selectors.nav_menu)?
            .ok_or_else(|| DomError::missing(&selectors.nav_menu))?;
        let panel = dom::html(panel, &selectors.nav_menu)?;
        let timers = Timers::new();

        let view = Rc::new(RefCell::new(MenuView {
            state: MenuState::new(ctx.config.mobile_breakpoint_px),
            panel: panel.clone(),
            item_selector: selectors.nav_links.clone(),
            timers: Rc::clone(&timers),
        }));

        let on_button = {
            let view = Rc::clone(&view);
            Listener::new(&button, "click", move |_| {
                let effect = view.borrow_mut().state.toggle();
                dom::report("menu toggle", view.borrow().apply(effect));
            })?
        };
        let on_document = {
            let view = Rc::clone(&view);
            let button = button.clone();
            Listener::new(&ctx.document, "click", move |event: Event| {
                let inside = click_is_inside(&event, &panel, &button);
                let effect = view.borrow_mut().state.on_outside_click(inside);
                dom::report("menu outside click", view.borrow().apply(effect));
            })?
        };
        let on_resize = {
            let window = ctx.window.clone();
            Listener::new(&ctx.window, "resize", move |_| {
                let width = match window.inner_width() {
                    Ok(width) => width.as_f64(),
                    Err(e) => {
                        log::warn!("menu resize: {}", DomError::from(e));
                        None
                    }
                };
                let Some(width) = width else {
                    return;
                };
                let effect = view.borrow_mut().state.on_resize(width);
                dom::report("menu resize", view.borrow().apply(effect));
            })?
        };

        Ok(Self { listeners: vec![on_button, on_document, on_resize], timers })
    }
}

fn click_is_inside(event: &Event, panel: &HtmlElement, button: &Element) -> bool {
    let target = event.target();
    let node = target.as_ref().and_then(|t| t.dyn_ref::<Node>());
    panel.contains(node) || button.contains(node)
}

impl Controller for MobileMenu {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn detach(&mut self) {
        self.listeners.clear();
        self.timers.cancel_all();
    }
}
