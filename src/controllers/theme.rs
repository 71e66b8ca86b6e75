//! Theme toggle control and Ctrl/Cmd+J shortcut.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, KeyboardEvent};

use super::Controller;
use crate::dom::{self, Listener, Timers};
use crate::error::DomError;
use crate::page::PageContext;
use crate::theme::{
    PreferenceStore, REST_TRANSFORM, SPIN_MS, SPIN_TRANSFORM, THEME_ATTRIBUTE, ThemeState, is_toggle_chord,
};

pub struct ThemeManager {
    view: Rc<RefCell<ThemeView>>,
    listeners: Vec<Listener>,
    timers: Rc<Timers>,
}

struct ThemeView {
    root: Option<Element>,
    toggle: HtmlElement,
    icon: Option<Element>,
    state: ThemeState,
    store: Rc<dyn PreferenceStore>,
    timers: Rc<Timers>,
}

impl ThemeView {
    fn render(&self) -> Result<(), DomError> {
        let theme = self.state.current;
        if let Some(root) = &self.root {
            root.set_attribute(THEME_ATTRIBUTE, theme.as_str())?;
        }
        if let Some(icon) = &self.icon {
            icon.set_class_name(theme.icon_class());
        }
        Ok(())
    }

    fn toggle(&mut self) -> Result<(), DomError> {
        if let Err(e) = self.state.toggle(self.store.as_ref()) {
            log::warn!("theme not persisted: {e}");
        }
        self.render()?;
        log::debug!("theme switched to {}", self.state.current.as_str());

        dom::set_style(&self.toggle, "transform", SPIN_TRANSFORM)?;
        let toggle = self.toggle.clone();
        self.timers.schedule(SPIN_MS, move || {
            dom::report("theme toggle spin", dom::set_style(&toggle, "transform", REST_TRANSFORM));
        });
        Ok(())
    }
}

impl ThemeManager {
    pub const NAME: &'static str = "ThemeManager";

    /// Apply the persisted theme and bind the toggle control and shortcut.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::MissingElement`] when the page has no toggle
    /// control. A missing icon inside the control is tolerated.
    pub fn attach(ctx: &PageContext) -> Result<Self, DomError> {
        let selectors = &ctx.config.selectors;
        let toggle_id = &selectors.theme_toggle_id;
        let toggle = ctx
            .document
            .get_element_by_id(toggle_id)
            .ok_or_else(|| DomError::missing(&format!("#{toggle_id}")))?;
        let icon = toggle.query_selector(&selectors.theme_icon)?;
        let toggle = dom::html(toggle, toggle_id)?;
        let timers = Timers::new();

        let mut view = ThemeView {
            root: ctx.document.document_element(),
            toggle: toggle.clone(),
            icon,
            state: ThemeState::load(ctx.store.as_ref(), &ctx.config.theme_storage_key),
            store: Rc::clone(&ctx.store),
            timers: Rc::clone(&timers),
        };
        let initial = view.state.current;
        if let Err(e) = view.state.apply(view.store.as_ref(), initial) {
            log::warn!("theme not persisted: {e}");
        }
        view.render()?;
        let view = Rc::new(RefCell::new(view));

        let on_click = {
            let view = Rc::clone(&view);
            Listener::new(&toggle, "click", move |_| {
                dom::report("theme toggle", view.borrow_mut().toggle());
            })?
        };
        let on_key = {
            let view = Rc::clone(&view);
            Listener::new(&ctx.document, "keydown", move |event: Event| {
                let Some(key) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                if !is_toggle_chord(&key.key(), key.ctrl_key(), key.meta_key()) {
                    return;
                }
                event.prevent_default();
                dom::report("theme shortcut", view.borrow_mut().toggle());
            })?
        };

        Ok(Self { view, listeners: vec![on_click, on_key], timers })
    }

    #[must_use]
    pub fn current(&self) -> crate::theme::Theme {
        self.view.borrow().state.current
    }
}

impl Controller for ThemeManager {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn detach(&mut self) {
        self.listeners.clear();
        self.timers.cancel_all();
    }
}
