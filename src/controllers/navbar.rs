//! Navbar shadow and hide-on-scroll-down.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, HtmlElement, Window};

use super::Controller;
use crate::dom::{self, Listener};
use crate::error::DomError;
use crate::navbar::{NavbarFrame, NavbarState, SCROLLED_CLASS};
use crate::page::PageContext;

pub struct NavbarScroll {
    listeners: Vec<Listener>,
}

impl NavbarScroll {
    pub const NAME: &'static str = "NavbarScroll";

    /// Track window scroll on every event, unthrottled.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::MissingElement`] when the page has no navbar.
    pub fn attach(ctx: &PageContext) -> Result<Self, DomError> {
        let selector = &ctx.config.selectors.navbar;
        let navbar = ctx
            .document
            .query_selector(selector)?
            .ok_or_else(|| DomError::missing(selector))?;
        let navbar = dom::html(navbar, selector)?;
        let state = Rc::new(RefCell::new(NavbarState::new()));

        let window = ctx.window.clone();
        let document = ctx.document.clone();
        let on_scroll = Listener::new(&ctx.window, "scroll", move |_| {
            let frame = state.borrow_mut().on_scroll(scroll_top(&window, &document));
            dom::report("navbar scroll", render(&navbar, frame));
        })?;

        Ok(Self { listeners: vec![on_scroll] })
    }
}

/// Vertical scroll offset, falling back to the root element's `scrollTop`.
fn scroll_top(window: &Window, document: &Document) -> f64 {
    let offset = window.page_y_offset().unwrap_or(0.0);
    if offset > 0.0 {
        return offset;
    }
    document
        .document_element()
        .map_or(0.0, |root| f64::from(root.scroll_top()))
}

fn render(navbar: &HtmlElement, frame: NavbarFrame) -> Result<(), DomError> {
    if frame.scrolled {
        dom::add_class(navbar, SCROLLED_CLASS)?;
    } else {
        dom::remove_class(navbar, SCROLLED_CLASS)?;
    }
    dom::set_style(navbar, "transform", frame.transform())
}

impl Controller for NavbarScroll {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn detach(&mut self) {
        self.listeners.clear();
    }
}
