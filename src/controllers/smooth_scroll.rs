//! Smooth scrolling for in-page navigation links.

use web_sys::{Document, Element, Event, ScrollBehavior, ScrollToOptions, Window};

use super::Controller;
use crate::dom::{self, Listener};
use crate::error::DomError;
use crate::page::PageContext;
use crate::scroll::{anchor_selector, scroll_target};

pub struct SmoothScroller {
    listeners: Vec<Listener>,
}

impl SmoothScroller {
    pub const NAME: &'static str = "SmoothScroller";

    /// Bind every navigation link.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::Js`] if the link selector is invalid or a
    /// listener cannot be registered.
    pub fn attach(ctx: &PageContext) -> Result<Self, DomError> {
        let links = dom::elements(&ctx.document.query_selector_all(&ctx.config.selectors.nav_links)?);
        let mut listeners = Vec::with_capacity(links.len());
        for link in links {
            let window = ctx.window.clone();
            let document = ctx.document.clone();
            let navbar_offset = ctx.config.navbar_offset_px;
            let anchor = link.clone();
            listeners.push(Listener::new(&link, "click", move |event: Event| {
                dom::report("smooth scroll", scroll_to_anchor(&window, &document, &anchor, navbar_offset, &event));
            })?);
        }
        Ok(Self { listeners })
    }
}

/// Take over navigation for fragment links; other links navigate normally.
fn scroll_to_anchor(
    window: &Window,
    document: &Document,
    link: &Element,
    navbar_offset: f64,
    event: &Event,
) -> Result<(), DomError> {
    let Some(href) = link.get_attribute("href") else {
        return Ok(());
    };
    let Some(selector) = anchor_selector(&href) else {
        return Ok(());
    };
    event.prevent_default();

    let Some(section) = document.query_selector(selector)? else {
        return Ok(());
    };
    let section = dom::html(section, selector)?;

    let options = ScrollToOptions::new();
    options.set_top(scroll_target(f64::from(section.offset_top()), navbar_offset));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

impl Controller for SmoothScroller {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn detach(&mut self) {
        self.listeners.clear();
    }
}
