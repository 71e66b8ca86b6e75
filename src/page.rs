//! Page context and controller lifecycle.
//!
//! [`PageContext`] replaces ambient `window`/`document`/`localStorage`
//! access: it is built once at mount and handed to every controller.
//! [`Page`] owns the mounted controllers and detaches them in reverse order.

use std::rc::Rc;

use web_sys::{Document, Window};

use crate::config::{CONFIG_ELEMENT_ID, PageConfig};
use crate::controllers::{
    ButtonEffects, Controller, CounterAnimation, FormValidation, MobileMenu, NavbarScroll, PerformanceOptimizer,
    ProductInteractions, ScrollAnimations, SmoothScroller, StyleInjector, ThemeManager,
};
use crate::dom::BrowserStore;
use crate::error::DomError;
use crate::theme::PreferenceStore;

pub struct PageContext {
    pub window: Window,
    pub document: Document,
    pub config: PageConfig,
    pub store: Rc<dyn PreferenceStore>,
}

impl PageContext {
    /// Build a context from the global window, reading the config island.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::NoWindow`] / [`DomError::NoDocument`] outside a
    /// browsing context (e.g. a worker).
    pub fn from_browser() -> Result<Self, DomError> {
        let window = web_sys::window().ok_or(DomError::NoWindow)?;
        let document = window.document().ok_or(DomError::NoDocument)?;
        let config = load_config(&document);
        let store: Rc<dyn PreferenceStore> = Rc::new(BrowserStore::new(&window));
        Ok(Self { window, document, config, store })
    }
}

/// Defaults unless the page ships a well-formed config island.
fn load_config(document: &Document) -> PageConfig {
    let Some(island) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return PageConfig::default();
    };
    let raw = island.text_content().unwrap_or_default();
    match PageConfig::from_json(&raw) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {e}");
            PageConfig::default()
        }
    }
}

/// All controllers mounted on the page.
#[derive(Default)]
pub struct Page {
    controllers: Vec<Box<dyn Controller>>,
}

impl Page {
    /// Attach every controller. One that cannot attach is logged and
    /// skipped; the others still mount.
    #[must_use]
    pub fn mount(ctx: &PageContext) -> Self {
        let mut page = Self::default();
        page.add(StyleInjector::NAME, StyleInjector::attach(ctx));
        page.add(
            ThemeManager::NAME,
            ThemeManager::attach(ctx).inspect(|theme| log::debug!("initial theme: {}", theme.current().as_str())),
        );
        page.add(SmoothScroller::NAME, SmoothScroller::attach(ctx));
        page.add(MobileMenu::NAME, MobileMenu::attach(ctx));
        page.add(NavbarScroll::NAME, NavbarScroll::attach(ctx));
        page.add(ScrollAnimations::NAME, ScrollAnimations::attach(ctx));
        page.add(CounterAnimation::NAME, CounterAnimation::attach(ctx));
        page.add(ButtonEffects::NAME, ButtonEffects::attach(ctx));
        page.add(ProductInteractions::NAME, ProductInteractions::attach(ctx));
        page.add(FormValidation::NAME, FormValidation::attach(ctx));
        page.add(PerformanceOptimizer::NAME, PerformanceOptimizer::attach(ctx));
        page
    }

    fn add<C: Controller + 'static>(&mut self, name: &'static str, attached: Result<C, DomError>) {
        match attached {
            Ok(controller) => {
                log::debug!("{name} attached");
                self.controllers.push(Box::new(controller));
            }
            Err(e) => log::warn!("{name} skipped: {e}"),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }

    /// Detach in reverse mount order.
    pub fn detach(&mut self) {
        while let Some(mut controller) = self.controllers.pop() {
            controller.detach();
            log::debug!("{} detached", controller.name());
        }
    }
}
