//! # storefront-fx
//!
//! WASM interactivity for the storefront landing page: theme toggle, smooth
//! scrolling, mobile menu, navbar scroll effect, scroll-triggered animations,
//! stat counters, button ripples, product card feedback, required-field
//! validation, and lazy image loading.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | Theme preference, persistence seam, shortcut chord |
//! | [`scroll`] | In-page anchor resolution and scroll targets |
//! | [`menu`] | Mobile menu open/close state |
//! | [`navbar`] | Navbar shadow / hide-on-scroll state |
//! | [`reveal`] | Entrance animation stagger and hero schedule |
//! | [`counter`] | Stat counter parsing and per-tick frames |
//! | [`ripple`] | Button ripple geometry |
//! | [`product`] | Add-to-cart confirmation state |
//! | [`form`] | Required-field validation |
//! | [`lazy`] | Deferred image sources and preload hints |
//! | [`styles`] | Stylesheet backing the toggled classes |
//! | [`config`] | Selectors and tunables, overridable per page |
//! | [`error`] | Error types |
//! | `dom`, `controllers`, `page` | Browser binding (`hydrate` feature only) |
//!
//! Everything outside the `hydrate` modules is plain Rust and is tested
//! natively.

pub mod config;
pub mod counter;
pub mod error;
pub mod form;
pub mod lazy;
pub mod menu;
pub mod navbar;
pub mod product;
pub mod reveal;
pub mod ripple;
pub mod scroll;
pub mod styles;
pub mod theme;

#[cfg(feature = "hydrate")]
pub mod controllers;
#[cfg(feature = "hydrate")]
pub mod dom;
#[cfg(feature = "hydrate")]
pub mod page;

#[cfg(feature = "hydrate")]
mod entry {
    use std::cell::RefCell;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::prelude::wasm_bindgen;

    use crate::page::{Page, PageContext};

    thread_local! {
        static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
    }

    /// Mount every controller once the DOM is parsed.
    #[wasm_bindgen]
    pub fn hydrate() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            log::debug!("logger already installed");
        }

        let ctx = match PageContext::from_browser() {
            Ok(ctx) => ctx,
            Err(e) => {
                log::warn!("landing page not mounted: {e}");
                return;
            }
        };
        if ctx.document.ready_state() != "loading" {
            mount(&ctx);
            return;
        }

        let document = ctx.document.clone();
        let on_ready = Closure::once_into_js(move || mount(&ctx));
        if let Err(e) = document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref()) {
            log::warn!("landing page not mounted: {}", crate::error::DomError::from(e));
        }
    }

    /// Detach every controller mounted by [`hydrate`].
    #[wasm_bindgen]
    pub fn teardown() {
        let page = PAGE.with(|slot| slot.borrow_mut().take());
        if let Some(mut page) = page {
            page.detach();
            log::info!("landing page detached");
        }
    }

    fn mount(ctx: &PageContext) {
        let previous = PAGE.with(|slot| slot.borrow_mut().take());
        if let Some(mut previous) = previous {
            previous.detach();
        }
        let page = Page::mount(ctx);
        log::debug!("{} controller(s) mounted", page.len());
        PAGE.with(|slot| *slot.borrow_mut() = Some(page));
        log::info!("TechStore landing page loaded");
    }
}
