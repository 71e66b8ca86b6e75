//! Lazy image loading and preload hints.

use web_sys::{Document, Element, IntersectionObserverEntry};

use super::Controller;
use crate::dom::{self, Observer};
use crate::error::DomError;
use crate::lazy::{LAZY_CLASS, LAZY_IMAGE_SELECTOR, PRELOAD_HINTS, STAGING_ATTRIBUTE, lazy_source};
use crate::page::PageContext;

pub struct PerformanceOptimizer {
    observer: Option<Observer>,
    hints: Vec<Element>,
}

impl PerformanceOptimizer {
    pub const NAME: &'static str = "PerformanceOptimizer";

    /// Append preload hints and start watching deferred images.
    ///
    /// Browsers without `IntersectionObserver` load every deferred image now.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::MissingElement`] when the document has no `<head>`.
    pub fn attach(ctx: &PageContext) -> Result<Self, DomError> {
        let hints = append_preload_hints(&ctx.document)?;
        let images = dom::elements(&ctx.document.query_selector_all(LAZY_IMAGE_SELECTOR)?);

        let observer = Observer::new(0.0, None, |entries, observer| {
            for entry in entries.into_iter().filter(IntersectionObserverEntry::is_intersecting) {
                let image = entry.target();
                dom::report("lazy image", load_image(&image));
                observer.unobserve(&image);
            }
        });
        let observer = match observer {
            Ok(observer) => {
                for image in &images {
                    observer.observe(image);
                }
                Some(observer)
            }
            Err(e) => {
                log::warn!("lazy loading unavailable, loading {} image(s) now: {e}", images.len());
                for image in &images {
                    dom::report("lazy image", load_image(image));
                }
                None
            }
        };

        Ok(Self { observer, hints })
    }
}

fn append_preload_hints(document: &Document) -> Result<Vec<Element>, DomError> {
    let head = document.head().ok_or_else(|| DomError::missing("head"))?;
    let mut links = Vec::with_capacity(PRELOAD_HINTS.len());
    for hint in PRELOAD_HINTS {
        let link = document.create_element("link")?;
        link.set_attribute("rel", "preload")?;
        link.set_attribute("href", hint.href)?;
        link.set_attribute("as", hint.kind)?;
        head.append_child(&link)?;
        links.push(link);
    }
    Ok(links)
}

fn load_image(image: &Element) -> Result<(), DomError> {
    let staged = image.get_attribute(STAGING_ATTRIBUTE);
    if let Some(src) = lazy_source(staged.as_deref()) {
        image.set_attribute("src", src)?;
    }
    dom::remove_class(image, LAZY_CLASS)
}

impl Controller for PerformanceOptimizer {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    /// Stops watching images and removes the preload hints.
    fn detach(&mut self) {
        drop(self.observer.take());
        for hint in self.hints.drain(..) {
            hint.remove();
        }
    }
}
