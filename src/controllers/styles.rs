//! Appends the crate's stylesheet to `<head>`.

use web_sys::Element;

use super::Controller;
use crate::error::DomError;
use crate::page::PageContext;
use crate::styles::{ENHANCED_CSS, STYLE_ELEMENT_ID};

pub struct StyleInjector {
    style: Option<Element>,
}

impl StyleInjector {
    pub const NAME: &'static str = "StyleInjector";

    /// A page that already carries the stylesheet is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::MissingElement`] when the document has no `<head>`.
    pub fn attach(ctx: &PageContext) -> Result<Self, DomError> {
        if ctx.document.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
            return Ok(Self { style: None });
        }
        let head = ctx.document.head().ok_or_else(|| DomError::missing("head"))?;
        let style = ctx.document.create_element("style")?;
        style.set_id(STYLE_ELEMENT_ID);
        style.set_text_content(Some(ENHANCED_CSS));
        head.append_child(&style)?;
        Ok(Self { style: Some(style) })
    }
}

impl Controller for StyleInjector {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn detach(&mut self) {
        if let Some(style) = self.style.take() {
            style.remove();
        }
    }
}
