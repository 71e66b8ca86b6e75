//! Required-field check on form submit.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, HtmlInputElement, HtmlTextAreaElement};

use super::Controller;
use crate::dom::{self, Listener};
use crate::error::DomError;
use crate::form::{ACCENT, ERROR_CLASS, ERROR_STYLES, REQUIRED_SELECTOR, RequiredField, validate_form};
use crate::page::PageContext;

pub struct FormValidation {
    listeners: Vec<Listener>,
}

impl FormValidation {
    pub const NAME: &'static str = "FormValidation";

    /// # Errors
    ///
    /// Returns [`DomError::Js`] if the selector is invalid or a listener
    /// cannot be registered.
    pub fn attach(ctx: &PageContext) -> Result<Self, DomError> {
        let forms = dom::elements(&ctx.document.query_selector_all(&ctx.config.selectors.forms)?);
        let mut listeners = Vec::with_capacity(forms.len());
        for form in forms {
            let document = ctx.document.clone();
            let target = form.clone();
            listeners.push(Listener::new(&target, "submit", move |event: Event| {
                let mut fields = match required_fields(&form, &document) {
                    Ok(fields) => fields,
                    Err(e) => {
                        log::warn!("form validation skipped: {e}");
                        return;
                    }
                };
                let (outcome, result) = validate_form(&mut fields);
                dom::report("form validation", result);
                if !outcome.is_valid() {
                    log::debug!("form submit blocked: {} required field(s) blank", outcome.blank_count());
                    event.prevent_default();
                }
            })?);
        }
        Ok(Self { listeners })
    }
}

fn required_fields(form: &Element, document: &Document) -> Result<Vec<DomField>, DomError> {
    let inputs = dom::html_elements(&form.query_selector_all(REQUIRED_SELECTOR)?);
    Ok(inputs
        .into_iter()
        .map(|input| DomField { input, document: document.clone() })
        .collect())
}

struct DomField {
    input: HtmlElement,
    document: Document,
}

impl DomField {
    /// The error node owned by this field: its next sibling, when that
    /// sibling carries the error class.
    fn error_node(&self) -> Option<Element> {
        self.input
            .next_element_sibling()
            .filter(|next| next.class_list().contains(ERROR_CLASS))
    }
}

impl RequiredField for DomField {
    fn value(&self) -> String {
        if let Some(input) = self.input.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(area) = self.input.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else {
            String::new()
        }
    }

    fn show_error(&mut self, message: &str) -> Result<(), DomError> {
        let node = if let Some(existing) = self.error_node() {
            existing
        } else {
            let created = self.document.create_element("div")?;
            self.input.after_with_node_1(&created)?;
            created
        };
        node.set_class_name(ERROR_CLASS);
        node.set_text_content(Some(message));
        dom::set_styles(&dom::html(node, ERROR_CLASS)?, ERROR_STYLES)?;
        dom::set_style(&self.input, "border-color", ACCENT)
    }

    fn clear_error(&mut self) -> Result<(), DomError> {
        if let Some(existing) = self.error_node() {
            existing.remove();
        }
        dom::clear_style(&self.input, "border-color")
    }
}

impl Controller for FormValidation {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn detach(&mut self) {
        self.listeners.clear();
    }
}
