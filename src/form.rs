//! Required-field validation for page forms.
//!
//! Only emptiness is checked. A field whose trimmed value is blank gets one
//! inline error node placed right after it (reused across submits) and an
//! accent border; a filled field has both cleared. Error nodes belong to
//! their field, so siblings under one parent never share or remove each
//! other's message. [`validate_form`] drives any [`RequiredField`], so
//! the same pass runs against the DOM and against test doubles.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::error::DomError;

/// Fields checked on submit.
pub const REQUIRED_SELECTOR: &str = "input[required], textarea[required]";

pub const ERROR_CLASS: &str = "error-message";
pub const REQUIRED_MESSAGE: &str = "This field is required";
pub const ACCENT: &str = "var(--accent-color)";

/// Inline styles for the error node.
pub const ERROR_STYLES: &[(&str, &str)] =
    &[("color", ACCENT), ("font-size", "0.875rem"), ("margin-top", "0.25rem")];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldVerdict {
    Filled,
    Blank,
}

impl FieldVerdict {
    #[must_use]
    pub fn of(value: &str) -> Self {
        if value.trim().is_empty() { Self::Blank } else { Self::Filled }
    }
}

/// Outcome of one submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormReport {
    pub verdicts: Vec<FieldVerdict>,
}

impl FormReport {
    /// Whether the submit may proceed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.verdicts.iter().all(|v| *v == FieldVerdict::Filled)
    }

    #[must_use]
    pub fn blank_count(&self) -> usize {
        self.verdicts.iter().filter(|v| **v == FieldVerdict::Blank).count()
    }
}

/// A required input as seen by the validator.
pub trait RequiredField {
    fn value(&self) -> String;

    /// Show `message` below the field, reusing an existing error node.
    ///
    /// # Errors
    ///
    /// Returns [`DomError`] if the error node cannot be created or styled.
    fn show_error(&mut self, message: &str) -> Result<(), DomError>;

    /// Remove this field's error node, leaving other fields' nodes alone,
    /// and reset the border.
    ///
    /// # Errors
    ///
    /// Returns [`DomError`] if the field's style cannot be reset.
    fn clear_error(&mut self) -> Result<(), DomError>;
}

/// Classify every field and update its error state.
///
/// Every field is visited even after a DOM failure. The second element holds
/// the first [`DomError`] raised while updating error state, if any.
pub fn validate_form<F: RequiredField>(fields: &mut [F]) -> (FormReport, Result<(), DomError>) {
    let mut verdicts = Vec::with_capacity(fields.len());
    let mut first_err = Ok(());
    for field in fields.iter_mut() {
        let verdict = FieldVerdict::of(&field.value());
        let result = match verdict {
            FieldVerdict::Blank => field.show_error(REQUIRED_MESSAGE),
            FieldVerdict::Filled => field.clear_error(),
        };
        if let Err(e) = result
            && first_err.is_ok()
        {
            first_err = Err(e);
        }
        verdicts.push(verdict);
    }
    (FormReport { verdicts }, first_err)
}
