//! Error types for the page layer.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here is fatal to the page. A controller whose attach fails is
//! skipped with a warning; errors raised inside event callbacks are logged
//! and dropped. Form validation failures are data (`form::FormReport`), not
//! errors.

/// Failure to bind to or mutate the document.
#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("no element matches selector {selector:?}")]
    MissingElement { selector: String },
    #[error("element {selector:?} is not a {expected}")]
    WrongElementType { selector: String, expected: &'static str },
    #[error("javascript exception: {0}")]
    Js(String),
}

impl DomError {
    #[must_use]
    pub fn missing(selector: &str) -> Self {
        Self::MissingElement { selector: selector.to_owned() }
    }
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for DomError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

/// Failure to persist a preference.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage rejected write to {key:?}: {reason}")]
    Rejected { key: String, reason: String },
}

/// Failure to read the page configuration island.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("malformed page config: {0}")]
    Parse(#[from] serde_json::Error),
}
