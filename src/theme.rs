//! Theme preference model and toggle rules.
//!
//! The page carries a single persisted preference: `"light"` or `"dark"`.
//! [`ThemeState`] reads it once, flips it on toggle, and writes it back on
//! every change through a [`PreferenceStore`]. The browser binding lives in
//! `controllers::theme`; this module never touches the DOM.
//!
//! TRADE-OFFS
//! ==========
//! Storage is behind a trait so tests use [`MemoryStore`] and the browser
//! build uses `localStorage`. Write failures are reported to the caller, which
//! logs them; the in-memory theme still flips so the page stays responsive.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::StoreError;

/// Root attribute written on `<html>`.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Icon class shown while the dark theme is active.
pub const ICON_DARK: &str = "fas fa-sun";

/// Icon class shown while the light theme is active.
pub const ICON_LIGHT: &str = "fas fa-moon";

/// Rotation applied to the toggle control while the theme flips.
pub const SPIN_TRANSFORM: &str = "rotate(360deg)";

/// Resting rotation for the toggle control.
pub const REST_TRANSFORM: &str = "rotate(0deg)";

/// How long the toggle control stays rotated.
pub const SPIN_MS: u32 = 300;

/// Two-valued color scheme preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Storage and attribute representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything unrecognized is `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Icon class for the toggle control while this theme is active.
    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Light => ICON_LIGHT,
            Self::Dark => ICON_DARK,
        }
    }
}

/// Key/value persistence for user preferences.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns [`StoreError`] when the backing storage rejects the write.
    fn save(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory store used by tests and by pages without `localStorage`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Current theme plus the storage key it persists under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeState {
    pub current: Theme,
    key: String,
}

impl ThemeState {
    /// Read the persisted preference, defaulting to [`Theme::Light`].
    #[must_use]
    pub fn load(store: &dyn PreferenceStore, key: &str) -> Self {
        let current = store
            .load(key)
            .and_then(|raw| Theme::parse(&raw))
            .unwrap_or_default();
        Self { current, key: key.to_owned() }
    }

    /// Set `theme` as current and persist it.
    ///
    /// # Errors
    ///
    /// Propagates the store's write failure. `current` is updated regardless.
    pub fn apply(&mut self, store: &dyn PreferenceStore, theme: Theme) -> Result<Theme, StoreError> {
        self.current = theme;
        store.save(&self.key, theme.as_str())?;
        Ok(theme)
    }

    /// Flip the theme and persist the new value.
    ///
    /// # Errors
    ///
    /// Propagates the store's write failure. `current` is flipped regardless.
    pub fn toggle(&mut self, store: &dyn PreferenceStore) -> Result<Theme, StoreError> {
        let next = self.current.toggled();
        self.apply(store, next)
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Whether a key press is the Ctrl/Cmd+J theme shortcut.
#[must_use]
pub fn is_toggle_chord(key: &str, ctrl: bool, meta: bool) -> bool {
    (ctrl || meta) && key == "j"
}
