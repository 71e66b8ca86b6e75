//! Page configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every controller reads its selectors and tunables from [`PageConfig`]
//! instead of hard-coding them, so a page with different markup can ship a
//! JSON island:
//!
//! ```html
//! <script type="application/json" id="landing-config">
//!   { "mobile_breakpoint_px": 900, "selectors": { "navbar": "#top-bar" } }
//! </script>
//! ```
//!
//! Missing fields fall back to the defaults below.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::ConfigError;

/// `id` of the optional JSON config island.
pub const CONFIG_ELEMENT_ID: &str = "landing-config";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Storage key for the theme preference.
    pub theme_storage_key: String,
    /// Height of the fixed navbar, subtracted from smooth-scroll targets.
    pub navbar_offset_px: f64,
    /// Viewport width above which the mobile menu is force-closed.
    pub mobile_breakpoint_px: f64,
    pub selectors: Selectors,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            theme_storage_key: "theme".to_owned(),
            navbar_offset_px: 70.0,
            mobile_breakpoint_px: 768.0,
            selectors: Selectors::default(),
        }
    }
}

impl PageConfig {
    /// Parse a config island's text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the text is not a JSON object
    /// matching [`PageConfig`].
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// CSS selectors the controllers bind to.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Selectors {
    /// Theme toggle control (matched by id).
    pub theme_toggle_id: String,
    /// Icon inside the theme toggle.
    pub theme_icon: String,
    pub nav_links: String,
    pub mobile_menu_button: String,
    pub nav_menu: String,
    pub navbar: String,
    /// Cards that fade up when scrolled into view.
    pub reveal_cards: String,
    pub stat_numbers: String,
    pub buttons: String,
    pub add_to_cart_buttons: String,
    pub category_cards: String,
    pub forms: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            theme_toggle_id: "theme-toggle".to_owned(),
            theme_icon: "i".to_owned(),
            nav_links: ".nav-link".to_owned(),
            mobile_menu_button: ".mobile-menu-btn".to_owned(),
            nav_menu: ".nav-menu".to_owned(),
            navbar: ".navbar".to_owned(),
            reveal_cards: ".product-card, .category-card, .testimonial-card, .offer-card".to_owned(),
            stat_numbers: ".stat-number".to_owned(),
            buttons: ".btn".to_owned(),
            add_to_cart_buttons: ".product-card .btn-primary".to_owned(),
            category_cards: ".category-card".to_owned(),
            forms: "form".to_owned(),
        }
    }
}
