//! Mobile navigation menu state.
//!
//! The panel is either open or closed. Input events (button click, document
//! click, resize) are fed to [`MenuState`], which answers with the
//! [`MenuEffect`] the DOM layer should apply.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

/// Inline styles applied to the panel when it opens.
pub const OPEN_STYLES: &[(&str, &str)] = &[
    ("display", "flex"),
    ("flex-direction", "column"),
    ("position", "absolute"),
    ("top", "100%"),
    ("left", "0"),
    ("right", "0"),
    ("background-color", "var(--navbar-background)"),
    ("backdrop-filter", "blur(10px)"),
    ("border-top", "1px solid var(--border-color)"),
    ("padding", "1rem"),
    ("gap", "1rem"),
    ("z-index", "999"),
];

/// Item styles set immediately on open, before the staggered reveal.
pub const ITEM_HIDDEN_STYLES: &[(&str, &str)] = &[("opacity", "0"), ("transform", "translateY(-10px)")];

/// Item styles applied when an item's stagger delay elapses.
pub const ITEM_SHOWN_STYLES: &[(&str, &str)] = &[
    ("transition", "all 0.3s ease"),
    ("opacity", "1"),
    ("transform", "translateY(0)"),
];

/// Delay between consecutive menu items fading in.
pub const ITEM_STAGGER_MS: u32 = 100;

/// What the DOM layer must do after an input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEffect {
    Open,
    Close,
    None,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MenuState {
    pub open: bool,
    breakpoint_px: f64,
}

impl MenuState {
    #[must_use]
    pub fn new(breakpoint_px: f64) -> Self {
        Self { open: false, breakpoint_px }
    }

    /// Menu button clicked.
    pub fn toggle(&mut self) -> MenuEffect {
        self.open = !self.open;
        if self.open { MenuEffect::Open } else { MenuEffect::Close }
    }

    /// Document click. `inside` is true when the target is within the panel
    /// or the menu button.
    pub fn on_outside_click(&mut self, inside: bool) -> MenuEffect {
        if inside { MenuEffect::None } else { self.close() }
    }

    /// Viewport resized to `inner_width` CSS pixels.
    pub fn on_resize(&mut self, inner_width: f64) -> MenuEffect {
        if inner_width > self.breakpoint_px { self.close() } else { MenuEffect::None }
    }

    fn close(&mut self) -> MenuEffect {
        if !self.open {
            return MenuEffect::None;
        }
        self.open = false;
        MenuEffect::Close
    }
}

/// Reveal delay for the menu item at `index`.
#[must_use]
pub fn item_delay_ms(index: usize) -> u32 {
    u32::try_from(index).map_or(u32::MAX, |i| i.saturating_mul(ITEM_STAGGER_MS))
}
