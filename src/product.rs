//! Product card and category card interactions.
//!
//! An add-to-cart click swaps the button label and color for a short window.
//! [`CartFeedback`] remembers the label from before the first click so a
//! repeated click inside the window cannot capture the confirmation text as
//! the "original" label.

#[cfg(test)]
#[path = "product_test.rs"]
mod product_test;

pub const ADDED_LABEL: &str = "Added! \u{2713}";
pub const ADDED_COLOR: &str = "#10b981";

/// How long the confirmation stays on the button.
pub const ADDED_MS: u32 = 2000;

/// Icon inside a category card that spins on hover.
pub const CATEGORY_ICON_SELECTOR: &str = ".category-icon i";
pub const ICON_SPIN_TRANSFORM: &str = "rotate(360deg)";
pub const ICON_REST_TRANSFORM: &str = "rotate(0deg)";
pub const ICON_SPIN_MS: u32 = 600;

/// Per-button confirmation state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CartFeedback {
    original: Option<String>,
    generation: u32,
}

impl CartFeedback {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Button clicked while showing `current_label`. Returns the generation
    /// the scheduled revert must present.
    pub fn begin(&mut self, current_label: &str) -> u32 {
        if self.original.is_none() {
            self.original = Some(current_label.to_owned());
        }
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    /// Revert timer fired. Returns the label to restore when `generation` is
    /// still the latest click; stale timers get `None`.
    pub fn revert(&mut self, generation: u32) -> Option<String> {
        if generation != self.generation {
            return None;
        }
        self.original.take()
    }

    #[must_use]
    pub fn is_showing(&self) -> bool {
        self.original.is_some()
    }
}
