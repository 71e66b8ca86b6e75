//! Navbar scroll effect: shadow past a small offset, hide while scrolling down.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

/// Class toggled on the navbar once the page is scrolled.
pub const SCROLLED_CLASS: &str = "scrolled";

/// Offset past which the navbar gets its shadow.
pub const SCROLLED_THRESHOLD_PX: f64 = 50.0;

/// Offset past which scrolling down hides the navbar.
pub const HIDE_THRESHOLD_PX: f64 = 100.0;

pub const HIDDEN_TRANSFORM: &str = "translateY(-100%)";
pub const SHOWN_TRANSFORM: &str = "translateY(0)";

/// Presentation the navbar should have after a scroll event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavbarFrame {
    pub scrolled: bool,
    pub hidden: bool,
}

impl NavbarFrame {
    #[must_use]
    pub fn transform(self) -> &'static str {
        if self.hidden { HIDDEN_TRANSFORM } else { SHOWN_TRANSFORM }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NavbarState {
    last_scroll_top: f64,
}

impl NavbarState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the current vertical scroll offset.
    pub fn on_scroll(&mut self, scroll_top: f64) -> NavbarFrame {
        let frame = NavbarFrame {
            scrolled: scroll_top > SCROLLED_THRESHOLD_PX,
            hidden: scroll_top > self.last_scroll_top && scroll_top > HIDE_THRESHOLD_PX,
        };
        self.last_scroll_top = scroll_top;
        frame
    }

    #[must_use]
    pub fn last_scroll_top(&self) -> f64 {
        self.last_scroll_top
    }
}
