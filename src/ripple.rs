//! Button ripple and press feedback geometry.

#[cfg(test)]
#[path = "ripple_test.rs"]
mod ripple_test;

pub const RIPPLE_CLASS: &str = "ripple";

/// Lifetime of a ripple node.
pub const RIPPLE_MS: u32 = 600;

pub const PRESS_TRANSFORM: &str = "scale(0.95)";
pub const RELEASE_TRANSFORM: &str = "scale(1)";

/// How long a button stays pressed in.
pub const PRESS_MS: u32 = 150;

/// Viewport-relative box, as reported by `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Size and button-relative position of a ripple, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleGeometry {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl RippleGeometry {
    /// Center a square ripple, as large as the button's longer side, on the
    /// click point.
    #[must_use]
    pub fn compute(button: Rect, client_x: f64, client_y: f64) -> Self {
        let size = button.width.max(button.height);
        Self {
            size,
            left: client_x - button.left - size / 2.0,
            top: client_y - button.top - size / 2.0,
        }
    }

    /// Inline style declarations for the ripple node.
    #[must_use]
    pub fn styles(&self) -> [(&'static str, String); 4] {
        [
            ("width", px(self.size)),
            ("height", px(self.size)),
            ("left", px(self.left)),
            ("top", px(self.top)),
        ]
    }
}

fn px(value: f64) -> String {
    format!("{value}px")
}
