//! Browser-bound controllers, one per page behavior.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each controller resolves its elements from the [`PageContext`], registers
//! listeners/observers, and keeps the handles. Decisions are delegated to the
//! browser-independent core modules (`crate::theme`, `crate::menu`, ...);
//! controllers only read inputs from the DOM and write the results back.
//!
//! Controllers never talk to each other and address disjoint elements.
//!
//! [`PageContext`]: crate::page::PageContext

pub mod button_effects;
pub mod counter;
pub mod form;
pub mod mobile_menu;
pub mod navbar;
pub mod performance;
pub mod product;
pub mod scroll_animations;
pub mod smooth_scroll;
pub mod styles;
pub mod theme;

pub use button_effects::ButtonEffects;
pub use counter::CounterAnimation;
pub use form::FormValidation;
pub use mobile_menu::MobileMenu;
pub use navbar::NavbarScroll;
pub use performance::PerformanceOptimizer;
pub use product::ProductInteractions;
pub use scroll_animations::ScrollAnimations;
pub use smooth_scroll::SmoothScroller;
pub use styles::StyleInjector;
pub use theme::ThemeManager;

/// A mounted page behavior.
pub trait Controller {
    fn name(&self) -> &'static str;

    /// Remove listeners, disconnect observers and cancel pending timers.
    /// Presentation already applied to the page is left as is.
    fn detach(&mut self);
}
