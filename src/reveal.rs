//! Scroll-triggered entrance animations.
//!
//! Cards fade up as they enter the viewport, staggered by their position in
//! the intersection batch. The hero section animates on a fixed schedule
//! after mount regardless of scroll position.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

pub const FADE_UP_CLASS: &str = "animate-fade-up";
pub const SLIDE_LEFT_CLASS: &str = "animate-slide-left";
pub const SLIDE_RIGHT_CLASS: &str = "animate-slide-right";

/// Delay between entries of one intersection batch.
pub const STAGGER_MS: u32 = 100;

/// Intersection observer tuning.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

/// Cards: 10% visible, bottom edge pulled in by 50px.
pub const CARD_REVEAL: RevealOptions = RevealOptions { threshold: 0.1, root_margin: "0px 0px -50px 0px" };

/// One timed hero animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeroStep {
    pub selector: &'static str,
    pub class: &'static str,
    pub delay_ms: u32,
}

/// Hero content slides in first, then the image.
pub const HERO_SCHEDULE: [HeroStep; 2] = [
    HeroStep { selector: ".hero-content", class: SLIDE_LEFT_CLASS, delay_ms: 300 },
    HeroStep { selector: ".hero-image", class: SLIDE_RIGHT_CLASS, delay_ms: 600 },
];

/// Delay for the entry at `batch_index` within one observer callback.
#[must_use]
pub fn stagger_delay_ms(batch_index: usize) -> u32 {
    u32::try_from(batch_index).map_or(u32::MAX, |i| i.saturating_mul(STAGGER_MS))
}

/// Indices of intersecting entries paired with their stagger delay.
///
/// The delay follows the entry's position in the whole batch, so entries that
/// are not intersecting still advance the stagger.
#[must_use]
pub fn staggered_reveals(intersecting: &[bool]) -> Vec<(usize, u32)> {
    intersecting
        .iter()
        .enumerate()
        .filter(|(_, hit)| **hit)
        .map(|(i, _)| (i, stagger_delay_ms(i)))
        .collect()
}
