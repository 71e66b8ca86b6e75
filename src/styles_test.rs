use super::*;
use crate::{navbar, reveal, ripple};

#[test]
fn stylesheet_defines_every_toggled_class() {
    for class in [
        ripple::RIPPLE_CLASS,
        reveal::FADE_UP_CLASS,
        reveal::SLIDE_LEFT_CLASS,
        reveal::SLIDE_RIGHT_CLASS,
    ] {
        assert!(ENHANCED_CSS.contains(&format!(".{class} {{")), "missing rule for .{class}");
    }
    assert!(ENHANCED_CSS.contains(&format!(".navbar.{}", navbar::SCROLLED_CLASS)));
}

#[test]
fn ripple_keyframes_match_ripple_lifetime() {
    assert!(ENHANCED_CSS.contains("ripple-animation 0.6s"));
    assert_eq!(ripple::RIPPLE_MS, 600);
}
