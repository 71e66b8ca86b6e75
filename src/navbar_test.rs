use super::*;

#[test]
fn scrolled_class_past_50px() {
    let mut nav = NavbarState::new();
    assert!(!nav.on_scroll(50.0).scrolled);
    assert!(nav.on_scroll(51.0).scrolled);
}

#[test]
fn scrolled_class_removed_when_back_under_50px() {
    let mut nav = NavbarState::new();
    assert!(nav.on_scroll(200.0).scrolled);
    assert!(!nav.on_scroll(30.0).scrolled);
}

#[test]
fn scrolling_down_past_100px_hides() {
    let mut nav = NavbarState::new();
    let frame = nav.on_scroll(150.0);
    assert!(frame.hidden);
    assert_eq!(frame.transform(), "translateY(-100%)");
}

#[test]
fn scrolling_down_below_100px_stays_visible() {
    let mut nav = NavbarState::new();
    assert!(!nav.on_scroll(60.0).hidden);
    assert!(!nav.on_scroll(90.0).hidden);
}

#[test]
fn scrolling_up_shows_again() {
    let mut nav = NavbarState::new();
    nav.on_scroll(400.0);
    let frame = nav.on_scroll(380.0);
    assert!(!frame.hidden);
    assert!(frame.scrolled);
    assert_eq!(frame.transform(), "translateY(0)");
}

#[test]
fn equal_offset_counts_as_not_scrolling_down() {
    let mut nav = NavbarState::new();
    nav.on_scroll(300.0);
    assert!(!nav.on_scroll(300.0).hidden);
}

#[test]
fn last_offset_is_tracked() {
    let mut nav = NavbarState::new();
    nav.on_scroll(123.0);
    assert!((nav.last_scroll_top() - 123.0).abs() < f64::EPSILON);
}
