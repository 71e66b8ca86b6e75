use super::*;

#[test]
fn single_click_reverts_to_original_label() {
    let mut fb = CartFeedback::new();
    let generation = fb.begin("Add to Cart");
    assert!(fb.is_showing());
    assert_eq!(fb.revert(generation).as_deref(), Some("Add to Cart"));
    assert!(!fb.is_showing());
}

#[test]
fn second_click_keeps_first_label_and_extends_window() {
    let mut fb = CartFeedback::new();
    let first = fb.begin("Add to Cart");
    let second = fb.begin(ADDED_LABEL);

    assert_eq!(fb.revert(first), None);
    assert!(fb.is_showing());
    assert_eq!(fb.revert(second).as_deref(), Some("Add to Cart"));
}

#[test]
fn revert_twice_is_noop() {
    let mut fb = CartFeedback::new();
    let generation = fb.begin("Buy");
    assert!(fb.revert(generation).is_some());
    assert!(fb.revert(generation).is_none());
}

#[test]
fn confirmation_constants() {
    assert_eq!(ADDED_LABEL, "Added! ✓");
    assert_eq!(ADDED_COLOR, "#10b981");
    assert_eq!(ADDED_MS, 2000);
}
