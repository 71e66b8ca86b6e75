use super::*;

fn menu() -> MenuState {
    MenuState::new(768.0)
}

#[test]
fn starts_closed() {
    assert!(!menu().open);
}

#[test]
fn toggle_opens_then_closes() {
    let mut m = menu();
    assert_eq!(m.toggle(), MenuEffect::Open);
    assert!(m.open);
    assert_eq!(m.toggle(), MenuEffect::Close);
    assert!(!m.open);
}

#[test]
fn outside_click_closes_open_menu() {
    let mut m = menu();
    m.toggle();
    assert_eq!(m.on_outside_click(false), MenuEffect::Close);
    assert!(!m.open);
}

#[test]
fn inside_click_keeps_menu_open() {
    let mut m = menu();
    m.toggle();
    assert_eq!(m.on_outside_click(true), MenuEffect::None);
    assert!(m.open);
}

#[test]
fn outside_click_on_closed_menu_is_noop() {
    let mut m = menu();
    assert_eq!(m.on_outside_click(false), MenuEffect::None);
}

#[test]
fn widening_past_breakpoint_closes_open_menu() {
    let mut m = menu();
    m.toggle();
    assert_eq!(m.on_resize(1024.0), MenuEffect::Close);
    assert!(!m.open);
}

#[test]
fn resize_at_or_below_breakpoint_keeps_menu() {
    let mut m = menu();
    m.toggle();
    assert_eq!(m.on_resize(768.0), MenuEffect::None);
    assert_eq!(m.on_resize(400.0), MenuEffect::None);
    assert!(m.open);
}

#[test]
fn open_styles_make_a_fixed_column_dropdown() {
    assert!(OPEN_STYLES.contains(&("display", "flex")));
    assert!(OPEN_STYLES.contains(&("flex-direction", "column")));
    assert!(OPEN_STYLES.contains(&("z-index", "999")));
}

#[test]
fn items_stagger_by_100ms() {
    assert_eq!(item_delay_ms(0), 0);
    assert_eq!(item_delay_ms(1), 100);
    assert_eq!(item_delay_ms(4), 400);
}
