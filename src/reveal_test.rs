use super::*;

#[test]
fn card_reveal_uses_ten_percent_threshold() {
    assert!((CARD_REVEAL.threshold - 0.1).abs() < f64::EPSILON);
    assert_eq!(CARD_REVEAL.root_margin, "0px 0px -50px 0px");
}

#[test]
fn stagger_grows_by_100ms() {
    assert_eq!(stagger_delay_ms(0), 0);
    assert_eq!(stagger_delay_ms(3), 300);
}

#[test]
fn stagger_saturates_instead_of_overflowing() {
    assert_eq!(stagger_delay_ms(usize::MAX), u32::MAX);
}

#[test]
fn only_intersecting_entries_are_revealed() {
    let reveals = staggered_reveals(&[true, false, true]);
    assert_eq!(reveals, vec![(0, 0), (2, 200)]);
}

#[test]
fn empty_batch_reveals_nothing() {
    assert!(staggered_reveals(&[]).is_empty());
}

#[test]
fn hero_content_precedes_hero_image() {
    let [content, image] = HERO_SCHEDULE;
    assert_eq!(content.class, "animate-slide-left");
    assert_eq!(content.delay_ms, 300);
    assert_eq!(image.class, "animate-slide-right");
    assert_eq!(image.delay_ms, 600);
}
