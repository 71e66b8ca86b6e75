use super::*;

#[test]
fn staging_source_is_used() {
    assert_eq!(lazy_source(Some("/img/laptop.webp")), Some("/img/laptop.webp"));
    assert_eq!(lazy_source(Some(" /img/a.png ")), Some("/img/a.png"));
}

#[test]
fn missing_or_blank_staging_source_is_skipped() {
    assert_eq!(lazy_source(None), None);
    assert_eq!(lazy_source(Some("")), None);
    assert_eq!(lazy_source(Some("   ")), None);
}

#[test]
fn preloads_icon_font_stylesheet() {
    assert_eq!(PRELOAD_HINTS.len(), 1);
    assert!(PRELOAD_HINTS[0].href.ends_with("font-awesome/6.4.0/css/all.min.css"));
    assert_eq!(PRELOAD_HINTS[0].kind, "style");
}
