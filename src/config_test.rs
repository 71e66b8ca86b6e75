use super::*;

#[test]
fn defaults_match_landing_markup() {
    let cfg = PageConfig::default();
    assert_eq!(cfg.theme_storage_key, "theme");
    assert!((cfg.navbar_offset_px - 70.0).abs() < f64::EPSILON);
    assert!((cfg.mobile_breakpoint_px - 768.0).abs() < f64::EPSILON);
    assert_eq!(cfg.selectors.theme_toggle_id, "theme-toggle");
    assert_eq!(cfg.selectors.stat_numbers, ".stat-number");
}

#[test]
fn empty_object_yields_defaults() {
    assert_eq!(PageConfig::from_json("{}").unwrap(), PageConfig::default());
}

#[test]
fn partial_override_keeps_other_defaults() {
    let cfg = PageConfig::from_json(r##"{ "mobile_breakpoint_px": 900, "selectors": { "navbar": "#top-bar" } }"##)
        .unwrap();
    assert!((cfg.mobile_breakpoint_px - 900.0).abs() < f64::EPSILON);
    assert_eq!(cfg.selectors.navbar, "#top-bar");
    assert_eq!(cfg.selectors.nav_links, ".nav-link");
    assert_eq!(cfg.theme_storage_key, "theme");
}

#[test]
fn malformed_island_is_a_parse_error() {
    let err = PageConfig::from_json("{ not json").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().starts_with("malformed page config"));
}

#[test]
fn wrong_field_type_is_a_parse_error() {
    assert!(PageConfig::from_json(r#"{ "navbar_offset_px": "seventy" }"#).is_err());
}
