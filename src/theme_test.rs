use super::*;

const KEY: &str = "theme";

struct ReadOnlyStore;

impl PreferenceStore for ReadOnlyStore {
    fn load(&self, _key: &str) -> Option<String> {
        Some("dark".to_owned())
    }

    fn save(&self, key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Rejected { key: key.to_owned(), reason: "quota".to_owned() })
    }
}

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_default_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn theme_parse_accepts_only_known_values() {
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse("Dark"), None);
    assert_eq!(Theme::parse(""), None);
}

#[test]
fn theme_icon_tracks_active_theme() {
    assert_eq!(Theme::Dark.icon_class(), "fas fa-sun");
    assert_eq!(Theme::Light.icon_class(), "fas fa-moon");
}

// =============================================================
// ThemeState
// =============================================================

#[test]
fn load_defaults_to_light_when_absent() {
    let store = MemoryStore::new();
    let state = ThemeState::load(&store, KEY);
    assert_eq!(state.current, Theme::Light);
    assert_eq!(state.key(), KEY);
}

#[test]
fn load_defaults_to_light_when_unrecognized() {
    let store = MemoryStore::new();
    store.save(KEY, "sepia").unwrap();
    assert_eq!(ThemeState::load(&store, KEY).current, Theme::Light);
}

#[test]
fn load_reads_persisted_dark() {
    let store = MemoryStore::new();
    store.save(KEY, "dark").unwrap();
    assert_eq!(ThemeState::load(&store, KEY).current, Theme::Dark);
}

#[test]
fn toggle_twice_returns_to_original_and_persists_final_value() {
    let store = MemoryStore::new();
    let mut state = ThemeState::load(&store, KEY);
    let original = state.current;

    assert_eq!(state.toggle(&store).unwrap(), Theme::Dark);
    assert_eq!(store.load(KEY).as_deref(), Some("dark"));

    assert_eq!(state.toggle(&store).unwrap(), original);
    assert_eq!(store.load(KEY).as_deref(), Some(original.as_str()));
}

#[test]
fn apply_persists_initial_theme() {
    let store = MemoryStore::new();
    let mut state = ThemeState::load(&store, KEY);
    state.apply(&store, state.current).unwrap();
    assert_eq!(store.load(KEY).as_deref(), Some("light"));
}

#[test]
fn toggle_flips_even_when_store_rejects_write() {
    let store = ReadOnlyStore;
    let mut state = ThemeState::load(&store, KEY);
    assert_eq!(state.current, Theme::Dark);
    let err = state.toggle(&store).unwrap_err();
    assert!(err.to_string().contains("theme"));
    assert_eq!(state.current, Theme::Light);
}

// =============================================================
// Shortcut
// =============================================================

#[test]
fn chord_requires_modifier_and_lowercase_j() {
    assert!(is_toggle_chord("j", true, false));
    assert!(is_toggle_chord("j", false, true));
    assert!(!is_toggle_chord("j", false, false));
    assert!(!is_toggle_chord("k", true, false));
    assert!(!is_toggle_chord("J", true, false));
}
