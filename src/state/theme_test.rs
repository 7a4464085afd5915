use super::*;
use crate::util::storage::MemoryStorage;

#[test]
fn no_preference_defaults_to_dark_without_writing() {
    let store = MemoryStorage::default();
    let theme = ThemeState::load(&store);
    assert!(theme.is_dark());
    assert_eq!(theme.preference(), None);
    assert_eq!(store.get(THEME_KEY), None);
}

#[test]
fn stored_light_preference_is_honoured() {
    let store = MemoryStorage::default();
    store.set(THEME_KEY, "light");
    let theme = ThemeState::load(&store);
    assert!(!theme.is_dark());
    assert_eq!(theme.preference(), Some(Theme::Light));
}

#[test]
fn unknown_stored_value_is_ignored() {
    let store = MemoryStorage::default();
    store.set(THEME_KEY, "sepia");
    assert_eq!(ThemeState::load(&store), ThemeState::default());
}

#[test]
fn toggle_persists_choice() {
    let store = MemoryStorage::default();
    let mut theme = ThemeState::load(&store);
    theme.toggle(&store);
    assert!(!theme.is_dark());
    assert_eq!(store.get(THEME_KEY).as_deref(), Some("light"));
    theme.toggle(&store);
    assert!(theme.is_dark());
    assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
}

#[test]
fn system_changes_followed_only_without_preference() {
    let store = MemoryStorage::default();
    let mut theme = ThemeState::load(&store);
    assert!(theme.on_system_change(false));
    assert!(!theme.is_dark());
    assert!(!theme.on_system_change(false));
    assert!(theme.on_system_change(true));
    assert!(theme.is_dark());

    theme.toggle(&store);
    assert!(!theme.on_system_change(true));
    assert!(!theme.is_dark());
}

#[test]
fn use_system_clears_preference() {
    let store = MemoryStorage::default();
    let mut theme = ThemeState::load(&store);
    theme.toggle(&store);
    theme.use_system(&store, true);
    assert_eq!(theme.preference(), None);
    assert!(theme.is_dark());
    assert_eq!(store.get(THEME_KEY), None);
    assert!(theme.on_system_change(false));
}

#[test]
fn theme_names_round_trip() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::parse(theme.as_str()), Some(theme));
    }
}
