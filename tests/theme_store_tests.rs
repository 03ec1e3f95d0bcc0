//! Integration tests for theme state propagation and persistence.

use std::cell::RefCell;
use std::rc::Rc;
use tempfile::TempDir;

use devfolio::config::Config;
use devfolio::models::Portfolio;
use devfolio::theme::{ConfigThemePersistence, Theme, ThemeStore};
use devfolio::tui::{AppState, MemoryClipboard, Palette};

#[test]
fn test_every_observer_sees_every_toggle() {
    let mut store = ThemeStore::new(Theme::Light);
    let first = Rc::new(RefCell::new(Vec::new()));
    let second = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&first);
    store.subscribe(move |theme| sink.borrow_mut().push(theme));
    let sink = Rc::clone(&second);
    store.subscribe(move |theme| sink.borrow_mut().push(theme));

    store.toggle_theme();
    store.toggle_theme();

    assert_eq!(*first.borrow(), vec![Theme::Dark, Theme::Light]);
    assert_eq!(*first.borrow(), *second.borrow());
}

#[test]
fn test_unsubscribed_observer_stops_receiving() {
    let mut store = ThemeStore::new(Theme::Light);
    let seen = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&seen);
    let id = store.subscribe(move |_| *sink.borrow_mut() += 1);

    store.toggle_theme();
    assert!(store.unsubscribe(id));
    assert!(!store.unsubscribe(id));
    store.toggle_theme();

    assert_eq!(*seen.borrow(), 1);
    assert_eq!(store.subscriber_count(), 0);
}

#[test]
fn test_palette_follows_store() {
    let mut state = AppState::new(ThemeStore::new(Theme::Light), Portfolio::builtin())
        .with_clipboard(Box::new(MemoryClipboard::new()));
    assert_eq!(state.palette(), Palette::light());

    state.toggle_theme();
    assert_eq!(state.palette(), Palette::dark());
}

#[test]
fn test_config_persistence_survives_restart() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");

    let mut config = Config::new();
    config.ui.remember_theme = true;
    config.save_to(&path).unwrap();

    {
        let persistence = ConfigThemePersistence::new(path.clone());
        let mut store = ThemeStore::with_persistence(Box::new(persistence), Theme::Light);
        assert_eq!(store.theme(), Theme::Light);
        store.toggle_theme();
    }

    let reloaded = Config::load_from(&path).unwrap();
    assert_eq!(reloaded.ui.last_theme, Some(Theme::Dark));

    let persistence = ConfigThemePersistence::new(path);
    let store = ThemeStore::with_persistence(Box::new(persistence), Theme::Light);
    assert_eq!(store.theme(), Theme::Dark);
}

#[test]
fn test_config_persistence_keeps_external_edits() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");

    let mut config = Config::new();
    config.ui.remember_theme = true;
    config.save_to(&path).unwrap();

    let persistence = ConfigThemePersistence::new(path.clone());
    let mut store = ThemeStore::with_persistence(Box::new(persistence), Theme::Light);

    // Another process edits the file while the page is open
    let mut edited = Config::load_from(&path).unwrap();
    edited.web.port = 4321;
    edited.save_to(&path).unwrap();

    store.toggle_theme();

    let reloaded = Config::load_from(&path).unwrap();
    assert_eq!(reloaded.web.port, 4321);
    assert_eq!(reloaded.ui.last_theme, Some(Theme::Dark));
}

#[test]
fn test_override_does_not_replace_stored_preference() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");

    let mut config = Config::new();
    config.ui.remember_theme = true;
    config.ui.last_theme = Some(Theme::Light);
    config.save_to(&path).unwrap();

    let store = ThemeStore::new(Theme::Dark)
        .persisting(Box::new(ConfigThemePersistence::new(path.clone())));
    assert_eq!(store.theme(), Theme::Dark);

    let reloaded = Config::load_from(&path).unwrap();
    assert_eq!(reloaded.ui.last_theme, Some(Theme::Light));
}
