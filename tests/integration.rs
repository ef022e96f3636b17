// SPDX-License-Identifier: MPL-2.0
use iced_toast::config::{self, Config, DEFAULT_AUTO_DISMISS_MS};
use iced_toast::ui::notifications::{
    NotificationOptions, NotificationStore, Overlay, Position, VisualState,
};
use iced_toast::ui::theming::ThemeMode;
use std::time::{Duration, Instant};
use tempfile::tempdir;

#[test]
fn test_notification_defaults_via_config() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: library defaults
    let initial_config = Config::default();
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let store = NotificationStore::with_defaults(loaded_initial_config.notification_defaults());
    let id = store.add(NotificationOptions::new("hello")).unwrap();
    let record = store.get(id).expect("record should exist");
    assert_eq!(record.duration().as_millis(), DEFAULT_AUTO_DISMISS_MS);
    assert_eq!(record.position(), Position::TopRight);

    // 2. Change defaults: sticky toasts at the bottom, no close button
    let mut custom_config = Config::default();
    custom_config.notifications.default_duration_ms = Some(0);
    custom_config.notifications.default_position = Some(Position::BottomLeft);
    custom_config.notifications.closable = Some(false);
    config::save_to_path(&custom_config, &temp_config_file_path)
        .expect("Failed to write custom config file");

    let loaded_custom_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load custom config from path");
    let store = NotificationStore::with_defaults(loaded_custom_config.notification_defaults());
    let id = store.add(NotificationOptions::new("hello")).unwrap();
    let record = store.get(id).expect("record should exist");
    assert!(record.duration().is_sticky());
    assert_eq!(record.position(), Position::BottomLeft);
    assert!(!record.closable());

    // Clean up temporary directory
    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_configured_transition_window_drives_overlay() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let mut cfg = Config::default();
    cfg.notifications.transition_ms = Some(40);
    config::save(&cfg, Some(dir.path())).expect("Failed to save config");

    let (loaded, warning) = config::load(Some(dir.path()));
    assert!(warning.is_none());

    let store = NotificationStore::with_defaults(loaded.notification_defaults());
    let mut overlay = Overlay::new(store.clone(), loaded.transition_window());
    let t0 = Instant::now();
    let id = store
        .add(NotificationOptions::new("quick").duration_ms(10))
        .unwrap();
    overlay.sync(t0);

    overlay.tick(t0 + Duration::from_millis(10));
    assert_eq!(overlay.visual_state(id), Some(VisualState::Exiting));
    overlay.tick(t0 + Duration::from_millis(50));
    assert!(!store.contains(id));
}

#[test]
fn test_theme_mode_round_trips() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let mut cfg = Config::default();
    cfg.general.theme_mode = ThemeMode::Dark;

    config::save(&cfg, Some(dir.path())).expect("Failed to save config");
    let (loaded, _warning) = config::load(Some(dir.path()));

    assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
    assert_eq!(loaded, cfg);
}
