// SPDX-License-Identifier: MPL-2.0
//! Configuration persistence logic.
//!
//! The gallery only persists the theme mode; notification defaults are read
//! at startup and never written back.

use super::Message;
use crate::config;
use crate::ui::theming::ThemeMode;
use iced::Task;
use std::path::Path;

/// Persists the theme mode to disk.
///
/// Guarded during tests to keep isolation: unit tests exercise the logic by
/// calling `config::save_to_path` directly.
pub fn persist_theme_mode(theme_mode: ThemeMode, config_dir: Option<&Path>) -> Task<Message> {
    if cfg!(test) {
        return Task::none();
    }

    let (mut cfg, _warning) = config::load(config_dir);
    cfg.general.theme_mode = theme_mode;

    if let Err(error) = config::save(&cfg, config_dir) {
        eprintln!("Failed to save config: {:?}", error);
    }

    Task::none()
}
