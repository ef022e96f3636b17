// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the gallery application.

use crate::ui::notifications::{self, NotificationOptions, Position, Variant};
use crate::ui::theming::ThemeMode;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Forwarded to the notification overlay.
    Notification(notifications::Message),
    /// Issue one of the gallery's sample notifications.
    Show(Preset),
    DismissAll,
    ToggleTheme,
    /// Re-resolve the color mode from the OS while the theme mode is `System`.
    RefreshSystemTheme,
}

/// Sample notifications offered by the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// One toast of the given variant at the default position.
    Variant(Variant),
    /// An info toast anchored at the given position.
    Position(Position),
    /// Stays until closed.
    Sticky,
    /// Carries an "Undo" action.
    WithAction,
    /// Not closable, with a title.
    Titled,
}

impl Preset {
    /// Builds the options for the `seq`-th notification issued by the gallery.
    ///
    /// `WithAction` is built by the app because its callback needs the store.
    pub fn options(self, seq: u64) -> NotificationOptions {
        match self {
            Preset::Variant(variant) => {
                NotificationOptions::new(format!("{} notification #{seq}", variant.as_str()))
                    .variant(variant)
            }
            Preset::Position(position) => {
                NotificationOptions::info(format!("Anchored {}", position.as_str()))
                    .position(position)
            }
            Preset::Sticky => {
                NotificationOptions::warning(format!("Sticky #{seq}: close me by hand")).sticky()
            }
            Preset::WithAction => NotificationOptions::info(format!("Item #{seq} archived")),
            Preset::Titled => NotificationOptions::success("Your changes were saved.")
                .title("Saved")
                .closable(false),
        }
    }
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Theme override; takes precedence over the configured mode.
    pub theme: Option<ThemeMode>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_TOAST_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
