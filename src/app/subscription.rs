// SPDX-License-Identifier: MPL-2.0
//! Periodic subscriptions for the gallery application.
//!
//! Timers that end a toast's life are one-shot tasks scheduled by
//! `App::update`; the subscriptions here only cover redraws while toasts
//! animate and following the OS theme.

use super::Message;
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use iced::{time, Subscription};
use std::time::Duration;

/// Redraw interval while a toast slides in or out (about 60 fps).
pub const ANIMATION_FRAME: Duration = Duration::from_millis(16);

/// How often the OS theme is re-read while the theme mode is `System`.
pub const SYSTEM_THEME_POLL: Duration = Duration::from_secs(2);

/// Ticks the overlay every frame while any toast is animating.
pub fn create_animation_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        time::every(ANIMATION_FRAME).map(|at| Message::Notification(notifications::Message::Tick(at)))
    } else {
        Subscription::none()
    }
}

/// Re-reads the OS theme periodically when no explicit mode is chosen.
pub fn create_system_theme_subscription(theme_mode: ThemeMode) -> Subscription<Message> {
    if theme_mode == ThemeMode::System {
        time::every(SYSTEM_THEME_POLL).map(|_| Message::RefreshSystemTheme)
    } else {
        Subscription::none()
    }
}
