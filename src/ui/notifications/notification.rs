// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` record held by the store, the
//! caller-facing `NotificationOptions` builder, and the `Variant` and
//! `Position` enums used throughout the notification system.

use super::timing::AutoDismiss;
use crate::diagnostics::{CallbackKind, DiagnosticsHandle};
use crate::error::InvalidNotification;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;
use std::str::FromStr;
use std::time::Duration;

/// Zero-argument callback supplied by the caller.
///
/// Callbacks run on the UI thread only, hence `Rc` rather than `Arc`.
pub type Callback = Rc<dyn Fn()>;

/// Unique identifier for a notification.
///
/// Minted by the store from a monotonic counter; never reused by that store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Wraps a raw counter value.
    #[must_use]
    pub fn from_raw(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

/// Visual flavor of a notification. Drives the glyph and, through
/// [`ColorScheme::accent`](crate::ui::theming::ColorScheme::accent), the
/// accent color only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl Variant {
    pub const ALL: [Variant; 4] = [
        Variant::Info,
        Variant::Success,
        Variant::Warning,
        Variant::Error,
    ];

    /// Short glyph rendered in front of the message.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Variant::Info => "i",
            Variant::Success => "✓",
            Variant::Warning => "!",
            Variant::Error => "×",
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Info => "info",
            Variant::Success => "success",
            Variant::Warning => "warning",
            Variant::Error => "error",
        }
    }

    /// Parses a variant name, falling back to the default for unknown input.
    #[must_use]
    pub fn parse_or_default(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }
}

impl FromStr for Variant {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::ALL
            .into_iter()
            .find(|variant| variant.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or(())
    }
}

/// Screen region a notification is stacked in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    TopLeft,
    #[default]
    TopRight,
    TopCenter,
    BottomLeft,
    BottomRight,
    BottomCenter,
}

impl Position {
    /// All anchors, in the order rails are laid out.
    pub const ALL: [Position; 6] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    #[must_use]
    pub fn is_top(self) -> bool {
        matches!(
            self,
            Position::TopLeft | Position::TopRight | Position::TopCenter
        )
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Position::TopLeft => "top-left",
            Position::TopRight => "top-right",
            Position::TopCenter => "top-center",
            Position::BottomLeft => "bottom-left",
            Position::BottomRight => "bottom-right",
            Position::BottomCenter => "bottom-center",
        }
    }

    /// Parses an anchor name, falling back to the default for unknown input.
    #[must_use]
    pub fn parse_or_default(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }
}

impl FromStr for Position {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::ALL
            .into_iter()
            .find(|position| position.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or(())
    }
}

/// What an action callback wants done with its notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionResponse {
    /// Leave the toast on screen.
    #[default]
    KeepOpen,
    /// Start the exit transition.
    Close,
}

/// Action callback; its return value decides whether the toast closes.
pub type ActionCallback = Rc<dyn Fn() -> ActionResponse>;

/// Secondary action offered by a notification.
///
/// Pressing it never closes the notification on its own; the callback
/// answers [`ActionResponse::Close`] when it wants the toast gone.
#[derive(Clone)]
pub struct Action {
    label: String,
    callback: ActionCallback,
}

impl Action {
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    pub(crate) fn callback(&self) -> &ActionCallback {
        &self.callback
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// Store-wide defaults for fields a caller leaves unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationDefaults {
    pub variant: Variant,
    pub duration: AutoDismiss,
    pub closable: bool,
    pub position: Position,
}

impl Default for NotificationDefaults {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            duration: AutoDismiss::default(),
            closable: crate::config::DEFAULT_CLOSABLE,
            position: Position::default(),
        }
    }
}

/// Caller-supplied description of a notification to add.
///
/// Only the message is required; every other field falls back to the
/// store's [`NotificationDefaults`].
///
/// # Example
///
/// ```
/// use iced_toast::ui::notifications::{NotificationOptions, Position};
///
/// let options = NotificationOptions::success("Saved")
///     .title("Profile")
///     .position(Position::BottomCenter)
///     .sticky();
/// assert_eq!(options.message(), "Saved");
/// ```
#[derive(Clone, Default)]
#[must_use]
pub struct NotificationOptions {
    message: String,
    title: Option<String>,
    variant: Option<Variant>,
    duration: Option<AutoDismiss>,
    closable: Option<bool>,
    position: Option<Position>,
    action: Option<Action>,
    on_close: Option<Callback>,
}

impl NotificationOptions {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message).variant(Variant::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message).variant(Variant::Success)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message).variant(Variant::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message).variant(Variant::Error)
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = Some(variant);
        self
    }

    /// Sets the auto-dismiss delay; negative values mean "never".
    pub fn duration_ms(mut self, millis: i64) -> Self {
        self.duration = Some(AutoDismiss::from_signed_millis(millis));
        self
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(AutoDismiss::from_duration(duration));
        self
    }

    /// Keeps the notification until it is closed explicitly.
    pub fn sticky(mut self) -> Self {
        self.duration = Some(AutoDismiss::STICKY);
        self
    }

    pub fn closable(mut self, closable: bool) -> Self {
        self.closable = Some(closable);
        self
    }

    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    /// Adds an action button. Pressing it runs `callback` and leaves the
    /// notification open.
    pub fn action(self, label: impl Into<String>, callback: impl Fn() + 'static) -> Self {
        self.action_with(label, move || {
            callback();
            ActionResponse::KeepOpen
        })
    }

    /// Adds an action button whose callback decides, each time it runs,
    /// whether the notification should close.
    pub fn action_with(
        mut self,
        label: impl Into<String>,
        callback: impl Fn() -> ActionResponse + 'static,
    ) -> Self {
        self.action = Some(Action {
            label: label.into(),
            callback: Rc::new(callback),
        });
        self
    }

    /// Runs once the notification has left the store, whatever removed it.
    pub fn on_close(mut self, callback: impl Fn() + 'static) -> Self {
        self.on_close = Some(Rc::new(callback));
        self
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Checks the fields the store cannot default.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidNotification::EmptyMessage`] when the message has no
    /// visible text.
    pub fn validate(&self) -> Result<(), InvalidNotification> {
        if self.message.trim().is_empty() {
            return Err(InvalidNotification::EmptyMessage);
        }
        Ok(())
    }
}

impl fmt::Debug for NotificationOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationOptions")
            .field("message", &self.message)
            .field("title", &self.title)
            .field("variant", &self.variant)
            .field("duration", &self.duration)
            .field("closable", &self.closable)
            .field("position", &self.position)
            .field("action", &self.action)
            .field("has_on_close", &self.on_close.is_some())
            .finish()
    }
}

/// A notification held by the store.
///
/// Cloning is cheap: callbacks are reference counted.
#[derive(Clone)]
pub struct Notification {
    id: NotificationId,
    message: String,
    title: Option<String>,
    variant: Variant,
    duration: AutoDismiss,
    closable: bool,
    position: Position,
    action: Option<Action>,
    on_close: Option<Callback>,
}

impl Notification {
    /// Builds a record from caller options, filling unset fields from `defaults`.
    pub(crate) fn from_options(
        id: NotificationId,
        options: NotificationOptions,
        defaults: &NotificationDefaults,
    ) -> Self {
        Self {
            id,
            message: options.message,
            title: options.title,
            variant: options.variant.unwrap_or(defaults.variant),
            duration: options.duration.unwrap_or(defaults.duration),
            closable: options.closable.unwrap_or(defaults.closable),
            position: options.position.unwrap_or(defaults.position),
            action: options.action,
            on_close: options.on_close,
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    #[must_use]
    pub fn duration(&self) -> AutoDismiss {
        self.duration
    }

    #[must_use]
    pub fn closable(&self) -> bool {
        self.closable
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn action(&self) -> Option<&Action> {
        self.action.as_ref()
    }

    pub(crate) fn on_close(&self) -> Option<&Callback> {
        self.on_close.as_ref()
    }
}

impl fmt::Debug for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notification")
            .field("id", &self.id)
            .field("message", &self.message)
            .field("title", &self.title)
            .field("variant", &self.variant)
            .field("duration", &self.duration)
            .field("closable", &self.closable)
            .field("position", &self.position)
            .field("action", &self.action)
            .field("has_on_close", &self.on_close.is_some())
            .finish()
    }
}

/// Runs a caller callback, containing any panic it raises.
///
/// Returns `None` if the callback panicked.
pub(crate) fn invoke_isolated<T>(
    callback: impl FnOnce() -> T,
    kind: CallbackKind,
    notification: Option<NotificationId>,
    diagnostics: Option<&DiagnosticsHandle>,
) -> Option<T> {
    let outcome = panic::catch_unwind(AssertUnwindSafe(callback)).ok();
    if outcome.is_none() {
        if let Some(handle) = diagnostics {
            handle.log_callback_panic(kind, notification);
        }
    }
    outcome
}
