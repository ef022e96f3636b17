// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for notification activity tracking.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ui::notifications::{CloseTrigger, NotificationId, Position, Variant};

/// Caller-supplied callbacks that run inside the notification core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallbackKind {
    /// A store subscriber.
    Subscriber,
    /// A notification's `on_close` callback.
    OnClose,
    /// A notification's action button callback.
    OnAction,
}

/// A diagnostic event with timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticEvent {
    /// When the event occurred.
    pub timestamp: DateTime<Utc>,
    /// The type and data of the event.
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event with the current timestamp.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Utc::now(),
            kind,
        }
    }
}

/// The type and associated data for a diagnostic event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    /// A notification entered the store.
    NotificationAdded {
        id: NotificationId,
        variant: Variant,
        position: Position,
        /// Auto-dismiss delay, `0` for sticky notifications.
        duration_ms: u64,
    },

    /// A notification left the store.
    NotificationRemoved {
        id: NotificationId,
        /// Whether the removal came from `remove_all`.
        bulk: bool,
    },

    /// A rendered notification started its exit transition.
    ExitStarted {
        id: NotificationId,
        trigger: CloseTrigger,
    },

    SubscriberAdded {
        subscriber: u64,
    },

    SubscriberRemoved {
        subscriber: u64,
    },

    /// A caller-supplied callback panicked and was isolated.
    CallbackPanicked {
        callback: CallbackKind,
        #[serde(skip_serializing_if = "Option::is_none")]
        notification: Option<NotificationId>,
    },

    /// Non-critical issue (e.g. unreadable config file).
    Warning {
        message: String,
    },
}
