// SPDX-License-Identifier: MPL-2.0
//! Timing newtypes for the notification lifecycle.
//!
//! [`AutoDismiss`] is the per-notification delay before it starts closing on
//! its own, [`TransitionWindow`] the fixed length of the exit animation that
//! precedes physical removal from the store.

use crate::config::{
    DEFAULT_AUTO_DISMISS_MS, DEFAULT_TRANSITION_MS, MAX_TRANSITION_MS, MIN_TRANSITION_MS,
};
use std::time::Duration;

/// Auto-dismiss delay in milliseconds; `0` means the notification stays until
/// it is closed explicitly.
///
/// # Example
///
/// ```
/// use iced_toast::ui::notifications::AutoDismiss;
///
/// assert_eq!(AutoDismiss::from_signed_millis(-20).as_millis(), 0);
/// assert!(AutoDismiss::from_millis(0).is_sticky());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AutoDismiss(u64);

impl AutoDismiss {
    /// Never auto-dismiss.
    pub const STICKY: Self = Self(0);

    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    /// Accepts caller input that may be negative; negative values clamp to `0`.
    #[must_use]
    pub fn from_signed_millis(millis: i64) -> Self {
        Self(u64::try_from(millis).unwrap_or(0))
    }

    /// Converts a `Duration`, saturating at `u64::MAX` milliseconds.
    #[must_use]
    pub fn from_duration(duration: Duration) -> Self {
        Self(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
    }

    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn is_sticky(self) -> bool {
        self.0 == 0
    }

    /// Returns the delay, or `None` for sticky notifications.
    #[must_use]
    pub fn as_duration(self) -> Option<Duration> {
        (!self.is_sticky()).then(|| Duration::from_millis(self.0))
    }
}

impl Default for AutoDismiss {
    fn default() -> Self {
        Self(DEFAULT_AUTO_DISMISS_MS)
    }
}

/// Length of the exit animation, clamped to the supported range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionWindow(u64);

impl TransitionWindow {
    pub const DEFAULT: Self = Self(DEFAULT_TRANSITION_MS);

    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(millis.clamp(MIN_TRANSITION_MS, MAX_TRANSITION_MS))
    }

    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for TransitionWindow {
    fn default() -> Self {
        Self::DEFAULT
    }
}
