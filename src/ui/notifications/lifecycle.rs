// SPDX-License-Identifier: MPL-2.0
//! Per-notification visual lifecycle.
//!
//! A [`Controller`] is mounted for every record the overlay renders. It owns
//! the two timers a toast needs (auto-dismiss and exit transition) and the
//! `Visible → Exiting` state machine. It never touches the store: when the
//! exit window has elapsed it yields [`LifecycleStep::Finished`] and the
//! overlay performs the removal.
//!
//! Timers are plain deadlines compared against the `now` handed in by the
//! caller, which keeps the controller deterministic under test. The same
//! clock drives [`Controller::presence`], the enter/exit animation progress.

use super::notification::{invoke_isolated, Action, ActionResponse, Notification, NotificationId};
use super::timing::TransitionWindow;
use crate::diagnostics::{CallbackKind, DiagnosticsHandle};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// What the toast currently looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisualState {
    #[default]
    Visible,
    /// Exit transition running; removal follows when it ends.
    Exiting,
}

/// Why a notification started closing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CloseTrigger {
    /// The auto-dismiss delay elapsed.
    Timeout,
    /// The user pressed the close button.
    Dismissed,
    /// An action callback answered [`ActionResponse::Close`].
    Action,
}

/// Observable outcome of [`Controller::poll`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleStep {
    /// The auto-dismiss deadline was reached and the exit transition started.
    BeginExit,
    /// The exit transition ended; the record should leave the store.
    Finished(NotificationId),
}

/// One-shot deadline. Disarming clears it.
#[derive(Debug, Clone, Copy, Default)]
struct Timer {
    deadline: Option<Instant>,
}

impl Timer {
    fn arm(&mut self, deadline: Instant) {
        self.deadline = Some(deadline);
    }

    fn disarm(&mut self) {
        self.deadline = None;
    }

    fn is_due(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|deadline| now >= deadline)
    }
}

/// Drives a single toast from mount to removal.
#[derive(Debug)]
pub struct Controller {
    id: NotificationId,
    state: VisualState,
    trigger: Option<CloseTrigger>,
    transition: TransitionWindow,
    action: Option<Action>,
    auto_dismiss: Timer,
    exit: Timer,
    mounted_at: Instant,
    exit_started: Option<Instant>,
    finished: bool,
}

impl Controller {
    /// Mounts a controller for `notification` at `now`.
    ///
    /// The auto-dismiss timer is armed for `now + duration` unless the
    /// notification is sticky.
    #[must_use]
    pub fn new(notification: &Notification, transition: TransitionWindow, now: Instant) -> Self {
        let mut auto_dismiss = Timer::default();
        if let Some(delay) = notification.duration().as_duration() {
            auto_dismiss.arm(now + delay);
        }

        Self {
            id: notification.id(),
            state: VisualState::Visible,
            trigger: None,
            transition,
            action: notification.action().cloned(),
            auto_dismiss,
            exit: Timer::default(),
            mounted_at: now,
            exit_started: None,
            finished: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn state(&self) -> VisualState {
        self.state
    }

    /// What started the exit, once it has started.
    #[must_use]
    pub fn trigger(&self) -> Option<CloseTrigger> {
        self.trigger
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Starts the exit transition.
    ///
    /// Only the first request wins; later ones (a close click racing the
    /// auto-dismiss timer, for instance) return `false` and change nothing.
    pub fn request_close(&mut self, trigger: CloseTrigger, now: Instant) -> bool {
        if self.finished || self.state == VisualState::Exiting {
            return false;
        }

        self.state = VisualState::Exiting;
        self.trigger = Some(trigger);
        self.exit_started = Some(now);
        self.auto_dismiss.disarm();
        self.exit.arm(now + self.transition.as_duration());
        true
    }

    /// Fires whichever timer is due.
    ///
    /// Call repeatedly until it returns `None`; with a zero transition window
    /// `BeginExit` and `Finished` become due at the same instant.
    pub fn poll(&mut self, now: Instant) -> Option<LifecycleStep> {
        if self.finished {
            return None;
        }

        if self.exit.is_due(now) {
            self.exit.disarm();
            self.finished = true;
            return Some(LifecycleStep::Finished(self.id));
        }

        if self.auto_dismiss.is_due(now) && self.request_close(CloseTrigger::Timeout, now) {
            return Some(LifecycleStep::BeginExit);
        }

        None
    }

    /// Runs the action callback and closes the toast only if the callback
    /// answers [`ActionResponse::Close`].
    ///
    /// Ignored once the toast is exiting. A panicking callback leaves the toast
    /// open. Returns whether the callback ran.
    pub fn trigger_action(&mut self, now: Instant, diagnostics: Option<&DiagnosticsHandle>) -> bool {
        if self.state != VisualState::Visible || self.finished {
            return false;
        }
        let Some(action) = self.action.clone() else {
            return false;
        };

        let response = invoke_isolated(
            || (action.callback())(),
            CallbackKind::OnAction,
            Some(self.id),
            diagnostics,
        );
        if response == Some(ActionResponse::Close) {
            self.request_close(CloseTrigger::Action, now);
        }
        true
    }

    /// Disarms both timers. Used when the toast is unmounted early.
    pub fn cancel(&mut self) {
        self.auto_dismiss.disarm();
        self.exit.disarm();
    }

    /// How much of the toast is on screen at `now`, from `0.0` to `1.0`.
    ///
    /// Ramps up over the transition window after mounting and back down over
    /// the exit window.
    #[must_use]
    pub fn presence(&self, now: Instant) -> f32 {
        let window = self.transition.as_duration();
        let entered = ramp(now.saturating_duration_since(self.mounted_at), window);
        match self.exit_started {
            Some(start) => entered.min(1.0 - ramp(now.saturating_duration_since(start), window)),
            None => entered,
        }
    }

    /// Whether an enter or exit transition is still running at `now`.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        if self.finished {
            return false;
        }
        self.state == VisualState::Exiting
            || now.saturating_duration_since(self.mounted_at) < self.transition.as_duration()
    }

    /// Earliest pending deadline, if any timer is armed.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.auto_dismiss.deadline, self.exit.deadline) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }
}

/// Linear progress of `elapsed` through `window`, clamped to `0.0..=1.0`.
fn ramp(elapsed: Duration, window: Duration) -> f32 {
    if window.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / window.as_secs_f32()).clamp(0.0, 1.0)
}
