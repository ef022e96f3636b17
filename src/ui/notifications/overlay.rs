// SPDX-License-Identifier: MPL-2.0
//! The overlay renders every active notification and drives their lifecycles.
//!
//! It holds a [`Bridge`] onto the store and one [`Controller`] per mirrored
//! record. The host forwards [`Message`]s to [`Overlay::handle_message`] and
//! schedules a wake-up for [`Overlay::next_deadline`]; the overlay turns
//! finished exits into `store.remove` calls.

use super::bridge::Bridge;
use super::layout;
use super::lifecycle::{CloseTrigger, Controller, LifecycleStep, VisualState};
use super::notification::NotificationId;
use super::store::NotificationStore;
use super::timing::TransitionWindow;
use super::toast::Toast;
use crate::diagnostics::DiagnosticsHandle;
use crate::ui::design_tokens::spacing;
use crate::ui::theming::ColorMode;
use iced::widget::{Column, Container, Stack};
use iced::{Element, Length};
use std::collections::{HashMap, HashSet};
use std::time::Instant;

/// Messages for notification interaction and timing.
#[derive(Debug, Clone)]
pub enum Message {
    /// Close button pressed.
    Close(NotificationId),
    /// Action button pressed.
    Action(NotificationId),
    /// Scheduled wake-up fired at the given instant.
    Tick(Instant),
}

/// Renders the store's notifications and owns their lifecycle controllers.
#[derive(Debug)]
pub struct Overlay {
    store: NotificationStore,
    bridge: Bridge,
    controllers: HashMap<NotificationId, Controller>,
    transition: TransitionWindow,
    diagnostics: Option<DiagnosticsHandle>,
}

impl Overlay {
    /// Attaches to `store`. Records already present are mounted on the first
    /// [`sync`](Self::sync).
    #[must_use]
    pub fn new(store: NotificationStore, transition: TransitionWindow) -> Self {
        let bridge = Bridge::attach(&store);
        Self {
            store,
            bridge,
            controllers: HashMap::new(),
            transition,
            diagnostics: None,
        }
    }

    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    #[must_use]
    pub fn store(&self) -> &NotificationStore {
        &self.store
    }

    /// Mounts controllers for new records and drops those whose record left
    /// the store. Cheap when nothing changed.
    pub fn sync(&mut self, now: Instant) {
        if !self.bridge.take_dirty() {
            return;
        }

        let records = self.bridge.snapshot();
        let live: HashSet<NotificationId> = records.iter().map(|n| n.id()).collect();
        self.controllers.retain(|id, controller| {
            let keep = live.contains(id);
            if !keep {
                controller.cancel();
            }
            keep
        });

        let transition = self.transition;
        for notification in &records {
            self.controllers
                .entry(notification.id())
                .or_insert_with(|| Controller::new(notification, transition, now));
        }
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message, now: Instant) {
        self.sync(now);

        match message {
            Message::Close(id) => {
                if let Some(controller) = self.controllers.get_mut(id) {
                    if controller.request_close(CloseTrigger::Dismissed, now) {
                        self.log_exit(*id, CloseTrigger::Dismissed);
                    }
                }
            }
            Message::Action(id) => {
                let Some(controller) = self.controllers.get_mut(id) else {
                    return;
                };
                let was_visible = controller.state() == VisualState::Visible;
                controller.trigger_action(now, self.diagnostics.as_ref());
                let started_exit = was_visible && controller.state() == VisualState::Exiting;
                if started_exit {
                    self.log_exit(*id, CloseTrigger::Action);
                }
                // The action callback may have touched the store.
                self.sync(now);
            }
            Message::Tick(at) => self.tick(*at),
        }
    }

    /// Fires due timers and removes notifications whose exit has finished.
    pub fn tick(&mut self, now: Instant) {
        self.sync(now);

        let order: Vec<NotificationId> = self.bridge.records().iter().map(|n| n.id()).collect();
        let mut finished = Vec::new();
        for id in order {
            let Some(controller) = self.controllers.get_mut(&id) else {
                continue;
            };
            while let Some(step) = controller.poll(now) {
                match step {
                    LifecycleStep::BeginExit => {
                        if let Some(handle) = &self.diagnostics {
                            handle.log_exit_started(id, CloseTrigger::Timeout);
                        }
                    }
                    LifecycleStep::Finished(done) => finished.push(done),
                }
            }
        }

        for id in finished {
            if let Some(mut controller) = self.controllers.remove(&id) {
                controller.cancel();
            }
            self.store.remove(id);
        }

        self.sync(now);
    }

    /// Visual state of a mounted notification.
    #[must_use]
    pub fn visual_state(&self, id: NotificationId) -> Option<VisualState> {
        self.controllers.get(&id).map(Controller::state)
    }

    /// Earliest instant at which a timer will be due.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.controllers
            .values()
            .filter_map(Controller::next_deadline)
            .min()
    }

    /// Whether any toast is still sliding in or out at `now`.
    ///
    /// The host redraws on a short interval while this holds.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.controllers
            .values()
            .any(|controller| controller.is_animating(now))
    }

    #[must_use]
    pub fn has_pending_timers(&self) -> bool {
        self.next_deadline().is_some()
    }

    /// Number of notifications currently mirrored from the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bridge.records().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bridge.records().is_empty()
    }

    /// Renders the six anchored rails on top of each other, animated as of
    /// `now`.
    pub fn view(&self, mode: ColorMode, now: Instant) -> Element<'_, Message> {
        let records = self.bridge.snapshot();
        let mut stack = Stack::new().width(Length::Fill).height(Length::Fill);

        for rail in layout::group_by_position(&records) {
            let (horizontal, vertical) = layout::alignment(rail.position);
            let toasts: Vec<Element<'_, Message>> = rail
                .notifications
                .iter()
                .map(|notification| {
                    let controller = self.controllers.get(&notification.id());
                    let state = controller.map(Controller::state).unwrap_or_default();
                    let presence = controller.map_or(1.0, |c| c.presence(now));
                    Toast::view(notification, state, presence, mode)
                })
                .collect();

            let column = Column::with_children(toasts)
                .spacing(spacing::XS)
                .align_x(horizontal);

            stack = stack.push(
                Container::new(column)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_x(horizontal)
                    .align_y(vertical)
                    .padding(spacing::MD),
            );
        }

        stack.into()
    }

    fn log_exit(&self, id: NotificationId, trigger: CloseTrigger) {
        if let Some(handle) = &self.diagnostics {
            handle.log_exit_started(id, trigger);
        }
    }
}
