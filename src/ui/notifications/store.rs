// SPDX-License-Identifier: MPL-2.0
//! The shared notification registry.
//!
//! A `NotificationStore` is created once at the application's composition
//! root and handed (by cheap clone) to everything that issues notifications
//! and to the overlay that renders them. It owns the ordered sequence of
//! active records and the set of subscribers.
//!
//! Every mutation goes through `add`, `remove` or `remove_all`, and each one
//! that changes the sequence notifies subscribers synchronously before it
//! returns. No borrow of the internal state is held while caller code runs,
//! so subscribers and `on_close` callbacks may call back into the store.

use super::notification::{
    invoke_isolated, Notification, NotificationDefaults, NotificationId, NotificationOptions,
};
use crate::diagnostics::{CallbackKind, DiagnosticEventKind, DiagnosticsHandle};
use crate::error::Result;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

type Listener = Rc<dyn Fn(&[Notification])>;

#[derive(Default)]
struct Inner {
    records: Vec<Notification>,
    subscribers: Vec<(u64, Listener)>,
    next_id: u64,
    next_subscriber: u64,
    defaults: NotificationDefaults,
    diagnostics: Option<DiagnosticsHandle>,
}

impl Inner {
    fn has_subscriber(&self, key: u64) -> bool {
        self.subscribers.iter().any(|(k, _)| *k == key)
    }
}

/// Handle to the shared notification registry.
///
/// Clones refer to the same registry.
#[derive(Clone, Default)]
pub struct NotificationStore {
    inner: Rc<RefCell<Inner>>,
}

impl NotificationStore {
    /// Creates an empty store using the built-in defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store whose unset notification fields fall back to `defaults`.
    #[must_use]
    pub fn with_defaults(defaults: NotificationDefaults) -> Self {
        let store = Self::default();
        store.inner.borrow_mut().defaults = defaults;
        store
    }

    /// Sets the diagnostics handle used to record store activity.
    pub fn set_diagnostics(&self, handle: DiagnosticsHandle) {
        self.inner.borrow_mut().diagnostics = Some(handle);
    }

    #[must_use]
    pub fn defaults(&self) -> NotificationDefaults {
        self.inner.borrow().defaults
    }

    /// Adds a notification and returns its freshly minted id.
    ///
    /// Unset fields take the store defaults, and subscribers are notified
    /// before this returns.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidNotification` when the message is blank. The
    /// store is left untouched and no subscriber runs.
    pub fn add(&self, options: NotificationOptions) -> Result<NotificationId> {
        options.validate()?;

        let (id, diagnostics) = {
            let mut inner = self.inner.borrow_mut();
            let id = NotificationId::from_raw(inner.next_id);
            inner.next_id += 1;
            let notification = Notification::from_options(id, options, &inner.defaults);
            if let Some(handle) = &inner.diagnostics {
                handle.log_added(&notification);
            }
            inner.records.push(notification);
            (id, inner.diagnostics.clone())
        };

        self.notify(diagnostics.as_ref());
        Ok(id)
    }

    /// Removes the notification with `id`, if present.
    ///
    /// Subscribers are notified only when a record was actually removed, and
    /// the record's `on_close` runs afterwards. Removing an unknown or already
    /// removed id is a no-op.
    ///
    /// Returns whether a record was removed.
    pub fn remove(&self, id: NotificationId) -> bool {
        let (removed, diagnostics) = {
            let mut inner = self.inner.borrow_mut();
            let removed = inner
                .records
                .iter()
                .position(|n| n.id() == id)
                .map(|index| inner.records.remove(index));
            (removed, inner.diagnostics.clone())
        };

        let Some(notification) = removed else {
            return false;
        };

        if let Some(handle) = &diagnostics {
            handle.log_removed(id, false);
        }
        self.notify(diagnostics.as_ref());
        run_on_close(&notification, diagnostics.as_ref());
        true
    }

    /// Removes every notification.
    ///
    /// Subscribers are notified once, then each removed record's `on_close`
    /// runs in insertion order.
    pub fn remove_all(&self) {
        let (removed, diagnostics) = {
            let mut inner = self.inner.borrow_mut();
            (std::mem::take(&mut inner.records), inner.diagnostics.clone())
        };

        if let Some(handle) = &diagnostics {
            for notification in &removed {
                handle.log_removed(notification.id(), true);
            }
        }
        self.notify(diagnostics.as_ref());
        for notification in &removed {
            run_on_close(notification, diagnostics.as_ref());
        }
    }

    /// Registers a callback invoked with a snapshot after every mutation.
    ///
    /// The callback stays registered until the returned [`Subscription`] is
    /// unsubscribed or dropped.
    pub fn subscribe(&self, callback: impl Fn(&[Notification]) + 'static) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let key = inner.next_subscriber;
        inner.next_subscriber += 1;
        inner.subscribers.push((key, Rc::new(callback)));
        if let Some(handle) = &inner.diagnostics {
            handle.log(DiagnosticEventKind::SubscriberAdded { subscriber: key });
        }

        Subscription {
            store: Rc::downgrade(&self.inner),
            key,
            active: true,
        }
    }

    /// Returns an owned copy of the active notifications in insertion order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Notification> {
        self.inner.borrow().records.clone()
    }

    /// Returns a copy of the notification with `id`, if present.
    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<Notification> {
        self.inner
            .borrow()
            .records
            .iter()
            .find(|n| n.id() == id)
            .cloned()
    }

    #[must_use]
    pub fn contains(&self, id: NotificationId) -> bool {
        self.inner.borrow().records.iter().any(|n| n.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.borrow().records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().records.is_empty()
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    /// Delivers the current snapshot to every subscriber.
    ///
    /// Iterates a copy of the subscriber set; a subscriber removed earlier in
    /// the same pass is skipped.
    fn notify(&self, diagnostics: Option<&DiagnosticsHandle>) {
        let (snapshot, listeners) = {
            let inner = self.inner.borrow();
            (inner.records.clone(), inner.subscribers.clone())
        };

        for (key, listener) in listeners {
            if !self.inner.borrow().has_subscriber(key) {
                continue;
            }
            invoke_isolated(
                || listener(snapshot.as_slice()),
                CallbackKind::Subscriber,
                None,
                diagnostics,
            );
        }
    }
}

impl fmt::Debug for NotificationStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("NotificationStore")
            .field("records", &inner.records)
            .field("subscribers", &inner.subscribers.len())
            .field("next_id", &inner.next_id)
            .finish()
    }
}

fn run_on_close(notification: &Notification, diagnostics: Option<&DiagnosticsHandle>) {
    if let Some(on_close) = notification.on_close() {
        invoke_isolated(
            || on_close(),
            CallbackKind::OnClose,
            Some(notification.id()),
            diagnostics,
        );
    }
}

/// Registration returned by [`NotificationStore::subscribe`].
///
/// Dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    store: Weak<RefCell<Inner>>,
    key: u64,
    active: bool,
}

impl Subscription {
    /// Deregisters the callback. It receives no further notifications.
    pub fn unsubscribe(mut self) {
        self.detach();
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active && self.store.strong_count() > 0
    }

    fn detach(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;

        let Some(inner) = self.store.upgrade() else {
            return;
        };
        let removed = {
            let mut inner = inner.borrow_mut();
            let key = self.key;
            let position = inner.subscribers.iter().position(|(k, _)| *k == key);
            let removed = position.map(|index| inner.subscribers.remove(index));
            if removed.is_some() {
                if let Some(handle) = &inner.diagnostics {
                    handle.log(DiagnosticEventKind::SubscriberRemoved { subscriber: key });
                }
            }
            removed
        };
        // The listener may own state whose drop touches the store.
        drop(removed);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.detach();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("key", &self.key)
            .field("active", &self.active)
            .finish()
    }
}
