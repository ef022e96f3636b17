// SPDX-License-Identifier: MPL-2.0
//! Keeps a local, render-ready copy of the store contents.
//!
//! The overlay never reads the store directly while rendering. It attaches a
//! [`Bridge`] once, and the bridge's subscription refreshes the local copy on
//! every store mutation and raises a dirty flag for the next reconcile.

use super::notification::Notification;
use super::store::{NotificationStore, Subscription};
use std::cell::{Ref, RefCell};
use std::rc::Rc;

#[derive(Debug, Default)]
struct View {
    records: Vec<Notification>,
    dirty: bool,
    revision: u64,
}

/// Subscription-backed mirror of a [`NotificationStore`].
///
/// Dropping the bridge unsubscribes.
#[derive(Debug)]
pub struct Bridge {
    view: Rc<RefCell<View>>,
    subscription: Option<Subscription>,
}

impl Bridge {
    /// Reads the store's current contents and subscribes to later changes.
    ///
    /// Records added before the bridge existed are picked up immediately.
    #[must_use]
    pub fn attach(store: &NotificationStore) -> Self {
        let view = Rc::new(RefCell::new(View {
            records: store.snapshot(),
            dirty: true,
            revision: 0,
        }));

        let sink = Rc::downgrade(&view);
        let subscription = store.subscribe(move |snapshot| {
            if let Some(view) = sink.upgrade() {
                let mut view = view.borrow_mut();
                view.records = snapshot.to_vec();
                view.dirty = true;
                view.revision += 1;
            }
        });

        Self {
            view,
            subscription: Some(subscription),
        }
    }

    /// Borrowed view of the mirrored records, in insertion order.
    ///
    /// Do not hold the guard across a store mutation.
    #[must_use]
    pub fn records(&self) -> Ref<'_, [Notification]> {
        Ref::map(self.view.borrow(), |view| view.records.as_slice())
    }

    /// Owned copy of the mirrored records.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Notification> {
        self.view.borrow().records.clone()
    }

    /// Returns whether the store changed since the last call, and clears the flag.
    pub fn take_dirty(&self) -> bool {
        std::mem::take(&mut self.view.borrow_mut().dirty)
    }

    /// Number of store notifications received since attaching.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.view.borrow().revision
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.subscription
            .as_ref()
            .is_some_and(Subscription::is_active)
    }

    /// Stops mirroring. The last received records stay readable.
    pub fn detach(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
    }
}
