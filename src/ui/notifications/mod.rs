// SPDX-License-Identifier: MPL-2.0
//! Toast notification system.
//!
//! Short-lived, non-blocking messages stacked in six screen anchors. A
//! single [`NotificationStore`] created at the composition root is shared by
//! every code path that issues notifications and by the [`Overlay`] that
//! renders them.
//!
//! # Components
//!
//! - [`notification`] - `Notification` record, `NotificationOptions` builder, variants and positions
//! - [`store`] - `NotificationStore` registry with synchronous subscriptions
//! - [`lifecycle`] - Per-toast `Controller` with auto-dismiss and exit timers
//! - [`bridge`] - Subscription-backed mirror of the store for rendering
//! - [`layout`] - Grouping of records into anchored rails
//! - [`overlay`] - `Overlay` tying bridge, controllers and toasts together
//! - [`toast`] - Toast widget for a single notification
//!
//! # Usage
//!
//! ```
//! use iced_toast::ui::notifications::{
//!     NotificationOptions, NotificationStore, Overlay, Position, TransitionWindow,
//! };
//! use std::time::Instant;
//!
//! let store = NotificationStore::new();
//! let mut overlay = Overlay::new(store.clone(), TransitionWindow::default());
//!
//! let id = store
//!     .add(NotificationOptions::success("Saved").position(Position::BottomRight))
//!     .expect("message is not empty");
//!
//! overlay.sync(Instant::now());
//! assert_eq!(overlay.len(), 1);
//! assert!(store.contains(id));
//! ```

pub mod bridge;
pub mod layout;
pub mod lifecycle;
pub mod notification;
pub mod overlay;
pub mod store;
mod timing;
pub mod toast;

pub use bridge::Bridge;
pub use layout::Rail;
pub use lifecycle::{CloseTrigger, Controller, LifecycleStep, VisualState};
pub use notification::{
    Action, ActionCallback, ActionResponse, Callback, Notification, NotificationDefaults,
    NotificationId, NotificationOptions, Position, Variant,
};
pub use overlay::{Message, Overlay};
pub use store::{NotificationStore, Subscription};
pub use timing::{AutoDismiss, TransitionWindow};
pub use toast::Toast;
