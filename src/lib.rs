// SPDX-License-Identifier: MPL-2.0
//! `iced_toast` is a toast notification core for the Iced GUI framework.
//!
//! A shared [`NotificationStore`](ui::notifications::NotificationStore) holds
//! the active notifications and notifies subscribers synchronously; an
//! [`Overlay`](ui::notifications::Overlay) mirrors the store, drives each
//! toast's auto-dismiss and exit transition, and renders the six anchored
//! rails. The [`app`] module is a small gallery host exercising both.

#![doc(html_root_url = "https://docs.rs/iced_toast/0.1.0")]

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod ui;
