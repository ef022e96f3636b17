// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for recording notification activity.
//!
//! This module provides infrastructure for capturing diagnostic events
//! emitted by the notification core, storing them in a memory-bounded
//! circular buffer, and exporting them as JSON.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: Timestamped event with a [`DiagnosticEventKind`]
//! - [`DiagnosticsHandle`]: Cheap, non-blocking sender held by the store and overlay
//! - [`DiagnosticsCollector`]: Owner of the buffer, drained by the host

mod buffer;
mod collector;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{CallbackKind, DiagnosticEvent, DiagnosticEventKind};
