// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Notifications**: Auto-dismiss duration and visibility defaults
//! - **Transition**: Exit animation window
//! - **Diagnostics**: Event buffer capacity

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Default auto-dismiss duration for a notification (in milliseconds).
pub const DEFAULT_AUTO_DISMISS_MS: u64 = 5000;

/// Whether notifications offer a close button unless told otherwise.
pub const DEFAULT_CLOSABLE: bool = true;

// ==========================================================================
// Transition Defaults
// ==========================================================================

/// Default length of the exit animation (in milliseconds).
pub const DEFAULT_TRANSITION_MS: u64 = 300;

/// Minimum exit animation length (in milliseconds).
pub const MIN_TRANSITION_MS: u64 = 0;

/// Maximum exit animation length (in milliseconds).
pub const MAX_TRANSITION_MS: u64 = 2000;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of diagnostic events kept in memory.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 500;

/// Minimum diagnostics buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10;

/// Maximum diagnostics buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Transition validation
    assert!(MAX_TRANSITION_MS >= MIN_TRANSITION_MS);
    assert!(DEFAULT_TRANSITION_MS >= MIN_TRANSITION_MS);
    assert!(DEFAULT_TRANSITION_MS <= MAX_TRANSITION_MS);

    // Diagnostics validation
    assert!(MIN_DIAGNOSTICS_BUFFER_CAPACITY > 0);
    assert!(MAX_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);
};
