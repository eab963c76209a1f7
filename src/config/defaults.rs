// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! Single source of truth for the display-timeout bounds used across the
//! crate.

/// Default time a message stays displayed before rotating (in milliseconds).
pub const DEFAULT_DISPLAY_TIMEOUT_MS: u64 = 5000;

/// Minimum allowed display timeout (in milliseconds).
pub const MIN_DISPLAY_TIMEOUT_MS: u64 = 500;

/// Maximum allowed display timeout (in milliseconds).
pub const MAX_DISPLAY_TIMEOUT_MS: u64 = 60_000;
