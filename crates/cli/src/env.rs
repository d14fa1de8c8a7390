// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI crate.
//!
//! Formatting settings (`TIMEAGO_LANG`, `TIMEAGO_MAX`, `TIMEAGO_LAYOUT`,
//! `TIMEAGO_CONFIG`) are read by `timeago_core::Settings`.

// --- Logging ---

/// Tracing filter directives, e.g. `TIMEAGO_LOG=timeago_core=trace`.
pub fn log_filter() -> Option<String> {
    std::env::var("TIMEAGO_LOG").ok().filter(|s| !s.is_empty())
}

// --- Color ---

pub fn no_color() -> bool {
    std::env::var("NO_COLOR").is_ok_and(|v| v == "1")
}

pub fn force_color() -> bool {
    std::env::var("COLOR").is_ok_and(|v| v == "1")
}
