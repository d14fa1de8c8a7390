// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Time arguments: RFC 3339 (`2013-08-30T12:00:00Z`) or Unix seconds
//! (`1377864000`, `@1377864000`).

use anyhow::{bail, Context, Result};
use chrono::{DateTime, FixedOffset, TimeZone, Utc};

/// Parse a time argument, keeping its UTC offset.
pub fn parse_time(input: &str) -> Result<DateTime<FixedOffset>> {
    let s = input.trim();
    if s.is_empty() {
        bail!("empty time argument");
    }

    let digits = s.strip_prefix('@').unwrap_or(s);
    let unsigned = digits.strip_prefix('-').unwrap_or(digits);
    if !unsigned.is_empty() && unsigned.chars().all(|c| c.is_ascii_digit()) {
        let secs: i64 = digits
            .parse()
            .with_context(|| format!("invalid Unix timestamp: {}", input))?;
        let Some(t) = Utc.timestamp_opt(secs, 0).single() else {
            bail!("Unix timestamp out of range: {}", input);
        };
        return Ok(t.fixed_offset());
    }

    DateTime::parse_from_rfc3339(s)
        .with_context(|| format!("invalid time: {} (expected RFC 3339 or Unix seconds)", input))
}

#[cfg(test)]
#[path = "time_arg_tests.rs"]
mod tests;
