// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Duration strings such as `"90m"`, `"36h"`, `"2mo"`.

use crate::step::{DAY, HOUR, MINUTE, MONTH, SECOND, YEAR};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DurationParseError {
    #[error("empty duration string")]
    Empty,

    #[error("invalid number in duration: {0}")]
    InvalidNumber(String),

    #[error("unknown duration suffix: {0}")]
    UnknownSuffix(String),

    #[error("duration out of range: {0}")]
    Overflow(String),
}

/// Parse a number followed by an optional unit suffix.
///
/// A bare number is seconds. Months and years use the fixed 30- and 365-day
/// lengths.
pub fn parse_duration(s: &str) -> Result<Duration, DurationParseError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(DurationParseError::Empty);
    }

    let (num_str, suffix) = s
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| (&s[..i], &s[i..]))
        .unwrap_or((s, ""));

    let num: u32 = num_str
        .parse()
        .map_err(|_| DurationParseError::InvalidNumber(s.to_string()))?;

    let unit = match suffix.trim() {
        "ms" | "millis" | "millisecond" | "milliseconds" => {
            return Ok(Duration::from_millis(u64::from(num)));
        }
        "" | "s" | "sec" | "secs" | "second" | "seconds" => SECOND,
        "m" | "min" | "mins" | "minute" | "minutes" => MINUTE,
        "h" | "hr" | "hrs" | "hour" | "hours" => HOUR,
        "d" | "day" | "days" => DAY,
        "mo" | "month" | "months" => MONTH,
        "y" | "yr" | "yrs" | "year" | "years" => YEAR,
        other => return Err(DurationParseError::UnknownSuffix(other.to_string())),
    };

    unit.checked_mul(num)
        .ok_or_else(|| DurationParseError::Overflow(s.to_string()))
}

#[cfg(test)]
#[path = "duration_str_tests.rs"]
mod tests;
