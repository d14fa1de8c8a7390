// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Signed elapsed time between an event and a reference instant.

use chrono::{DateTime, TimeDelta, TimeZone};
use std::time::Duration;

/// Whether the event lies before or after the reference instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tense {
    /// Event at or before the reference ("2 hours ago").
    Past,
    /// Event after the reference ("in 2 hours").
    Future,
}

/// Elapsed time split into tense and absolute magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Elapsed {
    pub tense: Tense,
    pub magnitude: Duration,
}

impl Elapsed {
    /// Elapsed time of `t` relative to `reference`, i.e. `t - reference`.
    ///
    /// A zero difference counts as past.
    pub fn between<Tz: TimeZone, Tz2: TimeZone>(
        t: &DateTime<Tz>,
        reference: &DateTime<Tz2>,
    ) -> Self {
        Self::from_delta(t.clone().signed_duration_since(reference.clone()))
    }

    /// Split a signed delta. Negative or zero deltas are past.
    pub fn from_delta(delta: TimeDelta) -> Self {
        if delta > TimeDelta::zero() {
            Self {
                tense: Tense::Future,
                magnitude: delta.to_std().unwrap_or(Duration::MAX),
            }
        } else {
            Self {
                tense: Tense::Past,
                magnitude: (-delta).to_std().unwrap_or(Duration::MAX),
            }
        }
    }

    pub fn past(magnitude: Duration) -> Self {
        Self {
            tense: Tense::Past,
            magnitude,
        }
    }

    pub fn future(magnitude: Duration) -> Self {
        Self {
            tense: Tense::Future,
            magnitude,
        }
    }
}

#[cfg(test)]
#[path = "elapsed_tests.rs"]
mod tests;
