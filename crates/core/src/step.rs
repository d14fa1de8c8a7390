// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Magnitude buckets and threshold resolution.
//!
//! A step table is an ordered list of [`Step`]s. Each step covers elapsed
//! times below its upper bound (and at or above the previous step's bound)
//! and reports them as a rounded count of its divisor.

use std::fmt;
use std::time::Duration;
use thiserror::Error;
use tracing::trace;

pub const SECOND: Duration = Duration::from_secs(1);
pub const MINUTE: Duration = Duration::from_secs(60);
pub const HOUR: Duration = Duration::from_secs(60 * 60);
/// Fixed 24 hours; not calendar aware.
pub const DAY: Duration = Duration::from_secs(24 * 60 * 60);
/// Fixed 30 days.
pub const MONTH: Duration = Duration::from_secs(30 * 24 * 60 * 60);
/// Fixed 365 days.
pub const YEAR: Duration = Duration::from_secs(365 * 24 * 60 * 60);

/// Display unit of a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Unit {
    Second,
    Minute,
    Hour,
    Day,
    Month,
    Year,
}

impl Unit {
    pub const ALL: [Unit; 6] = [
        Unit::Second,
        Unit::Minute,
        Unit::Hour,
        Unit::Day,
        Unit::Month,
        Unit::Year,
    ];

    /// Fixed length of one unit.
    pub const fn length(self) -> Duration {
        match self {
            Unit::Second => SECOND,
            Unit::Minute => MINUTE,
            Unit::Hour => HOUR,
            Unit::Day => DAY,
            Unit::Month => MONTH,
            Unit::Year => YEAR,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Unit::Second => "second",
            Unit::Minute => "minute",
            Unit::Hour => "hour",
            Unit::Day => "day",
            Unit::Month => "month",
            Unit::Year => "year",
        };
        f.write_str(name)
    }
}

/// One magnitude bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// Exclusive upper bound; `None` for the final, unbounded step.
    pub upper_bound: Option<Duration>,
    pub divisor: Duration,
    pub unit: Unit,
}

impl Step {
    pub const fn new(unit: Unit, upper_bound: Option<Duration>) -> Self {
        Self {
            upper_bound,
            divisor: unit.length(),
            unit,
        }
    }

    /// Whether `magnitude` falls below this step's upper bound.
    fn covers(&self, magnitude: Duration) -> bool {
        match self.upper_bound {
            Some(bound) => magnitude < bound,
            None => true,
        }
    }
}

/// Unit and display count chosen for an elapsed magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    pub unit: Unit,
    /// Rounded count; zero only for the smallest step.
    pub count: u64,
}

/// Errors from building a custom step table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StepTableError {
    #[error("step table is empty")]
    Empty,

    #[error("step {index} ({unit}) has a zero divisor")]
    ZeroDivisor { index: usize, unit: Unit },

    #[error("step {index} ({unit}) is unbounded but is not the last step")]
    UnboundedBeforeEnd { index: usize, unit: Unit },

    #[error("last step ({unit}) must be unbounded")]
    BoundedEnd { unit: Unit },

    #[error("step {index} ({unit}) upper bound is not above the previous step's")]
    NotAscending { index: usize, unit: Unit },
}

// Each bound sits where rounding would first produce one whole next unit
// (60 seconds, 60 minutes, 24 hours, 30 days, 12 months).
static STANDARD_STEPS: [Step; 6] = [
    Step::new(Unit::Second, Some(Duration::from_millis(59_500))),
    Step::new(Unit::Minute, Some(Duration::from_secs(59 * 60 + 30))),
    Step::new(Unit::Hour, Some(Duration::from_secs(23 * 3600 + 1800))),
    Step::new(Unit::Day, Some(Duration::from_secs(29 * 86_400 + 43_200))),
    Step::new(Unit::Month, Some(Duration::from_secs(345 * 86_400))),
    Step::new(Unit::Year, None),
];

pub(crate) static STANDARD: StepTable = StepTable {
    steps: Steps::Static(&STANDARD_STEPS),
};

/// Ordered, validated sequence of steps partitioning `[0, ∞)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepTable {
    steps: Steps,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Steps {
    Static(&'static [Step]),
    Owned(Vec<Step>),
}

impl StepTable {
    /// The table shared by every predefined language.
    pub fn standard() -> &'static StepTable {
        &STANDARD
    }

    /// Validate and wrap a custom list of steps.
    pub fn new(steps: Vec<Step>) -> Result<Self, StepTableError> {
        let last = steps.len().checked_sub(1).ok_or(StepTableError::Empty)?;
        let mut previous: Option<Duration> = None;
        for (index, step) in steps.iter().enumerate() {
            if step.divisor.is_zero() {
                return Err(StepTableError::ZeroDivisor {
                    index,
                    unit: step.unit,
                });
            }
            match step.upper_bound {
                None if index != last => {
                    return Err(StepTableError::UnboundedBeforeEnd {
                        index,
                        unit: step.unit,
                    });
                }
                None => {}
                Some(_) if index == last => {
                    return Err(StepTableError::BoundedEnd { unit: step.unit });
                }
                Some(bound) => {
                    if previous.is_some_and(|p| bound <= p) {
                        return Err(StepTableError::NotAscending {
                            index,
                            unit: step.unit,
                        });
                    }
                    previous = Some(bound);
                }
            }
        }
        Ok(Self {
            steps: Steps::Owned(steps),
        })
    }

    pub fn steps(&self) -> &[Step] {
        match &self.steps {
            Steps::Static(s) => s,
            Steps::Owned(s) => s,
        }
    }

    /// Pick the first step whose upper bound exceeds `magnitude` and round.
    pub fn resolve(&self, magnitude: Duration) -> Resolved {
        let steps = self.steps();
        // Construction guarantees a non-empty table whose last step is unbounded.
        let Some(step) = steps.iter().find(|s| s.covers(magnitude)).or(steps.last()) else {
            return Resolved {
                unit: Unit::Second,
                count: 0,
            };
        };
        let count = round_half_up(magnitude, step.divisor);
        trace!(?magnitude, unit = %step.unit, count, "resolved step");
        Resolved {
            unit: step.unit,
            count,
        }
    }
}

/// `magnitude / divisor`, rounded with halves going up.
pub fn round_half_up(magnitude: Duration, divisor: Duration) -> u64 {
    let d = divisor.as_nanos();
    if d == 0 {
        return 0;
    }
    let n = magnitude.as_nanos();
    let q = n / d;
    let rounded = if (n % d) * 2 >= d { q + 1 } else { q };
    u64::try_from(rounded).unwrap_or(u64::MAX)
}

#[cfg(test)]
#[path = "step_tests.rs"]
mod tests;
