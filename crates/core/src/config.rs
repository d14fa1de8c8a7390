// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Formatting entry point.

use crate::elapsed::Elapsed;
use crate::language::Language;
use crate::layout::Layout;
use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use std::fmt;
use std::time::Duration;
use tracing::debug;

/// A language plus an optional cutoff after which absolute dates are shown.
///
/// Immutable; build one per call site and share it freely.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    language: &'static Language,
    max: Option<Duration>,
    layout: Option<Layout>,
}

impl Config {
    /// Always produce a relative phrase.
    pub fn no_max(language: &'static Language) -> Self {
        Self {
            language,
            max: None,
            layout: None,
        }
    }

    /// Switch to `layout` once the elapsed time reaches `max`.
    ///
    /// An empty `layout` or a zero `max` disables the switch.
    pub fn with_max(language: &'static Language, max: Duration, layout: &str) -> Self {
        Self {
            language,
            max: Some(max),
            layout: (!layout.is_empty()).then(|| Layout::parse(layout)),
        }
    }

    pub fn language(&self) -> &'static Language {
        self.language
    }

    pub fn max(&self) -> Option<Duration> {
        self.max
    }

    pub fn layout(&self) -> Option<&Layout> {
        self.layout.as_ref()
    }

    /// Describe `t` relative to `reference`.
    pub fn format_reference<Tz, Tz2>(&self, t: &DateTime<Tz>, reference: &DateTime<Tz2>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
        Tz2: TimeZone,
    {
        let elapsed = Elapsed::between(t, reference);
        if let Some(layout) = self.cutoff_layout(elapsed.magnitude) {
            debug!(
                magnitude = ?elapsed.magnitude,
                layout = layout.pattern(),
                "past cutoff, rendering absolute date"
            );
            return layout.render(t);
        }
        self.format_elapsed(elapsed)
    }

    /// Describe `t` relative to the current time.
    pub fn format<Tz>(&self, t: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        self.format_reference(t, &Utc::now())
    }

    /// Relative phrase for a signed `event - reference` delta; never absolute.
    pub fn format_delta(&self, delta: TimeDelta) -> String {
        self.format_elapsed(Elapsed::from_delta(delta))
    }

    /// Relative phrase for an already split elapsed time; never absolute.
    pub fn format_elapsed(&self, elapsed: Elapsed) -> String {
        let resolved = self.language.steps.resolve(elapsed.magnitude);
        self.language.render(resolved.unit, resolved.count, elapsed.tense)
    }

    fn cutoff_layout(&self, magnitude: Duration) -> Option<&Layout> {
        let max = self.max.filter(|m| !m.is_zero())?;
        let layout = self.layout.as_ref()?;
        (magnitude >= max).then_some(layout)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
