// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-language phrase construction.
//!
//! A [`Language`] combines a step table, a tense [`Frame`] and a [`Grammar`]
//! strategy. The grammar only builds the quantity ("2 Tagen", "около часа");
//! the frame wraps it for past or future ("vor 2 Tagen", "около часа назад").

use crate::elapsed::Tense;
use crate::lang;
use crate::step::{StepTable, Unit};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One value per unit, so every grammar table covers every unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PerUnit<T> {
    pub second: T,
    pub minute: T,
    pub hour: T,
    pub day: T,
    pub month: T,
    pub year: T,
}

impl<T> PerUnit<T> {
    pub fn get(&self, unit: Unit) -> &T {
        match unit {
            Unit::Second => &self.second,
            Unit::Minute => &self.minute,
            Unit::Hour => &self.hour,
            Unit::Day => &self.day,
            Unit::Month => &self.month,
            Unit::Year => &self.year,
        }
    }
}

/// Text placed before and after the quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Affix {
    pub prefix: &'static str,
    pub suffix: &'static str,
}

impl Affix {
    pub const fn prefix(prefix: &'static str) -> Self {
        Self { prefix, suffix: "" }
    }

    pub const fn suffix(suffix: &'static str) -> Self {
        Self { prefix: "", suffix }
    }

    fn wrap(&self, quantity: &str) -> String {
        let mut out = String::with_capacity(self.prefix.len() + quantity.len() + self.suffix.len());
        out.push_str(self.prefix);
        out.push_str(quantity);
        out.push_str(self.suffix);
        out
    }
}

/// Past and future affixes of a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub past: Affix,
    pub future: Affix,
}

impl Frame {
    pub fn get(&self, tense: Tense) -> &Affix {
        match tense {
            Tense::Past => &self.past,
            Tense::Future => &self.future,
        }
    }
}

/// How a language reports elapsed times that round to zero seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    /// Sub-second times read as the singular second ("about a second").
    Approximate,
    /// Sub-second times have their own phrase ("menos de um segundo").
    Exact { under_a_second: &'static str },
}

/// Builds the quantity phrase for a unit and count.
///
/// `count` is always at least 1; zero is handled by [`Precision`].
pub trait Grammar: Sync {
    fn quantity(&self, unit: Unit, count: u64, tense: Tense) -> String;
}

/// A predefined or custom language rule set.
pub struct Language {
    /// English name, e.g. `"German"`.
    pub name: &'static str,
    /// ISO 639-1 code, e.g. `"de"`.
    pub code: &'static str,
    /// Reference-date layout for absolute dates in this locale.
    pub default_layout: &'static str,
    pub steps: &'static StepTable,
    pub frame: Frame,
    pub precision: Precision,
    pub grammar: &'static dyn Grammar,
}

impl Language {
    /// Full phrase for `count` units in `tense`.
    pub fn render(&self, unit: Unit, count: u64, tense: Tense) -> String {
        let quantity = match (count, self.precision) {
            (0, Precision::Exact { under_a_second }) => under_a_second.to_string(),
            (0, Precision::Approximate) => self.grammar.quantity(Unit::Second, 1, tense),
            (n, _) => self.grammar.quantity(unit, n, tense),
        };
        self.frame.get(tense).wrap(&quantity)
    }

    /// Look up a predefined language by code or English name, ignoring case.
    pub fn find(name: &str) -> Result<&'static Language, UnknownLanguage> {
        let name = name.trim();
        LANGUAGES
            .iter()
            .copied()
            .find(|l| l.code.eq_ignore_ascii_case(name) || l.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| UnknownLanguage(name.to_string()))
    }
}

impl fmt::Debug for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Language")
            .field("name", &self.name)
            .field("code", &self.code)
            .field("default_layout", &self.default_layout)
            .field("precision", &self.precision)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl PartialEq for Language {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Language {}

impl FromStr for &'static Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::find(s)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown language: {0} (expected one of: {codes})", codes = known_codes())]
pub struct UnknownLanguage(pub String);

fn known_codes() -> String {
    LANGUAGES
        .iter()
        .map(|l| l.code)
        .collect::<Vec<_>>()
        .join(", ")
}

pub use lang::{CHINESE, ENGLISH, FRENCH, GERMAN, PORTUGUESE, RUSSIAN, SPANISH, TURKISH};

/// Every predefined language.
pub static LANGUAGES: [&Language; 8] = [
    &ENGLISH,
    &FRENCH,
    &CHINESE,
    &PORTUGUESE,
    &GERMAN,
    &TURKISH,
    &RUSSIAN,
    &SPANISH,
];

#[cfg(test)]
#[path = "language_tests.rs"]
mod tests;
