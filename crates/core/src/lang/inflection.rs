// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Singular phrase plus counted plural noun.

use crate::elapsed::Tense;
use crate::language::{Grammar, PerUnit};
use crate::step::Unit;

/// Forms of one unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Forms {
    /// Full phrase for a count of one, e.g. `"about an hour"`.
    pub one: &'static str,
    /// Noun following a count above one, e.g. `"hours"`.
    pub many: &'static str,
}

impl Forms {
    pub const fn new(one: &'static str, many: &'static str) -> Self {
        Self { one, many }
    }
}

/// Grammar for languages with a plain singular/plural split that does not
/// depend on tense.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Inflection(pub PerUnit<Forms>);

impl Grammar for Inflection {
    fn quantity(&self, unit: Unit, count: u64, _tense: Tense) -> String {
        let forms = self.0.get(unit);
        if count == 1 {
            forms.one.to_string()
        } else {
            format!("{} {}", count, forms.many)
        }
    }
}
