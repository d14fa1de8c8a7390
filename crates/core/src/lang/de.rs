// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! German: both "vor" and "in" govern the dative, so the singular article
//! follows the noun's gender ("vor einer Minute", "vor einem Tag").

use crate::elapsed::Tense;
use crate::language::{Affix, Frame, Grammar, Language, PerUnit, Precision};
use crate::step::{self, Unit};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Masculine,
    Feminine,
    Neuter,
}

impl Gender {
    /// Dative singular indefinite article.
    pub fn dative_article(self) -> &'static str {
        match self {
            Gender::Feminine => "einer",
            Gender::Masculine | Gender::Neuter => "einem",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Noun {
    pub gender: Gender,
    pub dative_singular: &'static str,
    pub dative_plural: &'static str,
}

const fn noun(gender: Gender, dative_singular: &'static str, dative_plural: &'static str) -> Noun {
    Noun {
        gender,
        dative_singular,
        dative_plural,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct German(pub PerUnit<Noun>);

impl Grammar for German {
    fn quantity(&self, unit: Unit, count: u64, _tense: Tense) -> String {
        let noun = self.0.get(unit);
        if count == 1 {
            format!("{} {}", noun.gender.dative_article(), noun.dative_singular)
        } else {
            format!("{} {}", count, noun.dative_plural)
        }
    }
}

static GRAMMAR: German = German(PerUnit {
    second: noun(Gender::Feminine, "Sekunde", "Sekunden"),
    minute: noun(Gender::Feminine, "Minute", "Minuten"),
    hour: noun(Gender::Feminine, "Stunde", "Stunden"),
    day: noun(Gender::Masculine, "Tag", "Tagen"),
    month: noun(Gender::Masculine, "Monat", "Monaten"),
    year: noun(Gender::Neuter, "Jahr", "Jahren"),
});

pub static GERMAN: Language = Language {
    name: "German",
    code: "de",
    default_layout: "02.01.2006",
    steps: &step::STANDARD,
    frame: Frame {
        past: Affix::prefix("vor "),
        future: Affix::prefix("in "),
    },
    precision: Precision::Approximate,
    grammar: &GRAMMAR,
};

#[cfg(test)]
#[path = "de_tests.rs"]
mod tests;
