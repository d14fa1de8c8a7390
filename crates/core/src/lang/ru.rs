// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Russian: past phrases are hedged with "около" and take the genitive, future
//! phrases take "через" with the accusative, and both pick the noun ending
//! from a three-way plural class.

use crate::elapsed::Tense;
use crate::language::{Affix, Frame, Grammar, Language, PerUnit, Precision};
use crate::step::{self, Unit};

/// Plural class of a count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralClass {
    /// 1, 21, 31, ... but not 11.
    One,
    /// 2-4, 22-24, ... but not 12-14.
    Few,
    /// Everything else, including 0 and 11-14.
    Many,
}

impl PluralClass {
    pub fn of(n: u64) -> Self {
        let (units, tens) = (n % 10, n % 100);
        if units == 1 && tens != 11 {
            PluralClass::One
        } else if (2..=4).contains(&units) && !(12..=14).contains(&tens) {
            PluralClass::Few
        } else {
            PluralClass::Many
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Noun {
    /// Whether a single unit is hedged ("около часа") rather than counted
    /// ("один день").
    pub hedged: bool,
    /// Numeral plus nominative for an unhedged single unit.
    pub one: &'static str,
    pub genitive_singular: &'static str,
    pub genitive_plural: &'static str,
    /// Accusative endings by plural class: one, few, many.
    pub accusative: [&'static str; 3],
}

impl Noun {
    fn genitive(&self, class: PluralClass) -> &'static str {
        match class {
            PluralClass::One => self.genitive_singular,
            PluralClass::Few | PluralClass::Many => self.genitive_plural,
        }
    }

    fn accusative(&self, class: PluralClass) -> &'static str {
        match class {
            PluralClass::One => self.accusative[0],
            PluralClass::Few => self.accusative[1],
            PluralClass::Many => self.accusative[2],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Russian(pub PerUnit<Noun>);

impl Grammar for Russian {
    fn quantity(&self, unit: Unit, count: u64, tense: Tense) -> String {
        let noun = self.0.get(unit);
        match tense {
            Tense::Past if count == 1 && noun.hedged => format!("около {}", noun.genitive_singular),
            Tense::Past if count == 1 => noun.one.to_string(),
            Tense::Past => format!("около {} {}", count, noun.genitive(PluralClass::of(count))),
            Tense::Future => format!("{} {}", count, noun.accusative(PluralClass::of(count))),
        }
    }
}

static GRAMMAR: Russian = Russian(PerUnit {
    second: Noun {
        hedged: true,
        one: "одна секунда",
        genitive_singular: "секунды",
        genitive_plural: "секунд",
        accusative: ["секунду", "секунды", "секунд"],
    },
    minute: Noun {
        hedged: true,
        one: "одна минута",
        genitive_singular: "минуты",
        genitive_plural: "минут",
        accusative: ["минуту", "минуты", "минут"],
    },
    hour: Noun {
        hedged: true,
        one: "один час",
        genitive_singular: "часа",
        genitive_plural: "часов",
        accusative: ["час", "часа", "часов"],
    },
    day: Noun {
        hedged: false,
        one: "один день",
        genitive_singular: "дня",
        genitive_plural: "дней",
        accusative: ["день", "дня", "дней"],
    },
    month: Noun {
        hedged: false,
        one: "один месяц",
        genitive_singular: "месяца",
        genitive_plural: "месяцев",
        accusative: ["месяц", "месяца", "месяцев"],
    },
    year: Noun {
        hedged: false,
        one: "один год",
        genitive_singular: "года",
        genitive_plural: "лет",
        accusative: ["год", "года", "лет"],
    },
});

pub static RUSSIAN: Language = Language {
    name: "Russian",
    code: "ru",
    default_layout: "02.01.2006",
    steps: &step::STANDARD,
    frame: Frame {
        past: Affix::suffix(" назад"),
        future: Affix::prefix("через "),
    },
    precision: Precision::Approximate,
    grammar: &GRAMMAR,
};

#[cfg(test)]
#[path = "ru_tests.rs"]
mod tests;
