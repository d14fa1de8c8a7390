// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::inflection::{Forms, Inflection};
use crate::language::{Affix, Frame, Language, PerUnit, Precision};
use crate::step;

static GRAMMAR: Inflection = Inflection(PerUnit {
    second: Forms::new("about a second", "seconds"),
    minute: Forms::new("about a minute", "minutes"),
    hour: Forms::new("about an hour", "hours"),
    day: Forms::new("one day", "days"),
    month: Forms::new("one month", "months"),
    year: Forms::new("one year", "years"),
});

pub static ENGLISH: Language = Language {
    name: "English",
    code: "en",
    default_layout: "2006-01-02",
    steps: &step::STANDARD,
    frame: Frame {
        past: Affix::suffix(" ago"),
        future: Affix::prefix("in "),
    },
    precision: Precision::Approximate,
    grammar: &GRAMMAR,
};
