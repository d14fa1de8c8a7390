// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::inflection::{Forms, Inflection};
use crate::language::{Affix, Frame, Language, PerUnit, Precision};
use crate::step;

// Turkish nouns stay singular after a numeral.
static GRAMMAR: Inflection = Inflection(PerUnit {
    second: Forms::new("yaklaşık bir saniye", "saniye"),
    minute: Forms::new("yaklaşık bir dakika", "dakika"),
    hour: Forms::new("yaklaşık bir saat", "saat"),
    day: Forms::new("bir gün", "gün"),
    month: Forms::new("bir ay", "ay"),
    year: Forms::new("bir yıl", "yıl"),
});

pub static TURKISH: Language = Language {
    name: "Turkish",
    code: "tr",
    default_layout: "02/01/2006",
    steps: &step::STANDARD,
    frame: Frame {
        past: Affix::suffix(" önce"),
        future: Affix::suffix(" içinde"),
    },
    precision: Precision::Approximate,
    grammar: &GRAMMAR,
};
