// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::inflection::{Forms, Inflection};
use crate::language::{Affix, Frame, Language, PerUnit, Precision};
use crate::step;

static GRAMMAR: Inflection = Inflection(PerUnit {
    second: Forms::new("environ une seconde", "secondes"),
    minute: Forms::new("environ une minute", "minutes"),
    hour: Forms::new("environ une heure", "heures"),
    day: Forms::new("un jour", "jours"),
    month: Forms::new("un mois", "mois"),
    year: Forms::new("un an", "ans"),
});

pub static FRENCH: Language = Language {
    name: "French",
    code: "fr",
    default_layout: "02/01/2006",
    steps: &step::STANDARD,
    frame: Frame {
        past: Affix::prefix("il y a "),
        future: Affix::prefix("dans "),
    },
    precision: Precision::Approximate,
    grammar: &GRAMMAR,
};
