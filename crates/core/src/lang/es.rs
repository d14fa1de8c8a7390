// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::inflection::{Forms, Inflection};
use crate::language::{Affix, Frame, Language, PerUnit, Precision};
use crate::step;

static GRAMMAR: Inflection = Inflection(PerUnit {
    second: Forms::new("un segundo", "segundos"),
    minute: Forms::new("un minuto", "minutos"),
    hour: Forms::new("una hora", "horas"),
    day: Forms::new("un día", "días"),
    month: Forms::new("un mes", "meses"),
    year: Forms::new("un año", "años"),
});

pub static SPANISH: Language = Language {
    name: "Spanish",
    code: "es",
    default_layout: "02/01/2006",
    steps: &step::STANDARD,
    frame: Frame {
        past: Affix::prefix("hace "),
        future: Affix::prefix("dentro de "),
    },
    precision: Precision::Exact {
        under_a_second: "menos de un segundo",
    },
    grammar: &GRAMMAR,
};
