// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::inflection::{Forms, Inflection};
use crate::language::{Affix, Frame, Language, PerUnit, Precision};
use crate::step;

static GRAMMAR: Inflection = Inflection(PerUnit {
    second: Forms::new("um segundo", "segundos"),
    minute: Forms::new("um minuto", "minutos"),
    hour: Forms::new("uma hora", "horas"),
    day: Forms::new("um dia", "dias"),
    month: Forms::new("um mês", "meses"),
    year: Forms::new("um ano", "anos"),
});

pub static PORTUGUESE: Language = Language {
    name: "Portuguese",
    code: "pt",
    default_layout: "02-01-2006",
    steps: &step::STANDARD,
    frame: Frame {
        past: Affix::prefix("há "),
        future: Affix::prefix("daqui a "),
    },
    precision: Precision::Exact {
        under_a_second: "menos de um segundo",
    },
    grammar: &GRAMMAR,
};
