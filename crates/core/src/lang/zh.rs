// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::inflection::{Forms, Inflection};
use crate::language::{Affix, Frame, Language, PerUnit, Precision};
use crate::step;

// Chinese nouns do not inflect; the singular keeps the numeral.
static GRAMMAR: Inflection = Inflection(PerUnit {
    second: Forms::new("1 秒", "秒"),
    minute: Forms::new("1 分钟", "分钟"),
    hour: Forms::new("1 小时", "小时"),
    day: Forms::new("1 天", "天"),
    month: Forms::new("1 个月", "个月"),
    year: Forms::new("1 年", "年"),
});

pub static CHINESE: Language = Language {
    name: "Chinese",
    code: "zh",
    default_layout: "2006-01-02",
    steps: &step::STANDARD,
    frame: Frame {
        past: Affix::suffix("前"),
        future: Affix::suffix("后"),
    },
    precision: Precision::Approximate,
    grammar: &GRAMMAR,
};
