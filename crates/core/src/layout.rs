// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Absolute-date layouts written by example.
//!
//! A layout spells out how the reference instant `Mon Jan 2 15:04:05 MST 2006`
//! would be written: `"2006-01-02"` renders `2013-08-30`, `"02.01.2006"`
//! renders `30.08.2013`. Anything that is not a reference token is copied
//! verbatim, so parsing never fails.

use chrono::format::{Fixed, Item, Numeric, Pad};
use chrono::{DateTime, TimeZone};
use std::fmt;

/// Reference tokens, longest first where one is a prefix of another.
const TOKENS: &[(&str, Token)] = &[
    ("January", Token::Fixed(Fixed::LongMonthName)),
    ("Jan", Token::Fixed(Fixed::ShortMonthName)),
    ("Monday", Token::Fixed(Fixed::LongWeekdayName)),
    ("Mon", Token::Fixed(Fixed::ShortWeekdayName)),
    ("MST", Token::Fixed(Fixed::TimezoneName)),
    ("2006", Token::Numeric(Numeric::Year, Pad::Zero)),
    ("-07:00", Token::Fixed(Fixed::TimezoneOffsetColon)),
    ("-0700", Token::Fixed(Fixed::TimezoneOffset)),
    ("Z07:00", Token::Fixed(Fixed::TimezoneOffsetColonZ)),
    ("Z0700", Token::Fixed(Fixed::TimezoneOffsetZ)),
    (".000000000", Token::Fixed(Fixed::Nanosecond9)),
    (".000000", Token::Fixed(Fixed::Nanosecond6)),
    (".000", Token::Fixed(Fixed::Nanosecond3)),
    ("01", Token::Numeric(Numeric::Month, Pad::Zero)),
    ("02", Token::Numeric(Numeric::Day, Pad::Zero)),
    ("_2", Token::Numeric(Numeric::Day, Pad::Space)),
    ("03", Token::Numeric(Numeric::Hour12, Pad::Zero)),
    ("04", Token::Numeric(Numeric::Minute, Pad::Zero)),
    ("05", Token::Numeric(Numeric::Second, Pad::Zero)),
    ("06", Token::Numeric(Numeric::YearMod100, Pad::Zero)),
    ("15", Token::Numeric(Numeric::Hour, Pad::Zero)),
    ("PM", Token::Fixed(Fixed::UpperAmPm)),
    ("pm", Token::Fixed(Fixed::LowerAmPm)),
    ("1", Token::Numeric(Numeric::Month, Pad::None)),
    ("2", Token::Numeric(Numeric::Day, Pad::None)),
    ("3", Token::Numeric(Numeric::Hour12, Pad::None)),
    ("4", Token::Numeric(Numeric::Minute, Pad::None)),
    ("5", Token::Numeric(Numeric::Second, Pad::None)),
];

#[derive(Clone)]
enum Token {
    Numeric(Numeric, Pad),
    Fixed(Fixed),
}

impl Token {
    fn item(&self) -> Item<'static> {
        match self {
            Token::Numeric(n, pad) => Item::Numeric(n.clone(), *pad),
            Token::Fixed(f) => Item::Fixed(f.clone()),
        }
    }
}

/// Parsed absolute-date layout.
#[derive(Clone, PartialEq)]
pub struct Layout {
    pattern: String,
    items: Vec<Item<'static>>,
}

impl Layout {
    /// Split `pattern` into reference tokens and literal text.
    pub fn parse(pattern: &str) -> Self {
        let mut items = Vec::new();
        let mut literal = String::new();
        let mut rest = pattern;

        while let Some(c) = rest.chars().next() {
            match TOKENS.iter().find(|(tok, _)| rest.starts_with(tok)) {
                Some((tok, token)) => {
                    if !literal.is_empty() {
                        items.push(Item::OwnedLiteral(std::mem::take(&mut literal).into()));
                    }
                    items.push(token.item());
                    rest = &rest[tok.len()..];
                }
                None => {
                    literal.push(c);
                    rest = &rest[c.len_utf8()..];
                }
            }
        }
        if !literal.is_empty() {
            items.push(Item::OwnedLiteral(literal.into()));
        }

        Self {
            pattern: pattern.to_string(),
            items,
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }

    /// Render `t` in its own time zone.
    pub fn render<Tz>(&self, t: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        t.format_with_items(self.items.iter()).to_string()
    }
}

impl fmt::Debug for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Layout").field(&self.pattern).finish()
    }
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
