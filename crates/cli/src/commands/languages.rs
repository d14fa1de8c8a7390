// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `timeago languages`

use anyhow::Result;
use serde::Serialize;
use timeago_core::{Language, Precision, LANGUAGES};

use crate::color;
use crate::output::{columns, print_json, OutputFormat};

#[derive(Debug, Serialize, PartialEq)]
pub struct LanguageEntry {
    pub code: &'static str,
    pub name: &'static str,
    pub default_layout: &'static str,
    pub exact: bool,
}

impl From<&Language> for LanguageEntry {
    fn from(l: &Language) -> Self {
        Self {
            code: l.code,
            name: l.name,
            default_layout: l.default_layout,
            exact: matches!(l.precision, Precision::Exact { .. }),
        }
    }
}

pub fn entries() -> Vec<LanguageEntry> {
    LANGUAGES.iter().map(|l| LanguageEntry::from(*l)).collect()
}

/// Text table: header plus one line per language.
pub fn table(entries: &[LanguageEntry]) -> Vec<String> {
    let mut rows = vec![vec![
        "CODE".to_string(),
        "NAME".to_string(),
        "LAYOUT".to_string(),
    ]];
    rows.extend(entries.iter().map(|e| {
        vec![
            e.code.to_string(),
            e.name.to_string(),
            e.default_layout.to_string(),
        ]
    }));
    columns(&rows)
}

pub fn handle(format: OutputFormat) -> Result<()> {
    let entries = entries();
    match format {
        OutputFormat::Text => {
            let mut lines = table(&entries).into_iter();
            if let Some(head) = lines.next() {
                println!("{}", color::header(&head));
            }
            for line in lines {
                println!("{}", line);
            }
            println!("{}", color::muted("Layouts are written as the date 2006-01-02 15:04:05."));
        }
        OutputFormat::Json => print_json(&entries)?,
    }
    Ok(())
}

#[cfg(test)]
#[path = "languages_tests.rs"]
mod tests;
