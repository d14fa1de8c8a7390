// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `timeago format`: one phrase for one time

use anyhow::Result;
use chrono::{DateTime, FixedOffset, Utc};
use clap::Args;
use serde::Serialize;
use timeago_core::Settings;
use tracing::debug;

use crate::output::{print_json, OutputFormat};
use crate::time_arg::parse_time;

#[derive(Args, Debug, Default)]
pub struct FormatArgs {
    /// Event time: RFC 3339 or Unix seconds (optionally prefixed with @)
    #[arg(value_name = "TIME", allow_hyphen_values = true)]
    pub time: String,

    /// Reference time (default: now)
    #[arg(long, value_name = "TIME", allow_hyphen_values = true)]
    pub now: Option<String>,

    /// Language code or name (en, fr, zh, pt, de, tr, ru, es)
    #[arg(short = 'l', long = "lang", value_name = "LANG")]
    pub language: Option<String>,

    /// Show an absolute date once this much time has elapsed (e.g. 90m, 2d, 1y)
    #[arg(long, value_name = "DURATION")]
    pub max: Option<String>,

    /// Absolute-date layout written as the date 2006-01-02 15:04:05
    /// (default: the language's layout; "" disables --max)
    #[arg(long, value_name = "LAYOUT")]
    pub layout: Option<String>,
}

impl FormatArgs {
    /// Flags as the top settings layer.
    fn settings(&self) -> Settings {
        Settings {
            language: self.language.clone(),
            max: self.max.clone(),
            layout: self.layout.clone(),
        }
    }
}

#[derive(Debug, Serialize, PartialEq)]
pub struct Formatted {
    pub phrase: String,
    pub language: &'static str,
}

pub fn handle(args: FormatArgs, format: OutputFormat) -> Result<()> {
    let base = Settings::load_default()?.merge(Settings::from_env());
    let formatted = render(&args, base, Utc::now().fixed_offset())?;
    match format {
        OutputFormat::Text => println!("{}", formatted.phrase),
        OutputFormat::Json => print_json(&formatted)?,
    }
    Ok(())
}

/// Resolve settings (`base` under the flags) and format `args.time`.
pub fn render(args: &FormatArgs, base: Settings, now: DateTime<FixedOffset>) -> Result<Formatted> {
    let settings = base.merge(args.settings());
    debug!(?settings, "resolved settings");
    let config = settings.build()?;

    let t = parse_time(&args.time)?;
    let reference = match &args.now {
        Some(s) => parse_time(s)?,
        None => now,
    };

    Ok(Formatted {
        phrase: config.format_reference(&t, &reference),
        language: config.language().code,
    })
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
