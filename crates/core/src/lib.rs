// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! timeago-core: relative-time phrases ("2 hours ago", "vor einem Tag") in
//! several languages, with an optional absolute-date cutoff.
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use timeago_core::{Config, ENGLISH};
//!
//! let t = Utc.with_ymd_and_hms(2013, 8, 30, 12, 0, 0).unwrap();
//! let now = Utc.with_ymd_and_hms(2013, 8, 31, 12, 0, 0).unwrap();
//! assert_eq!(Config::no_max(&ENGLISH).format_reference(&t, &now), "one day ago");
//! ```

pub mod config;
pub mod duration_str;
pub mod elapsed;
pub mod lang;
pub mod language;
pub mod layout;
pub mod settings;
pub mod step;

pub use config::Config;
pub use duration_str::{parse_duration, DurationParseError};
pub use elapsed::{Elapsed, Tense};
pub use language::{
    Affix, Frame, Grammar, Language, PerUnit, Precision, UnknownLanguage, CHINESE, ENGLISH,
    FRENCH, GERMAN, LANGUAGES, PORTUGUESE, RUSSIAN, SPANISH, TURKISH,
};
pub use layout::Layout;
pub use settings::{Settings, SettingsError};
pub use step::{Resolved, Step, StepTable, StepTableError, Unit, DAY, HOUR, MINUTE, MONTH, SECOND, YEAR};
