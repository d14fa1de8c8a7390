// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User settings (TOML file and environment) resolved into a [`Config`].
//!
//! ```toml
//! language = "de"
//! max = "90m"
//! layout = "02.01.2006"
//! ```
//!
//! Layers overlay in order: defaults, file, environment, explicit overrides.

use crate::config::Config;
use crate::duration_str::{parse_duration, DurationParseError};
use crate::language::{Language, UnknownLanguage, ENGLISH};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

pub const ENV_CONFIG: &str = "TIMEAGO_CONFIG";
pub const ENV_LANG: &str = "TIMEAGO_LANG";
pub const ENV_MAX: &str = "TIMEAGO_MAX";
pub const ENV_LAYOUT: &str = "TIMEAGO_LAYOUT";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("TOML parse error in {path}: {source}")]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error(transparent)]
    Language(#[from] UnknownLanguage),

    #[error("invalid max: {0}")]
    Max(#[from] DurationParseError),
}

/// Unresolved settings; every field is optional so layers can overlay.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Language code or English name.
    #[serde(default, alias = "lang")]
    pub language: Option<String>,
    /// Cutoff duration string, e.g. `"90m"`.
    #[serde(default)]
    pub max: Option<String>,
    /// Absolute-date layout; `""` disables the cutoff.
    #[serde(default)]
    pub layout: Option<String>,
}

impl Settings {
    pub fn from_toml(content: &str, path: &Path) -> Result<Self, SettingsError> {
        toml::from_str(content).map_err(|source| SettingsError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read a settings file.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content, path)
    }

    /// Read the file named by `TIMEAGO_CONFIG`, else the per-user config file.
    ///
    /// A missing per-user file yields empty settings; a missing explicit file
    /// is an error.
    pub fn load_default() -> Result<Self, SettingsError> {
        if let Some(path) = std::env::var_os(ENV_CONFIG) {
            return Self::load(Path::new(&path));
        }
        match default_path() {
            Some(path) if path.is_file() => {
                debug!(path = %path.display(), "loading settings");
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Settings from `TIMEAGO_LANG`, `TIMEAGO_MAX` and `TIMEAGO_LAYOUT`.
    pub fn from_env() -> Self {
        Self {
            language: std::env::var(ENV_LANG).ok().filter(|s| !s.is_empty()),
            max: std::env::var(ENV_MAX).ok().filter(|s| !s.is_empty()),
            // An empty layout is meaningful, so keep it.
            layout: std::env::var(ENV_LAYOUT).ok(),
        }
    }

    /// Overlay `other` on top of `self`; set fields in `other` win.
    pub fn merge(self, other: Settings) -> Settings {
        Settings {
            language: other.language.or(self.language),
            max: other.max.or(self.max),
            layout: other.layout.or(self.layout),
        }
    }

    /// Resolve into a [`Config`].
    ///
    /// With a `max` but no `layout`, the language's default layout is used.
    pub fn build(&self) -> Result<Config, SettingsError> {
        let language: &'static Language = match &self.language {
            Some(name) => Language::find(name)?,
            None => &ENGLISH,
        };
        let Some(max) = &self.max else {
            return Ok(Config::no_max(language));
        };
        let max = parse_duration(max)?;
        let layout = self.layout.as_deref().unwrap_or(language.default_layout);
        Ok(Config::with_max(language, max, layout))
    }
}

/// `<config dir>/timeago/config.toml`, if the platform has a config dir.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("timeago").join("config.toml"))
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
