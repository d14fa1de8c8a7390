// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Predefined languages.

pub mod de;
mod en;
mod es;
mod fr;
pub mod inflection;
mod pt;
pub mod ru;
mod tr;
mod zh;

pub use de::{German, GERMAN};
pub use en::ENGLISH;
pub use es::SPANISH;
pub use fr::FRENCH;
pub use inflection::{Forms, Inflection};
pub use pt::PORTUGUESE;
pub use ru::{PluralClass, Russian, RUSSIAN};
pub use tr::TURKISH;
pub use zh::CHINESE;
