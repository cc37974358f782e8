//! Language type: closed set of languages a skill can speak.
//!
//! `Lang` maps one-to-one onto the canonical ISO 639-1 codes `"en"`, `"zh"` and
//! `"ja"`. `Lang::Unknown` is the default value and is never produced by parsing.

use crate::error::LangError;
use crate::lang::LanguageRegistry;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// A supported language.
///
/// Serializes as its canonical two-letter code. Deserialization goes through
/// [`parse_lang`], so `"unknown"` and unsupported codes are rejected.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
#[repr(i32)]
pub enum Lang {
    /// Not yet determined. Only ever produced as a default.
    #[default]
    Unknown = 0,
    English = 1,
    Chinese = 2,
    Japanese = 3,
}

/// Parse a two-letter ISO 639 language code.
///
/// The match is exact and case-sensitive: `"en"` is English, `"EN"` and `" en"`
/// are errors. On success the result is never [`Lang::Unknown`].
pub fn parse_lang(code: &str) -> Result<Lang, LangError> {
    match code {
        "zh" => Ok(Lang::Chinese),
        "en" => Ok(Lang::English),
        "ja" => Ok(Lang::Japanese),
        _ => Err(LangError::invalid(code)),
    }
}

impl Lang {
    /// Every language [`parse_lang`] can return, in a stable order.
    pub const SUPPORTED: [Lang; 3] = [Lang::English, Lang::Chinese, Lang::Japanese];

    /// Canonical two-letter code, or `"unknown"` for [`Lang::Unknown`].
    pub fn code(&self) -> &'static str {
        match self {
            Lang::English => "en",
            Lang::Japanese => "ja",
            Lang::Chinese => "zh",
            Lang::Unknown => "unknown",
        }
    }

    /// Parse `code`, falling back to `fallback` when it is not supported.
    pub fn resolve_or(code: &str, fallback: Lang) -> Lang {
        match parse_lang(code) {
            Ok(lang) => lang,
            Err(e) => {
                warn!("{}, falling back to '{}'", e, fallback);
                fallback
            }
        }
    }

    /// `false` only for [`Lang::Unknown`].
    pub fn is_known(&self) -> bool {
        !matches!(self, Lang::Unknown)
    }

    /// Integer discriminant (`0` for unknown, `1..=3` for the supported languages).
    pub fn as_i32(&self) -> i32 {
        *self as i32
    }

    /// English name of the language (e.g., "Chinese").
    pub fn name(&self) -> &'static str {
        LanguageRegistry::get()
            .get_by_lang(*self)
            .map(|info| info.name)
            .unwrap_or("Unknown")
    }

    /// Name of the language in the language itself (e.g., "日本語").
    pub fn native_name(&self) -> &'static str {
        LanguageRegistry::get()
            .get_by_lang(*self)
            .map(|info| info.native_name)
            .unwrap_or("Unknown")
    }
}

/// Integers outside the defined discriminants become [`Lang::Unknown`].
impl From<i32> for Lang {
    fn from(value: i32) -> Self {
        match value {
            1 => Lang::English,
            2 => Lang::Chinese,
            3 => Lang::Japanese,
            _ => Lang::Unknown,
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Lang {
    type Err = LangError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_lang(s)
    }
}

impl TryFrom<&str> for Lang {
    type Error = LangError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse_lang(value)
    }
}

impl TryFrom<String> for Lang {
    type Error = LangError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse_lang(&value)
    }
}

impl From<Lang> for String {
    fn from(lang: Lang) -> Self {
        lang.code().to_string()
    }
}
