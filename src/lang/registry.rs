//! Language registry: display metadata for every supported language.
//!
//! Initialized once with `OnceLock` and immutable thereafter, so it can be read
//! from any thread without locking.

use crate::lang::Lang;
use serde::Serialize;
use std::sync::OnceLock;

/// Metadata for a supported language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageInfo {
    pub lang: Lang,

    /// ISO 639-1 language code (e.g., "en", "zh")
    pub code: &'static str,

    /// English name of the language (e.g., "Japanese")
    pub name: &'static str,

    /// Native name of the language (e.g., "日本語")
    pub native_name: &'static str,
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageInfo>,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: Lang::SUPPORTED.iter().map(|&lang| describe(lang)).collect(),
        })
    }

    /// Look up a language by its exact code. Same matching rules as `parse_lang`.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageInfo> {
        self.languages.iter().find(|info| info.code == code)
    }

    /// Look up a language. `None` for [`Lang::Unknown`].
    pub fn get_by_lang(&self, lang: Lang) -> Option<&LanguageInfo> {
        self.languages.iter().find(|info| info.lang == lang)
    }

    /// All supported languages, in `Lang::SUPPORTED` order.
    pub fn list_all(&self) -> Vec<&LanguageInfo> {
        self.languages.iter().collect()
    }
}

fn describe(lang: Lang) -> LanguageInfo {
    let (name, native_name) = match lang {
        Lang::English => ("English", "English"),
        Lang::Chinese => ("Chinese", "中文"),
        Lang::Japanese => ("Japanese", "日本語"),
        Lang::Unknown => ("Unknown", "Unknown"),
    };

    LanguageInfo {
        lang,
        code: lang.code(),
        name,
        native_name,
    }
}
