use crate::lang::{parse_lang, Lang};
use anyhow::{bail, Context, Result};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Language used when a request carries no usable language code
    pub default_lang: Lang,

    /// Languages skills are allowed to answer in
    pub enabled_langs: Vec<Lang>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from a dotenv-style file without touching the process environment.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let vars = dotenvy::from_path_iter(path)
            .with_context(|| format!("Failed to open {}", path.display()))?
            .collect::<Result<HashMap<String, String>, _>>()
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        Self::from_lookup(|key| vars.get(key).cloned())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Default language - a single exact code
        let default_lang = match lookup("SKILL_DEFAULT_LANG") {
            Some(code) => parse_lang(&code).context("SKILL_DEFAULT_LANG is invalid")?,
            None => Lang::English,
        };

        // Enabled languages - comma separated, e.g. "en,ja"
        let enabled_langs = match lookup("SKILL_ENABLED_LANGS") {
            Some(list) => parse_lang_list(&list).context("SKILL_ENABLED_LANGS is invalid")?,
            None => Lang::SUPPORTED.to_vec(),
        };

        if !enabled_langs.contains(&default_lang) {
            bail!(
                "SKILL_DEFAULT_LANG '{}' is not in SKILL_ENABLED_LANGS",
                default_lang
            );
        }

        debug!(
            "Loaded language config: default={}, enabled={:?}",
            default_lang, enabled_langs
        );

        Ok(Self {
            default_lang,
            enabled_langs,
        })
    }

    pub fn is_enabled(&self, lang: Lang) -> bool {
        self.enabled_langs.contains(&lang)
    }

    /// Resolve a request's language code, falling back to `default_lang` when the
    /// code is unsupported or the language is disabled.
    pub fn resolve(&self, code: &str) -> Lang {
        let lang = Lang::resolve_or(code, self.default_lang);
        if self.is_enabled(lang) {
            lang
        } else {
            warn!(
                "Language '{}' is not enabled, falling back to '{}'",
                lang, self.default_lang
            );
            self.default_lang
        }
    }
}

fn parse_lang_list(list: &str) -> Result<Vec<Lang>> {
    let mut langs = Vec::new();
    for code in list.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let lang = parse_lang(code)?;
        if !langs.contains(&lang) {
            langs.push(lang);
        }
    }

    if langs.is_empty() {
        bail!("No languages listed");
    }

    Ok(langs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    // ==================== from_lookup Tests ====================

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).expect("Should succeed");
        assert_eq!(config.default_lang, Lang::English);
        assert_eq!(config.enabled_langs, Lang::SUPPORTED.to_vec());
    }

    #[test]
    fn test_custom_default_and_enabled() {
        let config = Config::from_lookup(lookup_from(&[
            ("SKILL_DEFAULT_LANG", "ja"),
            ("SKILL_ENABLED_LANGS", "ja, zh"),
        ]))
        .expect("Should succeed");

        assert_eq!(config.default_lang, Lang::Japanese);
        assert_eq!(config.enabled_langs, vec![Lang::Japanese, Lang::Chinese]);
        assert!(!config.is_enabled(Lang::English));
    }

    #[test]
    fn test_enabled_list_skips_empty_and_duplicates() {
        let config = Config::from_lookup(lookup_from(&[("SKILL_ENABLED_LANGS", "en,,en,zh,")]))
            .expect("Should succeed");
        assert_eq!(config.enabled_langs, vec![Lang::English, Lang::Chinese]);
    }

    #[test]
    fn test_invalid_default_lang() {
        let err = Config::from_lookup(lookup_from(&[("SKILL_DEFAULT_LANG", "EN")])).unwrap_err();
        assert!(err.to_string().contains("SKILL_DEFAULT_LANG"));
    }

    #[test]
    fn test_invalid_enabled_lang() {
        let err =
            Config::from_lookup(lookup_from(&[("SKILL_ENABLED_LANGS", "en,fr")])).unwrap_err();
        assert!(err.to_string().contains("SKILL_ENABLED_LANGS"));
    }

    #[test]
    fn test_empty_enabled_list() {
        assert!(Config::from_lookup(lookup_from(&[("SKILL_ENABLED_LANGS", " , ")])).is_err());
    }

    #[test]
    fn test_default_must_be_enabled() {
        let result = Config::from_lookup(lookup_from(&[
            ("SKILL_DEFAULT_LANG", "en"),
            ("SKILL_ENABLED_LANGS", "zh,ja"),
        ]));
        assert!(result.is_err());
    }

    // ==================== resolve Tests ====================

    #[test]
    fn test_resolve_enabled() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.resolve("ja"), Lang::Japanese);
    }

    #[test]
    fn test_resolve_unsupported_falls_back() {
        let config = Config::from_lookup(lookup_from(&[("SKILL_DEFAULT_LANG", "zh")])).unwrap();
        assert_eq!(config.resolve("fr"), Lang::Chinese);
        assert_eq!(config.resolve("ZH"), Lang::Chinese);
    }

    #[test]
    fn test_resolve_disabled_falls_back() {
        let config = Config::from_lookup(lookup_from(&[("SKILL_ENABLED_LANGS", "en")])).unwrap();
        assert_eq!(config.resolve("ja"), Lang::English);
    }

    // ==================== File / Env Tests ====================

    #[test]
    fn test_from_env_file() {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        writeln!(file, "SKILL_DEFAULT_LANG=zh").unwrap();
        writeln!(file, "SKILL_ENABLED_LANGS=zh,en").unwrap();

        let config = Config::from_env_file(file.path()).expect("Should succeed");
        assert_eq!(config.default_lang, Lang::Chinese);
        assert_eq!(config.enabled_langs, vec![Lang::Chinese, Lang::English]);
    }

    #[test]
    fn test_from_env_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::from_env_file(dir.path().join("missing.env")).is_err());
    }

    #[test]
    #[serial]
    fn test_from_env() {
        std::env::set_var("SKILL_DEFAULT_LANG", "ja");
        std::env::remove_var("SKILL_ENABLED_LANGS");

        let config = Config::from_env();

        std::env::remove_var("SKILL_DEFAULT_LANG");

        let config = config.expect("Should succeed");
        assert_eq!(config.default_lang, Lang::Japanese);
        assert_eq!(config.enabled_langs, Lang::SUPPORTED.to_vec());
    }
}
