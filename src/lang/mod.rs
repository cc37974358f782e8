//! Supported languages for skills.
//!
//! Skills receive language codes from configuration, user input and request
//! payloads. Everything that needs to know "which language is this" goes
//! through the closed [`Lang`] enum defined here.
//!
//! # Architecture
//!
//! - `language`: the `Lang` enum, parsing from and formatting to ISO 639-1 codes
//! - `registry`: display metadata (English and native names) for each language
//!
//! # Example
//!
//! ```rust
//! use skill::lang::{parse_lang, Lang};
//!
//! let lang = parse_lang("ja").unwrap();
//! assert_eq!(lang, Lang::Japanese);
//! assert_eq!(lang.to_string(), "ja");
//! assert!(parse_lang("JA").is_err());
//! ```

mod language;
mod registry;

pub use language::{parse_lang, Lang};
pub use registry::{LanguageInfo, LanguageRegistry};
