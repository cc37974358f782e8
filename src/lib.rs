//! Language codes for the skill assistant framework.

pub mod config;
pub mod error;
pub mod lang;

pub use error::LangError;
pub use lang::{parse_lang, Lang};
