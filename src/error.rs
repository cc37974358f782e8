use thiserror::Error;

/// Errors returned when turning user-supplied text into a [`Lang`](crate::lang::Lang).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LangError {
    /// The code is not one of the exact, lowercase ISO 639-1 codes we support.
    #[error("Invalid or unsupported language code: '{code}'")]
    InvalidOrUnsupportedLanguageCode { code: String },
}

impl LangError {
    pub(crate) fn invalid(code: &str) -> Self {
        Self::InvalidOrUnsupportedLanguageCode {
            code: code.to_string(),
        }
    }

    /// The offending input, exactly as it was given.
    pub fn code(&self) -> &str {
        match self {
            Self::InvalidOrUnsupportedLanguageCode { code } => code,
        }
    }
}
