//! Supported application languages

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::{DomainError, DomainResult};

/// Language a loan application is conducted in.
///
/// Closed set; each variant carries its canonical lowercase code. Lookup is
/// an exact match against [`Language::SUPPORTED`], with no case folding or
/// trimming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Language {
    /// French
    Fr,
    /// Dutch
    Nl,
}

impl Language {
    /// Code-to-variant table, in declaration order
    pub const SUPPORTED: [(&'static str, Language); 2] = [("fr", Self::Fr), ("nl", Self::Nl)];

    /// Resolve a language from its canonical code
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidLanguage`] when `code` is not exactly one
    /// of the supported codes.
    ///
    /// # Examples
    ///
    /// ```
    /// # use loan_origination_domain::Language;
    /// assert_eq!(Language::of("fr").unwrap(), Language::Fr);
    /// assert!(Language::of("FR").is_err());
    /// ```
    pub fn of(code: &str) -> DomainResult<Self> {
        Self::SUPPORTED
            .iter()
            .find(|(candidate, _)| *candidate == code)
            .map(|(_, language)| *language)
            .ok_or_else(|| DomainError::InvalidLanguage(code.to_string()))
    }

    /// Canonical code of this language
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Fr => "fr",
            Self::Nl => "nl",
        }
    }
}

impl FromStr for Language {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::of(s)
    }
}

impl TryFrom<String> for Language {
    type Error = DomainError;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        Self::of(&code)
    }
}

impl From<Language> for &'static str {
    fn from(language: Language) -> Self {
        language.code()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
