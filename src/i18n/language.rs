//! Language type: validated language representation.
//!
//! A `Language` can only hold a code present in the registry. Strict
//! construction goes through `from_code`; lenient, total construction from
//! arbitrary user or platform input goes through `normalize`.

use crate::i18n::{LanguageConfig, LanguageRegistry};
use anyhow::{bail, Result};
use serde::{Serialize, Serializer};
use std::fmt;

/// A supported language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "en", "hi")
    code: &'static str,
}

impl Language {
    pub const ENGLISH: Language = Language { code: "en" };
    pub const HINDI: Language = Language { code: "hi" };

    /// Create a Language from an exact language code.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is in the registry
    /// * `Err` if the code is unknown
    pub fn from_code(code: &str) -> Result<Language> {
        match LanguageRegistry::get().get_by_code(code) {
            Some(config) => Ok(Language { code: config.code }),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// Map any raw tag onto a supported language.
    ///
    /// Trims and lower-cases the input, drops an encoding suffix
    /// (`hi_IN.UTF-8`), keeps the part before the first `-` or `_`, and looks
    /// that up by code, then by English name. Anything unrecognized, blank
    /// or absent maps to the default language.
    ///
    /// Total and idempotent: `normalize(Some(normalize(x).code())) == normalize(x)`.
    ///
    /// # Example
    /// ```ignore
    /// assert_eq!(Language::normalize(Some("EN-us")), Language::ENGLISH);
    /// assert_eq!(Language::normalize(None), Language::ENGLISH);
    /// ```
    pub fn normalize(raw: Option<&str>) -> Language {
        let Some(raw) = raw else {
            return Language::default_language();
        };

        let lowered = raw.trim().to_lowercase();
        let without_encoding = lowered.split('.').next().unwrap_or_default();
        let primary = without_encoding
            .split(['-', '_'])
            .next()
            .unwrap_or_default();

        let registry = LanguageRegistry::get();
        registry
            .get_by_code(primary)
            .or_else(|| registry.get_by_name(primary))
            .map(|config| Language { code: config.code })
            .unwrap_or_else(Language::default_language)
    }

    /// Get the default language (English).
    pub fn default_language() -> Language {
        let config = LanguageRegistry::get().default_language();
        Language { code: config.code }
    }

    /// Every supported language, in registry order.
    pub fn all() -> Vec<Language> {
        LanguageRegistry::get()
            .list_all()
            .into_iter()
            .map(|config| Language { code: config.code })
            .collect()
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is not in the registry. This cannot happen for a
    /// `Language` built through `from_code`, `normalize` or the constants.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    /// English name of the language (e.g., "Marathi").
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Native name of the language (e.g., "मराठी").
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    pub fn is_default(&self) -> bool {
        self.config().is_default
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::default_language()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code)
    }
}
