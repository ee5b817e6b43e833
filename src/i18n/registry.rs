//! Language registry: Single source of truth for all supported languages.
//!
//! This module provides a centralized registry of all languages the advisory
//! front-end can be rendered in. It uses a singleton pattern with `OnceLock`
//! to ensure thread-safe initialization and access.

use std::sync::OnceLock;

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "en", "hi", "ta")
    pub code: &'static str,

    /// English name of the language (e.g., "Hindi", "Tamil")
    pub name: &'static str,

    /// Native name of the language (e.g., "हिन्दी", "தமிழ்")
    pub native_name: &'static str,

    /// Whether this is the default language (exactly one should be true).
    /// The default table is also the reference for coverage checks.
    pub is_default: bool,
}

/// Global language registry singleton.
///
/// Initialized once on first access and immutable thereafter.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its code.
    ///
    /// The comparison is exact; callers wanting lenient matching should go
    /// through `Language::normalize`.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get a language configuration by its English name, ignoring case.
    pub fn get_by_name(&self, name: &str) -> Option<&LanguageConfig> {
        self.languages
            .iter()
            .find(|lang| lang.name.eq_ignore_ascii_case(name))
    }

    /// Get all supported languages, in display order.
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// Get the default language configuration.
    ///
    /// # Panics
    /// Panics if the registry does not define exactly one default language
    /// (this indicates a configuration error caught by the unit tests).
    pub fn default_language(&self) -> &LanguageConfig {
        let defaults: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_default)
            .collect();

        match defaults.len() {
            0 => panic!("No default language found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default languages found in registry"),
        }
    }

    /// Check if a language code is supported.
    pub fn is_supported(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }
}

/// The eight languages offered by the language selector.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            is_default: true,
        },
        LanguageConfig {
            code: "hi",
            name: "Hindi",
            native_name: "हिन्दी",
            is_default: false,
        },
        LanguageConfig {
            code: "bn",
            name: "Bengali",
            native_name: "বাংলা",
            is_default: false,
        },
        LanguageConfig {
            code: "te",
            name: "Telugu",
            native_name: "తెలుగు",
            is_default: false,
        },
        LanguageConfig {
            code: "mr",
            name: "Marathi",
            native_name: "मराठी",
            is_default: false,
        },
        LanguageConfig {
            code: "ta",
            name: "Tamil",
            native_name: "தமிழ்",
            is_default: false,
        },
        LanguageConfig {
            code: "gu",
            name: "Gujarati",
            native_name: "ગુજરાતી",
            is_default: false,
        },
        LanguageConfig {
            code: "pa",
            name: "Punjabi",
            native_name: "ਪੰਜਾਬੀ",
            is_default: false,
        },
    ]
}
