//! Translation coverage checks.
//!
//! Compares every language table against the default (English) table and
//! reports keys that are missing, plus keys whose `{placeholder}` names
//! differ. Partial tables are allowed at runtime (lookups fall back to the
//! key), so this report documents gaps rather than enforcing anything.

use crate::i18n::{Catalog, Language, TranslationTable};
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Placeholder pattern (cached for performance)
static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

/// Coverage of one language relative to the default language.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageCoverage {
    pub language: Language,

    /// Number of keys in the default table
    pub reference_keys: usize,

    /// Reference keys this language has no text for
    pub missing: Vec<String>,

    /// Keys present in both tables whose placeholder sets differ
    pub placeholder_mismatches: Vec<String>,
}

impl LanguageCoverage {
    /// Percentage of reference keys translated (0-100).
    pub fn percent(&self) -> f64 {
        if self.reference_keys == 0 {
            return 100.0;
        }
        let translated = self.reference_keys - self.missing.len();
        (translated as f64 / self.reference_keys as f64) * 100.0
    }

    pub fn is_complete(&self) -> bool {
        self.missing.is_empty() && self.placeholder_mismatches.is_empty()
    }
}

/// Coverage of every non-default language.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverageReport {
    pub reference: Language,
    pub languages: Vec<LanguageCoverage>,
}

impl CoverageReport {
    /// Build the report for all supported languages in `catalog`.
    pub fn build(catalog: &Catalog) -> Self {
        let reference = Language::default_language();
        let reference_table = catalog.table(reference);
        let reference_keys = reference_table.keys();

        let languages = Language::all()
            .into_iter()
            .filter(|language| *language != reference)
            .map(|language| {
                let table = catalog.table(language);
                let mut missing = Vec::new();
                let mut placeholder_mismatches = Vec::new();

                for key in &reference_keys {
                    let expected = text_at(reference_table, key);
                    match text_at(table, key) {
                        None => missing.push(key.clone()),
                        Some(actual) => {
                            if extract_placeholders(expected.unwrap_or_default())
                                != extract_placeholders(actual)
                            {
                                placeholder_mismatches.push(key.clone());
                            }
                        }
                    }
                }

                LanguageCoverage {
                    language,
                    reference_keys: reference_keys.len(),
                    missing,
                    placeholder_mismatches,
                }
            })
            .collect();

        Self {
            reference,
            languages,
        }
    }

    pub fn for_language(&self, language: Language) -> Option<&LanguageCoverage> {
        self.languages.iter().find(|c| c.language == language)
    }

    pub fn is_complete(&self) -> bool {
        self.languages.iter().all(LanguageCoverage::is_complete)
    }
}

/// Text stored under a flattened key path, nested or flat.
fn text_at<'t>(table: &'t TranslationTable, key: &str) -> Option<&'t str> {
    table.lookup_nested(key).or_else(|| table.lookup_flat(key))
}

/// `{name}` placeholder pattern; capture group 1 is the name.
pub(crate) fn placeholder_regex() -> &'static Regex {
    PLACEHOLDER_REGEX
        .get_or_init(|| Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("valid regex"))
}

/// Extract the set of `{name}` placeholders from text.
fn extract_placeholders(text: &str) -> BTreeSet<String> {
    placeholder_regex()
        .captures_iter(text)
        .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
        .collect()
}
