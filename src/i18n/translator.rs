//! Key lookup against a single language's translation table.

use crate::i18n::coverage::placeholder_regex;
use crate::i18n::{Catalog, Language, LookupMetrics, TranslationTable};
use regex::Captures;
use tracing::debug;

/// Lookup function bound to one language.
///
/// A `Translator` is a cheap value: switching language means building a new
/// one, never mutating an existing one, so translators handed out before a
/// switch keep answering in their original language.
#[derive(Debug, Clone, Copy)]
pub struct Translator<'c> {
    language: Language,
    table: &'c TranslationTable,
}

impl<'c> Translator<'c> {
    /// Bind a translator to `language` in the given catalog.
    pub fn new(catalog: &'c Catalog, language: Language) -> Self {
        Self {
            language,
            table: catalog.table(language),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Resolve `key` to localized text without falling back.
    ///
    /// Tries the dot-path traversal first, then the whole key as a flat
    /// top-level entry.
    pub fn lookup(&self, key: &str) -> Option<&'c str> {
        let metrics = LookupMetrics::global();

        if let Some(text) = self.table.lookup_nested(key) {
            metrics.record_nested_hit();
            return Some(text);
        }
        if let Some(text) = self.table.lookup_flat(key) {
            metrics.record_flat_hit();
            return Some(text);
        }

        metrics.record_miss();
        None
    }

    /// Translate `key`, returning the key itself when no text exists.
    ///
    /// # Example
    /// ```ignore
    /// let t = Translator::new(Catalog::builtin(), Language::HINDI);
    /// assert_eq!(t.translate("nav.home"), "होम");
    /// assert_eq!(t.translate("no.such.key"), "no.such.key");
    /// ```
    pub fn translate(&self, key: &str) -> String {
        match self.lookup(key) {
            Some(text) => text.to_string(),
            None => {
                debug!("No '{}' translation for key '{}'", self.language, key);
                key.to_string()
            }
        }
    }

    /// Translate `key` and substitute `{name}` placeholders.
    ///
    /// Substitution is a single pass over the translated text, so argument
    /// values are inserted verbatim. Placeholders without a matching argument
    /// are left untouched.
    pub fn translate_with(&self, key: &str, args: &[(&str, &str)]) -> String {
        let text = self.translate(key);
        placeholder_regex()
            .replace_all(&text, |caps: &Captures| {
                let name = &caps[1];
                match args.iter().find(|(arg, _)| *arg == name) {
                    Some((_, value)) => (*value).to_string(),
                    None => caps[0].to_string(),
                }
            })
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_catalog() -> Catalog {
        let english = TranslationTable::from_json(
            r#"{
                "nav": { "home": "Home" },
                "market.title": "Market prices",
                "greeting": "Hello, {name}! {unused}",
                "predictor": { "action": { "hold": "Hold" } }
            }"#,
        )
        .expect("valid table");
        let hindi = TranslationTable::from_json(r#"{ "nav": { "home": "होम" } }"#)
            .expect("valid table");
        Catalog::from_tables([(Language::ENGLISH, english), (Language::HINDI, hindi)])
    }

    // ==================== translate Tests ====================

    #[test]
    fn test_translate_nested_key() {
        let catalog = test_catalog();
        let t = Translator::new(&catalog, Language::ENGLISH);
        assert_eq!(t.translate("nav.home"), "Home");
        assert_eq!(t.translate("predictor.action.hold"), "Hold");
    }

    #[test]
    fn test_translate_flat_dotted_key() {
        let catalog = test_catalog();
        let t = Translator::new(&catalog, Language::ENGLISH);
        assert_eq!(t.translate("market.title"), "Market prices");
    }

    #[test]
    fn test_translate_missing_returns_key() {
        let catalog = test_catalog();
        let t = Translator::new(&catalog, Language::ENGLISH);
        assert_eq!(t.translate("does.not.exist"), "does.not.exist");
        assert_eq!(t.translate("nav.home.deeper"), "nav.home.deeper");
        assert_eq!(t.translate(""), "");
    }

    #[test]
    fn test_translate_group_key_returns_key() {
        let catalog = test_catalog();
        let t = Translator::new(&catalog, Language::ENGLISH);
        assert_eq!(t.translate("nav"), "nav");
        assert_eq!(t.translate("predictor.action"), "predictor.action");
    }

    #[test]
    fn test_translate_does_not_fall_back_to_english() {
        let catalog = test_catalog();
        let t = Translator::new(&catalog, Language::HINDI);
        assert_eq!(t.translate("nav.home"), "होम");
        assert_eq!(t.translate("market.title"), "market.title");
    }

    #[test]
    fn test_translate_language_without_table() {
        let catalog = test_catalog();
        let tamil = Language::from_code("ta").expect("ta is supported");
        let t = Translator::new(&catalog, tamil);
        assert_eq!(t.language(), tamil);
        assert_eq!(t.translate("nav.home"), "nav.home");
    }

    // ==================== lookup Tests ====================

    #[test]
    fn test_lookup_reports_absence() {
        let catalog = test_catalog();
        let t = Translator::new(&catalog, Language::ENGLISH);
        assert_eq!(t.lookup("nav.home"), Some("Home"));
        assert_eq!(t.lookup("nav.away"), None);
    }

    #[test]
    fn test_lookup_updates_global_metrics() {
        let catalog = test_catalog();
        let t = Translator::new(&catalog, Language::ENGLISH);
        let before = LookupMetrics::global().misses();
        t.lookup("definitely.missing");
        assert!(LookupMetrics::global().misses() > before);
    }

    // ==================== translate_with Tests ====================

    #[test]
    fn test_translate_with_substitutes_placeholders() {
        let catalog = test_catalog();
        let t = Translator::new(&catalog, Language::ENGLISH);
        let text = t.translate_with("greeting", &[("name", "Asha")]);
        assert_eq!(text, "Hello, Asha! {unused}");
    }

    #[test]
    fn test_translate_with_inserts_values_verbatim() {
        let catalog = test_catalog();
        let t = Translator::new(&catalog, Language::ENGLISH);
        let text = t.translate_with("greeting", &[("name", "{unused}"), ("unused", "x")]);
        assert_eq!(text, "Hello, {unused}! x");
    }

    #[test]
    fn test_translate_with_missing_key_returns_key() {
        let catalog = test_catalog();
        let t = Translator::new(&catalog, Language::ENGLISH);
        assert_eq!(t.translate_with("missing", &[("name", "x")]), "missing");
    }

    // ==================== Builtin Catalog Tests ====================

    #[test]
    fn test_builtin_every_language_translates_title() {
        let catalog = Catalog::builtin();
        for language in Language::all() {
            let t = Translator::new(catalog, language);
            let title = t.translate("predictor.title");
            assert!(!title.is_empty());
            assert_ne!(title, "predictor.title", "untranslated in {}", language);
        }
    }

    #[test]
    fn test_builtin_flat_footer_key() {
        let t = Translator::new(Catalog::builtin(), Language::HINDI);
        assert_ne!(t.translate("footer.copyright"), "footer.copyright");
    }

    #[test]
    fn test_builtin_unknown_key_is_identity_everywhere() {
        for language in Language::all() {
            let t = Translator::new(Catalog::builtin(), language);
            assert_eq!(t.translate("predictor.unknownField"), "predictor.unknownField");
        }
    }
}
