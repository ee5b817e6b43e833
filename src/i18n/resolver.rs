//! Active-language resolution and the per-session locale state.

use crate::i18n::store::{LocaleStore, LANGUAGE_KEY};
use crate::i18n::{Catalog, Language, Translator};
use tracing::{debug, info, warn};

/// Candidate sources for the startup language, highest precedence first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleSources {
    /// Explicit override (command line, `APP_LANGUAGE`)
    pub override_tag: Option<String>,

    /// Value persisted by a previous `set_language`
    pub persisted: Option<String>,

    /// Language reported by the platform (`LANG` and friends)
    pub platform: Option<String>,
}

impl LocaleSources {
    /// Name and value of the first source holding a non-blank value.
    fn first_available(&self) -> Option<(&'static str, &str)> {
        [
            ("override", self.override_tag.as_deref()),
            ("persisted", self.persisted.as_deref()),
            ("platform", self.platform.as_deref()),
        ]
        .into_iter()
        .find_map(|(source, value)| {
            value
                .filter(|v| !v.trim().is_empty())
                .map(|v| (source, v))
        })
    }
}

/// Pick the startup language.
///
/// Only the first available source is consulted; an unrecognized value there
/// normalizes to the default language rather than falling through to the
/// next source.
pub fn resolve_initial_language(sources: &LocaleSources) -> Language {
    match sources.first_available() {
        Some((source, raw)) => {
            let language = Language::normalize(Some(raw));
            debug!("Resolved language '{}' from {} value '{}'", language, source, raw);
            language
        }
        None => {
            debug!("No language source available, using default");
            Language::default_language()
        }
    }
}

/// Locale state for one running front-end session.
///
/// Owns the persistence store and the active language. Passed explicitly to
/// whatever renders text; there is no process-wide active language.
pub struct LocaleSession<S: LocaleStore> {
    store: S,
    language: Language,
}

impl<S: LocaleStore> LocaleSession<S> {
    /// Start a session, reading the persisted preference from `store`.
    pub fn start(store: S, override_tag: Option<String>, platform: Option<String>) -> Self {
        let sources = LocaleSources {
            override_tag,
            persisted: store.get(LANGUAGE_KEY),
            platform,
        };
        let language = resolve_initial_language(&sources);
        info!("Locale session started in '{}'", language);

        Self { store, language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Switch the active language and persist it.
    ///
    /// The input is normalized first, so unknown tags switch to the default
    /// language. Persistence failures are logged and otherwise ignored.
    pub fn set_language(&mut self, raw: &str) -> Language {
        let language = Language::normalize(Some(raw));
        if language != self.language {
            info!("Language changed from '{}' to '{}'", self.language, language);
        }
        self.language = language;

        if let Err(e) = self.store.set(LANGUAGE_KEY, language.code()) {
            warn!("Failed to persist language '{}': {:#}", language, e);
        }
        language
    }

    /// Translator for the current language over the built-in catalog.
    pub fn translator(&self) -> Translator<'static> {
        Translator::new(Catalog::builtin(), self.language)
    }

    /// Translator for the current language over a custom catalog.
    pub fn translator_for<'c>(&self, catalog: &'c Catalog) -> Translator<'c> {
        Translator::new(catalog, self.language)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give the store back, e.g. to simulate a restart.
    pub fn into_store(self) -> S {
        self.store
    }
}
