//! Internationalization (i18n) module for multi-language support.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for the eight supported languages
//! - `language`: Validated `Language` type and lenient tag normalization
//! - `catalog`: Per-language translation tables (nested, embedded JSON)
//! - `translator`: Two-stage key lookup with fallback to the key itself
//! - `store`: Persistence of the selected language
//! - `resolver`: Startup precedence chain and the `LocaleSession` state
//! - `coverage`: Missing-key and placeholder consistency report
//! - `metrics`: Lookup observability
//!
//! # Example
//!
//! ```rust,ignore
//! use agri_insights::i18n::{FileLocaleStore, LocaleSession};
//!
//! let store = FileLocaleStore::new("data/locale.json");
//! let mut session = LocaleSession::start(store, None, std::env::var("LANG").ok());
//! session.set_language("hi-IN");
//!
//! let t = session.translator();
//! println!("{}", t.translate("predictor.title"));
//! ```

mod catalog;
mod coverage;
mod language;
mod metrics;
mod registry;
mod resolver;
mod store;
mod translator;

pub use catalog::{Catalog, TranslationNode, TranslationTable};
pub use coverage::{CoverageReport, LanguageCoverage};
pub use language::Language;
pub use metrics::{LookupMetrics, MetricsReport};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use resolver::{resolve_initial_language, LocaleSession, LocaleSources};
pub use store::{FileLocaleStore, LocaleStore, MemoryLocaleStore, LANGUAGE_KEY};
pub use translator::Translator;
