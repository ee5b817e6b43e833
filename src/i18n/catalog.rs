//! Translation tables for every supported language.
//!
//! Tables are authored as JSON under `locales/` and embedded at compile time.
//! Each table is a tree of `TranslationNode`s: leaves are text, inner nodes
//! are named groups addressed by dot-separated paths (`predictor.title`).

use crate::i18n::{Language, LanguageRegistry};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;
use tracing::warn;

/// A single entry in a translation table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TranslationNode {
    Text(String),
    Group(BTreeMap<String, TranslationNode>),
}

/// Translation table for one language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct TranslationTable {
    entries: BTreeMap<String, TranslationNode>,
}

impl TranslationTable {
    /// Parse a table from a JSON object of strings and nested objects.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse translation table")
    }

    /// Descend through nested groups following a dot-separated path.
    ///
    /// Returns `None` as soon as a segment is missing, a segment lands on
    /// text before the path is exhausted, or the path ends on a group.
    pub fn lookup_nested(&self, key: &str) -> Option<&str> {
        let mut segments = key.split('.');
        let first = segments.next()?;
        let mut node = self.entries.get(first)?;

        for segment in segments {
            match node {
                TranslationNode::Group(children) => node = children.get(segment)?,
                TranslationNode::Text(_) => return None,
            }
        }

        match node {
            TranslationNode::Text(text) => Some(text),
            TranslationNode::Group(_) => None,
        }
    }

    /// Look the whole key up as a single top-level entry.
    pub fn lookup_flat(&self, key: &str) -> Option<&str> {
        match self.entries.get(key)? {
            TranslationNode::Text(text) => Some(text),
            TranslationNode::Group(_) => None,
        }
    }

    /// Dot-separated paths of every text leaf, in sorted order.
    pub fn keys(&self) -> Vec<String> {
        let mut keys = Vec::new();
        collect_keys(&self.entries, "", &mut keys);
        keys
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn collect_keys(entries: &BTreeMap<String, TranslationNode>, prefix: &str, out: &mut Vec<String>) {
    for (name, node) in entries {
        let path = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{}.{}", prefix, name)
        };
        match node {
            TranslationNode::Text(_) => out.push(path),
            TranslationNode::Group(children) => collect_keys(children, &path, out),
        }
    }
}

/// All translation tables, keyed by language code.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tables: HashMap<&'static str, TranslationTable>,
    empty: TranslationTable,
}

/// Built-in catalog instance (parsed lazily on first use)
static BUILTIN: OnceLock<Catalog> = OnceLock::new();

/// Embedded JSON source for each supported language.
const BUILTIN_SOURCES: &[(&str, &str)] = &[
    ("en", include_str!("../../locales/en.json")),
    ("hi", include_str!("../../locales/hi.json")),
    ("bn", include_str!("../../locales/bn.json")),
    ("te", include_str!("../../locales/te.json")),
    ("mr", include_str!("../../locales/mr.json")),
    ("ta", include_str!("../../locales/ta.json")),
    ("gu", include_str!("../../locales/gu.json")),
    ("pa", include_str!("../../locales/pa.json")),
];

impl Catalog {
    /// Get the catalog built from the embedded `locales/*.json` tables.
    ///
    /// A table that fails to parse is logged and replaced by an empty one so
    /// that lookups in that language degrade to key fallback.
    pub fn builtin() -> &'static Catalog {
        BUILTIN.get_or_init(|| {
            let mut catalog = Catalog::default();
            for (code, json) in BUILTIN_SOURCES {
                let table = TranslationTable::from_json(json).unwrap_or_else(|e| {
                    warn!("Translation table '{}' is unusable: {:#}", code, e);
                    TranslationTable::default()
                });
                catalog.insert_code(code, table);
            }
            catalog
        })
    }

    /// Build a catalog from explicit tables (languages not given get an
    /// empty table).
    pub fn from_tables(tables: impl IntoIterator<Item = (Language, TranslationTable)>) -> Self {
        let mut catalog = Catalog::default();
        for (language, table) in tables {
            catalog.tables.insert(language.code(), table);
        }
        catalog
    }

    fn insert_code(&mut self, code: &str, table: TranslationTable) {
        if let Some(config) = LanguageRegistry::get().get_by_code(code) {
            self.tables.insert(config.code, table);
        }
    }

    /// Table for a language; empty if the catalog has none for it.
    pub fn table(&self, language: Language) -> &TranslationTable {
        self.tables.get(language.code()).unwrap_or(&self.empty)
    }
}
