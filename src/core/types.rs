//! Core data types for glossa.
//!
//! This module defines the data structures shared across the
//! storage, search and CLI layers: terms, glossary identities,
//! index entries and lookup results.

use serde::{Deserialize, Serialize};

/// A single glossary term
///
/// A term has no identity field of its own; within a glossary it is
/// identified by the `(source_term, target_term)` pair. The same
/// source term may map to several target terms (translation
/// ambiguity).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    /// Term in the source language
    pub source_term: String,

    /// Translation in the target language
    pub target_term: String,

    /// Free-form annotation, may be empty
    #[serde(default)]
    pub note: String,
}

impl Term {
    /// Build a term, normalizing a missing note to an empty string
    pub fn new(source_term: &str, target_term: &str, note: &str) -> Self {
        Self {
            source_term: source_term.to_string(),
            target_term: target_term.to_string(),
            note: note.to_string(),
        }
    }
}

/// Identity of one glossary: name plus language pair
///
/// The triple also determines the storage location of the backing
/// file (see `GlossaryStore::source_path`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlossaryHandle {
    pub name: String,
    pub source_language: String,
    pub target_language: String,
}

impl GlossaryHandle {
    pub fn new(name: &str, source_language: &str, target_language: &str) -> Self {
        Self {
            name: name.to_string(),
            source_language: source_language.to_string(),
            target_language: target_language.to_string(),
        }
    }

    /// File name of the backing file for a given extension,
    /// `<name>.<source>.<target>.<ext>`
    pub fn file_name(&self, ext: &str) -> String {
        format!(
            "{}.{}.{}.{}",
            self.name, self.source_language, self.target_language, ext
        )
    }

    /// Parse a glossary file name back into a handle.
    ///
    /// Accepts `<name>.<source>.<target>` stems; the name itself may
    /// contain dots, so the language codes are taken from the right.
    pub fn parse_stem(stem: &str) -> Option<Self> {
        let mut parts = stem.rsplitn(3, '.');
        let target_language = parts.next()?;
        let source_language = parts.next()?;
        let name = parts.next()?;
        if name.is_empty() || source_language.is_empty() || target_language.is_empty() {
            return None;
        }
        Some(Self::new(name, source_language, target_language))
    }
}

/// Denormalized projection of a term plus its owning glossary,
/// as returned by the search index.
///
/// `source_term` carries the matched span wrapped in the highlight
/// tags from [`crate::core::search::highlight`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexEntry {
    pub name: String,
    pub source_language: String,
    pub target_language: String,
    pub source_term: String,
    pub target_term: String,
    pub note: String,
}

/// Display-ready lookup hit
#[derive(Debug, Clone, Serialize)]
pub struct LookupHit {
    #[serde(flatten)]
    pub entry: IndexEntry,

    /// Whether the hit belongs to the active project's glossary
    pub in_current_glossary: bool,
}

/// Result of one lookup invocation
#[derive(Debug, Clone, Serialize)]
pub struct LookupResponse {
    pub query: String,
    pub hits: Vec<LookupHit>,

    /// Number of distinct glossary files consulted
    pub glossary_count: usize,

    /// Display width (in characters, highlight tags stripped) of the
    /// longest matched source term, for aligned rendering
    pub max_source_width: usize,
}
