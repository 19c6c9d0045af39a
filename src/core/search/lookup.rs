//! Lookup service.
//!
//! Coordinates index freshness and query shaping for the `lookup`
//! operation: repopulates the term index from the current on-disk
//! state of every registered glossary, runs the query, and shapes the
//! hits for display.

use crate::core::error::Result;
use crate::core::repository::Repository;
use crate::core::search::highlight::strip_tags;
use crate::core::search::index::TermIndex;
use crate::core::storage::codec;
use crate::core::types::{LookupHit, LookupResponse};

/// Lookup coordinator over the registered glossaries
pub struct LookupService<'a> {
    repository: &'a Repository,
}

impl<'a> LookupService<'a> {
    pub fn new(repository: &'a Repository) -> Self {
        Self { repository }
    }

    /// Run one lookup.
    ///
    /// The index is dropped and repopulated from every registered
    /// glossary file first, so deleted terms and unregistered
    /// glossaries leave no stale hits; correctness over speed. Zero
    /// hits are a normal outcome, not an error.
    ///
    /// `current_glossary` is the active project's glossary name from
    /// config; hits from it are flagged so the renderer can
    /// differentiate them when more than one glossary is registered.
    pub fn lookup(&self, query: &str, current_glossary: Option<&str>) -> Result<LookupResponse> {
        let files = self.repository.glossary_files()?;
        let glossary_count = files.len();

        let entries = TermIndex::with_open(&self.repository.home().db_dir(), |index| {
            index.recreate()?;
            for file in &files {
                let terms = codec::load_as(&file.path, file.format)?;
                index.index_glossary(
                    &terms,
                    &file.handle.name,
                    &file.handle.source_language,
                    &file.handle.target_language,
                )?;
            }
            index.commit()?;
            index.lookup(query)
        })?;

        let max_source_width = entries
            .iter()
            .map(|entry| strip_tags(&entry.source_term).chars().count())
            .max()
            .unwrap_or(0);

        let hits = entries
            .into_iter()
            .map(|entry| LookupHit {
                in_current_glossary: current_glossary == Some(entry.name.as_str()),
                entry,
            })
            .collect();

        Ok(LookupResponse {
            query: query.to_string(),
            hits,
            glossary_count,
            max_source_width,
        })
    }
}
