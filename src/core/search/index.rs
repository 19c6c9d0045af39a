//! Tantivy-backed term index.
//!
//! A rebuildable index over the terms of many glossaries, supporting
//! substring lookup on `source_term` with ranked, highlighted hits.
//! The glossary files stay the system of record; this index is a
//! cache that a repopulation pass can drop and rebuild at any time.
//!
//! Substring matching uses a lowercasing bigram tokenizer: a query is
//! decomposed into the same bigrams at lookup time, candidates must
//! contain them all, and an explicit containment check removes the
//! out-of-order gram collisions the engine cannot see.

use crate::core::error::{GlossaError, Result};
use crate::core::search::highlight::{self, Highlighter};
use crate::core::types::{IndexEntry, Term};
use std::path::Path;
use tantivy::collector::DocSetCollector;
use tantivy::query::{AllQuery, BooleanQuery, Occur, Query, TermQuery};
use tantivy::schema::{
    Field, IndexRecordOption, Schema, TextFieldIndexing, TextOptions, Value, STORED, STRING,
};
use tantivy::tokenizer::{LowerCaser, NgramTokenizer, TextAnalyzer};
use tantivy::{doc, Index, IndexWriter, TantivyDocument};

/// Name of the registered source-term tokenizer
pub const TOKENIZER_NAME: &str = "term_bigram";

/// Gram size for the substring index
const GRAM_SIZE: usize = 2;

/// Writer heap (50MB, same as a small dedicated indexing process)
const WRITER_HEAP_BYTES: usize = 50_000_000;

/// Create the schema for term entries
///
/// Fields:
/// - name: owning glossary name (raw | STORED)
/// - source_language / target_language: language codes (raw | STORED)
/// - source_term: substring-searchable via bigram tokenizer (STORED)
/// - target_term / note: payload only (STORED)
fn create_schema() -> Schema {
    let mut builder = Schema::builder();

    let bigram_text = TextOptions::default()
        .set_indexing_options(
            TextFieldIndexing::default()
                .set_tokenizer(TOKENIZER_NAME)
                .set_index_option(IndexRecordOption::Basic),
        )
        .set_stored();

    builder.add_text_field("name", STRING | STORED);
    builder.add_text_field("source_language", STRING | STORED);
    builder.add_text_field("target_language", STRING | STORED);
    builder.add_text_field("source_term", bigram_text);
    builder.add_text_field("target_term", STORED);
    builder.add_text_field("note", STORED);

    builder.build()
}

/// Resolved schema fields
#[derive(Debug, Clone, Copy)]
struct TermFields {
    name: Field,
    source_language: Field,
    target_language: Field,
    source_term: Field,
    target_term: Field,
    note: Field,
}

impl TermFields {
    fn resolve(schema: &Schema) -> Result<Self> {
        let field = |name: &str| {
            schema
                .get_field(name)
                .map_err(|e| GlossaError::IndexError(format!("missing {name} field: {e}")))
        };
        Ok(Self {
            name: field("name")?,
            source_language: field("source_language")?,
            target_language: field("target_language")?,
            source_term: field("source_term")?,
            target_term: field("target_term")?,
            note: field("note")?,
        })
    }
}

/// Term index handle
///
/// Must be opened before use and closed after; `with_open` scopes a
/// unit of work and releases the backing storage on every path.
pub struct TermIndex {
    index: Index,
    writer: IndexWriter,
    fields: TermFields,
    highlighter: Highlighter,
}

impl std::fmt::Debug for TermIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TermIndex").finish_non_exhaustive()
    }
}

impl TermIndex {
    /// Open the index at `db_dir`, creating it on first use
    pub fn open(db_dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(db_dir)?;

        let index = match Index::open_in_dir(db_dir) {
            Ok(index) => index,
            Err(_) => Index::create_in_dir(db_dir, create_schema())
                .map_err(|e| GlossaError::IndexError(format!("failed to create index: {e}")))?,
        };
        register_tokenizer(&index)?;

        let fields = TermFields::resolve(&index.schema())?;
        let writer = index
            .writer(WRITER_HEAP_BYTES)
            .map_err(|e| GlossaError::IndexError(format!("failed to create writer: {e}")))?;

        Ok(Self {
            index,
            writer,
            fields,
            highlighter: Highlighter::default(),
        })
    }

    /// Run one unit of work against the index, releasing the handle
    /// afterwards including on error paths
    pub fn with_open<T, F>(db_dir: &Path, work: F) -> Result<T>
    where
        F: FnOnce(&mut TermIndex) -> Result<T>,
    {
        let mut index = Self::open(db_dir)?;
        let result = work(&mut index);
        let closed = index.close();
        match result {
            Ok(value) => {
                closed?;
                Ok(value)
            }
            Err(e) => Err(e),
        }
    }

    /// Drop every entry, leaving a clean schema for a repopulation
    /// pass (no stale entries from deleted or renamed glossaries)
    pub fn recreate(&mut self) -> Result<()> {
        self.writer
            .delete_all_documents()
            .map_err(|e| GlossaError::IndexError(format!("failed to clear index: {e}")))?;
        self.commit()
    }

    /// Insert one entry per term. Purely additive; the caller is
    /// responsible for not double-inserting.
    pub fn index_glossary(
        &mut self,
        terms: &[Term],
        name: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<()> {
        for term in terms {
            let document = doc!(
                self.fields.name => name,
                self.fields.source_language => source_language,
                self.fields.target_language => target_language,
                self.fields.source_term => term.source_term.as_str(),
                self.fields.target_term => term.target_term.as_str(),
                self.fields.note => term.note.as_str(),
            );
            self.writer
                .add_document(document)
                .map_err(|e| GlossaError::IndexError(format!("failed to add entry: {e}")))?;
        }
        Ok(())
    }

    /// Commit pending entries to the backing storage
    pub fn commit(&mut self) -> Result<()> {
        self.writer
            .commit()
            .map_err(|e| GlossaError::IndexError(format!("failed to commit: {e}")))?;
        Ok(())
    }

    /// Substring lookup on `source_term`.
    ///
    /// Hits come back sorted ascending by `(name, source_term,
    /// target_term)` under plain lexicographic comparison, with the
    /// matched span of each `source_term` wrapped in highlight tags.
    pub fn lookup(&self, query: &str) -> Result<Vec<IndexEntry>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let reader = self
            .index
            .reader()
            .map_err(|e| GlossaError::IndexError(format!("failed to create reader: {e}")))?;
        let searcher = reader.searcher();

        let candidates = searcher
            .search(&self.candidate_query(query), &DocSetCollector)
            .map_err(|e| GlossaError::IndexError(format!("lookup failed: {e}")))?;

        let mut hits = Vec::new();
        for address in candidates {
            let document: TantivyDocument = searcher
                .doc(address)
                .map_err(|e| GlossaError::IndexError(format!("failed to retrieve entry: {e}")))?;

            let source_term = extract_text(&document, self.fields.source_term);
            // Grams are unordered; only true substring matches survive
            if highlight::find_span(&source_term, query).is_none() {
                continue;
            }

            hits.push(IndexEntry {
                name: extract_text(&document, self.fields.name),
                source_language: extract_text(&document, self.fields.source_language),
                target_language: extract_text(&document, self.fields.target_language),
                source_term,
                target_term: extract_text(&document, self.fields.target_term),
                note: extract_text(&document, self.fields.note),
            });
        }

        hits.sort_by(|a, b| {
            a.name
                .cmp(&b.name)
                .then_with(|| a.source_term.cmp(&b.source_term))
                .then_with(|| a.target_term.cmp(&b.target_term))
        });

        for hit in &mut hits {
            hit.source_term = self.highlighter.execute(&hit.source_term, query);
        }
        Ok(hits)
    }

    /// Final commit and release of the backing storage handle
    pub fn close(mut self) -> Result<()> {
        self.commit()
    }

    fn candidate_query(&self, query: &str) -> Box<dyn Query> {
        let grams = bigrams(&query.to_lowercase());
        if grams.is_empty() {
            // Queries shorter than the gram size scan the stored column
            return Box::new(AllQuery);
        }

        let clauses = grams
            .into_iter()
            .map(|gram| {
                let term = tantivy::Term::from_field_text(self.fields.source_term, &gram);
                let clause: Box<dyn Query> =
                    Box::new(TermQuery::new(term, IndexRecordOption::Basic));
                (Occur::Must, clause)
            })
            .collect::<Vec<_>>();
        Box::new(BooleanQuery::new(clauses))
    }
}

fn register_tokenizer(index: &Index) -> Result<()> {
    let tokenizer = NgramTokenizer::new(GRAM_SIZE, GRAM_SIZE, false)
        .map_err(|e| GlossaError::IndexError(format!("failed to build tokenizer: {e}")))?;
    let analyzer = TextAnalyzer::builder(tokenizer).filter(LowerCaser).build();
    index.tokenizers().register(TOKENIZER_NAME, analyzer);
    Ok(())
}

fn bigrams(normalized: &str) -> Vec<String> {
    let chars: Vec<char> = normalized.chars().collect();
    if chars.len() < GRAM_SIZE {
        return Vec::new();
    }
    chars
        .windows(GRAM_SIZE)
        .map(|window| window.iter().collect())
        .collect()
}

fn extract_text(document: &TantivyDocument, field: Field) -> String {
    document
        .get_first(field)
        .and_then(|value| value.as_str())
        .unwrap_or("")
        .to_string()
}
