//! Glossary term store.
//!
//! Owns one glossary's term list and the mutation operations over
//! it. Every operation loads the full term sequence, mutates it in
//! memory and rewrites the file; order is preserved by in-place
//! replace and remove. The store never touches the search index;
//! index synchronization is the lookup service's responsibility.

use crate::core::error::{GlossaError, Result};
use crate::core::home::GlossaHome;
use crate::core::storage::codec;
use crate::core::types::{GlossaryHandle, Term};
use std::fs;
use std::path::PathBuf;

/// One glossary's backing store
#[derive(Debug, Clone)]
pub struct GlossaryStore {
    handle: GlossaryHandle,
    projects_root: PathBuf,
}

impl GlossaryStore {
    pub fn new(home: &GlossaHome, handle: GlossaryHandle) -> Self {
        Self {
            handle,
            projects_root: home.projects_dir(),
        }
    }

    pub fn handle(&self) -> &GlossaryHandle {
        &self.handle
    }

    /// Deterministic storage path:
    /// `{projects}/{name}/glossary/{name}.{src}.{tgt}.yml`
    pub fn source_path(&self) -> PathBuf {
        self.projects_root
            .join(&self.handle.name)
            .join("glossary")
            .join(self.handle.file_name("yml"))
    }

    /// Whether the backing file has materialized yet.
    ///
    /// A glossary starts with no file and creates it lazily on the
    /// first `add`.
    pub fn exists(&self) -> bool {
        self.source_path().exists()
    }

    /// Load the current term sequence (absent file reads as empty)
    pub fn load(&self) -> Result<Vec<Term>> {
        codec::load_as(&self.source_path(), codec::Format::Yaml)
    }

    /// Append a new term, creating the backing file if absent.
    ///
    /// Duplicates are allowed: adding the same pair twice yields two
    /// entries. File-system failures surface as `GlossaryNotFound`
    /// carrying the cause; a corrupt file still reports as a YAML
    /// parse error.
    pub fn add(&self, source_term: &str, target_term: &str, note: &str) -> Result<()> {
        let path = self.source_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.not_found(&e))?;
        }

        let mut terms = self.load()?;
        terms.push(Term::new(source_term, target_term, note));
        codec::dump(&path, &terms).map_err(|e| self.not_found(&e))
    }

    /// Replace the unique term matching `(source_term, target_term)`.
    ///
    /// An empty `new_target_term` means "no change". An empty note
    /// preserves the existing note only while the target term stays
    /// unchanged; changing the target adopts the empty note.
    pub fn update(
        &self,
        source_term: &str,
        target_term: &str,
        new_target_term: &str,
        note: &str,
    ) -> Result<()> {
        self.require_file()?;

        let mut terms = self.load()?;
        let index = find_term_index(&terms, source_term, target_term)
            .ok_or_else(|| self.missing_pair(source_term, target_term))?;

        terms[index] = rebuild_term(&terms[index], source_term, new_target_term, note);
        codec::dump(&self.source_path(), &terms)
    }

    /// Remove the one entry matching the exact pair
    pub fn delete(&self, source_term: &str, target_term: &str) -> Result<()> {
        self.require_file()?;

        let mut terms = self.load()?;
        let index = find_term_index(&terms, source_term, target_term)
            .ok_or_else(|| self.missing_pair(source_term, target_term))?;

        terms.remove(index);
        codec::dump(&self.source_path(), &terms)
    }

    /// Remove every entry whose source term matches.
    ///
    /// Refuses multiple matches unless `force` is set; ambiguous bulk
    /// deletion fails closed.
    pub fn delete_all(&self, source_term: &str, force: bool) -> Result<()> {
        self.require_file()?;

        let mut terms = self.load()?;
        let matches = terms
            .iter()
            .filter(|t| t.source_term == source_term)
            .count();

        if matches == 0 {
            return Err(GlossaError::TermError(format!(
                "Can't find term '{}' in '{}'",
                source_term, self.handle.name
            )));
        }

        if matches > 1 && !force {
            return Err(GlossaError::TermError(format!(
                "There are {} terms for '{}' in '{}'.\n\
                 If you really want to delete them all, run `glossa delete {} --force`\n \
                 or specify the target term: `glossa delete {} <target term>`",
                matches, source_term, self.handle.name, source_term, source_term
            )));
        }

        terms.retain(|t| t.source_term != source_term);
        codec::dump(&self.source_path(), &terms)
    }

    /// Initial population from an imported term sequence, normalized
    /// to the structured form
    pub fn populate(&self, terms: &[Term]) -> Result<()> {
        let path = self.source_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.not_found(&e))?;
        }
        codec::dump(&path, terms).map_err(|e| self.not_found(&e))
    }

    fn require_file(&self) -> Result<()> {
        if self.exists() {
            Ok(())
        } else {
            Err(GlossaError::GlossaryNotFound(self.handle.name.clone()))
        }
    }

    fn not_found(&self, cause: &dyn std::fmt::Display) -> GlossaError {
        GlossaError::GlossaryNotFound(format!("{} ({})", self.handle.name, cause))
    }

    fn missing_pair(&self, source_term: &str, target_term: &str) -> GlossaError {
        GlossaError::TermError(format!(
            "Can't find term '{}: {}' in '{}'",
            source_term, target_term, self.handle.name
        ))
    }
}

fn find_term_index(terms: &[Term], source_term: &str, target_term: &str) -> Option<usize> {
    terms
        .iter()
        .position(|t| t.source_term == source_term && t.target_term == target_term)
}

/// Rebuild a matched term for `update`.
///
/// An empty replacement target is a "no change" sentinel, not a
/// clear. An empty note is adopted only when the target term changes;
/// with the target unchanged the recorded note survives an empty
/// update.
fn rebuild_term(current: &Term, source_term: &str, new_target_term: &str, note: &str) -> Term {
    let target_term = if new_target_term.is_empty() {
        current.target_term.as_str()
    } else {
        new_target_term
    };

    let note = if note.is_empty() && target_term == current.target_term {
        current.note.as_str()
    } else {
        note
    };

    Term::new(source_term, target_term, note)
}
