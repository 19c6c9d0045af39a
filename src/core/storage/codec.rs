//! Term record codec.
//!
//! Reads a glossary's term list in one of three interchangeable
//! on-disk formats and writes the structured YAML form. Pure data
//! transcoding; duplicate policies and lookup live elsewhere.

use crate::core::error::{GlossaError, Result};
use crate::core::types::Term;
use std::fs;
use std::path::Path;

/// On-disk glossary format, resolved once from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Csv,
    Tsv,
    Yaml,
}

impl Format {
    /// Resolve the format from a path's extension
    pub fn from_path(path: &Path) -> Option<Format> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("csv") => Some(Format::Csv),
            Some("tsv") => Some(Format::Tsv),
            Some("yml") | Some("yaml") => Some(Format::Yaml),
            _ => None,
        }
    }

}

/// Load a term list, format selected by file extension
pub fn load(path: &Path) -> Result<Vec<Term>> {
    let format = Format::from_path(path).ok_or_else(|| {
        GlossaError::CommandFailed(format!(
            "unsupported glossary format: {} (expected .csv, .tsv or .yml)",
            path.display()
        ))
    })?;
    load_as(path, format)
}

/// Load a term list in an explicit format
pub fn load_as(path: &Path, format: Format) -> Result<Vec<Term>> {
    match format {
        Format::Csv => load_delimited(path, b','),
        Format::Tsv => load_delimited(path, b'\t'),
        Format::Yaml => load_yaml(path),
    }
}

/// Write the structured YAML form.
///
/// Persistence is YAML-only regardless of the format a glossary was
/// read in, so imported delimited glossaries normalize on first
/// mutation. Whole-file rewrite, no partial-write protection.
pub fn dump(path: &Path, terms: &[Term]) -> Result<()> {
    let contents = serde_yaml::to_string(terms)?;
    fs::write(path, contents)?;
    Ok(())
}

fn load_yaml(path: &Path) -> Result<Vec<Term>> {
    // An absent or empty file is an empty glossary, not an error
    if !path.exists() {
        return Ok(Vec::new());
    }
    let contents = fs::read_to_string(path)?;
    if contents.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_yaml::from_str(&contents)?)
}

fn load_delimited(path: &Path, delimiter: u8) -> Result<Vec<Term>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_path(path)?;

    let mut terms = Vec::new();
    for record in reader.records() {
        let record = record?;
        // Rows with fewer than two columns are silently skipped;
        // delimited formats do not carry notes
        if record.len() >= 2 {
            terms.push(Term::new(&record[0], &record[1], ""));
        }
    }
    Ok(terms)
}
