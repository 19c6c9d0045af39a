//! Registry of glossary projects.
//!
//! The registry is a JSON file in the glossa home listing every
//! project whose glossaries participate in multi-glossary lookup.
//! Registration is by project name; each entry records the directory
//! its glossary files live in.

use crate::core::error::{GlossaError, Result};
use crate::core::home::GlossaHome;
use crate::core::storage::codec::Format;
use crate::core::storage::glossary::GlossaryStore;
use crate::core::types::{GlossaryHandle, Term};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// One registered glossary project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryEntry {
    pub name: String,
    pub glossary_dir: PathBuf,
    pub registered_at: DateTime<Utc>,
}

/// A glossary file discovered under a registered project
#[derive(Debug, Clone)]
pub struct GlossaryFile {
    pub path: PathBuf,
    pub handle: GlossaryHandle,
    pub format: Format,
}

/// Registry over the glossa home
#[derive(Debug, Clone)]
pub struct Repository {
    home: GlossaHome,
}

impl Repository {
    pub fn new(home: GlossaHome) -> Self {
        Self { home }
    }

    pub fn home(&self) -> &GlossaHome {
        &self.home
    }

    /// Register a project; its glossary dir is created eagerly so
    /// `add` has somewhere to materialize files
    pub fn register(&self, name: &str) -> Result<()> {
        let mut entries = self.load_registry()?;
        if entries.iter().any(|e| e.name == name) {
            return Err(GlossaError::GlossaryAlreadyRegistered(name.to_string()));
        }

        let glossary_dir = self.home.projects_dir().join(name).join("glossary");
        fs::create_dir_all(&glossary_dir)?;

        entries.push(RegistryEntry {
            name: name.to_string(),
            glossary_dir,
            registered_at: Utc::now(),
        });
        self.save_registry(&entries)
    }

    /// Remove a project from the registry (its files stay on disk)
    pub fn unregister(&self, name: &str) -> Result<()> {
        let mut entries = self.load_registry()?;
        let before = entries.len();
        entries.retain(|e| e.name != name);
        if entries.len() == before {
            return Err(GlossaError::GlossaryNotFound(name.to_string()));
        }
        self.save_registry(&entries)
    }

    pub fn is_registered(&self, name: &str) -> Result<bool> {
        Ok(self.load_registry()?.iter().any(|e| e.name == name))
    }

    pub fn list(&self) -> Result<Vec<RegistryEntry>> {
        self.load_registry()
    }

    /// Enumerate every glossary file under every registered project,
    /// in deterministic path order. Files whose names don't parse as
    /// `<name>.<src>.<tgt>.<ext>` are skipped.
    pub fn glossary_files(&self) -> Result<Vec<GlossaryFile>> {
        let mut files = Vec::new();

        for entry in self.load_registry()? {
            for ext in ["yml", "yaml", "csv", "tsv"] {
                let pattern = entry.glossary_dir.join(format!("*.{ext}"));
                let Some(pattern) = pattern.to_str().map(String::from) else {
                    continue;
                };
                let paths = glob::glob(&pattern).map_err(|e| {
                    GlossaError::CommandFailed(format!("bad glossary pattern: {e}"))
                })?;
                for path in paths.flatten() {
                    let Some(format) = Format::from_path(&path) else {
                        continue;
                    };
                    let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                        continue;
                    };
                    if let Some(handle) = GlossaryHandle::parse_stem(stem) {
                        files.push(GlossaryFile {
                            path,
                            handle,
                            format,
                        });
                    }
                }
            }
        }

        files.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(files)
    }

    /// Number of distinct glossary files across registered projects
    pub fn glossary_counts(&self) -> Result<usize> {
        Ok(self.glossary_files()?.len())
    }

    /// Hand an imported term sequence to the term store for initial
    /// population (normalized to the structured form)
    pub fn import(&self, handle: GlossaryHandle, terms: &[Term]) -> Result<()> {
        GlossaryStore::new(&self.home, handle).populate(terms)
    }

    fn load_registry(&self) -> Result<Vec<RegistryEntry>> {
        let path = self.home.registry_file();
        if !path.exists() {
            return Ok(Vec::new());
        }
        let contents = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    fn save_registry(&self, entries: &[RegistryEntry]) -> Result<()> {
        fs::create_dir_all(&self.home.root)?;
        let json = serde_json::to_string_pretty(entries)?;
        fs::write(self.home.registry_file(), json)?;
        Ok(())
    }
}
