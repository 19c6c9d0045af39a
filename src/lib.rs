//! Glossa - bilingual glossary manager
//!
//! A command-line tool for maintaining bilingual terminology
//! glossaries: ordered lists of (source term, target term, note)
//! triples scoped to a named glossary and a language pair, with
//! substring term lookup across every registered glossary.
//!
//! # Architecture
//!
//! The codebase is organized into two main modules:
//!
//! - **core**: Domain logic (interface-agnostic)
//!   - config, error, types, home, project
//!   - storage (term codec, glossary term store)
//!   - search (term index, highlighter, lookup service)
//!   - repository (registry of glossary projects)
//!
//! - **cli**: clap adapter (depends on core)
//!   - commands, output
//!
//! The glossary files are the system of record; the search index is
//! a rebuildable cache repopulated before every lookup.

// Core domain logic (interface-agnostic)
pub mod core;

// CLI adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use crate::core::config::Settings;
pub use crate::core::error::{GlossaError, Result};
pub use crate::core::services::Services;
pub use crate::core::types::*;
