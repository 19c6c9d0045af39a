//! Storage layer: the term record codec and the glossary term store.
//!
//! The codec transcodes term lists between the on-disk formats; the
//! store owns one glossary's mutations. The search index is a
//! separate, rebuildable cache and lives under `core::search`.
//!
//! # Glossary Storage Structure
//!
//! ```text
//! {home}/projects/
//! ├── {name}/
//! │   └── glossary/
//! │       └── {name}.{src}.{tgt}.yml
//! ```

pub mod codec;
pub mod glossary;

pub use codec::Format;
pub use glossary::GlossaryStore;
