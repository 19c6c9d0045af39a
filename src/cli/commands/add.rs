//! Add command - append a term to the active glossary

use crate::core::error::Result;
use crate::core::services::Services;
use clap::Args;

/// Arguments for the add command
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Term in the source language
    pub source_term: String,

    /// Translation in the target language
    pub target_term: String,

    /// Optional note
    pub note: Option<String>,
}

/// Execute the add command
pub fn execute(args: AddArgs, services: &Services) -> Result<()> {
    let store = services.glossary_store()?;
    store.add(
        &args.source_term,
        &args.target_term,
        args.note.as_deref().unwrap_or(""),
    )?;

    tracing::info!(
        glossary = %store.handle().name,
        source = %args.source_term,
        "term added"
    );
    Ok(())
}
