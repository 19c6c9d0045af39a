//! Delete command - remove a term pair or every term for a source term

use crate::cli::commands::update::with_setup_hint;
use crate::core::error::Result;
use crate::core::services::Services;
use clap::Args;

/// Arguments for the delete command
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Term in the source language
    pub source_term: String,

    /// Translation identifying the exact pair; omit to delete by
    /// source term alone
    pub target_term: Option<String>,

    /// Delete every match even when the source term is ambiguous
    #[arg(long)]
    pub force: bool,
}

/// Execute the delete command
pub fn execute(args: DeleteArgs, services: &Services) -> Result<()> {
    let store = services.glossary_store()?;

    match &args.target_term {
        Some(target_term) => store.delete(&args.source_term, target_term),
        None => store.delete_all(&args.source_term, args.force),
    }
    .map_err(with_setup_hint)
}
