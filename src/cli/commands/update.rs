//! Update command - rewrite one term of the active glossary

use crate::core::error::{GlossaError, Result};
use crate::core::services::Services;
use clap::Args;

/// Arguments for the update command
#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Term in the source language
    pub source_term: String,

    /// Current translation (disambiguates the pair)
    pub target_term: String,

    /// Replacement translation (empty keeps the current one)
    pub new_target_term: String,

    /// Optional note
    pub note: Option<String>,
}

/// Execute the update command
pub fn execute(args: UpdateArgs, services: &Services) -> Result<()> {
    let store = services.glossary_store()?;
    store
        .update(
            &args.source_term,
            &args.target_term,
            &args.new_target_term,
            args.note.as_deref().unwrap_or(""),
        )
        .map_err(with_setup_hint)
}

/// A missing glossary on a mutation usually means the project was
/// never created or registered
pub(super) fn with_setup_hint(err: GlossaError) -> GlossaError {
    if err.is_not_found() {
        GlossaError::CommandFailed(format!(
            "{}\nTry 'glossa new' or 'glossa register' first.",
            err.message()
        ))
    } else {
        err
    }
}
