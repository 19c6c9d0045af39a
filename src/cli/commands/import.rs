//! Import command - initial population of a glossary from a file

use crate::cli::output;
use crate::core::error::{GlossaError, Result};
use crate::core::services::Services;
use crate::core::storage::codec;
use crate::core::types::GlossaryHandle;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the import command
#[derive(Args, Debug)]
pub struct ImportArgs {
    /// Glossary file to import (.csv, .tsv or .yml). A file named
    /// `<name>.<source>.<target>.<ext>` carries its own identity;
    /// anything else uses the active config.
    pub file: PathBuf,
}

/// Execute the import command
pub fn execute(args: ImportArgs, services: &Services) -> Result<()> {
    if !args.file.exists() {
        return Err(GlossaError::CommandFailed(format!(
            "'{}' not found.",
            args.file.display()
        )));
    }

    let handle = identity_for(&args, services)?;
    let terms = codec::load(&args.file)?;

    services.repository.import(handle.clone(), &terms)?;
    if !services.repository.is_registered(&handle.name)? {
        services.repository.register(&handle.name)?;
    }

    output::print_success(&format!(
        "Imported {} terms into {} ({} -> {})",
        terms.len(),
        handle.name,
        handle.source_language,
        handle.target_language
    ));
    Ok(())
}

fn identity_for(args: &ImportArgs, services: &Services) -> Result<GlossaryHandle> {
    let from_name = args
        .file
        .file_stem()
        .and_then(|s| s.to_str())
        .and_then(GlossaryHandle::parse_stem);
    match from_name {
        Some(handle) => Ok(handle),
        None => services.settings.require_handle(),
    }
}
