//! Lookup command - ranked substring search across registered glossaries

use crate::cli::output;
use crate::core::error::Result;
use crate::core::services::Services;
use clap::Args;

/// Arguments for the lookup command
#[derive(Args, Debug)]
pub struct LookupArgs {
    /// Source term (or part of one) to look up
    pub query: String,
}

/// Execute the lookup command.
///
/// A lookup with zero hits is a normal outcome: it reports not-found
/// and exits successfully, unlike a genuine failure.
pub fn execute(args: LookupArgs, services: &Services) -> Result<()> {
    let current_glossary = services.settings.glossary.as_deref();
    let response = services
        .lookup_service()
        .lookup(&args.query, current_glossary)?;

    if response.hits.is_empty() {
        println!("source-term <{}> not found", args.query);
        return Ok(());
    }

    output::print_hits(&response);
    Ok(())
}
