//! Register/unregister commands - registry membership of the current
//! project's glossary

use crate::cli::output;
use crate::core::error::{GlossaError, Result};
use crate::core::project;
use crate::core::services::Services;
use std::env;

/// Execute the register command
pub fn execute_register(services: &Services) -> Result<()> {
    // Registration is for projects; require the marker directory
    let cwd = env::current_dir()?;
    project::find_project_dir(&cwd).map_err(|e| {
        GlossaError::CommandFailed(format!("{}\nTry 'glossa new' first.", e.message()))
    })?;

    let name = services.settings.require_glossary()?;
    match services.repository.register(&name) {
        Ok(()) => {
            output::print_success(&format!("{name} is now registered to glossa."));
            Ok(())
        }
        Err(GlossaError::GlossaryAlreadyRegistered(_)) => {
            println!("{name} is already registered.");
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// Execute the unregister command
pub fn execute_unregister(services: &Services) -> Result<()> {
    let name = services.settings.require_glossary()?;
    match services.repository.unregister(&name) {
        Ok(()) => {
            output::print_success(&format!("{name} is now unregistered."));
            Ok(())
        }
        Err(GlossaError::GlossaryNotFound(_)) => {
            println!("{name} is not yet registered.");
            Ok(())
        }
        Err(e) => Err(e),
    }
}
