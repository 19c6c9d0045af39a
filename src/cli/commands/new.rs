//! New command - create a .glossa project in the current directory

use crate::cli::output;
use crate::core::config::Settings;
use crate::core::error::{GlossaError, Result};
use crate::core::project::{project_config_file, PROJECT_DIR};
use crate::core::services::Services;
use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the new command
#[derive(Args, Debug)]
pub struct NewArgs {
    /// Project (glossary) name
    pub project_name: String,

    /// Source language code
    pub source_language: String,

    /// Target language code
    pub target_language: Option<String>,

    /// Create the project without registering it
    #[arg(long)]
    pub no_register: bool,
}

/// Execute the new command
pub fn execute(args: NewArgs, services: &Services) -> Result<()> {
    let marker = Path::new(PROJECT_DIR);
    if marker.exists() {
        println!("{PROJECT_DIR} already exists.");
        return Ok(());
    }

    fs::create_dir_all(marker)?;
    let settings = Settings {
        glossary: Some(args.project_name.clone()),
        source_language: Some(args.source_language.clone()),
        target_language: args.target_language.clone(),
    };
    settings.store(&project_config_file(marker))?;

    if !args.no_register {
        match services.repository.register(&args.project_name) {
            Ok(()) => {}
            Err(GlossaError::GlossaryAlreadyRegistered(name)) => {
                println!("{name} is already registered.");
            }
            Err(e) => return Err(e),
        }
    }

    output::print_success(&format!("Successfully created {PROJECT_DIR}"));
    Ok(())
}
