//! Config command - set a project or global config value

use crate::cli::output;
use crate::core::config::Settings;
use crate::core::error::{GlossaError, Result};
use crate::core::project;
use crate::core::services::Services;
use clap::Args;
use std::env;

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Config key (glossary, source-language or target-language)
    pub key: String,

    /// Value to set
    pub value: String,

    /// Write the global config instead of the project config
    #[arg(long)]
    pub global: bool,
}

/// Execute the config command
pub fn execute(args: ConfigArgs, services: &Services) -> Result<()> {
    let path = if args.global {
        services.home.config_file()
    } else {
        let cwd = env::current_dir()?;
        let project_dir = project::find_project_dir(&cwd).map_err(|e| {
            GlossaError::CommandFailed(format!("{}\nTry 'glossa new' first.", e.message()))
        })?;
        project::project_config_file(&project_dir)
    };

    let mut settings = Settings::load(&path)?;
    settings.set(&args.key, &args.value)?;
    settings.store(&path)?;

    output::print_success("Successfully set config.");
    Ok(())
}
