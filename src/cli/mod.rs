//! CLI adapter for glossa
//!
//! Provides the command-line interface over the core glossary and
//! lookup services. This module depends on `core/` only; all domain
//! logic stays out of the command layer.

pub mod commands;
pub mod output;

use crate::core::config::Settings;
use crate::core::error::Result;
use crate::core::home::GlossaHome;
use crate::core::services::Services;
use clap::{Parser, Subcommand};

/// Glossa - bilingual glossary manager
///
/// Maintain bilingual terminology glossaries and look terms up by
/// substring match across every registered glossary.
#[derive(Parser, Debug)]
#[command(name = "glossa")]
#[command(version)]
#[command(about = "Bilingual glossary manager", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Glossary name (overrides config)
    #[arg(short = 'g', long, global = true)]
    pub glossary: Option<String>,

    /// Source language code (overrides config)
    #[arg(short = 'S', long = "source-language", global = true)]
    pub source_language: Option<String>,

    /// Target language code (overrides config)
    #[arg(short = 'T', long = "target-language", global = true)]
    pub target_language: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a .glossa project in the current directory
    New(commands::NewArgs),

    /// Add a term to the active glossary
    Add(commands::AddArgs),

    /// Update a term in the active glossary
    Update(commands::UpdateArgs),

    /// Delete a term (or every term for a source term)
    Delete(commands::DeleteArgs),

    /// Look a term up across all registered glossaries
    Lookup(commands::LookupArgs),

    /// Import a glossary from a CSV/TSV/YAML file
    Import(commands::ImportArgs),

    /// Register the current project's glossary
    Register,

    /// Unregister the current project's glossary
    Unregister,

    /// Set a config value (project by default, global with --global)
    Config(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  glossa completions bash > ~/.local/share/bash-completion/completions/glossa
    ///   zsh:   glossa completions zsh > ~/.zfunc/_glossa
    ///   fish:  glossa completions fish > ~/.config/fish/completions/glossa.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub fn run(cli: Cli) -> Result<()> {
    // Handle completions early (doesn't need services)
    let command = match cli.command {
        Commands::Completions(args) => return commands::completions::execute(args),
        command => command,
    };

    let home = GlossaHome::resolve();
    home.log_paths();

    let overrides = Settings {
        glossary: cli.glossary,
        source_language: cli.source_language,
        target_language: cli.target_language,
    };
    let services = Services::new(home, &overrides)?;

    match command {
        Commands::New(args) => commands::new::execute(args, &services),
        Commands::Add(args) => commands::add::execute(args, &services),
        Commands::Update(args) => commands::update::execute(args, &services),
        Commands::Delete(args) => commands::delete::execute(args, &services),
        Commands::Lookup(args) => commands::lookup::execute(args, &services),
        Commands::Import(args) => commands::import::execute(args, &services),
        Commands::Register => commands::register::execute_register(&services),
        Commands::Unregister => commands::register::execute_unregister(&services),
        Commands::Config(args) => commands::config::execute(args, &services),
        Commands::Completions(_) => unreachable!(), // Handled above
    }
}
