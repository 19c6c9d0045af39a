//! Completions command - generate shell completion scripts

use crate::cli::Cli;
use crate::core::error::Result;
use clap::{Args, CommandFactory};
use clap_complete::Shell;

/// Arguments for the completions command
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Execute the completions command
pub fn execute(args: CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(args.shell, &mut cmd, "glossa", &mut std::io::stdout());
    Ok(())
}
