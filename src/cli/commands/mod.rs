//! CLI command implementations, one module per subcommand

pub mod add;
pub mod completions;
pub mod config;
pub mod delete;
pub mod import;
pub mod lookup;
pub mod new;
pub mod register;
pub mod update;

pub use add::AddArgs;
pub use completions::CompletionsArgs;
pub use config::ConfigArgs;
pub use delete::DeleteArgs;
pub use import::ImportArgs;
pub use lookup::LookupArgs;
pub use new::NewArgs;
pub use update::UpdateArgs;
