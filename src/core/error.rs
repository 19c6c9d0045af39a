//! Error types and error handling for glossa.
//!
//! This module defines the error types used throughout the
//! application. The CLI adapter renders these as user-facing
//! messages; raw backtraces never reach the terminal.

use thiserror::Error;

/// Result type alias for glossa operations
pub type Result<T> = std::result::Result<T, GlossaError>;

/// Main error type for glossa
#[derive(Error, Debug)]
pub enum GlossaError {
    #[error("glossary not found: {0}")]
    GlossaryNotFound(String),

    #[error("{0}")]
    TermError(String),

    #[error("glossary already registered: {0}")]
    GlossaryAlreadyRegistered(String),

    #[error("{0}")]
    CommandFailed(String),

    #[error("index error: {0}")]
    IndexError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl GlossaError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a "not found" type error
    pub fn is_not_found(&self) -> bool {
        matches!(self, GlossaError::GlossaryNotFound(_))
    }

    /// Check if this is a term-level error (missing pair or ambiguous delete)
    pub fn is_term_error(&self) -> bool {
        matches!(self, GlossaError::TermError(_))
    }

    /// Check if this is a usage error (missing config value, no project marker)
    pub fn is_command_failed(&self) -> bool {
        matches!(self, GlossaError::CommandFailed(_))
    }
}
