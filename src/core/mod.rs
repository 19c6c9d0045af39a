//! Core domain logic (interface-agnostic)
//!
//! This module contains all business logic that is independent of
//! the command-line adapter.
//!
//! # Architecture
//!
//! - **config**: settings loading and layering (TOML)
//! - **error**: error types and Result alias
//! - **types**: domain data structures
//! - **home**: glossa home directory handling
//! - **project**: `.glossa` marker discovery
//! - **repository**: registry of glossary projects
//! - **storage**: term codec and glossary term store
//! - **search**: term index and lookup service
//! - **services**: unified service container

pub mod config;
pub mod error;
pub mod home;
pub mod project;
pub mod repository;
pub mod search;
pub mod services;
pub mod storage;
pub mod types;

// Re-export key types for convenience
pub use config::Settings;
pub use error::{GlossaError, Result};
pub use services::Services;
