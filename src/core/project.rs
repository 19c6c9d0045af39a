//! Project marker discovery
//!
//! A glossary project is marked by a `.glossa` directory holding the
//! project config. Commands run from anywhere inside the project
//! tree; discovery walks up from the working directory.

use crate::core::error::{GlossaError, Result};
use std::path::{Path, PathBuf};

/// Name of the project marker directory
pub const PROJECT_DIR: &str = ".glossa";

/// Find the `.glossa` directory at or above `start`.
///
/// Returns `CommandFailed` listing the searched directories when no
/// marker exists up to the filesystem root.
pub fn find_project_dir(start: &Path) -> Result<PathBuf> {
    let mut dir = start.to_path_buf();
    let mut searched = Vec::new();

    loop {
        let candidate = dir.join(PROJECT_DIR);
        if candidate.exists() {
            return Ok(candidate);
        }
        searched.push(dir.display().to_string());
        if !dir.pop() {
            return Err(GlossaError::CommandFailed(format!(
                "Can't find {} in {}",
                PROJECT_DIR,
                searched.join(", ")
            )));
        }
    }
}

/// Project config file path inside a marker directory
pub fn project_config_file(project_dir: &Path) -> PathBuf {
    project_dir.join("config.toml")
}
