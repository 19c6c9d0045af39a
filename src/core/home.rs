//! Glossa home directory support
//!
//! Resolves the home directory that holds registered glossary
//! projects, the search index and the global config file, following
//! the XDG Base Directory convention on Linux/Unix systems.

use std::env;
use std::fs;
use std::path::PathBuf;

/// Home directory layout for glossa
///
/// ```text
/// {home}/
/// ├── config.toml            # global config
/// ├── registry.json          # registered glossary projects
/// ├── projects/              # glossary storage, one dir per project
/// │   └── {name}/glossary/{name}.{src}.{tgt}.yml
/// └── db/                    # search index (rebuildable cache)
/// ```
#[derive(Debug, Clone)]
pub struct GlossaHome {
    pub root: PathBuf,
}

impl GlossaHome {
    /// Resolve the home directory with proper priority order
    ///
    /// Priority order (highest to lowest):
    /// 1. Explicit GLOSSA_HOME env var
    /// 2. XDG_DATA_HOME environment variable
    /// 3. XDG default (~/.local/share/glossa)
    pub fn resolve() -> Self {
        Self {
            root: Self::resolve_root(),
        }
    }

    /// Create a home rooted at an explicit path (tests, --home flag)
    pub fn at(root: PathBuf) -> Self {
        Self { root }
    }

    fn resolve_root() -> PathBuf {
        if let Ok(dir) = env::var("GLOSSA_HOME") {
            return PathBuf::from(dir);
        }

        if let Ok(xdg) = env::var("XDG_DATA_HOME") {
            return PathBuf::from(xdg).join("glossa");
        }

        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".local")
            .join("share")
            .join("glossa")
    }

    /// Get global config file path
    pub fn config_file(&self) -> PathBuf {
        self.root.join("config.toml")
    }

    /// Get registry file path
    pub fn registry_file(&self) -> PathBuf {
        self.root.join("registry.json")
    }

    /// Get glossary storage root
    pub fn projects_dir(&self) -> PathBuf {
        self.root.join("projects")
    }

    /// Get search index directory path
    pub fn db_dir(&self) -> PathBuf {
        self.root.join("db")
    }

    /// Create the home directories if they don't exist
    pub fn ensure_dirs_exist(&self) -> std::io::Result<()> {
        fs::create_dir_all(&self.root)?;
        fs::create_dir_all(self.projects_dir())?;
        fs::create_dir_all(self.db_dir())?;
        Ok(())
    }

    /// Log the resolved paths
    pub fn log_paths(&self) {
        tracing::debug!("glossa home resolved:");
        tracing::debug!("  Root: {:?}", self.root);
        tracing::debug!("  Config file: {:?}", self.config_file());
        tracing::debug!("  Registry: {:?}", self.registry_file());
        tracing::debug!("  Projects: {:?}", self.projects_dir());
        tracing::debug!("  Index: {:?}", self.db_dir());
    }
}

impl Default for GlossaHome {
    fn default() -> Self {
        Self::resolve()
    }
}
