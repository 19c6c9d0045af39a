//! Unified service container for glossa
//!
//! Wires the home directory, the merged settings for this invocation
//! and the registry together for the command layer.

use crate::core::config::{self, Settings};
use crate::core::error::Result;
use crate::core::home::GlossaHome;
use crate::core::repository::Repository;
use crate::core::search::lookup::LookupService;
use crate::core::storage::glossary::GlossaryStore;

/// Per-invocation services
#[derive(Debug, Clone)]
pub struct Services {
    /// Resolved glossa home
    pub home: GlossaHome,

    /// Settings merged as CLI flags > project config > global config
    pub settings: Settings,

    /// Registry of glossary projects
    pub repository: Repository,
}

impl Services {
    /// Create services for one invocation
    pub fn new(home: GlossaHome, overrides: &Settings) -> Result<Self> {
        home.ensure_dirs_exist()?;
        let settings = config::load_merged(&home, overrides)?;
        let repository = Repository::new(home.clone());
        Ok(Self {
            home,
            settings,
            repository,
        })
    }

    /// Term store for the active glossary (requires a complete
    /// glossary identity in the merged settings)
    pub fn glossary_store(&self) -> Result<GlossaryStore> {
        Ok(GlossaryStore::new(&self.home, self.settings.require_handle()?))
    }

    /// Lookup service over the registered glossaries
    pub fn lookup_service(&self) -> LookupService<'_> {
        LookupService::new(&self.repository)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    #[serial]
    fn test_services_creation() {
        let temp = TempDir::new().unwrap();
        let home = GlossaHome::at(temp.path().join("home"));

        let services = Services::new(home.clone(), &Settings::default()).unwrap();

        assert!(home.projects_dir().is_dir());
        assert!(services.repository.list().unwrap().is_empty());
    }

    #[test]
    #[serial]
    fn test_cli_overrides_reach_settings() {
        let temp = TempDir::new().unwrap();
        let home = GlossaHome::at(temp.path().join("home"));

        let overrides = Settings {
            glossary: Some("rails".to_string()),
            source_language: Some("en".to_string()),
            target_language: Some("ja".to_string()),
        };
        let services = Services::new(home, &overrides).unwrap();

        let store = services.glossary_store().unwrap();
        assert_eq!(store.handle().name, "rails");
    }
}
