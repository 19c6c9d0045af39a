//! Configuration management for glossa.
//!
//! Settings come from three layers, highest precedence first:
//! command-line flags, the project config (`.glossa/config.toml`)
//! and the global config (`{home}/config.toml`). Each layer is an
//! optional partial assignment of the same three keys.

use crate::core::error::{GlossaError, Result};
use crate::core::home::GlossaHome;
use crate::core::project;
use crate::core::types::GlossaryHandle;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// Partial settings, one layer of the precedence chain
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glossary: Option<String>,

    #[serde(
        default,
        rename = "source-language",
        skip_serializing_if = "Option::is_none"
    )]
    pub source_language: Option<String>,

    #[serde(
        default,
        rename = "target-language",
        skip_serializing_if = "Option::is_none"
    )]
    pub target_language: Option<String>,
}

impl Settings {
    /// Load settings from a TOML file; an absent file is an empty layer
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Write settings to a TOML file, creating parent directories
    pub fn store(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string(self)
            .map_err(|e| GlossaError::CommandFailed(format!("cannot serialize config: {e}")))?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Overlay `self` on top of `fallback`; set values win
    pub fn merged_over(&self, fallback: &Settings) -> Settings {
        Settings {
            glossary: self.glossary.clone().or_else(|| fallback.glossary.clone()),
            source_language: self
                .source_language
                .clone()
                .or_else(|| fallback.source_language.clone()),
            target_language: self
                .target_language
                .clone()
                .or_else(|| fallback.target_language.clone()),
        }
    }

    /// Set one key by its config-file name
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "glossary" => self.glossary = Some(value.to_string()),
            "source-language" => self.source_language = Some(value.to_string()),
            "target-language" => self.target_language = Some(value.to_string()),
            other => {
                return Err(GlossaError::CommandFailed(format!(
                    "unknown config key '{other}' (expected glossary, source-language or target-language)"
                )))
            }
        }
        Ok(())
    }

    /// Resolve the active glossary identity, failing with a usage hint
    /// for each missing value
    pub fn require_handle(&self) -> Result<GlossaryHandle> {
        let name = self.glossary.as_deref().ok_or_else(|| {
            GlossaError::CommandFailed("input glossary name '-g <glossary name>'".to_string())
        })?;
        let source = self.source_language.as_deref().ok_or_else(|| {
            GlossaError::CommandFailed(
                "input source-language code '-S <source-language code>'".to_string(),
            )
        })?;
        let target = self.target_language.as_deref().ok_or_else(|| {
            GlossaError::CommandFailed(
                "input target-language code '-T <target-language code>'".to_string(),
            )
        })?;
        Ok(GlossaryHandle::new(name, source, target))
    }

    /// Resolve just the glossary name (register/unregister need no languages)
    pub fn require_glossary(&self) -> Result<String> {
        self.glossary.clone().ok_or_else(|| {
            GlossaError::CommandFailed("input glossary name '-g <glossary name>'".to_string())
        })
    }
}

/// Merge the three settings layers for the current invocation.
///
/// `overrides` holds the command-line flags. The project layer is
/// discovered from the working directory and is skipped silently when
/// no `.glossa` marker exists (global-only use is valid).
pub fn load_merged(home: &GlossaHome, overrides: &Settings) -> Result<Settings> {
    let global = Settings::load(&home.config_file())?;

    let cwd = env::current_dir()?;
    let project = match project::find_project_dir(&cwd) {
        Ok(dir) => Settings::load(&project::project_config_file(&dir))?,
        Err(_) => Settings::default(),
    };

    Ok(overrides.merged_over(&project.merged_over(&global)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn settings(g: Option<&str>, s: Option<&str>, t: Option<&str>) -> Settings {
        Settings {
            glossary: g.map(String::from),
            source_language: s.map(String::from),
            target_language: t.map(String::from),
        }
    }

    #[test]
    fn test_load_absent_file_is_empty_layer() {
        let loaded = Settings::load(&PathBuf::from("/nonexistent/config.toml")).unwrap();
        assert_eq!(loaded, Settings::default());
    }

    #[test]
    fn test_store_and_load_round_trip() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.toml");

        let original = settings(Some("rails"), Some("en"), Some("ja"));
        original.store(&path).unwrap();

        let loaded = Settings::load(&path).unwrap();
        assert_eq!(loaded, original);
    }

    #[test]
    fn test_kebab_case_keys_on_disk() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.toml");

        settings(None, Some("en"), Some("ja")).store(&path).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("source-language"));
        assert!(raw.contains("target-language"));
        assert!(!raw.contains("glossary"));
    }

    #[test]
    fn test_merge_prefers_upper_layer() {
        let flags = settings(Some("cli"), None, None);
        let project = settings(Some("proj"), Some("en"), None);
        let global = settings(Some("glob"), Some("fr"), Some("ja"));

        let merged = flags.merged_over(&project.merged_over(&global));
        assert_eq!(merged.glossary.as_deref(), Some("cli"));
        assert_eq!(merged.source_language.as_deref(), Some("en"));
        assert_eq!(merged.target_language.as_deref(), Some("ja"));
    }

    #[test]
    fn test_require_handle_missing_glossary() {
        let err = settings(None, Some("en"), Some("ja"))
            .require_handle()
            .unwrap_err();
        assert!(err.is_command_failed());
        assert!(err.message().contains("-g"));
    }

    #[test]
    fn test_require_handle_missing_target() {
        let err = settings(Some("rails"), Some("en"), None)
            .require_handle()
            .unwrap_err();
        assert!(err.message().contains("-T"));
    }

    #[test]
    fn test_require_handle_complete() {
        let handle = settings(Some("rails"), Some("en"), Some("ja"))
            .require_handle()
            .unwrap();
        assert_eq!(handle, GlossaryHandle::new("rails", "en", "ja"));
    }

    #[test]
    fn test_set_rejects_unknown_key() {
        let mut s = Settings::default();
        assert!(s.set("color", "red").unwrap_err().is_command_failed());
        s.set("glossary", "rails").unwrap();
        assert_eq!(s.glossary.as_deref(), Some("rails"));
    }
}
