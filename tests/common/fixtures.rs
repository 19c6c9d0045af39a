//! Test fixtures: an isolated glossa home per test

use glossa::core::home::GlossaHome;
use tempfile::TempDir;

/// A glossa home rooted in a temp directory, removed on drop
pub struct TestHome {
    pub home: GlossaHome,
    _temp: TempDir,
}

impl TestHome {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("failed to create temp dir");
        let home = GlossaHome::at(temp.path().join("home"));
        home.ensure_dirs_exist().expect("failed to create home dirs");
        Self { home, _temp: temp }
    }
}

impl Default for TestHome {
    fn default() -> Self {
        Self::new()
    }
}
