//! Test helpers shared across integration tests

use glossa::core::config::Settings;
use glossa::core::home::GlossaHome;
use glossa::core::services::Services;
use glossa::core::types::{GlossaryHandle, Term};

/// Build services with an explicit glossary identity so ambient
/// project/global config cannot leak into tests
pub fn create_test_services(home: &GlossaHome, glossary: &str) -> Services {
    let overrides = Settings {
        glossary: Some(glossary.to_string()),
        source_language: Some("en".to_string()),
        target_language: Some("ja".to_string()),
    };
    Services::new(home.clone(), &overrides).expect("failed to create services")
}

/// Register a glossary and populate it with the given terms
pub fn seed_glossary(services: &Services, name: &str, entries: &[(&str, &str, &str)]) {
    services
        .repository
        .register(name)
        .expect("failed to register glossary");
    services
        .repository
        .import(GlossaryHandle::new(name, "en", "ja"), &terms(entries))
        .expect("failed to populate glossary");
}

/// Build a term list from (source, target, note) tuples
pub fn terms(entries: &[(&str, &str, &str)]) -> Vec<Term> {
    entries
        .iter()
        .map(|(source, target, note)| Term::new(source, target, note))
        .collect()
}
