// Integration tests for the glossary term store

use crate::common::{create_test_services, TestHome};
use glossa::core::types::Term;

#[test]
fn test_add_then_load_through_services() {
    let fixture = TestHome::new();
    let services = create_test_services(&fixture.home, "spec");

    let store = services.glossary_store().unwrap();
    store.add("user", "ユーザ", "").unwrap();
    store.add("user", "ユーザ", "").unwrap();

    // Adding the same pair twice yields two distinct entries
    assert_eq!(store.load().unwrap().len(), 2);
}

#[test]
fn test_update_note_preservation_rule() {
    let fixture = TestHome::new();
    let services = create_test_services(&fixture.home, "spec");
    let store = services.glossary_store().unwrap();
    store.add("go", "行く", "casual").unwrap();

    // Target unchanged, empty note supplied: the note survives
    store.update("go", "行く", "行く", "").unwrap();
    assert_eq!(store.load().unwrap()[0], Term::new("go", "行く", "casual"));

    // Target changed, empty note supplied: the empty note is adopted
    store.update("go", "行く", "向かう", "").unwrap();
    assert_eq!(store.load().unwrap()[0], Term::new("go", "向かう", ""));
}

#[test]
fn test_mutations_require_materialized_file() {
    let fixture = TestHome::new();
    let services = create_test_services(&fixture.home, "spec");
    let store = services.glossary_store().unwrap();

    assert!(store
        .update("go", "行く", "向かう", "")
        .unwrap_err()
        .is_not_found());
    assert!(store.delete("go", "行く").unwrap_err().is_not_found());
    assert!(store.delete_all("go", true).unwrap_err().is_not_found());
}

#[test]
fn test_ambiguous_delete_gate() {
    let fixture = TestHome::new();
    let services = create_test_services(&fixture.home, "spec");
    let store = services.glossary_store().unwrap();
    store.add("cat", "猫", "").unwrap();
    store.add("cat", "ネコ", "").unwrap();

    // Fails closed without force
    let err = store.delete_all("cat", false).unwrap_err();
    assert!(err.is_term_error());
    assert_eq!(store.load().unwrap().len(), 2);

    // Removes both with force
    store.delete_all("cat", true).unwrap();
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn test_store_path_is_deterministic() {
    let fixture = TestHome::new();
    let services = create_test_services(&fixture.home, "rails");
    let store = services.glossary_store().unwrap();

    let expected = fixture
        .home
        .projects_dir()
        .join("rails")
        .join("glossary")
        .join("rails.en.ja.yml");
    assert_eq!(store.source_path(), expected);
}
