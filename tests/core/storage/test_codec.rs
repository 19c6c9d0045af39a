// Integration tests for the term record codec

use crate::common::{terms, TestHome};
use glossa::core::storage::codec::{self, Format};
use glossa::core::storage::GlossaryStore;
use glossa::core::types::{GlossaryHandle, Term};
use std::fs;

#[test]
fn test_structured_round_trip_field_for_field() {
    let fixture = TestHome::new();
    let path = fixture.home.root.join("round-trip.yml");

    let original = terms(&[
        ("user", "ユーザ", ""),
        ("go", "行く", "casual"),
        ("lock-free", "ロックフリー", "quotes: \"keep\""),
    ]);
    codec::dump(&path, &original).unwrap();

    let loaded = codec::load(&path).unwrap();
    assert_eq!(loaded, original);
}

#[test]
fn test_delimited_files_read_without_notes() {
    let fixture = TestHome::new();
    let csv_path = fixture.home.root.join("terms.csv");
    let tsv_path = fixture.home.root.join("terms.tsv");
    fs::write(&csv_path, "user,ユーザ\nshort\ngo,行く,extra\n").unwrap();
    fs::write(&tsv_path, "user\tユーザ\n").unwrap();

    let from_csv = codec::load(&csv_path).unwrap();
    assert_eq!(
        from_csv,
        terms(&[("user", "ユーザ", ""), ("go", "行く", "")])
    );

    let from_tsv = codec::load_as(&tsv_path, Format::Tsv).unwrap();
    assert_eq!(from_tsv, terms(&[("user", "ユーザ", "")]));
}

#[test]
fn test_imported_delimited_glossary_normalizes_to_structured() {
    let fixture = TestHome::new();
    let csv_path = fixture.home.root.join("drop.csv");
    fs::write(&csv_path, "cat,猫\ndog,犬\n").unwrap();

    let imported = codec::load(&csv_path).unwrap();
    let store = GlossaryStore::new(&fixture.home, GlossaryHandle::new("drop", "en", "ja"));
    store.populate(&imported).unwrap();

    // Persisted form is the structured document, not the delimited one
    assert_eq!(
        store.source_path().extension().and_then(|e| e.to_str()),
        Some("yml")
    );
    let raw = fs::read_to_string(store.source_path()).unwrap();
    assert!(raw.contains("source_term"));
    assert_eq!(store.load().unwrap(), imported);
}

#[test]
fn test_mutation_rewrites_whole_structured_file() {
    let fixture = TestHome::new();
    let store = GlossaryStore::new(&fixture.home, GlossaryHandle::new("spec", "en", "ja"));

    store.add("a", "1", "").unwrap();
    store.add("b", "2", "note").unwrap();
    store.delete("a", "1").unwrap();

    let reloaded = codec::load(&store.source_path()).unwrap();
    assert_eq!(reloaded, vec![Term::new("b", "2", "note")]);
}
