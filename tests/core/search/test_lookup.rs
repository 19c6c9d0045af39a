// Integration tests for the term index and lookup service

use crate::common::{create_test_services, seed_glossary, TestHome};

#[test]
fn test_lookup_ranks_by_glossary_name_first() {
    let fixture = TestHome::new();
    let services = create_test_services(&fixture.home, "a");
    seed_glossary(&services, "b", &[("catalog", "カタログ", "")]);
    seed_glossary(&services, "a", &[("cat", "猫", "")]);

    let response = services.lookup_service().lookup("cat", Some("a")).unwrap();

    assert_eq!(response.hits.len(), 2);
    assert_eq!(response.hits[0].entry.name, "a");
    assert_eq!(response.hits[0].entry.source_term, "<em>cat</em>");
    assert_eq!(response.hits[1].entry.name, "b");
    assert_eq!(response.hits[1].entry.source_term, "<em>cat</em>alog");
}

#[test]
fn test_lookup_flags_current_glossary() {
    let fixture = TestHome::new();
    let services = create_test_services(&fixture.home, "mine");
    seed_glossary(&services, "mine", &[("cat", "猫", "")]);
    seed_glossary(&services, "theirs", &[("cat", "ネコ", "")]);

    let response = services
        .lookup_service()
        .lookup("cat", Some("mine"))
        .unwrap();

    assert_eq!(response.glossary_count, 2);
    let mine = response
        .hits
        .iter()
        .find(|h| h.entry.name == "mine")
        .unwrap();
    let theirs = response
        .hits
        .iter()
        .find(|h| h.entry.name == "theirs")
        .unwrap();
    assert!(mine.in_current_glossary);
    assert!(!theirs.in_current_glossary);
}

#[test]
fn test_lookup_not_found_is_success() {
    let fixture = TestHome::new();
    let services = create_test_services(&fixture.home, "a");
    seed_glossary(&services, "a", &[("cat", "猫", "")]);

    let response = services.lookup_service().lookup("zebra", Some("a")).unwrap();
    assert!(response.hits.is_empty());
}

#[test]
fn test_lookup_with_no_registered_glossaries() {
    let fixture = TestHome::new();
    let services = create_test_services(&fixture.home, "a");

    let response = services.lookup_service().lookup("cat", None).unwrap();
    assert_eq!(response.glossary_count, 0);
    assert!(response.hits.is_empty());
}

#[test]
fn test_index_follows_store_mutations() {
    let fixture = TestHome::new();
    let services = create_test_services(&fixture.home, "a");
    services.repository.register("a").unwrap();

    let store = services.glossary_store().unwrap();
    store.add("cat", "猫", "").unwrap();
    store.add("cat", "ネコ", "").unwrap();

    let lookup = services.lookup_service();
    assert_eq!(lookup.lookup("cat", Some("a")).unwrap().hits.len(), 2);

    // Deleted terms leave no stale index entries after repopulation
    store.delete("cat", "猫").unwrap();
    let response = lookup.lookup("cat", Some("a")).unwrap();
    assert_eq!(response.hits.len(), 1);
    assert_eq!(response.hits[0].entry.target_term, "ネコ");
}

#[test]
fn test_lookup_exactly_one_entry_per_surviving_term() {
    let fixture = TestHome::new();
    let services = create_test_services(&fixture.home, "a");
    seed_glossary(&services, "a", &[("cat", "猫", ""), ("cat", "猫", "")]);

    // Duplicate pairs in the file stay duplicates in the index, and
    // repeated lookups never accumulate extra copies
    let lookup = services.lookup_service();
    assert_eq!(lookup.lookup("cat", Some("a")).unwrap().hits.len(), 2);
    assert_eq!(lookup.lookup("cat", Some("a")).unwrap().hits.len(), 2);
}

#[test]
fn test_unregistered_glossary_disappears_from_lookup() {
    let fixture = TestHome::new();
    let services = create_test_services(&fixture.home, "a");
    seed_glossary(&services, "a", &[("cat", "猫", "")]);
    seed_glossary(&services, "b", &[("cat", "ネコ", "")]);

    let lookup = services.lookup_service();
    assert_eq!(lookup.lookup("cat", Some("a")).unwrap().hits.len(), 2);

    services.repository.unregister("b").unwrap();
    let response = lookup.lookup("cat", Some("a")).unwrap();
    assert_eq!(response.hits.len(), 1);
    assert_eq!(response.hits[0].entry.name, "a");
    assert_eq!(response.glossary_count, 1);
}

#[test]
fn test_lookup_display_width_from_longest_match() {
    let fixture = TestHome::new();
    let services = create_test_services(&fixture.home, "a");
    seed_glossary(
        &services,
        "a",
        &[("cat", "猫", ""), ("concatenate", "連結する", "")],
    );

    let response = services.lookup_service().lookup("cat", Some("a")).unwrap();
    assert_eq!(response.max_source_width, "concatenate".chars().count());
}
