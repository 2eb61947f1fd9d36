//! End-to-end tests for the catalog facade: load, list, lookup

use std::io::Write;
use std::path::Path;

use coursecat::util::testing;
use coursecat::{Catalog, CatalogError};
use rstest::{fixture, rstest};
use tempfile::NamedTempFile;

#[fixture]
fn catalog() -> Catalog {
    testing::init_test_setup();
    let mut catalog = Catalog::new();
    catalog
        .load_file(Path::new("tests/resources/courses.csv"), ',')
        .expect("fixture catalog should load");
    catalog
}

// ============================================================
// Load Tests
// ============================================================

#[rstest]
fn given_fixture_file_when_loading_then_all_records_inserted(catalog: Catalog) {
    assert_eq!(catalog.len(), 8);
    assert!(!catalog.is_empty());
}

#[test]
fn given_missing_file_when_loading_then_fails_with_file_not_found() {
    testing::init_test_setup();
    let mut catalog = Catalog::new();
    let result = catalog.load_file(Path::new("tests/resources/nope.csv"), ',');

    assert!(matches!(result, Err(CatalogError::FileNotFound(_))));
    assert!(catalog.is_empty(), "failed load must leave catalog empty");
}

#[test]
fn given_file_with_malformed_lines_when_loading_then_skips_them() {
    testing::init_test_setup();
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "X1\nX1,\n,\nCS101,Intro to CS\njunk-without-delimiter\n").unwrap();

    let mut catalog = Catalog::new();
    let count = catalog.load_file(file.path(), ',').unwrap();

    assert_eq!(count, 1);
    assert_eq!(catalog.lookup("CS101").unwrap().title, "Intro to CS");
}

#[test]
fn given_two_record_source_when_loading_then_lists_in_order() {
    testing::init_test_setup();
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "CS101,Intro to CS\nCS102,Data Structures,CS101\n").unwrap();

    let mut catalog = Catalog::new();
    catalog.load_file(file.path(), ',').unwrap();

    let listed = catalog.list();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].number, "CS101");
    assert_eq!(listed[0].title, "Intro to CS");
    assert!(listed[0].prerequisites.is_empty());
    assert_eq!(listed[1].number, "CS102");
    assert_eq!(listed[1].title, "Data Structures");
    assert_eq!(listed[1].prerequisites, vec!["CS101"]);
}

#[test]
fn given_alternate_delimiter_when_loading_then_parses_with_it() {
    testing::init_test_setup();
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "CS101;Intro to CS;MATH100\n").unwrap();

    let mut catalog = Catalog::new();
    catalog.load_file(file.path(), ';').unwrap();

    let course = catalog.lookup("CS101").unwrap();
    assert_eq!(course.prerequisites, vec!["MATH100"]);
}

// ============================================================
// List Tests
// ============================================================

#[rstest]
fn given_loaded_catalog_when_listing_then_order_is_non_decreasing(catalog: Catalog) {
    let numbers: Vec<_> = catalog.list().into_iter().map(|c| c.number).collect();
    let mut sorted = numbers.clone();
    sorted.sort();
    assert_eq!(numbers, sorted, "list() must be ascending by number");
}

#[rstest]
fn given_loaded_catalog_when_listing_then_first_and_last_match_fixture(catalog: Catalog) {
    let listed = catalog.list();
    assert_eq!(listed.first().unwrap().number, "CSCI100");
    assert_eq!(listed.last().unwrap().number, "MATH201");
}

#[test]
fn given_empty_catalog_when_listing_then_yields_empty_sequence() {
    testing::init_test_setup();
    let catalog = Catalog::new();
    assert!(catalog.list().is_empty());
}

// ============================================================
// Lookup Tests
// ============================================================

#[rstest]
fn given_loaded_catalog_when_looking_up_then_round_trips(catalog: Catalog) {
    let course = catalog.lookup("CSCI300").expect("CSCI300 is in the fixture");
    assert_eq!(course.title, "Introduction to Algorithms");
    assert_eq!(course.prerequisites, vec!["CSCI200", "MATH201"]);
}

#[rstest]
fn given_loaded_catalog_when_looking_up_absent_key_then_misses(catalog: Catalog) {
    assert!(catalog.lookup("CSCI999").is_none());
}

#[rstest]
fn given_case_sensitive_keys_when_looking_up_lowercase_then_misses(catalog: Catalog) {
    // Ordinal comparison, no case folding
    assert!(catalog.lookup("csci100").is_none());
}

#[test]
fn given_empty_catalog_when_looking_up_then_misses() {
    testing::init_test_setup();
    let catalog = Catalog::new();
    assert!(catalog.lookup("CS101").is_none());
}

// ============================================================
// Duplicate Key Tests
// ============================================================

#[test]
fn given_duplicate_key_in_source_when_looking_up_then_first_record_wins() {
    testing::init_test_setup();
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "B100,original title\nB100,replacement title\n").unwrap();

    let mut catalog = Catalog::new();
    let count = catalog.load_file(file.path(), ',').unwrap();

    // Both records are inserted, but the later duplicate is shadowed
    assert_eq!(count, 2);
    assert_eq!(catalog.lookup("B100").unwrap().title, "original title");
}
