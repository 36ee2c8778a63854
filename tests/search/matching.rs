//! Tests for the substring matching predicate.

use crate::common::{build_en, titles};
use unisearch::testing::{make_catalog_item, make_entry, make_index, sample_index};
use unisearch::{match_query, Category, ContentSources, GroupedResults};

#[test]
fn test_min_matches_only_mining() {
    let results = match_query(&sample_index(), "min");
    assert_eq!(titles(&results.catalog), vec!["Mining Engineering"]);
    assert!(results.pages.is_empty());
    assert!(results.news.is_empty());
    assert_eq!(results.len(), 1);
}

#[test]
fn test_match_is_case_insensitive() {
    let index = sample_index();
    assert_eq!(match_query(&index, "MIN"), match_query(&index, "min"));
    assert_eq!(match_query(&index, "mEtAl").count(Category::Catalog), 1);
}

#[test]
fn test_query_is_trimmed() {
    let index = sample_index();
    assert_eq!(match_query(&index, "  min \t"), match_query(&index, "min"));
}

#[test]
fn test_blank_query_matches_nothing() {
    let index = sample_index();
    assert!(match_query(&index, "").is_empty());
    assert!(match_query(&index, "   ").is_empty());
}

#[test]
fn test_description_participates_in_matching() {
    // "join" appears only in the article excerpt
    let results = match_query(&sample_index(), "join");
    assert_eq!(titles(&results.news), vec!["Open Doors Day"]);

    // "apply" appears only in the navigation description
    let results = match_query(&sample_index(), "apply");
    assert_eq!(titles(&results.pages), vec!["Admission"]);
}

#[test]
fn test_substring_without_word_boundary() {
    // "urgy" is in the middle of nothing but the end of "Metallurgy"
    let results = match_query(&sample_index(), "urgy");
    assert_eq!(titles(&results.catalog), vec!["Metallurgy"]);
    let results = match_query(&sample_index(), "ng eng");
    assert_eq!(titles(&results.catalog), vec!["Mining Engineering"]);
}

#[test]
fn test_target_does_not_participate() {
    let results = match_query(&sample_index(), "/admission");
    assert!(results.is_empty());
}

#[test]
fn test_cyrillic_case_folding() {
    let index = make_index(vec![
        make_entry("1", "Горное дело", "", Category::Catalog),
        make_entry("2", "Металлургия", "", Category::Catalog),
    ]);
    let results = match_query(&index, "ГОРН");
    assert_eq!(titles(&results.catalog), vec!["Горное дело"]);
}

#[test]
fn test_no_matches_is_empty_not_error() {
    let results = match_query(&sample_index(), "zzzz");
    assert_eq!(results, GroupedResults::default());
}

#[test]
fn test_empty_sources_match_nothing() {
    let index = build_en(&ContentSources::default());
    assert!(index.is_empty());
    assert!(match_query(&index, "a").is_empty());
}

#[test]
fn test_matching_is_deterministic() {
    let sources = ContentSources {
        catalog: (0..20)
            .map(|i| make_catalog_item(&i.to_string(), &format!("Program {}", i), ""))
            .collect(),
        ..Default::default()
    };
    let a = match_query(&build_en(&sources), "program");
    let b = match_query(&build_en(&sources), "program");
    assert_eq!(a, b);
}
