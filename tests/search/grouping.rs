//! Tests for per-category buckets, the cap and flat order.

use crate::common::{build_en, index_position, numbered_catalog, overflowing_index, titles};
use unisearch::testing::{make_article, make_catalog_item, sample_index};
use unisearch::{match_query, refine, Category, ContentSources, CAP};

#[test]
fn test_query_a_populates_every_category() {
    let results = match_query(&sample_index(), "a");
    assert_eq!(titles(&results.catalog), vec!["Metallurgy"]);
    assert_eq!(titles(&results.pages), vec!["Admission"]);
    assert_eq!(titles(&results.news), vec!["Open Doors Day"]);

    let flat: Vec<Category> = results.flat_order().iter().map(|e| e.category).collect();
    assert_eq!(flat, vec![Category::Catalog, Category::Pages, Category::News]);
}

#[test]
fn test_bucket_is_capped_at_five() {
    let index = build_en(&numbered_catalog("Program", 12));
    let results = match_query(&index, "program");
    assert_eq!(results.catalog.len(), CAP);
    assert_eq!(
        titles(&results.catalog),
        vec!["Program 0", "Program 1", "Program 2", "Program 3", "Program 4"]
    );
}

#[test]
fn test_count_reports_post_cap_size() {
    // 12 programs match, 5 are shown, and the count says 5
    let index = build_en(&numbered_catalog("Program", 12));
    let results = match_query(&index, "program");
    assert_eq!(results.count(Category::Catalog), 5);
}

#[test]
fn test_cap_applies_per_category() {
    let results = match_query(&overflowing_index(8), "match");
    for category in Category::ALL {
        assert_eq!(results.count(category), CAP);
    }
    assert_eq!(results.len(), 3 * CAP);
}

#[test]
fn test_full_bucket_does_not_starve_others() {
    let mut sources = numbered_catalog("Open", 9);
    sources.articles.push(make_article("a1", "Open Doors Day", ""));
    let results = match_query(&build_en(&sources), "open");
    assert_eq!(results.catalog.len(), CAP);
    assert_eq!(titles(&results.news), vec!["Open Doors Day"]);
}

#[test]
fn test_bucket_preserves_index_order() {
    let sources = ContentSources {
        catalog: vec![
            make_catalog_item("z", "Zeta lab", ""),
            make_catalog_item("a", "Alpha lab", ""),
            make_catalog_item("m", "Mid lab", ""),
        ],
        ..Default::default()
    };
    let index = build_en(&sources);
    let results = match_query(&index, "lab");
    assert_eq!(titles(&results.catalog), vec!["Zeta lab", "Alpha lab", "Mid lab"]);

    let positions: Vec<usize> = results
        .catalog
        .iter()
        .map(|e| index_position(&index, &e.id))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_flat_offsets() {
    let results = match_query(&sample_index(), "a");
    assert_eq!(results.flat_offset(Category::Catalog), 0);
    assert_eq!(results.flat_offset(Category::Pages), 1);
    assert_eq!(results.flat_offset(Category::News), 2);
    assert_eq!(results.flat_get(1).map(|e| e.title.as_str()), Some("Admission"));
    assert!(results.flat_get(3).is_none());
}

#[test]
fn test_empty_groups_are_skipped() {
    let results = match_query(&sample_index(), "min");
    let groups: Vec<Category> = results.non_empty_groups().map(|(c, _)| c).collect();
    assert_eq!(groups, vec![Category::Catalog]);
}

#[test]
fn test_refine_narrows_uncapped_results() {
    let index = sample_index();
    let previous = match_query(&index, "m");
    let refined = refine(&previous, "m", "min").expect("no bucket is full");
    assert_eq!(refined, match_query(&index, "min"));
}

#[test]
fn test_refine_declines_when_bucket_full() {
    let index = build_en(&numbered_catalog("Program", 12));
    let previous = match_query(&index, "program");
    assert!(refine(&previous, "program", "program 1").is_none());
}

#[test]
fn test_refine_declines_unrelated_query() {
    let index = sample_index();
    let previous = match_query(&index, "min");
    assert!(refine(&previous, "min", "met").is_none());
}
