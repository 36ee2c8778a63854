//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use serde_json::{json, Value};
use unisearch::testing::{make_catalog_item, make_entry, make_index};
use unisearch::{
    build_index, Category, ContentSources, Locale, RawLabels, SearchIndex, SearchableEntry,
};

// ============================================================================
// INDEX HELPERS
// ============================================================================

pub fn build_en(sources: &ContentSources) -> SearchIndex {
    let en = Locale::new("en");
    build_index(sources, &en, &en, &RawLabels).expect("fixture ids are unique")
}

/// `n` catalog items titled `"{prefix} {i}"`.
pub fn numbered_catalog(prefix: &str, n: usize) -> ContentSources {
    ContentSources {
        catalog: (0..n)
            .map(|i| make_catalog_item(&i.to_string(), &format!("{} {}", prefix, i), ""))
            .collect(),
        ..Default::default()
    }
}

/// Titles of a result bucket, for compact assertions.
pub fn titles(entries: &[SearchableEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.title.as_str()).collect()
}

/// Position of `id` in the index.
pub fn index_position(index: &SearchIndex, id: &str) -> usize {
    index
        .entries
        .iter()
        .position(|e| e.id == id)
        .unwrap_or_else(|| panic!("{} not in index", id))
}

/// An index with `per_category` entries per category, all titled "match N".
pub fn overflowing_index(per_category: usize) -> SearchIndex {
    let mut entries = Vec::new();
    for category in Category::ALL {
        for i in 0..per_category {
            entries.push(make_entry(
                &i.to_string(),
                &format!("match {}", i),
                "",
                category,
            ));
        }
    }
    make_index(entries)
}

// ============================================================================
// SITE DIRECTORY FIXTURES
// ============================================================================

fn write_json(dir: &Path, name: &str, value: &Value) {
    if let Some(parent) = dir.join(name).parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(dir.join(name), serde_json::to_string_pretty(value).unwrap()).unwrap();
}

/// A two-locale (ru default, en) site with one program, one link and one
/// article, plus label files.
pub fn write_sample_site(dir: &Path) {
    write_json(
        dir,
        "manifest.json",
        &json!({
            "version": 1,
            "defaultLocale": "ru",
            "locales": ["ru", "en"],
            "catalog": "catalog.json",
            "navigation": "navigation.json",
            "articles": "articles.json",
            "labels": {"ru": "labels/ru.json", "en": "labels/en.json"}
        }),
    );
    write_json(
        dir,
        "catalog.json",
        &json!([
            {
                "id": "mining",
                "name": {"ru": "Горное дело", "en": "Mining Engineering"},
                "description": {"ru": "Бакалавриат"}
            }
        ]),
    );
    write_json(
        dir,
        "navigation.json",
        &json!([
            {
                "title": "nav.applicants",
                "columns": [
                    {"title": "nav.admission", "links": [
                        {"label": "nav.rules", "href": "/admission/rules"}
                    ]}
                ]
            }
        ]),
    );
    write_json(
        dir,
        "articles.json",
        &json!([
            {
                "id": "open-doors",
                "title": {"ru": "День открытых дверей", "en": "Open Doors Day"},
                "excerpt": {"en": "join us"},
                "href": "/news/2024/open-doors"
            }
        ]),
    );
    write_json(
        dir,
        "labels/ru.json",
        &json!({
            "nav": {"applicants": "Абитуриентам", "admission": "Приём", "rules": "Правила приёма"},
            "search": {"quick": {"admission": "Поступление"}}
        }),
    );
    write_json(
        dir,
        "labels/en.json",
        &json!({
            "nav": {"applicants": "Applicants", "admission": "Admission", "rules": "Admission rules"}
        }),
    );
}

/// Overwrite one file of a site written by [`write_sample_site`].
pub fn write_site_file(dir: &Path, name: &str, value: &Value) {
    write_json(dir, name, value);
}
