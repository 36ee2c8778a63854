//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use std::sync::Arc;

use crate::index::build_index;
use crate::overlay::SearchOverlay;
use crate::quick_links::{default_quick_links, resolve_quick_links};
use crate::sources::{
    Article, CatalogItem, ContentSources, LocalizedText, NavColumn, NavLink, NavSection, RawLabels,
};
use crate::types::{Category, Locale, SearchIndex, SearchableEntry, SourceVersion};

/// English-only localized text.
pub fn en(text: &str) -> LocalizedText {
    LocalizedText::new().with("en", text)
}

pub fn make_catalog_item(id: &str, name: &str, description: &str) -> CatalogItem {
    CatalogItem {
        id: id.to_string(),
        name: en(name),
        description: en(description),
        href: None,
    }
}

pub fn make_article(id: &str, title: &str, excerpt: &str) -> Article {
    Article {
        id: id.to_string(),
        title: en(title),
        excerpt: en(excerpt),
        href: None,
    }
}

/// A section with one untitled column holding `links` as (label, href).
pub fn make_section(title: &str, links: &[(&str, &str)]) -> NavSection {
    NavSection {
        title: title.to_string(),
        columns: vec![NavColumn {
            title: String::new(),
            links: links
                .iter()
                .map(|(label, href)| NavLink {
                    label: label.to_string(),
                    href: href.to_string(),
                })
                .collect(),
        }],
    }
}

/// Create an entry directly, bypassing the builder.
pub fn make_entry(id: &str, title: &str, description: &str, category: Category) -> SearchableEntry {
    SearchableEntry {
        id: format!("{}{}", category.id_prefix(), id),
        title: title.to_string(),
        description: description.to_string(),
        target: format!("/{}/{}", category, id),
        category,
    }
}

pub fn make_index(entries: Vec<SearchableEntry>) -> SearchIndex {
    SearchIndex {
        locale: Locale::new("en"),
        version: SourceVersion::default(),
        entries,
    }
}

/// Two programs, one navigation link, one article.
///
/// - catalog: "Mining Engineering", "Metallurgy"
/// - pages: "Admission" (description "Apply")
/// - news: "Open Doors Day" (excerpt "join us")
pub fn sample_sources() -> ContentSources {
    ContentSources {
        catalog: vec![
            make_catalog_item("mining", "Mining Engineering", ""),
            make_catalog_item("metallurgy", "Metallurgy", ""),
        ],
        navigation: vec![make_section("Apply", &[("Admission", "/admission")])],
        articles: vec![make_article("open-doors", "Open Doors Day", "join us")],
    }
}

pub fn sample_index() -> SearchIndex {
    build_index(
        &sample_sources(),
        &Locale::new("en"),
        &Locale::new("en"),
        &RawLabels,
    )
    .expect("sample sources have unique ids")
}

/// A closed overlay over [`sample_index`] with the default quick links.
pub fn sample_overlay() -> SearchOverlay {
    SearchOverlay::new(
        Arc::new(sample_index()),
        resolve_quick_links(&default_quick_links(), &RawLabels),
    )
}
