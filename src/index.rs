// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index construction: flatten three collections into one entry list.
//!
//! ```text
//!   catalog ──────────────┐
//!   navigation (flattened)├──▶ [catalog-*, pages-*, news-*]
//!   articles ─────────────┘
//! ```
//!
//! Order is source order and is never changed afterwards. Building is pure:
//! no IO, same inputs give the same index.

use std::collections::HashSet;

use crate::contracts::{check_id_prefixes, check_ids_unique};
use crate::error::IndexError;
use crate::sources::{ContentSources, LabelResolver};
use crate::types::{Category, Locale, SearchIndex, SearchableEntry};

/// Separator between section and column titles in a navigation entry's description.
pub const NAV_PATH_SEPARATOR: &str = " / ";

/// Build the index for `locale`.
///
/// Text missing in `locale` falls back to `fallback`. Navigation label keys go
/// through `labels`. Navigation links have no ids of their own, so they are
/// identified by their position in the tree (`pages-{section}-{column}-{link}`).
///
/// Fails with [`IndexError::DuplicateId`] if a catalog or article id repeats
/// within its collection. Nothing is deduplicated.
pub fn build_index<L: LabelResolver + ?Sized>(
    sources: &ContentSources,
    locale: &Locale,
    fallback: &Locale,
    labels: &L,
) -> Result<SearchIndex, IndexError> {
    let capacity = sources.catalog.len() + sources.link_count() + sources.articles.len();
    let mut entries = Vec::with_capacity(capacity);
    let mut seen: HashSet<String> = HashSet::with_capacity(capacity);

    let mut push = |entry: SearchableEntry| -> Result<(), IndexError> {
        if !seen.insert(entry.id.clone()) {
            tracing::warn!(id = %entry.id, "rejecting index build: duplicate entry id");
            return Err(IndexError::DuplicateId { id: entry.id });
        }
        entries.push(entry);
        Ok(())
    };

    for item in &sources.catalog {
        push(SearchableEntry {
            id: format!("{}{}", Category::Catalog.id_prefix(), item.id),
            title: item.name.resolve(locale, fallback).to_string(),
            description: item.description.resolve(locale, fallback).to_string(),
            target: item.target(),
            category: Category::Catalog,
        })?;
    }

    for (s, section) in sources.navigation.iter().enumerate() {
        let section_title = labels.resolve(&section.title);
        for (c, column) in section.columns.iter().enumerate() {
            let column_title = if column.title.is_empty() {
                None
            } else {
                Some(labels.resolve(&column.title))
            };
            let description = nav_description(&section_title, column_title.as_deref());
            for (l, link) in column.links.iter().enumerate() {
                push(SearchableEntry {
                    id: format!("{}{}-{}-{}", Category::Pages.id_prefix(), s, c, l),
                    title: labels.resolve(&link.label).into_owned(),
                    description: description.clone(),
                    target: link.href.clone(),
                    category: Category::Pages,
                })?;
            }
        }
    }

    for article in &sources.articles {
        push(SearchableEntry {
            id: format!("{}{}", Category::News.id_prefix(), article.id),
            title: article.title.resolve(locale, fallback).to_string(),
            description: article.excerpt.resolve(locale, fallback).to_string(),
            target: article.target(),
            category: Category::News,
        })?;
    }

    check_ids_unique(&entries);
    check_id_prefixes(&entries);

    let index = SearchIndex {
        locale: locale.clone(),
        version: sources.fingerprint(),
        entries,
    };

    tracing::debug!(
        locale = %index.locale,
        version = %index.version,
        catalog = index.count(Category::Catalog),
        pages = index.count(Category::Pages),
        news = index.count(Category::News),
        "built search index"
    );

    Ok(index)
}

fn nav_description(section: &str, column: Option<&str>) -> String {
    match column {
        Some(column) if !section.is_empty() => {
            format!("{}{}{}", section, NAV_PATH_SEPARATOR, column)
        }
        Some(column) => column.to_string(),
        None => section.to_string(),
    }
}
