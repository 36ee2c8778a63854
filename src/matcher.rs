// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query matching and per-category grouping.
//!
//! An entry matches when the trimmed query is a case-insensitive substring of
//! its title or its description. There is no tokenization and no ranking:
//! matches come out in index order, first come first served.
//!
//! # Grouping
//!
//! ```text
//!   index order ──▶ match? ──▶ bucket[category] (stop accepting at CAP)
//!                                   │
//!                   catalog ++ pages ++ news ──▶ flat order
//! ```
//!
//! # Counts are post-cap
//!
//! [`GroupedResults::count`] is the number of entries placed in a bucket, not
//! the number of entries that matched. A category with twelve matching
//! entries reports 5. Matches past the cap are dropped during the single
//! pass and are never counted.

use serde::Serialize;

use crate::contracts::{check_cap, check_order_preserved};
use crate::types::{Category, SearchIndex, SearchableEntry};

/// Maximum entries shown per category.
pub const CAP: usize = 5;

/// Trim surrounding whitespace. An empty result means "show quick links",
/// and [`match_query`] should not be called for it.
#[inline]
pub fn normalize_query(query: &str) -> &str {
    query.trim()
}

/// Case-insensitive form of a query or field, for substring comparison.
#[inline]
fn fold_case(value: &str) -> String {
    value.to_lowercase()
}

/// Does `entry` match an already case-folded, non-empty needle?
#[inline]
pub fn entry_matches(entry: &SearchableEntry, folded_needle: &str) -> bool {
    fold_case(&entry.title).contains(folded_needle)
        || fold_case(&entry.description).contains(folded_needle)
}

/// Matching entries bucketed by category, each bucket capped at [`CAP`].
///
/// All three buckets always exist, possibly empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupedResults {
    pub catalog: Vec<SearchableEntry>,
    pub pages: Vec<SearchableEntry>,
    pub news: Vec<SearchableEntry>,
}

impl GroupedResults {
    pub fn get(&self, category: Category) -> &[SearchableEntry] {
        match category {
            Category::Catalog => &self.catalog,
            Category::Pages => &self.pages,
            Category::News => &self.news,
        }
    }

    fn bucket_mut(&mut self, category: Category) -> &mut Vec<SearchableEntry> {
        match category {
            Category::Catalog => &mut self.catalog,
            Category::Pages => &mut self.pages,
            Category::News => &mut self.news,
        }
    }

    /// Entries placed in the bucket, i.e. the count after capping.
    pub fn count(&self, category: Category) -> usize {
        self.get(category).len()
    }

    /// Total entries across buckets. Equal to the flat order length.
    pub fn len(&self) -> usize {
        self.catalog.len() + self.pages.len() + self.news.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Catalog, then pages, then news. This is the keyboard navigation order
    /// and the render order.
    pub fn flat_order(&self) -> Vec<&SearchableEntry> {
        Category::ALL
            .iter()
            .flat_map(|c| self.get(*c).iter())
            .collect()
    }

    /// Entry at a flat position, without materializing the flat order.
    pub fn flat_get(&self, mut position: usize) -> Option<&SearchableEntry> {
        for category in Category::ALL {
            let bucket = self.get(category);
            if position < bucket.len() {
                return Some(&bucket[position]);
            }
            position -= bucket.len();
        }
        None
    }

    /// Flat position of the first entry of `category`.
    pub fn flat_offset(&self, category: Category) -> usize {
        Category::ALL
            .iter()
            .take_while(|c| **c != category)
            .map(|c| self.count(*c))
            .sum()
    }

    /// Non-empty buckets in render order.
    pub fn non_empty_groups(&self) -> impl Iterator<Item = (Category, &[SearchableEntry])> {
        Category::ALL
            .into_iter()
            .map(move |c| (c, self.get(c)))
            .filter(|(_, entries)| !entries.is_empty())
    }
}

/// Match `query` against `index` and group the hits.
///
/// The query is trimmed first. A blank query is a caller error in spirit
/// (the overlay shows quick links instead) and yields empty results.
pub fn match_query(index: &SearchIndex, query: &str) -> GroupedResults {
    let query = normalize_query(query);
    let mut results = GroupedResults::default();
    if query.is_empty() {
        return results;
    }
    let needle = fold_case(query);

    for entry in index.entries.iter() {
        let bucket = results.bucket_mut(entry.category);
        if bucket.len() >= CAP {
            continue;
        }
        if entry_matches(entry, &needle) {
            bucket.push(entry.clone());
        }
    }

    check_cap(&results);
    check_order_preserved(index, &results);

    tracing::trace!(
        query,
        catalog = results.catalog.len(),
        pages = results.pages.len(),
        news = results.news.len(),
        "matched query"
    );

    results
}

/// Narrow a previous result set for a query that extends the previous one.
///
/// When every bucket was below the cap, the previous results hold every match
/// of the shorter query, and any match of the longer query is among them, so
/// filtering them gives exactly what [`match_query`] would. Returns `None`
/// when that shortcut does not apply and a full pass is needed.
pub fn refine(
    previous: &GroupedResults,
    previous_query: &str,
    query: &str,
) -> Option<GroupedResults> {
    let previous_query = fold_case(normalize_query(previous_query));
    let needle = fold_case(normalize_query(query));
    if previous_query.is_empty() || !needle.contains(&previous_query) {
        return None;
    }
    if Category::ALL.iter().any(|c| previous.count(*c) >= CAP) {
        return None;
    }
    let keep = |bucket: &[SearchableEntry]| {
        bucket
            .iter()
            .filter(|e| entry_matches(e, &needle))
            .cloned()
            .collect::<Vec<_>>()
    };
    Some(GroupedResults {
        catalog: keep(&previous.catalog),
        pages: keep(&previous.pages),
        news: keep(&previous.news),
    })
}
