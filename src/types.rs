// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the search overlay.
//!
//! Everything the overlay works with reduces to a flat list of
//! [`SearchableEntry`] values, each tagged with one of three fixed
//! [`Category`] buckets. The index is built once per (locale, source version)
//! pair and never mutated afterwards.
//!
//! # Invariants
//!
//! - **SearchableEntry**: `id` starts with `category.id_prefix()`.
//!   The prefix is what keeps ids unique across collections whose own ids collide.
//!
//! - **SearchIndex**: no two entries share an `id`, and entries appear in
//!   source order (catalog, then navigation links, then articles).
//!   Nothing ever re-sorts `entries`; grouping relies on this order for ties.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// CATEGORY
// =============================================================================

/// Which bucket an entry is grouped under.
///
/// The set is closed. The declaration order is the render order, and the
/// derived `Ord` follows it, so sorting by category gives
/// catalog → pages → news.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Catalog,
    Pages,
    News,
}

impl Category {
    /// All categories in render order.
    pub const ALL: [Category; 3] = [Category::Catalog, Category::Pages, Category::News];

    /// Lowercase name, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Catalog => "catalog",
            Category::Pages => "pages",
            Category::News => "news",
        }
    }

    /// Prefix prepended to source ids to make them unique index-wide.
    pub fn id_prefix(&self) -> &'static str {
        match self {
            Category::Catalog => "catalog-",
            Category::Pages => "pages-",
            Category::News => "news-",
        }
    }

    /// Position in render order (0, 1, 2).
    #[inline]
    pub fn ordinal(self) -> usize {
        match self {
            Category::Catalog => 0,
            Category::Pages => 1,
            Category::News => 2,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// LOCALE
// =============================================================================

/// A locale code such as `"en"` or `"kk"`.
///
/// Kept as an opaque string: the overlay never interprets it beyond equality.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locale(String);

impl Locale {
    pub fn new(code: impl Into<String>) -> Self {
        Locale(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Locale {
    fn from(code: &str) -> Self {
        Locale(code.to_string())
    }
}

impl From<String> for Locale {
    fn from(code: String) -> Self {
        Locale(code)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// SOURCE VERSION
// =============================================================================

/// Fingerprint of the source collections an index was built from.
///
/// Two builds with the same version and locale produce identical indexes,
/// which is what lets [`crate::IndexStore`] skip redundant rebuilds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceVersion(pub u32);

impl fmt::Display for SourceVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}", self.0)
    }
}

// =============================================================================
// ENTRIES AND INDEX
// =============================================================================

/// One searchable unit.
///
/// `title` and `description` are already resolved to the active locale.
/// `description` takes part in matching but is never shown as a title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchableEntry {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Navigation destination (path or URI). Opaque to the overlay.
    pub target: String,
    pub category: Category,
}

/// The immutable, ordered list of entries for one locale.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchIndex {
    pub locale: Locale,
    pub version: SourceVersion,
    pub entries: Vec<SearchableEntry>,
}

impl SearchIndex {
    /// An index with no entries. Every query against it finds nothing.
    pub fn empty(locale: Locale) -> Self {
        SearchIndex {
            locale,
            version: SourceVersion::default(),
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries contributed by one category.
    pub fn count(&self, category: Category) -> usize {
        self.entries
            .iter()
            .filter(|e| e.category == category)
            .count()
    }

    /// Look up an entry by its index-wide id.
    pub fn get(&self, id: &str) -> Option<&SearchableEntry> {
        self.entries.iter().find(|e| e.id == id)
    }
}
