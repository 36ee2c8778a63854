// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Inbound content collections.
//!
//! Three collections feed the index: the program catalog, the navigation
//! tree, and the article list. Catalog items and articles carry their text
//! in every locale; navigation labels are keys resolved through a
//! [`LabelResolver`].

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::io;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::{Locale, SourceVersion};

// =============================================================================
// LOCALIZED TEXT
// =============================================================================

/// One string in several locales.
///
/// Stored as a `BTreeMap` so serialization (and therefore the source
/// fingerprint) does not depend on insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedText(BTreeMap<String, String>);

impl LocalizedText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, locale: impl Into<String>, text: impl Into<String>) -> Self {
        self.0.insert(locale.into(), text.into());
        self
    }

    /// Resolve for `locale`, falling back to `fallback`, then to any
    /// translation, then to the empty string.
    pub fn resolve(&self, locale: &Locale, fallback: &Locale) -> &str {
        self.0
            .get(locale.as_str())
            .or_else(|| self.0.get(fallback.as_str()))
            .or_else(|| self.0.values().next())
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// =============================================================================
// COLLECTIONS
// =============================================================================

/// An academic program in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub id: String,
    pub name: LocalizedText,
    #[serde(default)]
    pub description: LocalizedText,
    /// Explicit destination; defaults to `/catalog/{id}`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl CatalogItem {
    pub fn target(&self) -> String {
        self.href
            .clone()
            .unwrap_or_else(|| format!("/catalog/{}", self.id))
    }
}

/// A top-level navigation section (e.g. "Applicants").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavSection {
    /// Label key of the section title.
    pub title: String,
    #[serde(default)]
    pub columns: Vec<NavColumn>,
}

/// A column of links inside a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavColumn {
    /// Label key of the column heading. May be empty.
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub links: Vec<NavLink>,
}

/// A leaf link. Only leaves become searchable entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavLink {
    /// Label key, resolved through a [`LabelResolver`].
    pub label: String,
    pub href: String,
}

/// A news article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub title: LocalizedText,
    #[serde(default)]
    pub excerpt: LocalizedText,
    /// Explicit destination; defaults to `/news/{id}`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl Article {
    pub fn target(&self) -> String {
        self.href
            .clone()
            .unwrap_or_else(|| format!("/news/{}", self.id))
    }
}

/// The three collections the index is built from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSources {
    #[serde(default)]
    pub catalog: Vec<CatalogItem>,
    #[serde(default)]
    pub navigation: Vec<NavSection>,
    #[serde(default)]
    pub articles: Vec<Article>,
}

impl ContentSources {
    /// CRC32 over the canonical JSON encoding of all three collections.
    pub fn fingerprint(&self) -> SourceVersion {
        let mut writer = CrcWriter(crc32fast::Hasher::new());
        if let Err(e) = serde_json::to_writer(&mut writer, self) {
            // Cannot happen for these types (string keys only); keep the partial hash.
            tracing::warn!(error = %e, "failed to encode sources for fingerprint");
        }
        SourceVersion(writer.0.finalize())
    }

    /// Number of navigation leaf links across all sections and columns.
    pub fn link_count(&self) -> usize {
        self.navigation
            .iter()
            .flat_map(|s| &s.columns)
            .map(|c| c.links.len())
            .sum()
    }
}

struct CrcWriter(crc32fast::Hasher);

impl io::Write for CrcWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// =============================================================================
// LABEL RESOLUTION
// =============================================================================

/// External localization lookup for navigation and quick-link labels.
pub trait LabelResolver {
    /// Display string for `key`. Unknown keys come back unchanged.
    fn resolve<'a>(&'a self, key: &'a str) -> Cow<'a, str>;

    /// Checksum of the table behind [`resolve`](Self::resolve). Resolvers
    /// whose output never changes keep the default.
    fn fingerprint(&self) -> u32 {
        0
    }
}

/// Resolver that shows every key as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawLabels;

impl LabelResolver for RawLabels {
    fn resolve<'a>(&'a self, key: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(key)
    }
}

/// Flat `key -> display string` table for one locale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelDictionary(HashMap<String, String>);

impl LabelDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Build from a translation file, flattening nested objects into
    /// dot-separated keys (`{"nav": {"home": "Home"}}` → `nav.home`).
    ///
    /// Non-string leaves (numbers, booleans) are stored in their JSON text form;
    /// nulls and arrays are skipped.
    pub fn from_json(value: &Value) -> Self {
        let mut dict = LabelDictionary::new();
        flatten_into(&mut dict.0, String::new(), value);
        dict
    }
}

fn flatten_into(out: &mut HashMap<String, String>, prefix: String, value: &Value) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten_into(out, path, child);
            }
        }
        Value::String(s) => {
            out.insert(prefix, s.clone());
        }
        Value::Number(_) | Value::Bool(_) => {
            out.insert(prefix, value.to_string());
        }
        Value::Null | Value::Array(_) => {}
    }
}

impl LabelResolver for LabelDictionary {
    fn resolve<'a>(&'a self, key: &'a str) -> Cow<'a, str> {
        match self.0.get(key) {
            Some(label) => Cow::Borrowed(label.as_str()),
            None => {
                tracing::debug!(key, "label missing from dictionary");
                Cow::Borrowed(key)
            }
        }
    }

    /// CRC32 over the entries in key order.
    fn fingerprint(&self) -> u32 {
        let mut entries: Vec<_> = self.0.iter().collect();
        entries.sort_unstable();
        let mut hasher = crc32fast::Hasher::new();
        for (key, label) in entries {
            hasher.update(key.as_bytes());
            hasher.update(&[0]);
            hasher.update(label.as_bytes());
            hasher.update(&[0]);
        }
        hasher.finalize()
    }
}

impl<R: LabelResolver + ?Sized> LabelResolver for &R {
    fn resolve<'a>(&'a self, key: &'a str) -> Cow<'a, str> {
        (**self).resolve(key)
    }

    fn fingerprint(&self) -> u32 {
        (**self).fingerprint()
    }
}
