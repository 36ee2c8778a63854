// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Loading a site directory: manifest, source collections, translations.
//!
//! ```text
//! site/
//! ├── manifest.json        SiteManifest
//! ├── catalog.json         [CatalogItem]
//! ├── navigation.json      [NavSection]
//! ├── articles.json        [Article]
//! └── labels/
//!     ├── en.json          nested translation object, flattened on load
//!     └── ru.json
//! ```

pub mod manifest;

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::de::DeserializeOwned;

pub use manifest::*;

use crate::error::LoadError;
use crate::index::build_index;
use crate::overlay::SearchOverlay;
use crate::quick_links::{default_quick_links, resolve_quick_links, QuickLink, ResolvedQuickLink};
use crate::sources::{ContentSources, LabelDictionary};
use crate::store::IndexStore;
use crate::types::{Locale, SearchIndex};

/// Everything read from a site directory.
#[derive(Debug, Clone)]
pub struct Site {
    pub root: PathBuf,
    pub manifest: SiteManifest,
    pub sources: ContentSources,
    labels: HashMap<String, LabelDictionary>,
    empty_labels: LabelDictionary,
}

impl Site {
    /// Read `manifest.json` and every file it names.
    pub fn load(root: impl AsRef<Path>) -> Result<Site, LoadError> {
        let root = root.as_ref().to_path_buf();
        let manifest: SiteManifest = read_json(&root.join("manifest.json"))?;
        if manifest.version != MANIFEST_VERSION {
            return Err(LoadError::UnsupportedVersion {
                expected: MANIFEST_VERSION,
                found: manifest.version,
            });
        }

        let sources = ContentSources {
            catalog: read_optional(&root, manifest.catalog.as_deref())?,
            navigation: read_optional(&root, manifest.navigation.as_deref())?,
            articles: read_optional(&root, manifest.articles.as_deref())?,
        };

        let mut labels = HashMap::new();
        for (locale, file) in &manifest.labels {
            let value: serde_json::Value = read_json(&root.join(file))?;
            labels.insert(locale.clone(), LabelDictionary::from_json(&value));
        }

        tracing::debug!(
            root = %root.display(),
            catalog = sources.catalog.len(),
            links = sources.link_count(),
            articles = sources.articles.len(),
            locales = manifest.locales.len(),
            "loaded site"
        );

        Ok(Site {
            root,
            manifest,
            sources,
            labels,
            empty_labels: LabelDictionary::new(),
        })
    }

    pub fn default_locale(&self) -> Locale {
        Locale::new(self.manifest.default_locale.clone())
    }

    /// All configured locales, in manifest order.
    pub fn locales(&self) -> Vec<Locale> {
        self.manifest.locales.iter().cloned().map(Locale::from).collect()
    }

    /// Validate a requested locale, or use the default when `None`.
    pub fn locale(&self, requested: Option<&str>) -> Result<Locale, LoadError> {
        let code = requested.unwrap_or(&self.manifest.default_locale);
        if !self.manifest.has_locale(code) {
            return Err(LoadError::UnknownLocale {
                locale: code.to_string(),
                available: self.manifest.locales.join(", "),
            });
        }
        Ok(Locale::new(code))
    }

    /// Translation dictionary for `locale`; empty when none was configured.
    pub fn labels(&self, locale: &Locale) -> &LabelDictionary {
        self.labels
            .get(locale.as_str())
            .unwrap_or(&self.empty_labels)
    }

    pub fn quick_links(&self) -> Vec<QuickLink> {
        self.manifest
            .quick_links
            .clone()
            .unwrap_or_else(default_quick_links)
    }

    pub fn resolved_quick_links(&self, locale: &Locale) -> Vec<ResolvedQuickLink> {
        resolve_quick_links(&self.quick_links(), self.labels(locale))
    }

    pub fn build_index(&self, locale: &Locale) -> Result<SearchIndex, LoadError> {
        Ok(build_index(
            &self.sources,
            locale,
            &self.default_locale(),
            self.labels(locale),
        )?)
    }

    /// Store primed with the index for `locale`.
    pub fn index_store(&self, locale: &Locale) -> Result<IndexStore, LoadError> {
        let store = IndexStore::new(self.default_locale());
        store.refresh(&self.sources, locale, self.labels(locale))?;
        Ok(store)
    }

    /// A closed overlay over the index for `locale`.
    pub fn overlay(&self, locale: &Locale) -> Result<SearchOverlay, LoadError> {
        let index = Arc::new(self.build_index(locale)?);
        Ok(SearchOverlay::new(index, self.resolved_quick_links(locale)))
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn read_optional<T: DeserializeOwned + Default>(
    root: &Path,
    file: Option<&str>,
) -> Result<T, LoadError> {
    match file {
        Some(file) => read_json(&root.join(file)),
        None => Ok(T::default()),
    }
}
