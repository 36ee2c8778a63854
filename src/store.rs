// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Snapshot publication for rebuilt indexes.
//!
//! The index is rebuilt when the locale, a source collection or the label
//! table changes and is
//! read-only in between. `IndexStore` builds the replacement completely, then
//! swaps one `Arc` under the write lock. A reader that cloned the previous
//! snapshot keeps a consistent view of it; no reader ever sees a partly
//! built index.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::IndexError;
use crate::index::build_index;
use crate::sources::{ContentSources, LabelResolver};
use crate::types::{Locale, SearchIndex, SourceVersion};

/// Did [`IndexStore::refresh`] rebuild?
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refresh {
    Rebuilt,
    Unchanged,
}

/// What a published snapshot was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
struct BuildKey {
    locale: Locale,
    sources: SourceVersion,
    labels: u32,
}

struct Published {
    index: Arc<SearchIndex>,
    /// `None` until `refresh` has built something, and after `publish`.
    key: Option<BuildKey>,
}

/// Holder of the current index snapshot.
pub struct IndexStore {
    fallback: Locale,
    current: RwLock<Published>,
}

impl IndexStore {
    /// Start with an empty index for `fallback` (the site's default locale).
    pub fn new(fallback: Locale) -> Self {
        let empty = Arc::new(SearchIndex::empty(fallback.clone()));
        IndexStore {
            fallback,
            current: RwLock::new(Published {
                index: empty,
                key: None,
            }),
        }
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> Arc<SearchIndex> {
        Arc::clone(&self.current.read().index)
    }

    pub fn fallback_locale(&self) -> &Locale {
        &self.fallback
    }

    /// Rebuild unless the published snapshot was built from exactly this
    /// locale, these sources and these labels. On error the previous
    /// snapshot stays published.
    pub fn refresh<L: LabelResolver + ?Sized>(
        &self,
        sources: &ContentSources,
        locale: &Locale,
        labels: &L,
    ) -> Result<Refresh, IndexError> {
        let key = BuildKey {
            locale: locale.clone(),
            sources: sources.fingerprint(),
            labels: labels.fingerprint(),
        };
        if self.current.read().key.as_ref() == Some(&key) {
            return Ok(Refresh::Unchanged);
        }

        let rebuilt = Arc::new(build_index(sources, locale, &self.fallback, labels)?);
        tracing::debug!(
            locale = %rebuilt.locale,
            version = %rebuilt.version,
            labels = key.labels,
            entries = rebuilt.len(),
            "publishing index snapshot"
        );
        *self.current.write() = Published {
            index: rebuilt,
            key: Some(key),
        };
        Ok(Refresh::Rebuilt)
    }

    /// Publish an already built index. The next `refresh` rebuilds.
    pub fn publish(&self, index: SearchIndex) {
        *self.current.write() = Published {
            index: Arc::new(index),
            key: None,
        };
    }
}
