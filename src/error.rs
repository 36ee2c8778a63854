// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! Matching, navigation and the overlay lifecycle cannot fail. Only building
//! an index (duplicate ids are a caller contract violation) and loading
//! sources from disk have error paths.

use std::path::PathBuf;

/// Index construction rejected its input.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    /// Two entries would share an index-wide id. Rejected rather than
    /// deduplicated so no content silently disappears.
    #[error("duplicate entry id `{id}`: source ids must be unique within their collection")]
    DuplicateId { id: String },
}

/// Loading a site directory failed.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unsupported manifest version {found} (expected {expected})")]
    UnsupportedVersion { expected: u32, found: u32 },

    #[error("locale `{locale}` is not listed in the manifest (available: {available})")]
    UnknownLocale { locale: String, available: String },

    #[error(transparent)]
    Index(#[from] IndexError),
}
