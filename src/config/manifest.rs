// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use serde::Deserialize;
use std::collections::BTreeMap;

use crate::quick_links::QuickLink;

/// Manifest format understood by this build.
pub const MANIFEST_VERSION: u32 = 1;

/// `manifest.json` at the root of a site directory.
///
/// Paths are relative to the site directory.
#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SiteManifest {
    pub version: u32,
    pub default_locale: String,
    pub locales: Vec<String>,
    #[serde(default)]
    pub catalog: Option<String>,
    #[serde(default)]
    pub navigation: Option<String>,
    #[serde(default)]
    pub articles: Option<String>,
    /// Translation file per locale.
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
    /// Overrides the built-in quick links when present.
    #[serde(default)]
    pub quick_links: Option<Vec<QuickLink>>,
}

impl SiteManifest {
    pub fn has_locale(&self, locale: &str) -> bool {
        self.locales.iter().any(|l| l == locale)
    }
}
