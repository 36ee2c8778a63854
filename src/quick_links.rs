// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Shortcut destinations shown while the query is empty.
//!
//! Quick links are fixed. They do not come from the index and do not change
//! with search input; only their labels are localized.

use serde::{Deserialize, Serialize};

use crate::sources::LabelResolver;

/// Built-in shortcuts: (label key, target).
pub const DEFAULT_QUICK_LINKS: &[(&str, &str)] = &[
    ("search.quick.admission", "/admission"),
    ("search.quick.programs", "/catalog"),
    ("search.quick.news", "/news"),
    ("search.quick.contacts", "/contacts"),
];

/// A shortcut as configured: label key plus destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickLink {
    pub label: String,
    pub href: String,
}

impl QuickLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        QuickLink {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// A shortcut ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedQuickLink {
    pub label: String,
    pub target: String,
}

pub fn default_quick_links() -> Vec<QuickLink> {
    DEFAULT_QUICK_LINKS
        .iter()
        .map(|(label, href)| QuickLink::new(*label, *href))
        .collect()
}

/// Resolve labels for display.
pub fn resolve_quick_links<L: LabelResolver + ?Sized>(
    links: &[QuickLink],
    labels: &L,
) -> Vec<ResolvedQuickLink> {
    links
        .iter()
        .map(|link| ResolvedQuickLink {
            label: labels.resolve(&link.label).into_owned(),
            target: link.href.clone(),
        })
        .collect()
}
