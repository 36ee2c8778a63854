// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search overlay's lifecycle and render model.
//!
//! ```text
//!            open()                      query edit
//!   Closed ─────────▶ Open ◀────────────────────────┐
//!     ▲      (query = "", selection = none,          │
//!     │       focus requested)                       │
//!     │                                              │
//!     └──── Escape | backdrop | activation ──── Open ┘
//! ```
//!
//! While open, the view is derived from the query alone: a blank query shows
//! quick links and never touches the index; anything else shows grouped
//! results or "nothing found". Nothing survives a close.
//!
//! The overlay holds the index as an `Arc` snapshot. [`SearchOverlay::replace_index`]
//! swaps it for a fully built one; results are re-derived against the new
//! snapshot and the selection resets.

use std::sync::Arc;

use serde::Serialize;

use crate::matcher::{match_query, normalize_query, refine, GroupedResults};
use crate::navigation::{Key, NavigationController};
use crate::quick_links::ResolvedQuickLink;
use crate::types::{Category, SearchIndex};

/// Open or closed. Quick links / results are views of `Open`, not states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlayState {
    Closed,
    Open,
}

/// Why the overlay closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CloseReason {
    Escape,
    Backdrop,
    Activated,
    /// Closed by the host (route change, toggle button).
    Host,
}

/// The result of activating an entry: where to go.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Activation {
    /// Flat-order position of the activated entry.
    pub position: usize,
    pub target: String,
}

/// Performs the actual navigation on activation.
pub trait Navigator {
    fn navigate(&mut self, target: &str);
}

impl<F: FnMut(&str)> Navigator for F {
    fn navigate(&mut self, target: &str) {
        self(target)
    }
}

/// What a key press did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Arrow key moved the selection (to this flat position).
    Selected(usize),
    /// Enter activated the selection; the overlay is now closed.
    Activated(Activation),
    /// Escape closed the overlay.
    Closed,
    /// Nothing happened (closed overlay, empty results, Enter with no selection).
    Ignored,
}

// =============================================================================
// RENDER MODEL
// =============================================================================

/// Everything the view layer needs, with no further logic required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "camelCase")]
pub enum RenderModel {
    Closed,
    #[serde(rename_all = "camelCase")]
    QuickLinks { links: Vec<ResolvedQuickLink> },
    #[serde(rename_all = "camelCase")]
    NoMatches { query: String },
    #[serde(rename_all = "camelCase")]
    Results {
        groups: Vec<RenderGroup>,
        /// Selected flat position, `-1` for none.
        active_index: isize,
    },
}

/// One non-empty category section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderGroup {
    pub category: Category,
    /// Entries shown, i.e. the post-cap count.
    pub count: usize,
    pub entries: Vec<RenderEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderEntry {
    /// Flat-order position; pass back to `hover` / `click`.
    pub position: usize,
    pub id: String,
    pub title: String,
    pub description: String,
    pub target: String,
    pub selected: bool,
}

// =============================================================================
// OVERLAY
// =============================================================================

pub struct SearchOverlay {
    index: Arc<SearchIndex>,
    quick_links: Vec<ResolvedQuickLink>,
    state: OverlayState,
    query: String,
    /// Normalized query the current `results` were derived from.
    matched_query: String,
    results: GroupedResults,
    nav: NavigationController,
    focus_requested: bool,
}

impl SearchOverlay {
    pub fn new(index: Arc<SearchIndex>, quick_links: Vec<ResolvedQuickLink>) -> Self {
        SearchOverlay {
            index,
            quick_links,
            state: OverlayState::Closed,
            query: String::new(),
            matched_query: String::new(),
            results: GroupedResults::default(),
            nav: NavigationController::new(),
            focus_requested: false,
        }
    }

    pub fn state(&self) -> OverlayState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == OverlayState::Open
    }

    /// Raw query text as typed.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &GroupedResults {
        &self.results
    }

    pub fn selection(&self) -> Option<usize> {
        self.nav.selection()
    }

    /// Selection with `-1` for none.
    pub fn active_index(&self) -> isize {
        self.nav.active_index()
    }

    pub fn index(&self) -> &Arc<SearchIndex> {
        &self.index
    }

    pub fn quick_links(&self) -> &[ResolvedQuickLink] {
        &self.quick_links
    }

    pub fn set_quick_links(&mut self, links: Vec<ResolvedQuickLink>) {
        self.quick_links = links;
    }

    /// `Closed -> Open`: blank query, no selection, focus requested.
    /// Opening an already open overlay changes nothing.
    pub fn open(&mut self) {
        if self.is_open() {
            return;
        }
        self.clear_query_state();
        self.state = OverlayState::Open;
        self.focus_requested = true;
        tracing::debug!(locale = %self.index.locale, "search overlay opened");
    }

    /// `Open -> Closed`. Drops the query and selection.
    pub fn close(&mut self, reason: CloseReason) {
        if !self.is_open() {
            return;
        }
        self.state = OverlayState::Closed;
        self.clear_query_state();
        self.focus_requested = false;
        tracing::debug!(?reason, "search overlay closed");
    }

    /// Toggle, for a header search button or a shortcut.
    pub fn toggle(&mut self) {
        match self.state {
            OverlayState::Closed => self.open(),
            OverlayState::Open => self.close(CloseReason::Host),
        }
    }

    /// Returns `true` once after each open. Focusing is best-effort; the host
    /// may ignore a failed focus.
    pub fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_requested)
    }

    /// Replace the query and re-derive results. Any edit clears the selection.
    /// Ignored while closed, since there is no input to type into.
    pub fn set_query(&mut self, text: &str) {
        if !self.is_open() {
            return;
        }
        self.query.clear();
        self.query.push_str(text);
        self.rematch(true);
    }

    /// Handle a key press while open.
    pub fn handle_key(&mut self, key: Key) -> KeyOutcome {
        if !self.is_open() {
            return KeyOutcome::Ignored;
        }
        match key {
            Key::ArrowDown | Key::ArrowUp => {
                if key == Key::ArrowDown {
                    self.nav.move_down();
                } else {
                    self.nav.move_up();
                }
                match self.nav.selection() {
                    Some(i) => KeyOutcome::Selected(i),
                    None => KeyOutcome::Ignored,
                }
            }
            Key::Enter => match self.activate_selection() {
                Some(activation) => KeyOutcome::Activated(activation),
                None => KeyOutcome::Ignored,
            },
            Key::Escape => {
                self.close(CloseReason::Escape);
                KeyOutcome::Closed
            }
        }
    }

    /// Pointer moved over the rendered entry at flat `position`.
    pub fn hover(&mut self, position: usize) {
        if self.is_open() {
            self.nav.hover(position);
        }
    }

    /// Click on the backdrop around the panel.
    pub fn dismiss_backdrop(&mut self) {
        self.close(CloseReason::Backdrop);
    }

    /// Activate whatever is selected: yields the target and closes.
    /// With nothing selected this is a no-op and the overlay stays open.
    pub fn activate_selection(&mut self) -> Option<Activation> {
        if !self.is_open() {
            return None;
        }
        let position = self.nav.selection()?;
        let target = self.nav.selected_target()?.to_string();
        self.close(CloseReason::Activated);
        Some(Activation { position, target })
    }

    /// Explicit click on the rendered entry at flat `position`.
    pub fn click(&mut self, position: usize) -> Option<Activation> {
        if !self.is_open() || position >= self.nav.len() {
            return None;
        }
        self.nav.hover(position);
        self.activate_selection()
    }

    /// Click on a quick link (only rendered while the query is blank).
    pub fn click_quick_link(&mut self, position: usize) -> Option<Activation> {
        if !self.is_open() || !normalize_query(&self.query).is_empty() {
            return None;
        }
        let target = self.quick_links.get(position)?.target.clone();
        self.close(CloseReason::Activated);
        Some(Activation { position, target })
    }

    /// Activate the selection and hand its target to `navigator`.
    /// Returns whether navigation happened.
    pub fn activate_with<N: Navigator + ?Sized>(&mut self, navigator: &mut N) -> bool {
        match self.activate_selection() {
            Some(activation) => {
                navigator.navigate(&activation.target);
                true
            }
            None => false,
        }
    }

    /// Publish a new index snapshot. Current results are re-derived from it
    /// and the selection resets.
    pub fn replace_index(&mut self, index: Arc<SearchIndex>) {
        self.index = index;
        if self.is_open() {
            self.rematch(false);
        }
    }

    /// Build the view model for the current state.
    pub fn render_model(&self) -> RenderModel {
        if !self.is_open() {
            return RenderModel::Closed;
        }
        if self.matched_query.is_empty() {
            return RenderModel::QuickLinks {
                links: self.quick_links.clone(),
            };
        }
        if self.results.is_empty() {
            return RenderModel::NoMatches {
                query: self.matched_query.clone(),
            };
        }

        let groups = self
            .results
            .non_empty_groups()
            .map(|(category, entries)| {
                let offset = self.results.flat_offset(category);
                RenderGroup {
                    category,
                    count: entries.len(),
                    entries: entries
                        .iter()
                        .enumerate()
                        .map(|(i, entry)| RenderEntry {
                            position: offset + i,
                            id: entry.id.clone(),
                            title: entry.title.clone(),
                            description: entry.description.clone(),
                            target: entry.target.clone(),
                            selected: self.nav.is_selected(offset + i),
                        })
                        .collect(),
                }
            })
            .collect();

        RenderModel::Results {
            groups,
            active_index: self.nav.active_index(),
        }
    }

    fn clear_query_state(&mut self) {
        self.query.clear();
        self.matched_query.clear();
        self.results = GroupedResults::default();
        self.nav.clear();
    }

    /// Re-derive results for the current query. `allow_refine` permits
    /// narrowing the previous results instead of a full pass; it must be off
    /// when the index changed.
    fn rematch(&mut self, allow_refine: bool) {
        let normalized = normalize_query(&self.query).to_string();
        if normalized.is_empty() {
            self.matched_query.clear();
            self.results = GroupedResults::default();
            self.nav.clear();
            return;
        }

        let refined = if allow_refine && !self.matched_query.is_empty() {
            refine(&self.results, &self.matched_query, &normalized)
        } else {
            None
        };
        self.results = refined.unwrap_or_else(|| match_query(&self.index, &normalized));
        self.matched_query = normalized;
        self.nav.reset(&self.results);
    }
}
