// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! One selection cursor shared by keyboard and pointer.
//!
//! The controller owns the flat order's navigation targets, so activating
//! the selection is a lookup by position rather than a search through
//! rendered output. Whenever the flat order is replaced, the selection
//! resets to nothing.
//!
//! | Input        | Effect                                                 |
//! |--------------|--------------------------------------------------------|
//! | Arrow-Down   | next entry, wrapping to 0; from nothing to 0           |
//! | Arrow-Up     | previous entry, wrapping to last; from nothing to last |
//! | Hover `i`    | select `i` immediately                                 |
//! | new results  | select nothing                                         |

use serde::{Deserialize, Serialize};

use crate::contracts::check_selection_bounds;
use crate::matcher::GroupedResults;

/// Keyboard input the overlay reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
}

impl Key {
    /// Parse a DOM `KeyboardEvent.key` value (plus a few short aliases).
    pub fn from_name(name: &str) -> Option<Key> {
        match name {
            "ArrowDown" | "Down" | "down" => Some(Key::ArrowDown),
            "ArrowUp" | "Up" | "up" => Some(Key::ArrowUp),
            "Enter" | "enter" => Some(Key::Enter),
            "Escape" | "Esc" | "escape" | "esc" => Some(Key::Escape),
            _ => None,
        }
    }
}

/// Selection cursor over the current flat order.
#[derive(Debug, Clone, Default)]
pub struct NavigationController {
    /// Navigation target of each flat-order position.
    targets: Vec<String>,
    selection: Option<usize>,
}

impl NavigationController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopt the flat order of fresh results. Always clears the selection,
    /// even if the previously selected entry is still present.
    pub fn reset(&mut self, results: &GroupedResults) {
        self.targets.clear();
        self.targets
            .extend(results.flat_order().into_iter().map(|e| e.target.clone()));
        self.selection = None;
    }

    /// Forget the flat order entirely (quick-links view, closed overlay).
    pub fn clear(&mut self) {
        self.targets.clear();
        self.selection = None;
    }

    /// Length of the flat order.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    /// The selection with `-1` for "nothing selected".
    pub fn active_index(&self) -> isize {
        self.selection.map_or(-1, |i| i as isize)
    }

    pub fn is_selected(&self, position: usize) -> bool {
        self.selection == Some(position)
    }

    /// Arrow-Down.
    pub fn move_down(&mut self) {
        let len = self.targets.len();
        if len == 0 {
            return;
        }
        self.selection = Some(match self.selection {
            None => 0,
            Some(i) => (i + 1) % len,
        });
        check_selection_bounds(self.selection, len);
    }

    /// Arrow-Up.
    pub fn move_up(&mut self) {
        let len = self.targets.len();
        if len == 0 {
            return;
        }
        self.selection = Some(match self.selection {
            None | Some(0) => len - 1,
            Some(i) => i - 1,
        });
        check_selection_bounds(self.selection, len);
    }

    /// Pointer entered the entry at `position`. Positions outside the flat
    /// order are not rendered and are ignored.
    pub fn hover(&mut self, position: usize) {
        if position < self.targets.len() {
            self.selection = Some(position);
        }
    }

    /// Target of the selected entry, if any.
    pub fn selected_target(&self) -> Option<&str> {
        self.selection
            .and_then(|i| self.targets.get(i))
            .map(String::as_str)
    }

    /// Target at an arbitrary flat position.
    pub fn target_at(&self, position: usize) -> Option<&str> {
        self.targets.get(position).map(String::as_str)
    }
}
