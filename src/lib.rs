//! Unified search overlay for multi-language content sites.
//!
//! Builds a small in-memory index from three content collections (program
//! catalog, navigation tree, articles), matches free-text queries by
//! case-insensitive substring, groups hits per category with a cap of five,
//! and drives one selection cursor shared by keyboard and pointer.
//! Everything is synchronous and in-process; the crate also compiles to WASM
//! so the overlay runs in the browser with no round-trip per keystroke.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  sources.rs  │────▶│   index.rs   │────▶│  matcher.rs  │
//! │ (catalog,    │     │ (build_index)│     │ (match_query,│
//! │  nav, news)  │     │              │     │  CAP = 5)    │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!                             │                    │
//!                             ▼                    ▼
//!                      ┌──────────────┐     ┌──────────────┐
//!                      │   store.rs   │────▶│  overlay.rs  │◀── navigation.rs
//!                      │ (snapshots)  │     │ (lifecycle,  │    (selection)
//!                      └──────────────┘     │ render model)│
//!                                           └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use unisearch::{build_index, Key, Locale, RawLabels, SearchOverlay};
//!
//! let en = Locale::new("en");
//! let index = build_index(&sources, &en, &en, &RawLabels)?;
//! let mut overlay = SearchOverlay::new(Arc::new(index), quick_links);
//!
//! overlay.open();
//! overlay.set_query("min");
//! overlay.handle_key(Key::ArrowDown);
//! let model = overlay.render_model();
//! ```

// Module declarations
pub mod config;
pub mod contracts;
mod error;
mod index;
mod matcher;
mod navigation;
mod overlay;
mod quick_links;
mod sources;
mod store;
pub mod testing;
mod types;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use config::{Site, SiteManifest, MANIFEST_VERSION};
pub use error::{IndexError, LoadError};
pub use index::{build_index, NAV_PATH_SEPARATOR};
pub use matcher::{entry_matches, match_query, normalize_query, refine, GroupedResults, CAP};
pub use navigation::{Key, NavigationController};
pub use overlay::{
    Activation, CloseReason, KeyOutcome, Navigator, OverlayState, RenderEntry, RenderGroup,
    RenderModel, SearchOverlay,
};
pub use quick_links::{
    default_quick_links, resolve_quick_links, QuickLink, ResolvedQuickLink, DEFAULT_QUICK_LINKS,
};
pub use sources::{
    Article, CatalogItem, ContentSources, LabelDictionary, LabelResolver, LocalizedText,
    NavColumn, NavLink, NavSection, RawLabels,
};
pub use store::{IndexStore, Refresh};
pub use types::{Category, Locale, SearchIndex, SearchableEntry, SourceVersion};
