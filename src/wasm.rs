// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for the search overlay.
//!
//! The browser owns the DOM; this side owns the state. Every input event is
//! forwarded here and the page re-renders from `renderModel()`.
//!
//! ```js
//! const overlay = new SearchOverlayHandle(sources, "ru", labels, "ru");
//! overlay.setNavigate((href) => router.push(href));
//! overlay.open();
//! overlay.setQuery(input.value);
//! overlay.handleKey(event.key);
//! render(overlay.renderModel());
//! ```

use js_sys::Function;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

use crate::navigation::Key;
use crate::overlay::{Activation, CloseReason, KeyOutcome, Navigator, SearchOverlay};
use crate::quick_links::{default_quick_links, resolve_quick_links};
use crate::sources::{ContentSources, LabelDictionary};
use crate::store::{IndexStore, Refresh};
use crate::types::Locale;

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Overlay state machine plus the index it searches.
#[wasm_bindgen]
pub struct SearchOverlayHandle {
    store: IndexStore,
    labels: LabelDictionary,
    overlay: SearchOverlay,
    on_navigate: Option<Function>,
}

#[wasm_bindgen]
impl SearchOverlayHandle {
    /// Build the index from a JS sources object `{catalog, navigation, articles}`.
    ///
    /// `labels` is a (possibly nested) translation object for `locale`.
    /// `default_locale` is the fallback for untranslated text; defaults to `locale`.
    #[wasm_bindgen(constructor)]
    pub fn new(
        sources: JsValue,
        locale: &str,
        labels: Option<JsValue>,
        default_locale: Option<String>,
    ) -> Result<SearchOverlayHandle, JsValue> {
        let sources: ContentSources = from_value(sources).map_err(js_err)?;
        let labels = match labels {
            Some(value) => {
                let json: serde_json::Value = from_value(value).map_err(js_err)?;
                LabelDictionary::from_json(&json)
            }
            None => LabelDictionary::new(),
        };
        let locale = Locale::new(locale);
        let fallback = default_locale.map(Locale::new).unwrap_or_else(|| locale.clone());

        let store = IndexStore::new(fallback);
        store.refresh(&sources, &locale, &labels).map_err(js_err)?;
        let quick_links = resolve_quick_links(&default_quick_links(), &labels);
        let overlay = SearchOverlay::new(store.snapshot(), quick_links);

        Ok(SearchOverlayHandle {
            store,
            labels,
            overlay,
            on_navigate: None,
        })
    }

    /// Register the function called with the target href on activation.
    #[wasm_bindgen(js_name = setNavigate)]
    pub fn set_navigate(&mut self, callback: Option<Function>) {
        self.on_navigate = callback;
    }

    #[wasm_bindgen]
    pub fn open(&mut self) {
        self.overlay.open();
    }

    #[wasm_bindgen]
    pub fn close(&mut self) {
        self.overlay.close(CloseReason::Host);
    }

    #[wasm_bindgen]
    pub fn toggle(&mut self) {
        self.overlay.toggle();
    }

    #[wasm_bindgen(js_name = isOpen)]
    pub fn is_open(&self) -> bool {
        self.overlay.is_open()
    }

    /// `true` once after each open; the page should focus the input.
    #[wasm_bindgen(js_name = takeFocusRequest)]
    pub fn take_focus_request(&mut self) -> bool {
        self.overlay.take_focus_request()
    }

    #[wasm_bindgen(js_name = setQuery)]
    pub fn set_query(&mut self, text: &str) {
        self.overlay.set_query(text);
    }

    /// Forward a `KeyboardEvent.key`. Returns `true` when the key was consumed
    /// and the page should call `preventDefault()`.
    #[wasm_bindgen(js_name = handleKey)]
    pub fn handle_key(&mut self, name: &str) -> Result<bool, JsValue> {
        let Some(key) = Key::from_name(name) else {
            return Ok(false);
        };
        match self.overlay.handle_key(key) {
            KeyOutcome::Activated(activation) => {
                self.navigate(&activation)?;
                Ok(true)
            }
            KeyOutcome::Selected(_) | KeyOutcome::Closed => Ok(true),
            KeyOutcome::Ignored => Ok(false),
        }
    }

    #[wasm_bindgen]
    pub fn hover(&mut self, position: usize) {
        self.overlay.hover(position);
    }

    /// Click on the result at flat `position`. Returns the target, if any.
    #[wasm_bindgen(js_name = clickResult)]
    pub fn click_result(&mut self, position: usize) -> Result<Option<String>, JsValue> {
        match self.overlay.click(position) {
            Some(activation) => {
                self.navigate(&activation)?;
                Ok(Some(activation.target))
            }
            None => Ok(None),
        }
    }

    #[wasm_bindgen(js_name = clickQuickLink)]
    pub fn click_quick_link(&mut self, position: usize) -> Result<Option<String>, JsValue> {
        match self.overlay.click_quick_link(position) {
            Some(activation) => {
                self.navigate(&activation)?;
                Ok(Some(activation.target))
            }
            None => Ok(None),
        }
    }

    #[wasm_bindgen(js_name = dismissBackdrop)]
    pub fn dismiss_backdrop(&mut self) {
        self.overlay.dismiss_backdrop();
    }

    /// Selected flat position, or -1.
    #[wasm_bindgen(js_name = activeIndex)]
    pub fn active_index(&self) -> isize {
        self.overlay.active_index()
    }

    #[wasm_bindgen(js_name = renderModel)]
    pub fn render_model(&self) -> Result<JsValue, JsValue> {
        to_value(&self.overlay.render_model()).map_err(js_err)
    }

    /// Rebuild after a locale switch, a source reload or new labels. Returns `true` when
    /// a new index was published.
    #[wasm_bindgen]
    pub fn rebuild(
        &mut self,
        sources: JsValue,
        locale: &str,
        labels: Option<JsValue>,
    ) -> Result<bool, JsValue> {
        let sources: ContentSources = from_value(sources).map_err(js_err)?;
        if let Some(value) = labels {
            let json: serde_json::Value = from_value(value).map_err(js_err)?;
            self.labels = LabelDictionary::from_json(&json);
            self.overlay
                .set_quick_links(resolve_quick_links(&default_quick_links(), &self.labels));
        }
        let refresh = self
            .store
            .refresh(&sources, &Locale::new(locale), &self.labels)
            .map_err(js_err)?;
        if refresh == Refresh::Rebuilt {
            self.overlay.replace_index(self.store.snapshot());
        }
        Ok(refresh == Refresh::Rebuilt)
    }

    /// Entries in the current index.
    #[wasm_bindgen(js_name = entryCount)]
    pub fn entry_count(&self) -> usize {
        self.overlay.index().len()
    }
}

impl SearchOverlayHandle {
    fn navigate(&self, activation: &Activation) -> Result<(), JsValue> {
        let Some(callback) = &self.on_navigate else {
            return Ok(());
        };
        let mut failure = None;
        let mut call = |target: &str| {
            if let Err(e) = callback.call1(&JsValue::NULL, &JsValue::from_str(target)) {
                failure = Some(e);
            }
        };
        call.navigate(&activation.target);
        match failure {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
