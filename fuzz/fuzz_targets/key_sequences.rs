// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for overlay input sequences.
//!
//! Interleaves keys, hovers, clicks, query edits and open/close at random.
//! Whatever the order, the selection stays within the flat order and a
//! closed overlay holds no query.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use unisearch::testing::sample_overlay;
use unisearch::{CloseReason, Key};

#[derive(Debug, Arbitrary)]
enum Event {
    Down,
    Up,
    Enter,
    Escape,
    Hover(u8),
    Click(u8),
    QuickLink(u8),
    Query(String),
    Open,
    Close,
    Backdrop,
}

fuzz_target!(|events: Vec<Event>| {
    let mut overlay = sample_overlay();
    overlay.open();

    for event in events.into_iter().take(256) {
        match event {
            Event::Down => {
                overlay.handle_key(Key::ArrowDown);
            }
            Event::Up => {
                overlay.handle_key(Key::ArrowUp);
            }
            Event::Enter => {
                overlay.handle_key(Key::Enter);
            }
            Event::Escape => {
                overlay.handle_key(Key::Escape);
            }
            Event::Hover(i) => overlay.hover(i as usize),
            Event::Click(i) => {
                overlay.click(i as usize);
            }
            Event::QuickLink(i) => {
                overlay.click_quick_link(i as usize);
            }
            Event::Query(q) => overlay.set_query(&q),
            Event::Open => overlay.open(),
            Event::Close => overlay.close(CloseReason::Host),
            Event::Backdrop => overlay.dismiss_backdrop(),
        }

        let active = overlay.active_index();
        assert!(active >= -1);
        assert!(active < overlay.results().len() as isize);
        if !overlay.is_open() {
            assert_eq!(active, -1);
            assert!(overlay.query().is_empty());
        }
        // render model must always be derivable
        let _ = overlay.render_model();
    }
});
