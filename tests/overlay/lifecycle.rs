//! Tests for open/close transitions and the render model.

use std::sync::Arc;

use crate::common::build_en;
use unisearch::testing::{make_catalog_item, sample_index, sample_overlay};
use unisearch::{
    CloseReason, ContentSources, Key, KeyOutcome, OverlayState, RenderModel, SearchOverlay,
};

#[test]
fn test_starts_closed() {
    let overlay = sample_overlay();
    assert_eq!(overlay.state(), OverlayState::Closed);
    assert_eq!(overlay.render_model(), RenderModel::Closed);
}

#[test]
fn test_open_shows_quick_links_and_requests_focus() {
    let mut overlay = sample_overlay();
    overlay.open();
    assert!(overlay.is_open());
    assert_eq!(overlay.query(), "");
    assert_eq!(overlay.active_index(), -1);
    assert!(overlay.take_focus_request());
    assert!(!overlay.take_focus_request());

    match overlay.render_model() {
        RenderModel::QuickLinks { links } => {
            let targets: Vec<&str> = links.iter().map(|l| l.target.as_str()).collect();
            assert_eq!(targets, vec!["/admission", "/catalog", "/news", "/contacts"]);
        }
        other => panic!("expected quick links, got {:?}", other),
    }
}

#[test]
fn test_quick_links_do_not_depend_on_index() {
    let mut empty = SearchOverlay::new(
        Arc::new(build_en(&ContentSources::default())),
        sample_overlay().quick_links().to_vec(),
    );
    let mut full = sample_overlay();
    empty.open();
    full.open();
    assert_eq!(empty.render_model(), full.render_model());
}

#[test]
fn test_blank_query_always_returns_to_quick_links() {
    let mut overlay = sample_overlay();
    overlay.open();
    overlay.set_query("a");
    overlay.handle_key(Key::ArrowDown);
    overlay.set_query("   ");
    assert!(matches!(overlay.render_model(), RenderModel::QuickLinks { .. }));
    assert_eq!(overlay.active_index(), -1);
    assert!(overlay.results().is_empty());
}

#[test]
fn test_no_matches_view() {
    let mut overlay = sample_overlay();
    overlay.open();
    overlay.set_query("  zzzz ");
    assert_eq!(
        overlay.render_model(),
        RenderModel::NoMatches {
            query: "zzzz".to_string()
        }
    );
}

#[test]
fn test_results_view_matches_flat_order() {
    let mut overlay = sample_overlay();
    overlay.open();
    overlay.set_query("a");
    overlay.hover(1);

    let RenderModel::Results {
        groups,
        active_index,
    } = overlay.render_model()
    else {
        panic!("expected results");
    };
    assert_eq!(active_index, 1);
    assert_eq!(groups.len(), 3);

    let rendered: Vec<(usize, &str, bool)> = groups
        .iter()
        .flat_map(|g| g.entries.iter())
        .map(|e| (e.position, e.title.as_str(), e.selected))
        .collect();
    assert_eq!(
        rendered,
        vec![
            (0, "Metallurgy", false),
            (1, "Admission", true),
            (2, "Open Doors Day", false),
        ]
    );
    assert!(groups.iter().all(|g| g.count == g.entries.len()));
}

#[test]
fn test_escape_closes_and_clears() {
    let mut overlay = sample_overlay();
    overlay.open();
    overlay.set_query("min");
    overlay.handle_key(Key::ArrowDown);
    assert_eq!(overlay.handle_key(Key::Escape), KeyOutcome::Closed);
    assert!(!overlay.is_open());
    assert_eq!(overlay.query(), "");
    assert_eq!(overlay.active_index(), -1);
}

#[test]
fn test_backdrop_closes() {
    let mut overlay = sample_overlay();
    overlay.open();
    overlay.set_query("min");
    overlay.dismiss_backdrop();
    assert_eq!(overlay.state(), OverlayState::Closed);
}

#[test]
fn test_reopen_starts_fresh() {
    let mut overlay = sample_overlay();
    overlay.open();
    overlay.set_query("a");
    overlay.handle_key(Key::ArrowDown);
    overlay.close(CloseReason::Host);

    overlay.open();
    assert_eq!(overlay.query(), "");
    assert_eq!(overlay.active_index(), -1);
    assert!(matches!(overlay.render_model(), RenderModel::QuickLinks { .. }));
}

#[test]
fn test_open_twice_keeps_state() {
    let mut overlay = sample_overlay();
    overlay.open();
    overlay.set_query("min");
    overlay.open();
    assert_eq!(overlay.query(), "min");
}

#[test]
fn test_input_ignored_while_closed() {
    let mut overlay = sample_overlay();
    overlay.set_query("min");
    assert_eq!(overlay.query(), "");
    assert_eq!(overlay.handle_key(Key::ArrowDown), KeyOutcome::Ignored);
    assert!(overlay.click(0).is_none());
    assert_eq!(overlay.render_model(), RenderModel::Closed);
}

#[test]
fn test_toggle() {
    let mut overlay = sample_overlay();
    overlay.toggle();
    assert!(overlay.is_open());
    overlay.toggle();
    assert!(!overlay.is_open());
}

#[test]
fn test_click_quick_link_only_in_quick_links_view() {
    let mut overlay = sample_overlay();
    overlay.open();
    overlay.set_query("min");
    assert!(overlay.click_quick_link(0).is_none());

    overlay.set_query("");
    let activation = overlay.click_quick_link(3).expect("four quick links");
    assert_eq!(activation.target, "/contacts");
    assert!(!overlay.is_open());
}

#[test]
fn test_replace_index_rederives_results() {
    let mut overlay = sample_overlay();
    overlay.open();
    overlay.set_query("min");
    overlay.handle_key(Key::ArrowDown);

    let sources = ContentSources {
        catalog: vec![
            make_catalog_item("mining", "Mining Engineering", ""),
            make_catalog_item("mineral", "Mineralogy", ""),
        ],
        ..Default::default()
    };
    overlay.replace_index(Arc::new(build_en(&sources)));
    assert_eq!(overlay.results().len(), 2);
    assert_eq!(overlay.active_index(), -1);
    assert_eq!(overlay.query(), "min");
}

#[test]
fn test_old_snapshot_survives_replace() {
    let original = Arc::new(sample_index());
    let mut overlay = SearchOverlay::new(Arc::clone(&original), Vec::new());
    overlay.replace_index(Arc::new(build_en(&ContentSources::default())));
    assert_eq!(original.len(), 4);
    assert!(overlay.index().is_empty());
}
