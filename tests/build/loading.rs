//! Tests for reading a site directory.

use serde_json::json;
use tempfile::TempDir;

use crate::common::{write_sample_site, write_site_file};
use unisearch::{Category, IndexError, LoadError, Locale, Refresh, Site};

fn sample_site() -> (TempDir, Site) {
    let dir = TempDir::new().unwrap();
    write_sample_site(dir.path());
    let site = Site::load(dir.path()).unwrap();
    (dir, site)
}

#[test]
fn test_load_sample_site() {
    let (_dir, site) = sample_site();
    assert_eq!(site.default_locale(), Locale::new("ru"));
    assert_eq!(site.locales(), vec![Locale::new("ru"), Locale::new("en")]);
    assert_eq!(site.sources.catalog.len(), 1);
    assert_eq!(site.sources.link_count(), 1);
    assert_eq!(site.sources.articles.len(), 1);
}

#[test]
fn test_locale_defaults_and_validation() {
    let (_dir, site) = sample_site();
    assert_eq!(site.locale(None).unwrap(), Locale::new("ru"));
    assert_eq!(site.locale(Some("en")).unwrap(), Locale::new("en"));
    assert!(matches!(
        site.locale(Some("de")),
        Err(LoadError::UnknownLocale { .. })
    ));
}

#[test]
fn test_missing_collections_are_empty() {
    let dir = TempDir::new().unwrap();
    write_site_file(
        dir.path(),
        "manifest.json",
        &json!({"version": 1, "defaultLocale": "en", "locales": ["en"]}),
    );
    let site = Site::load(dir.path()).unwrap();
    let index = site.build_index(&Locale::new("en")).unwrap();
    assert!(index.is_empty());
}

#[test]
fn test_missing_manifest_is_io_error() {
    let dir = TempDir::new().unwrap();
    assert!(matches!(Site::load(dir.path()), Err(LoadError::Io { .. })));
}

#[test]
fn test_malformed_collection_is_json_error() {
    let dir = TempDir::new().unwrap();
    write_sample_site(dir.path());
    std::fs::write(dir.path().join("catalog.json"), "[{\"id\": ").unwrap();
    match Site::load(dir.path()) {
        Err(LoadError::Json { path, .. }) => assert!(path.ends_with("catalog.json")),
        other => panic!("expected JSON error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_unsupported_manifest_version() {
    let dir = TempDir::new().unwrap();
    write_site_file(
        dir.path(),
        "manifest.json",
        &json!({"version": 2, "defaultLocale": "en", "locales": ["en"]}),
    );
    assert!(matches!(
        Site::load(dir.path()),
        Err(LoadError::UnsupportedVersion {
            expected: 1,
            found: 2
        })
    ));
}

#[test]
fn test_duplicate_catalog_id_is_rejected() {
    let dir = TempDir::new().unwrap();
    write_sample_site(dir.path());
    write_site_file(
        dir.path(),
        "catalog.json",
        &json!([
            {"id": "mining", "name": {"ru": "Горное дело"}},
            {"id": "mining", "name": {"ru": "Горное дело (магистратура)"}}
        ]),
    );
    let site = Site::load(dir.path()).unwrap();
    match site.build_index(&Locale::new("ru")) {
        Err(LoadError::Index(IndexError::DuplicateId { id })) => assert_eq!(id, "catalog-mining"),
        other => panic!("expected duplicate id, got {:?}", other.map(|i| i.len())),
    }
}

#[test]
fn test_same_raw_id_across_collections_is_fine() {
    let dir = TempDir::new().unwrap();
    write_sample_site(dir.path());
    write_site_file(
        dir.path(),
        "articles.json",
        &json!([{"id": "mining", "title": {"ru": "Новости горного дела"}}]),
    );
    let site = Site::load(dir.path()).unwrap();
    let index = site.build_index(&Locale::new("ru")).unwrap();
    assert!(index.get("catalog-mining").is_some());
    assert!(index.get("news-mining").is_some());
}

#[test]
fn test_index_store_refreshes_once() {
    let (_dir, site) = sample_site();
    let ru = Locale::new("ru");
    let store = site.index_store(&ru).unwrap();
    assert_eq!(store.snapshot().len(), 3);
    assert_eq!(
        store
            .refresh(&site.sources, &ru, site.labels(&ru))
            .unwrap(),
        Refresh::Unchanged
    );

    let en = Locale::new("en");
    assert_eq!(
        store
            .refresh(&site.sources, &en, site.labels(&en))
            .unwrap(),
        Refresh::Rebuilt
    );
    assert_eq!(store.snapshot().locale, en);
}

#[test]
fn test_version_tracks_source_content() {
    let (dir, site) = sample_site();
    let before = site.build_index(&Locale::new("ru")).unwrap().version;

    write_site_file(
        dir.path(),
        "catalog.json",
        &json!([{"id": "mining", "name": {"ru": "Горное дело и геология"}}]),
    );
    let reloaded = Site::load(dir.path()).unwrap();
    let after = reloaded.build_index(&Locale::new("ru")).unwrap().version;
    assert_ne!(before, after);

    let again = Site::load(dir.path()).unwrap();
    assert_eq!(again.build_index(&Locale::new("ru")).unwrap().version, after);
}

#[test]
fn test_overlay_from_site() {
    let (_dir, site) = sample_site();
    let mut overlay = site.overlay(&Locale::new("ru")).unwrap();
    overlay.open();
    overlay.set_query("ГОРН");
    assert_eq!(overlay.results().count(Category::Catalog), 1);
    assert_eq!(overlay.results().count(Category::News), 0);
}
