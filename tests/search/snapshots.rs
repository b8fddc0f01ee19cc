//! Catalog updates while searches are in flight.

use crate::common::*;
use katalog::{CatalogStore, CatalogView, EngineConfig, SearchEngine, SearchRequest};
use std::sync::Arc;

#[test]
fn test_upsert_bumps_version_and_is_searchable() {
    let catalog = Arc::new(showroom());
    let engine = SearchEngine::new(Arc::clone(&catalog), EngineConfig::default()).unwrap();

    let before = engine.search(&SearchRequest::new("vanity", "en")).unwrap();
    assert!(before.items.is_empty());

    let version = catalog.upsert(vec![named_item(20, "Vanity Unit")]);
    let after = engine.search(&SearchRequest::new("vanity", "en")).unwrap();

    assert_eq!(after.snapshot_version, version);
    assert_eq!(version, before.snapshot_version + 1);
    assert_eq!(result_ids(&after), vec![20]);
}

#[test]
fn test_upsert_replaces_vectors_of_changed_item() {
    let catalog = Arc::new(showroom());
    let engine = SearchEngine::new(Arc::clone(&catalog), EngineConfig::default()).unwrap();

    catalog.upsert(vec![named_item(ids::SHOWER_SET, "Thermostatic Shower Column")]);

    let page = engine.search(&SearchRequest::new("column", "en")).unwrap();
    assert_eq!(result_ids(&page), vec![ids::SHOWER_SET]);
    let page = engine.search(&SearchRequest::new("rain", "en")).unwrap();
    assert!(!result_ids(&page).contains(&ids::SHOWER_SET));
}

#[test]
fn test_remove_drops_item_from_results() {
    let catalog = Arc::new(showroom());
    let engine = SearchEngine::new(Arc::clone(&catalog), EngineConfig::default()).unwrap();

    catalog.remove(&[ids::SINK_CABINET]);

    let page = engine.search(&SearchRequest::new("sink", "en")).unwrap();
    assert_eq!(result_ids(&page), vec![ids::MODERN_SINK]);
    assert!(catalog.snapshot().vector_text(ids::SINK_CABINET, katalog::Language::En).is_none());
}

#[test]
fn test_held_snapshot_is_unaffected_by_updates() {
    let catalog = showroom();
    let held = catalog.snapshot();
    let items = held.items().len();

    catalog.upsert(vec![named_item(20, "Vanity Unit")]);
    catalog.remove(&[ids::MODERN_SINK]);

    assert_eq!(held.items().len(), items);
    assert!(held.vector_text(ids::MODERN_SINK, katalog::Language::En).is_some());
    assert_eq!(catalog.snapshot().version(), held.version() + 2);
}

#[test]
fn test_concurrent_searches_see_whole_snapshots() {
    let catalog = Arc::new(showroom());
    let engine = SearchEngine::new(Arc::clone(&catalog), EngineConfig::default()).unwrap();
    let extra: Vec<_> = (100..140).map(|id| named_item(id, "Sink Basin")).collect();
    let first = engine.search(&SearchRequest::new("sink", "en")).unwrap();
    let (base_version, base) = (first.snapshot_version, first.total);

    std::thread::scope(|s| {
        let mut readers = Vec::new();
        for _ in 0..4 {
            readers.push(s.spawn(|| {
                let mut totals = Vec::new();
                for _ in 0..50 {
                    let page = engine.search(&SearchRequest::new("sink", "en").page(1, 100)).unwrap();
                    totals.push((page.snapshot_version, page.total));
                }
                totals
            }));
        }

        catalog.upsert(extra.clone());

        for reader in readers {
            for (version, total) in reader.join().unwrap() {
                // one batch, one version: never a mix
                if version == base_version {
                    assert_eq!(total, base);
                } else {
                    assert_eq!(version, base_version + 1);
                    assert_eq!(total, base + extra.len());
                }
            }
        }
    });
}
