//! Pagination and page-count tests.

use crate::common::*;
use katalog::{CatalogItem, EngineConfig, SearchEngine, SearchError, SearchRequest};

fn numbered_sinks(n: u64) -> Vec<CatalogItem> {
    (1..=n).map(|i| named_item(i, &format!("Sink {}", i))).collect()
}

fn sink_engine(n: u64) -> SearchEngine<katalog::MemoryCatalog> {
    SearchEngine::new(catalog_of(numbered_sinks(n)), EngineConfig::default()).unwrap()
}

#[test]
fn test_pages_slice_the_ordering() {
    let engine = sink_engine(25);

    let first = engine.search(&SearchRequest::new("sink", "en").page(1, 10)).unwrap();
    assert_eq!(first.total, 25);
    assert_eq!(first.page_count, 3);
    assert_eq!(result_ids(&first), (1..=10).collect::<Vec<_>>());

    let last = engine.search(&SearchRequest::new("sink", "en").page(3, 10)).unwrap();
    assert_eq!(result_ids(&last), (21..=25).collect::<Vec<_>>());
    assert_eq!(last.page, 3);
    assert_eq!(last.limit, 10);
}

#[test]
fn test_page_past_the_end_is_empty() {
    let engine = sink_engine(5);
    let page = engine.search(&SearchRequest::new("sink", "en").page(7, 10)).unwrap();

    assert!(page.items.is_empty());
    assert_eq!(page.total, 5);
    assert_eq!(page.page_count, 1);
}

#[test]
fn test_pages_concatenate_without_gaps_or_duplicates() {
    let engine = sink_engine(23);
    let everything = engine.search(&SearchRequest::new("sink", "en").page(1, 100)).unwrap();

    let mut stitched = Vec::new();
    for page in 1..=5 {
        let p = engine.search(&SearchRequest::new("sink", "en").page(page, 5)).unwrap();
        assert!(p.items.len() <= 5);
        stitched.extend(result_ids(&p));
    }

    assert_eq!(stitched, result_ids(&everything));
}

#[test]
fn test_invalid_pagination_is_rejected() {
    let engine = sink_engine(3);
    for (page, limit) in [(0, 10), (1, 0), (-1, 10), (1, -5)] {
        let err = engine
            .search(&SearchRequest::new("sink", "en").page(page, limit))
            .unwrap_err();
        assert!(
            matches!(err, SearchError::InvalidPagination { page: p, limit: l } if p == page && l == limit),
            "page={} limit={} gave {:?}",
            page,
            limit,
            err
        );
    }
}

#[test]
fn test_facets_cover_the_whole_pool_not_just_the_page() {
    let engine = engine();
    let page = engine
        .search(&SearchRequest::new("", "en").page(1, 1))
        .unwrap();

    assert_eq!(page.items.len(), 1);
    assert!(page.zones.contains("bathroom"));
    assert!(page.zones.contains("kitchen"));
    assert_eq!(
        page.finishes.iter().map(|f| f.id).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
}
