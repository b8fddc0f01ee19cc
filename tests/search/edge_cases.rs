//! Edge cases: empty queries, missing vectors, filters, deadlines.

use crate::common::*;
use katalog::testing::with_names;
use katalog::{EmptyQueryPolicy, EngineConfig, Language, MatchTier, SearchEngine, SearchError, SearchRequest};
use std::time::{Duration, Instant};

#[test]
fn test_empty_query_lists_eligible_items_in_rank_order() {
    let engine = engine();
    let page = search(&engine, "");

    assert_eq!(page.tier, MatchTier::Fuzzy);
    // promoted, then priority 5, then New, then Normal by id
    assert_eq!(
        result_ids(&page),
        vec![
            ids::MODERN_SINK,
            ids::KITCHEN_TAP,
            ids::BASIN_MIXER,
            ids::SINK_CABINET,
            ids::BATH_TUB,
            ids::SHOWER_SET
        ]
    );
    assert!(page.items.iter().all(|i| i.scores.avg == 0.0));
}

#[test]
fn test_blank_query_is_empty_too() {
    let engine = engine();
    assert_eq!(search(&engine, " , ,  ").total, search(&engine, "").total);
}

#[test]
fn test_empty_query_rejected_when_configured() {
    let engine = engine_with(EngineConfig::default().with_empty_query(EmptyQueryPolicy::Reject));
    let err = engine.search(&SearchRequest::new("   ", "en")).unwrap_err();
    assert!(matches!(err, SearchError::EmptyQuery));

    // a lone connector is an endpoint, so it is not trimmed away
    assert!(engine.search(&SearchRequest::new("for", "en")).is_ok());
}

#[test]
fn test_language_without_any_vectors_is_not_fatal() {
    let engine = engine();
    let page = engine.search(&SearchRequest::new("sink", "de")).unwrap();

    assert!(page.items.is_empty());
    // every data-eligible item was skipped
    assert_eq!(page.skipped, 7);
}

#[test]
fn test_empty_vector_scores_zero_without_failing() {
    let blank = with_names(item(1), Language::En, "");
    let engine = SearchEngine::new(catalog_of(vec![blank, named_item(2, "Sink")]), EngineConfig::default()).unwrap();

    let page = search(&engine, "sink");
    assert_eq!(result_ids(&page), vec![2]);

    let all = search(&engine, "");
    assert_eq!(result_ids(&all), vec![1, 2]);
    assert_eq!(all.skipped, 0);
}

#[test]
fn test_zone_filter_and_disjunctive_zone_facet() {
    let engine = engine();
    let page = engine
        .search(&SearchRequest::new("", "en").zones(["kitchen"]))
        .unwrap();

    assert_eq!(result_ids(&page), vec![ids::KITCHEN_TAP, ids::BASIN_MIXER]);
    assert_eq!(page.total, 2);
    // the zone facet ignores the zone filter
    assert!(page.zones.contains("bathroom"));
    // the finish facet honours it
    assert_eq!(page.finishes.iter().map(|f| f.id).collect::<Vec<_>>(), vec![1, 2]);
}

#[test]
fn test_finish_filter() {
    let engine = engine();
    let page = engine
        .search(&SearchRequest::new("sink", "en").finishes([2]))
        .unwrap();

    assert_eq!(result_ids(&page), vec![ids::SINK_CABINET]);
    assert_eq!(page.zones.iter().map(String::as_str).collect::<Vec<_>>(), vec!["bathroom"]);
    assert_eq!(page.finishes.iter().map(|f| f.id).collect::<Vec<_>>(), vec![1, 2]);
}

#[test]
fn test_filters_leave_tier_unchanged() {
    let engine = engine();
    // the only exact match lives in the bathroom; filtering it out does not
    // promote partial matches into the page
    let page = engine
        .search(&SearchRequest::new("NQS_F4GM", "en").zones(["kitchen"]))
        .unwrap();

    assert_eq!(page.tier, MatchTier::Exact);
    assert!(page.items.is_empty());
}

#[test]
fn test_expired_deadline_aborts() {
    let engine = engine();
    let request = SearchRequest::new("sink", "en").deadline(Instant::now());
    assert!(matches!(engine.search(&request), Err(SearchError::DeadlineExceeded)));
}

#[test]
fn test_generous_deadline_completes() {
    let engine = engine();
    let request = SearchRequest::new("sink", "en").timeout(Duration::from_secs(30));
    assert!(engine.search(&request).is_ok());
}

#[test]
fn test_long_query_is_capped() {
    let engine = engine_with(EngineConfig {
        max_query_tokens: 2,
        ..EngineConfig::default()
    });
    let explained = engine
        .explain(ids::MODERN_SINK, "modern bathroom sink cabinet mixer", "en")
        .unwrap()
        .unwrap();
    assert_eq!(explained.tokens, vec!["MODERN", "BATHROOM"]);
}
