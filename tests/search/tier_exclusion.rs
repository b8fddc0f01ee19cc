//! Tests for tier exclusion properties.
//!
//! A result set is drawn from exactly one tier: exact code matches hide
//! partial ones, partial matches hide fuzzy ones.

use crate::common::*;
use katalog::{EngineConfig, MatchTier, SearchEngine, SearchRequest, Similarity};

#[test]
fn test_exact_code_hides_partial_code_match() {
    let engine = engine();
    let page = search(&engine, "NQS_F4GM");

    assert_eq!(page.tier, MatchTier::Exact);
    assert_eq!(result_ids(&page), vec![ids::MODERN_SINK]);
}

#[test]
fn test_compound_code_typed_with_space() {
    let engine = engine();
    let page = search(&engine, "nqs f4gm");

    assert_eq!(page.tier, MatchTier::Exact);
    assert_eq!(result_ids(&page), vec![ids::MODERN_SINK]);
}

#[test]
fn test_global_code_is_exact() {
    let engine = engine();
    let page = search(&engine, "5901234123457");

    assert_eq!(page.tier, MatchTier::Exact);
    assert_eq!(result_ids(&page), vec![ids::MODERN_SINK]);
}

#[test]
fn test_code_fragment_is_partial() {
    let engine = engine();
    let page = search(&engine, "f4gm");

    assert_eq!(page.tier, MatchTier::Partial);
    assert_eq!(result_ids(&page), vec![ids::MODERN_SINK, ids::SINK_CABINET]);
}

#[test]
fn test_example_query_is_partial() {
    let engine = engine();
    let page = search(&engine, "bathroom sink for modern");

    assert_eq!(page.tier, MatchTier::Partial);
    assert!(result_ids(&page).contains(&ids::MODERN_SINK));
    assert!(page.items.iter().all(|i| i.tier == MatchTier::Partial));
}

#[test]
fn test_partial_excludes_stock_ineligible_and_hidden() {
    let engine = engine();
    let page = search(&engine, "sink");

    assert_eq!(page.tier, MatchTier::Partial);
    let ids = result_ids(&page);
    assert_eq!(ids, vec![ids::MODERN_SINK, ids::SINK_CABINET]);
    assert!(!ids.contains(&ids::DISCONTINUED_SINK));
    assert!(!ids.contains(&ids::HIDDEN_SINK));
}

#[test]
fn test_exact_code_bypasses_stock_filter() {
    let engine = engine();
    let page = search(&engine, "old_sink");

    assert_eq!(page.tier, MatchTier::Exact);
    assert_eq!(result_ids(&page), vec![ids::DISCONTINUED_SINK]);
    assert!(!page.items[0].availability.stock_eligible);
}

#[test]
fn test_data_ineligible_never_listed_even_by_code() {
    let engine = engine();
    let page = search(&engine, "HID_1");

    assert!(page.items.is_empty());
}

#[test]
fn test_fuzzy_only_without_exact_or_partial() {
    let engine = engine();
    let page = search(&engine, "showeer");

    assert_eq!(page.tier, MatchTier::Fuzzy);
    assert_eq!(result_ids(&page), vec![ids::SHOWER_SET]);
    assert!(page.items[0].scores.avg > EngineConfig::default().sensitivity);
}

#[test]
fn test_nonsense_query_returns_nothing() {
    let engine = engine();
    let page = search(&engine, "qqqqxz");

    assert!(page.items.is_empty());
    assert_eq!(page.total, 0);
    assert_eq!(page.page_count, 0);
}

/// Every pair scores the same fixed value.
struct Flat(f64);

impl Similarity for Flat {
    fn similarity(&self, _a: &str, _b: &str) -> f64 {
        self.0
    }
}

#[test]
fn test_threshold_is_strict() {
    let at_threshold = EngineConfig {
        weight_bonus: 0.0,
        ..EngineConfig::default()
    };
    let engine = SearchEngine::with_similarity(showroom(), at_threshold.clone(), Flat(0.35)).unwrap();
    let page = engine.search(&SearchRequest::new("zzzz", "en")).unwrap();
    assert_eq!(page.tier, MatchTier::Fuzzy);
    assert!(page.items.is_empty(), "score equal to sensitivity must not qualify");

    let engine = SearchEngine::with_similarity(showroom(), at_threshold.with_sensitivity(0.34), Flat(0.35)).unwrap();
    let page = engine.search(&SearchRequest::new("zzzz", "en")).unwrap();
    // every data- and stock-eligible item with an English vector
    assert_eq!(page.total, 6);
}

#[test]
fn test_punctuated_name_matches_as_partial() {
    let engine = SearchEngine::new(
        catalog_of(vec![
            named_item(1, "Wall-hung Basin"),
            named_item(2, "Wallhung Bracket"),
            named_item(3, "Basin Mixer (60cm)"),
        ]),
        EngineConfig::default(),
    )
    .unwrap();

    // joined form: both spellings match
    let page = search(&engine, "wall-hung");
    assert_eq!(page.tier, MatchTier::Partial);
    assert_eq!(page.total, 2);
    assert!(result_ids(&page).contains(&1));

    // a single part of the hyphenated word
    let page = search(&engine, "hung");
    assert_eq!(page.tier, MatchTier::Partial);
    assert_eq!(result_ids(&page), vec![1]);

    // parentheses do not hide the word
    let page = search(&engine, "60cm");
    assert_eq!(page.tier, MatchTier::Partial);
    assert_eq!(result_ids(&page), vec![3]);
}
