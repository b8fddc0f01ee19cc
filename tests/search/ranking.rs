//! Ranking order tests.
//!
//! Order within the active tier: promoted, `avg`, `avg_without_worst`,
//! category priority, lifecycle rank, item id.

use crate::common::*;
use katalog::testing::{coded_item, ranked_item};
use katalog::{EngineConfig, Lifecycle, MatchTier, SearchEngine};

#[test]
fn test_promoted_exact_match_sorts_first_on_tie() {
    let mut plain = coded_item(20, "NQS_F4GM", "Sink");
    plain.stock_eligible = false;
    let promoted = ranked_item(coded_item(21, "nqs_f4gm", "Sink"), true, 0, Lifecycle::Normal);
    let engine = SearchEngine::new(catalog_of(vec![plain, promoted]), EngineConfig::default()).unwrap();

    let page = search(&engine, "NQS_F4GM");

    assert_eq!(page.tier, MatchTier::Exact);
    assert_eq!(result_ids(&page), vec![21, 20]);
    assert_eq!(page.items[0].scores, page.items[1].scores);
}

#[test]
fn test_configured_promoted_code() {
    let items = vec![coded_item(1, "AAA_1", "Sink"), coded_item(2, "BBB_2", "Sink")];
    let config = EngineConfig {
        promoted_codes: vec!["bbb_2".into()],
        ..EngineConfig::default()
    };
    let engine = SearchEngine::new(catalog_of(items), config).unwrap();

    let page = search(&engine, "sink");

    assert_eq!(result_ids(&page), vec![2, 1]);
    assert!(page.items[0].promoted);
    assert!(!page.items[1].promoted);
}

#[test]
fn test_better_similarity_beats_lower_id() {
    let items = vec![named_item(1, "Sink"), named_item(2, "Modern Sink")];
    let engine = SearchEngine::new(catalog_of(items), EngineConfig::default()).unwrap();

    let page = search(&engine, "modern sink");

    assert_eq!(page.tier, MatchTier::Partial);
    assert_eq!(result_ids(&page), vec![2, 1]);
    assert!(page.items[0].scores.avg > page.items[1].scores.avg);
}

#[test]
fn test_business_keys_break_similarity_ties() {
    let items = vec![
        ranked_item(named_item(1, "Sink"), false, 0, Lifecycle::Other),
        ranked_item(named_item(2, "Sink"), false, 0, Lifecycle::Normal),
        ranked_item(named_item(3, "Sink"), false, 0, Lifecycle::New),
        ranked_item(named_item(4, "Sink"), false, 9, Lifecycle::Other),
        ranked_item(named_item(5, "Sink"), false, 0, Lifecycle::Normal),
    ];
    let engine = SearchEngine::new(catalog_of(items), EngineConfig::default()).unwrap();

    let page = search(&engine, "sink");

    // priority 9 first, then New, Normal (by id), Other
    assert_eq!(result_ids(&page), vec![4, 3, 2, 5, 1]);
}

#[test]
fn test_core_name_hit_outranks_tag_hit() {
    let mut tagged = named_item(1, "Cabinet");
    tagged
        .names
        .get_mut(&katalog::Language::En)
        .unwrap()
        .tags
        .push("sink".into());
    let core = named_item(2, "Sink");
    let engine = SearchEngine::new(catalog_of(vec![tagged, core]), EngineConfig::default()).unwrap();

    let page = search(&engine, "sink");

    assert_eq!(result_ids(&page), vec![2, 1]);
}

#[test]
fn test_ranking_is_deterministic() {
    let engine = engine();
    let first = search(&engine, "");
    for _ in 0..5 {
        assert_eq!(result_ids(&search(&engine, "")), result_ids(&first));
    }
}
