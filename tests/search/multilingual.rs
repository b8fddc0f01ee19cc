//! Language handling: per-language vectors, diacritics, Cyrillic,
//! connector trimming, tag parsing and the fallback policy.

use crate::common::*;
use katalog::{EngineConfig, Language, MatchTier, SearchError, SearchRequest};
use std::collections::BTreeSet;

#[test]
fn test_polish_query_with_diacritics() {
    let engine = engine();
    let page = engine
        .search(&SearchRequest::new("umywalka łazienkowa", "pl"))
        .unwrap();

    assert_eq!(page.language, Language::Pl);
    assert_eq!(page.tier, MatchTier::Partial);
    assert_eq!(page.items[0].id, ids::MODERN_SINK);
    let found: BTreeSet<u64> = result_ids(&page).into_iter().collect();
    assert_eq!(
        found,
        BTreeSet::from([ids::MODERN_SINK, ids::SINK_CABINET, ids::BASIN_MIXER])
    );
    assert_eq!(page.items[0].names.core, "Nowoczesna Umywalka Łazienkowa");
}

#[test]
fn test_query_without_diacritics_matches_text_with_them() {
    let engine = engine();
    let page = engine
        .search(&SearchRequest::new("lazienkowa", "pl"))
        .unwrap();

    assert_eq!(result_ids(&page), vec![ids::MODERN_SINK]);
}

#[test]
fn test_items_without_text_in_language_are_skipped() {
    let engine = engine();
    let page = engine
        .search(&SearchRequest::new("umywalka", "pl"))
        .unwrap();

    // tub, shower, discontinued sink and kitchen tap have no Polish text
    assert_eq!(page.skipped, 4);
    assert!(!result_ids(&page).contains(&ids::BATH_TUB));
}

#[test]
fn test_cyrillic_query_with_interior_connector() {
    let engine = engine();
    let page = engine
        .search(&SearchRequest::new("раковина для ванной", "ru"))
        .unwrap();

    assert_eq!(page.tier, MatchTier::Partial);
    assert_eq!(result_ids(&page), vec![ids::MODERN_SINK]);

    let explained = engine
        .explain(ids::MODERN_SINK, "раковина для ванной", "ru")
        .unwrap()
        .unwrap();
    assert_eq!(explained.tokens, vec!["РАКОВИНА", "ВАННОЙ"]);
}

#[test]
fn test_connector_at_the_ends_is_kept() {
    let engine = engine();
    let explained = engine.explain(ids::MODERN_SINK, "for modern sink for", "en").unwrap().unwrap();
    assert_eq!(explained.tokens, vec!["FOR", "MODERN", "SINK", "FOR"]);

    let explained = engine.explain(ids::MODERN_SINK, "modern for the sink", "en").unwrap().unwrap();
    assert_eq!(explained.tokens, vec!["MODERN", "SINK"]);
}

#[test]
fn test_region_subtag_is_accepted() {
    let engine = engine();
    let page = engine.search(&SearchRequest::new("sink", "en-GB")).unwrap();
    assert_eq!(page.language, Language::En);
    assert!(!page.items.is_empty());
}

#[test]
fn test_unsupported_language_is_an_error_by_default() {
    let engine = engine();
    let err = engine.search(&SearchRequest::new("sink", "ja")).unwrap_err();
    assert!(matches!(err, SearchError::UnsupportedLanguage(tag) if tag == "ja"));
}

#[test]
fn test_unsupported_language_falls_back_when_configured() {
    let engine = engine_with(EngineConfig::default().with_fallback_language(Language::Pl));
    let page = engine.search(&SearchRequest::new("umywalka", "ja")).unwrap();
    assert_eq!(page.language, Language::Pl);
    assert!(result_ids(&page).contains(&ids::MODERN_SINK));
}

#[test]
fn test_finish_facet_labels_are_localized() {
    let engine = engine();
    let page = engine
        .search(&SearchRequest::new("umywalka", "pl"))
        .unwrap();

    let labels: Vec<(u32, Option<&str>)> = page
        .finishes
        .iter()
        .map(|f| (f.id, f.label.as_deref()))
        .collect();
    assert_eq!(labels, vec![(1, Some("Chrom")), (2, Some("Czarny Mat"))]);
}
