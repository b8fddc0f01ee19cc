// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for whole search requests against a fixed catalog.
//!
//! Whatever the query, language tag or pagination, a request either fails
//! with a typed error or returns a page that honours the ranking rules.

#![no_main]

use std::sync::OnceLock;

use arbitrary::Arbitrary;
use katalog::testing::{catalog_of, coded_item, ranked_item, with_names};
use katalog::{EngineConfig, Language, Lifecycle, MatchTier, MemoryCatalog, SearchEngine, SearchRequest};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Request {
    query: String,
    lang: String,
    page: i8,
    limit: i8,
}

fn engine() -> &'static SearchEngine<MemoryCatalog> {
    static ENGINE: OnceLock<SearchEngine<MemoryCatalog>> = OnceLock::new();
    ENGINE.get_or_init(|| {
        let names = [
            ("NQS_F4GM", "Modern Bathroom Sink", "Nowoczesna umywalka"),
            ("NQS_F4GM_60", "Sink Cabinet", "Szafka pod umywalkę"),
            ("BMX_100", "Basin Mixer", "Bateria umywalkowa"),
            ("TUB_170", "Freestanding Bath Tub", "Wanna wolnostojąca"),
            ("KT_TAP", "Kitchen Tap", "Bateria kuchenna"),
        ];
        let items = names
            .iter()
            .enumerate()
            .map(|(i, (code, en, pl))| {
                let mut item = ranked_item(coded_item(i as u64 + 1, code, en), i == 0, 0, Lifecycle::Normal);
                item.stock_eligible = i % 2 == 0;
                with_names(item, Language::Pl, pl)
            })
            .collect();
        SearchEngine::new(catalog_of(items), EngineConfig::default()).expect("default config is valid")
    })
}

fuzz_target!(|req: Request| {
    let query: String = req.query.chars().take(200).collect();
    let request = SearchRequest::new(query, req.lang).page(i64::from(req.page), i64::from(req.limit));
    let Ok(page) = engine().search(&request) else {
        return;
    };

    assert!(page.items.len() <= page.limit);
    assert!(page.total <= 5);
    for item in &page.items {
        assert_eq!(item.tier, page.tier);
        assert!(item.availability.stock_eligible || item.tier == MatchTier::Exact);
    }
    if let Some(first_plain) = page.items.iter().position(|i| !i.promoted) {
        assert!(page.items[first_plain..].iter().all(|i| !i.promoted));
    }
});
