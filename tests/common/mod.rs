//! Shared test utilities and fixtures.

#![allow(dead_code)]

use katalog::testing::{coded_item, placed_item, ranked_item, with_names};
use katalog::{
    CatalogItem, EngineConfig, ItemId, Language, Lifecycle, MemoryCatalog, SearchEngine, SearchPage,
    SearchRequest,
};

// Re-export canonical test utilities from katalog::testing
pub use katalog::testing::{catalog_of, finish_table, item, named_item};

// ============================================================================
// FIXTURE CATALOG
// ============================================================================

/// Item ids of the showroom catalog.
pub mod ids {
    pub const MODERN_SINK: u64 = 1;
    pub const SINK_CABINET: u64 = 2;
    pub const BASIN_MIXER: u64 = 3;
    pub const BATH_TUB: u64 = 4;
    pub const SHOWER_SET: u64 = 5;
    pub const DISCONTINUED_SINK: u64 = 6;
    pub const HIDDEN_SINK: u64 = 7;
    pub const KITCHEN_TAP: u64 = 8;
}

/// A small bathroom showroom in English, Polish and Russian.
///
/// - 1 `NQS_F4GM`: Modern Bathroom Sink, promoted, bathroom, chrome
/// - 2 `NQS_F4GM_60`: Sink Cabinet, bathroom, matt black
/// - 3 `BMX_100`: Basin Mixer, bathroom + kitchen, chrome, new
/// - 4 `TUB_170`: Freestanding Bath Tub, bathroom, out of stock
/// - 5 `SHW_SET`: Rain Shower Set, bathroom, brushed gold
/// - 6 `OLD_SINK`: Ceramic Sink, not stock-eligible
/// - 7 `HID_1`: Hidden Sink, not data-eligible
/// - 8 `KT_TAP`: Kitchen Tap, kitchen, matt black, priority 5
pub fn showroom_items() -> Vec<CatalogItem> {
    let mut modern = placed_item(
        ranked_item(
            coded_item(ids::MODERN_SINK, "NQS_F4GM", "Modern Bathroom Sink"),
            true,
            0,
            Lifecycle::Normal,
        ),
        &["bathroom"],
        &[1],
    );
    modern.ean = Some("5901234123457".into());
    modern = with_names(modern, Language::Pl, "Nowoczesna Umywalka Łazienkowa");
    modern = with_names(modern, Language::Ru, "Современная раковина для ванной");

    let cabinet = with_names(
        placed_item(coded_item(ids::SINK_CABINET, "NQS_F4GM_60", "Sink Cabinet"), &["bathroom"], &[2]),
        Language::Pl,
        "Szafka pod umywalkę",
    );

    let mixer = with_names(
        placed_item(
            ranked_item(
                coded_item(ids::BASIN_MIXER, "BMX_100", "Basin Mixer"),
                false,
                0,
                Lifecycle::New,
            ),
            &["bathroom", "kitchen"],
            &[1],
        ),
        Language::Pl,
        "Bateria umywalkowa",
    );

    let mut tub = placed_item(coded_item(ids::BATH_TUB, "TUB_170", "Freestanding Bath Tub"), &["bathroom"], &[]);
    tub.stock_quantity = 0;

    let shower = placed_item(coded_item(ids::SHOWER_SET, "SHW_SET", "Rain Shower Set"), &["bathroom"], &[3]);

    let mut old = coded_item(ids::DISCONTINUED_SINK, "OLD_SINK", "Ceramic Sink");
    old.stock_eligible = false;
    old.lifecycle = Lifecycle::Other;

    let mut hidden = coded_item(ids::HIDDEN_SINK, "HID_1", "Hidden Sink");
    hidden.data_eligible = false;

    let kitchen = placed_item(
        ranked_item(coded_item(ids::KITCHEN_TAP, "KT_TAP", "Kitchen Tap"), false, 5, Lifecycle::Normal),
        &["kitchen"],
        &[2],
    );

    vec![modern, cabinet, mixer, tub, shower, old, hidden, kitchen]
}

pub fn showroom() -> MemoryCatalog {
    catalog_of(showroom_items())
}

pub fn engine() -> SearchEngine<MemoryCatalog> {
    engine_with(EngineConfig::default())
}

pub fn engine_with(config: EngineConfig) -> SearchEngine<MemoryCatalog> {
    SearchEngine::new(showroom(), config).expect("valid config")
}

/// Run `query` in English, first page of 20.
pub fn search(engine: &SearchEngine<MemoryCatalog>, query: &str) -> SearchPage {
    engine
        .search(&SearchRequest::new(query, "en"))
        .expect("search succeeds")
}

pub fn result_ids(page: &SearchPage) -> Vec<ItemId> {
    page.items.iter().map(|i| i.id).collect()
}
