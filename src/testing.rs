// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::catalog::{CatalogItem, FinishId, FinishTable, ItemId, Lifecycle, LocalizedNames, MemoryCatalog};
use crate::lang::Language;

/// Create a searchable item (data- and stock-eligible) with no text.
///
/// This is the canonical implementation used across all tests.
pub fn item(id: ItemId) -> CatalogItem {
    CatalogItem {
        id,
        code: format!("ITEM_{}", id),
        data_eligible: true,
        stock_eligible: true,
        stock_quantity: 10,
        ..CatalogItem::default()
    }
}

/// Create a searchable item with an English core name.
pub fn named_item(id: ItemId, core: &str) -> CatalogItem {
    with_names(item(id), Language::En, core)
}

/// Add a core name in `lang`.
pub fn with_names(mut item: CatalogItem, lang: Language, core: &str) -> CatalogItem {
    item.names.insert(
        lang,
        LocalizedNames {
            core: core.to_string(),
            ..LocalizedNames::default()
        },
    );
    item
}

/// Create a searchable item with a code and an English core name.
pub fn coded_item(id: ItemId, code: &str, core: &str) -> CatalogItem {
    let mut item = named_item(id, core);
    item.code = code.to_string();
    item
}

/// Set the ranking keys of an item.
pub fn ranked_item(mut item: CatalogItem, promoted: bool, priority: i32, lifecycle: Lifecycle) -> CatalogItem {
    item.promoted = promoted;
    item.category.priority = priority;
    item.lifecycle = lifecycle;
    item
}

/// Tag an item with zones and finishes.
pub fn placed_item(mut item: CatalogItem, zones: &[&str], finishes: &[FinishId]) -> CatalogItem {
    item.zones = zones.iter().map(|z| z.to_string()).collect();
    item.finishes = finishes.iter().copied().collect();
    item
}

/// English/Polish finish labels for ids 1..=3.
pub fn finish_table() -> FinishTable {
    let mut table = FinishTable::new();
    table.insert(1, Language::En, "Chrome");
    table.insert(1, Language::Pl, "Chrom");
    table.insert(2, Language::En, "Matt Black");
    table.insert(2, Language::Pl, "Czarny Mat");
    table.insert(3, Language::En, "Brushed Gold");
    table
}

/// In-memory catalog over `items` with [`finish_table`].
pub fn catalog_of(items: Vec<CatalogItem>) -> MemoryCatalog {
    MemoryCatalog::new(items, finish_table())
}
