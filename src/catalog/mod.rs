// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The catalog the engine searches, and the contract it reads it through.
//!
//! The engine never owns catalog data. It asks a [`CatalogStore`] for a
//! snapshot ([`CatalogView`]) at the start of each request and works on that
//! snapshot alone, so a concurrent update is either fully visible to a
//! request or not at all.
//!
//! [`MemoryCatalog`] is the in-process store: items, finish labels and
//! weighted vectors published together as one immutable snapshot.

mod memory;

pub use memory::{CatalogFile, CatalogSnapshot, FinishRecord, MemoryCatalog};

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use crate::lang::Language;

pub type ItemId = u64;
pub type FinishId = u32;

/// Where an item is in its product lifecycle. Ranked New > Normal > Other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lifecycle {
    New,
    #[default]
    Normal,
    Other,
}

impl Lifecycle {
    /// Ranking weight; higher sorts first.
    pub fn rank(self) -> u8 {
        match self {
            Lifecycle::New => 2,
            Lifecycle::Normal => 1,
            Lifecycle::Other => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Price {
    pub net: Option<f64>,
    pub gross: Option<f64>,
    /// Pre-promotion gross price, when the item is discounted.
    pub previous_gross: Option<f64>,
    pub currency: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryRef {
    pub id: u32,
    /// Higher sorts first among otherwise equal results.
    pub priority: i32,
}

/// Localized text of one item in one language.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalizedNames {
    pub core: String,
    pub secondary: Option<String>,
    pub feature1: Option<String>,
    pub feature2: Option<String>,
    pub collection: Option<String>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogItem {
    pub id: ItemId,
    /// EAN / global trade code.
    pub ean: Option<String>,
    /// Internal SKU code, e.g. `NQS_F4GM`.
    pub code: String,
    /// May be listed by non-exact searches. `false` when absent from a
    /// catalog file.
    pub stock_eligible: bool,
    /// May be searched at all. `false` when absent from a catalog file, so an
    /// item without the flag is never listed; `MemoryCatalog` warns with the
    /// count at load.
    pub data_eligible: bool,
    pub stock_quantity: u32,
    pub price: Price,
    pub promoted: bool,
    pub lifecycle: Lifecycle,
    pub category: CategoryRef,
    pub zones: BTreeSet<String>,
    pub finishes: BTreeSet<FinishId>,
    pub image: Option<String>,
    pub names: BTreeMap<Language, LocalizedNames>,
}

impl CatalogItem {
    pub fn names(&self, lang: Language) -> Option<&LocalizedNames> {
        self.names.get(&lang)
    }
}

/// Finish labels by finish id and language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinishTable {
    labels: BTreeMap<FinishId, BTreeMap<Language, String>>,
}

impl FinishTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: FinishId, lang: Language, label: impl Into<String>) {
        self.labels.entry(id).or_default().insert(lang, label.into());
    }

    /// Label in `lang`, falling back to English.
    pub fn label(&self, id: FinishId, lang: Language) -> Option<&str> {
        let labels = self.labels.get(&id)?;
        labels
            .get(&lang)
            .or_else(|| labels.get(&Language::En))
            .map(String::as_str)
    }

    /// Labels of all the item's finishes in `lang`, in finish id order.
    pub fn labels_for<'a>(&'a self, item: &'a CatalogItem, lang: Language) -> impl Iterator<Item = &'a str> + 'a {
        item.finishes.iter().filter_map(move |id| self.label(*id, lang))
    }
}

/// A read-only, consistent view of the catalog for one request.
pub trait CatalogView: Send + Sync {
    /// Every item, eligible or not.
    fn items(&self) -> &[CatalogItem];

    /// Serialized weighted vector for the pair, `None` if never built.
    fn vector_text(&self, item: ItemId, lang: Language) -> Option<&str>;

    fn finish_label(&self, finish: FinishId, lang: Language) -> Option<&str>;

    /// Monotonic snapshot version, for logging.
    fn version(&self) -> u64 {
        0
    }
}

/// Hands out snapshots. Implementations must never expose a half-updated one.
pub trait CatalogStore: Send + Sync {
    type View: CatalogView;

    fn snapshot(&self) -> Arc<Self::View>;
}

impl<T: CatalogStore + ?Sized> CatalogStore for Arc<T> {
    type View = T::View;

    fn snapshot(&self) -> Arc<Self::View> {
        (**self).snapshot()
    }
}
