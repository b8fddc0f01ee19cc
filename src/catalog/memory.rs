// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-memory catalog store with rebuild-and-swap updates.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::Arc;

use tracing::{info, warn};

use super::{CatalogItem, CatalogStore, CatalogView, FinishId, FinishTable, ItemId};
use crate::error::Result;
use crate::lang::Language;
use crate::vector::cache::{SnapshotCell, VectorSet};

/// One finish and its labels, as stored in a catalog file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FinishRecord {
    pub id: FinishId,
    pub labels: BTreeMap<Language, String>,
}

/// On-disk JSON layout of a catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogFile {
    pub finishes: Vec<FinishRecord>,
    pub items: Vec<CatalogItem>,
}

impl CatalogFile {
    fn finish_table(&self) -> FinishTable {
        let mut table = FinishTable::new();
        for record in &self.finishes {
            for (lang, label) in &record.labels {
                table.insert(record.id, *lang, label.clone());
            }
        }
        table
    }
}

/// Items, finish labels and vectors of one catalog version.
#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    items: Vec<CatalogItem>,
    finishes: FinishTable,
    vectors: VectorSet,
}

impl CatalogSnapshot {
    pub fn new(items: Vec<CatalogItem>, finishes: FinishTable) -> Self {
        let items = latest_per_id(items);
        let vectors = VectorSet::build(&items, &finishes, 1);
        Self {
            items,
            finishes,
            vectors,
        }
    }

    pub fn vectors(&self) -> &VectorSet {
        &self.vectors
    }

    pub fn finishes(&self) -> &FinishTable {
        &self.finishes
    }

    pub fn item(&self, id: ItemId) -> Option<&CatalogItem> {
        self.items
            .binary_search_by_key(&id, |item| item.id)
            .ok()
            .map(|idx| &self.items[idx])
    }

    /// Next version with `changed` inserted or replaced and `removed` gone.
    /// Only the touched items get their vectors rebuilt.
    fn apply(&self, changed: &[CatalogItem], removed: &[ItemId]) -> Self {
        let changed = latest_per_id(changed.to_vec());
        let touched: HashSet<ItemId> = changed
            .iter()
            .map(|item| item.id)
            .chain(removed.iter().copied())
            .collect();

        let mut items: Vec<CatalogItem> = self
            .items
            .iter()
            .filter(|item| !touched.contains(&item.id))
            .cloned()
            .collect();
        items.extend(changed.iter().cloned());
        items.sort_by_key(|item| item.id);

        Self {
            vectors: self.vectors.rebuild(&changed, removed, &self.finishes),
            finishes: self.finishes.clone(),
            items,
        }
    }
}

/// Sorted by id; of several items sharing an id the last one wins, for the
/// item list and its vectors alike.
fn latest_per_id(items: Vec<CatalogItem>) -> Vec<CatalogItem> {
    let mut by_id = BTreeMap::new();
    for item in items {
        by_id.insert(item.id, item);
    }
    by_id.into_values().collect()
}

impl CatalogView for CatalogSnapshot {
    fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    fn vector_text(&self, item: ItemId, lang: Language) -> Option<&str> {
        self.vectors.get(item, lang)
    }

    fn finish_label(&self, finish: FinishId, lang: Language) -> Option<&str> {
        self.finishes.label(finish, lang)
    }

    fn version(&self) -> u64 {
        self.vectors.version()
    }
}

/// Catalog held in process memory.
#[derive(Debug)]
pub struct MemoryCatalog {
    cell: SnapshotCell<CatalogSnapshot>,
}

impl MemoryCatalog {
    pub fn new(items: Vec<CatalogItem>, finishes: FinishTable) -> Self {
        let snapshot = CatalogSnapshot::new(items, finishes);
        let unsearchable = snapshot.items.iter().filter(|i| !i.data_eligible).count();
        let no_stock = snapshot.items.iter().filter(|i| !i.stock_eligible).count();
        info!(
            items = snapshot.items.len(),
            vectors = snapshot.vectors.len(),
            unsearchable,
            no_stock,
            "catalog loaded"
        );
        if unsearchable > 0 {
            warn!(unsearchable, "items without data_eligible are never listed");
        }
        Self {
            cell: SnapshotCell::new(snapshot),
        }
    }

    pub fn from_catalog_file(file: CatalogFile) -> Self {
        let finishes = file.finish_table();
        Self::new(file.items, finishes)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Ok(Self::from_catalog_file(file))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let file: CatalogFile = serde_json::from_reader(reader)?;
        Ok(Self::from_catalog_file(file))
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        Self::from_reader(BufReader::new(File::open(path)?))
    }

    /// Insert or replace items, rebuilding only their vectors.
    pub fn upsert(&self, items: Vec<CatalogItem>) -> u64 {
        self.publish_change(&items, &[])
    }

    pub fn remove(&self, ids: &[ItemId]) -> u64 {
        self.publish_change(&[], ids)
    }

    fn publish_change(&self, changed: &[CatalogItem], removed: &[ItemId]) -> u64 {
        let next = self.cell.update(|current| current.apply(changed, removed));
        info!(
            version = next.version(),
            changed = changed.len(),
            removed = removed.len(),
            "vector snapshot published"
        );
        next.version()
    }
}

impl CatalogStore for MemoryCatalog {
    type View = CatalogSnapshot;

    fn snapshot(&self) -> Arc<CatalogSnapshot> {
        self.cell.load()
    }
}
