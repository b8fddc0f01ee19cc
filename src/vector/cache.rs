// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Versioned vector sets and the cell they are published through.
//!
//! A [`VectorSet`] is immutable once built. Rebuilding after a catalog change
//! produces a new set with a higher version; [`SnapshotCell::publish`] swaps
//! the `Arc` in one step. A reader holding the old `Arc` keeps a complete old
//! set, a reader arriving after the swap sees the complete new one. No reader
//! ever observes a set being filled in.
//!
//! The lock inside the cell guards only the pointer swap and the clone of the
//! `Arc`, never any real work.

use parking_lot::{Mutex, RwLock};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::catalog::{CatalogItem, FinishTable, ItemId};
use crate::lang::Language;
use crate::vector::build_vector;

/// A shared pointer to the current version of `T`, swapped atomically.
#[derive(Debug)]
pub struct SnapshotCell<T> {
    current: RwLock<Arc<T>>,
    writer: Mutex<()>,
}

impl<T> SnapshotCell<T> {
    pub fn new(value: T) -> Self {
        Self {
            current: RwLock::new(Arc::new(value)),
            writer: Mutex::new(()),
        }
    }

    /// The current snapshot. Cheap: one `Arc` clone under a read lock.
    pub fn load(&self) -> Arc<T> {
        Arc::clone(&self.current.read())
    }

    /// Replace the current snapshot, returning the previous one.
    pub fn publish(&self, value: T) -> Arc<T> {
        let _writer = self.writer.lock();
        let next = Arc::new(value);
        std::mem::replace(&mut *self.current.write(), next)
    }

    /// Build the next snapshot from the current one and publish it.
    ///
    /// Updates are serialized by a separate writer mutex, so two concurrent
    /// updates never start from the same base and lose a change. The build
    /// runs outside the snapshot lock; readers keep loading the old value
    /// until the swap.
    pub fn update<F>(&self, f: F) -> Arc<T>
    where
        F: FnOnce(&T) -> T,
    {
        let _writer = self.writer.lock();
        let base = self.load();
        let next = Arc::new(f(&base));
        *self.current.write() = Arc::clone(&next);
        next
    }
}

/// Serialized weighted vectors for every (item, language) pair that has text.
#[derive(Debug, Clone, Default)]
pub struct VectorSet {
    version: u64,
    blobs: HashMap<(ItemId, Language), Arc<str>>,
}

impl VectorSet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn len(&self) -> usize {
        self.blobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blobs.is_empty()
    }

    pub fn get(&self, item: ItemId, lang: Language) -> Option<&str> {
        self.blobs.get(&(item, lang)).map(|blob| &**blob)
    }

    /// Build vectors for all items in all languages from scratch.
    pub fn build(items: &[CatalogItem], finishes: &FinishTable, version: u64) -> Self {
        let blobs = vectors_for(items, finishes).into_iter().collect();
        VectorSet { version, blobs }
    }

    /// Copy-on-write rebuild: the result shares every unchanged blob with
    /// `self`, replaces the entries of `changed` items and drops the entries
    /// of `removed` ones.
    pub fn rebuild(&self, changed: &[CatalogItem], removed: &[ItemId], finishes: &FinishTable) -> Self {
        let mut blobs = self.blobs.clone();
        let stale: HashSet<ItemId> = changed
            .iter()
            .map(|item| item.id)
            .chain(removed.iter().copied())
            .collect();
        blobs.retain(|(id, _), _| !stale.contains(id));
        blobs.extend(vectors_for(changed, finishes));
        VectorSet {
            version: self.version + 1,
            blobs,
        }
    }
}

fn item_vectors(item: &CatalogItem, finishes: &FinishTable) -> Vec<((ItemId, Language), Arc<str>)> {
    Language::ALL
        .iter()
        .filter_map(|&lang| {
            let vector = build_vector(item, lang, finishes)?;
            Some(((item.id, lang), Arc::from(vector.to_string())))
        })
        .collect()
}

#[cfg(feature = "parallel")]
fn vectors_for(items: &[CatalogItem], finishes: &FinishTable) -> Vec<((ItemId, Language), Arc<str>)> {
    items
        .par_iter()
        .flat_map_iter(|item| item_vectors(item, finishes))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn vectors_for(items: &[CatalogItem], finishes: &FinishTable) -> Vec<((ItemId, Language), Arc<str>)> {
    items
        .iter()
        .flat_map(|item| item_vectors(item, finishes))
        .collect()
}
