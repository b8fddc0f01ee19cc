// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: filters, ordering, facets and pagination.
//!
//! Ranking runs after tier selection, so every result compared here is in
//! the same tier. Order is decided by business keys first and similarity
//! second:
//!
//! 1. promoted (promoted first)
//! 2. `avg` similarity (higher first)
//! 3. `avg_without_worst` similarity (higher first)
//! 4. category priority (higher first)
//! 5. lifecycle rank (New > Normal > Other)
//! 6. item id (lower first), so the order is total and pages are stable
//!
//! Facets are disjunctive: the zone facet is computed with the finish filter
//! applied but not the zone filter, and the other way round. Picking one zone
//! in a filter UI therefore does not hide the other zones.

use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::catalog::{CatalogItem, CatalogView, FinishId, ItemId};
use crate::lang::Language;
use crate::similarity::Scores;
use crate::tier::{MatchTier, TierReason};

/// One candidate with everything needed to order it.
#[derive(Debug, Clone)]
pub struct RankedResult<'a> {
    pub item: &'a CatalogItem,
    pub tier: MatchTier,
    pub reason: TierReason,
    pub scores: Scores,
    /// Per-item flag or a configured promoted code.
    pub promoted: bool,
}

impl<'a> RankedResult<'a> {
    pub fn id(&self) -> ItemId {
        self.item.id
    }
}

/// Compare two results for ranking. `Less` means `a` is shown first.
pub fn compare_results(a: &RankedResult<'_>, b: &RankedResult<'_>) -> Ordering {
    b.promoted
        .cmp(&a.promoted)
        .then_with(|| b.scores.avg.total_cmp(&a.scores.avg))
        .then_with(|| b.scores.avg_without_worst.total_cmp(&a.scores.avg_without_worst))
        .then_with(|| b.item.category.priority.cmp(&a.item.category.priority))
        .then_with(|| b.item.lifecycle.rank().cmp(&a.item.lifecycle.rank()))
        .then_with(|| a.item.id.cmp(&b.item.id))
}

pub fn sort_results(results: &mut [RankedResult<'_>]) {
    results.sort_by(compare_results);
}

/// Optional zone and finish filters. An empty set means "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    pub zones: BTreeSet<String>,
    pub finishes: BTreeSet<FinishId>,
}

impl Filters {
    /// Item's zone tags intersect the requested zones.
    pub fn zone_ok(&self, item: &CatalogItem) -> bool {
        self.zones.is_empty() || !self.zones.is_disjoint(&item.zones)
    }

    /// Item is associated with at least one requested finish.
    pub fn finish_ok(&self, item: &CatalogItem) -> bool {
        self.finishes.is_empty() || !self.finishes.is_disjoint(&item.finishes)
    }

    pub fn matches(&self, item: &CatalogItem) -> bool {
        self.zone_ok(item) && self.finish_ok(item)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FinishFacet {
    pub id: FinishId,
    /// Label in the request language (English fallback); `None` if the
    /// finish has no label at all.
    pub label: Option<String>,
}

/// Filter values present in the candidate pool, for rendering filter UIs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Facets {
    pub zones: BTreeSet<String>,
    pub finishes: Vec<FinishFacet>,
}

impl Facets {
    /// Facets over the unfiltered candidate pool.
    pub fn collect<V: CatalogView + ?Sized>(
        pool: &[RankedResult<'_>],
        filters: &Filters,
        view: &V,
        lang: Language,
    ) -> Self {
        let mut zones = BTreeSet::new();
        let mut finish_ids = BTreeSet::new();
        for result in pool {
            let item = result.item;
            if filters.finish_ok(item) {
                zones.extend(item.zones.iter().cloned());
            }
            if filters.zone_ok(item) {
                finish_ids.extend(item.finishes.iter().copied());
            }
        }
        let finishes = finish_ids
            .into_iter()
            .map(|id| FinishFacet {
                id,
                label: view.finish_label(id, lang).map(str::to_string),
            })
            .collect();
        Facets { zones, finishes }
    }
}

/// Number of pages needed for `total` results. Zero results is zero pages.
pub fn page_count(total: usize, limit: usize) -> usize {
    if limit == 0 {
        return 0;
    }
    total.div_ceil(limit)
}

/// Slice `(page - 1) * limit .. page * limit` out of `items`. `page` is
/// 1-based. A page past the end is empty.
pub fn paginate<T>(items: Vec<T>, page: usize, limit: usize) -> Vec<T> {
    let start = page.saturating_sub(1).saturating_mul(limit);
    if start >= items.len() {
        return Vec::new();
    }
    items.into_iter().skip(start).take(limit).collect()
}
