// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the ranking pipeline.
//!
//! Debug-mode assertions for the properties the pipeline promises its
//! callers. They compile to nothing in release builds and fail loudly in
//! tests and debug runs.
//!
//! | Contract function          | Property                                        |
//! |----------------------------|-------------------------------------------------|
//! | `check_weight_monotonic`   | n-th token of a field weighs `max(base - n, 1)` |
//! | `check_tier_exclusive`     | every result is in the active tier              |
//! | `check_stock_policy`       | non-stock items only appear as exact matches    |
//! | `check_ranking_sorted`     | results are in comparator order                 |
//! | `check_page_bounds`        | a page never holds more than `limit` items      |

// Field weights must stay ordered, or higher-priority fields stop winning ties.
const _: () = {
    use crate::vector::Field;
    assert!(Field::CoreName.base_weight() > Field::SecondaryName.base_weight());
    assert!(Field::SecondaryName.base_weight() > Field::Feature1.base_weight());
    assert!(Field::Feature1.base_weight() == Field::Feature2.base_weight());
    assert!(Field::Feature2.base_weight() > Field::Collection.base_weight());
    assert!(Field::Collection.base_weight() > Field::Tag.base_weight());
    assert!(Field::Tag.base_weight() > Field::Finish.base_weight());
    assert!(Field::Finish.base_weight() >= 1);
};

use std::cmp::Ordering;

use crate::ranking::{compare_results, RankedResult};
use crate::tier::MatchTier;
use crate::vector::{weight_at, WeightedTerm};

/// Check that the weights of one field's tokens follow `max(base - n, 1)`.
#[inline]
pub fn check_weight_monotonic(base: u8, terms: &[WeightedTerm]) {
    for (n, term) in terms.iter().enumerate() {
        debug_assert_eq!(
            term.weight,
            weight_at(base, n),
            "Contract violation: token {} ({}) of a base-{} field has weight {}",
            n,
            term.term,
            base,
            term.weight
        );
    }
}

/// Check that no result sits below (or above) the active tier.
#[inline]
pub fn check_tier_exclusive(results: &[RankedResult<'_>], active: MatchTier) {
    for result in results {
        debug_assert_eq!(
            result.tier,
            active,
            "Contract violation: item {} at tier {} in a {} result set",
            result.id(),
            result.tier,
            active
        );
    }
}

/// Check that stock-ineligible items only appear as exact matches.
#[inline]
pub fn check_stock_policy(results: &[RankedResult<'_>]) {
    for result in results {
        debug_assert!(
            result.item.stock_eligible || result.tier == MatchTier::Exact,
            "Contract violation: stock-ineligible item {} listed at tier {}",
            result.id(),
            result.tier
        );
    }
}

/// Check that results are sorted by [`compare_results`].
#[inline]
pub fn check_ranking_sorted(results: &[RankedResult<'_>]) {
    for (i, pair) in results.windows(2).enumerate() {
        debug_assert!(
            compare_results(&pair[0], &pair[1]) != Ordering::Greater,
            "Contract violation: results[{}] (item {}) ranks after results[{}] (item {})",
            i,
            pair[0].id(),
            i + 1,
            pair[1].id()
        );
    }
}

#[inline]
pub fn check_page_bounds(page_len: usize, limit: usize) {
    debug_assert!(
        page_len <= limit,
        "Contract violation: page holds {} items, limit is {}",
        page_len,
        limit
    );
}
