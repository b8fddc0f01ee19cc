// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for stored vector blobs.
//!
//! Blobs come from the catalog store and may be hand-edited or truncated.
//! Parsing must degrade rather than panic, and scoring any parsed vector
//! must stay finite and non-negative.

#![no_main]

use katalog::{Scorer, WeightedVector, MAX_WEIGHT};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (&str, &str)| {
    let (blob, query) = data;
    let vector = WeightedVector::parse(blob);

    for term in &vector.terms {
        assert!(term.weight >= 1);
        assert!(!term.term.is_empty());
    }

    // reparsing the canonical form is stable
    let canonical = vector.to_string();
    assert_eq!(WeightedVector::parse(&canonical), vector);

    let terms: Vec<&str> = query.split_whitespace().take(16).collect();
    let scores = Scorer::trigram(0.15).score(&terms, &vector);
    let ceiling = 1.0 + 0.15 * f64::from(u8::MAX) / f64::from(MAX_WEIGHT);
    for value in [scores.avg, scores.avg_without_worst] {
        assert!(value.is_finite());
        assert!((0.0..=ceiling).contains(&value), "score {} out of range", value);
    }
});
