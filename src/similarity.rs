// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy scoring of a query against a weighted vector.
//!
//! Two figures per item:
//!
//! - `avg`: for each query term, the best pair score against any vector
//!   term, averaged over query terms.
//! - `avg_without_worst`: a one-to-one assignment (a vector term matched to
//!   one query term is consumed), then the single worst query term is
//!   dropped before averaging.
//!
//! The second figure lets "modern bathroom sink xyzzy" still find the modern
//! bathroom sink: three strong matches and one miss. An item qualifies for
//! the fuzzy tier when either figure is strictly above the sensitivity.
//!
//! A pair score is the raw string similarity scaled up by the vector term's
//! weight, so a hit in the core name beats the same hit in a tag:
//!
//! ```text
//! pair = similarity(q, v) * (1 + weight_bonus * weight / MAX_WEIGHT)
//! ```

use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashSet;

use crate::vector::{WeightedVector, MAX_WEIGHT};

/// A normalized string similarity in `[0, 1]`.
pub trait Similarity: Send + Sync {
    fn similarity(&self, a: &str, b: &str) -> f64;
}

/// Trigram similarity: shared trigrams over all distinct trigrams.
///
/// Each word is padded with two spaces in front and one behind, so short
/// words and word starts still produce trigrams ("AB" → "  A", " AB", "AB ").
#[derive(Debug, Clone, Copy, Default)]
pub struct Trigram;

impl Similarity for Trigram {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        trigram_similarity(a, b)
    }
}

fn trigrams(text: &str) -> HashSet<[char; 3]> {
    let mut set = HashSet::new();
    for word in text.split(|c: char| !c.is_alphanumeric()).filter(|w| !w.is_empty()) {
        let padded: Vec<char> = "  "
            .chars()
            .chain(word.chars().flat_map(char::to_lowercase))
            .chain(std::iter::once(' '))
            .collect();
        for window in padded.windows(3) {
            set.insert([window[0], window[1], window[2]]);
        }
    }
    set
}

pub fn trigram_similarity(a: &str, b: &str) -> f64 {
    let ta = trigrams(a);
    let tb = trigrams(b);
    if ta.is_empty() || tb.is_empty() {
        return 0.0;
    }
    let shared = ta.intersection(&tb).count();
    let union = ta.len() + tb.len() - shared;
    shared as f64 / union as f64
}

/// The two similarity figures of one item.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Scores {
    pub avg: f64,
    pub avg_without_worst: f64,
}

impl Scores {
    pub const ZERO: Scores = Scores {
        avg: 0.0,
        avg_without_worst: 0.0,
    };

    /// Either figure strictly above the threshold.
    pub fn qualifies(&self, threshold: f64) -> bool {
        self.avg > threshold || self.avg_without_worst > threshold
    }
}

/// Scores one query against weighted vectors.
#[derive(Debug, Clone)]
pub struct Scorer<S = Trigram> {
    similarity: S,
    weight_bonus: f64,
}

impl Scorer<Trigram> {
    pub fn trigram(weight_bonus: f64) -> Self {
        Self::new(Trigram, weight_bonus)
    }
}

impl<S: Similarity> Scorer<S> {
    pub fn new(similarity: S, weight_bonus: f64) -> Self {
        Self {
            similarity,
            weight_bonus,
        }
    }

    fn pair_score(&self, query_term: &str, vector_term: &str, weight: u8) -> f64 {
        let raw = self.similarity.similarity(query_term, vector_term);
        if !raw.is_finite() || raw <= 0.0 {
            return 0.0;
        }
        raw * (1.0 + self.weight_bonus * f64::from(weight) / f64::from(MAX_WEIGHT))
    }

    /// Pair score matrix, `[query term][vector term]`.
    fn matrix(&self, query: &[&str], vector: &WeightedVector) -> Vec<Vec<f64>> {
        query
            .iter()
            .map(|q| {
                vector
                    .terms
                    .iter()
                    .map(|v| self.pair_score(q, &v.term, v.weight))
                    .collect()
            })
            .collect()
    }

    /// Both figures. An empty query or an empty vector scores zero.
    pub fn score(&self, query: &[&str], vector: &WeightedVector) -> Scores {
        if query.is_empty() || vector.is_empty() {
            return Scores::ZERO;
        }
        let matrix = self.matrix(query, vector);
        Scores {
            avg: mean(&best_per_term(&matrix)),
            avg_without_worst: mean_without_worst(&greedy_assignment(&matrix)),
        }
    }
}

/// Best score per query term, vector terms reusable.
pub fn best_per_term(matrix: &[Vec<f64>]) -> Vec<f64> {
    matrix
        .iter()
        .map(|row| row.iter().copied().fold(0.0, f64::max))
        .collect()
}

/// One-to-one assignment, best pair first. Each vector term is consumed by
/// the first query term it is assigned to; a query term left without any
/// free vector term scores zero. Ties resolve by lower query index, then
/// lower vector index, so the result is deterministic.
pub fn greedy_assignment(matrix: &[Vec<f64>]) -> Vec<f64> {
    let mut pairs: Vec<(f64, usize, usize)> = matrix
        .iter()
        .enumerate()
        .flat_map(|(q, row)| row.iter().enumerate().map(move |(v, s)| (*s, q, v)))
        .filter(|(s, _, _)| *s > 0.0)
        .collect();
    pairs.sort_by(|a, b| {
        b.0.total_cmp(&a.0)
            .then_with(|| a.1.cmp(&b.1))
            .then_with(|| a.2.cmp(&b.2))
    });

    let width = matrix.iter().map(Vec::len).max().unwrap_or(0);
    let mut assigned = vec![None; matrix.len()];
    let mut consumed = vec![false; width];
    for (score, q, v) in pairs {
        if assigned[q].is_none() && !consumed[v] {
            assigned[q] = Some(score);
            consumed[v] = true;
        }
    }
    assigned.into_iter().map(|s| s.unwrap_or(0.0)).collect()
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Mean after removing the single lowest value. With one value there is
/// nothing to drop and the mean is that value.
pub fn mean_without_worst(values: &[f64]) -> f64 {
    if values.len() <= 1 {
        return mean(values);
    }
    let worst = values
        .iter()
        .enumerate()
        .min_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(Ordering::Equal))
        .map(|(i, _)| i)
        .unwrap_or(0);
    let kept: Vec<f64> = values
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != worst)
        .map(|(_, v)| *v)
        .collect();
    mean(&kept)
}
