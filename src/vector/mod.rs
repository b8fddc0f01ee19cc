// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Weighted term vectors: one per (item, language).
//!
//! The vector is the item's localized text flattened into a sequence of
//! `(weight, TERM)` pairs. Fields are concatenated in priority order, and the
//! weight of a token depends on which field it came from and how far into
//! the field it sits:
//!
//! | Field          | Base weight | Tokens                       |
//! |----------------|-------------|------------------------------|
//! | core name      | 13          | 13, 12, 11, …, floor 1       |
//! | secondary name | 8           | 8, 7, 6, …                   |
//! | feature 1      | 5           | 5, 4, …                      |
//! | feature 2      | 5           | 5, 4, …                      |
//! | collection     | 3           | 3, 2, 1, 1, …                |
//! | each tag       | 2           | 2, 1, 1, …                   |
//! | each finish    | 1           | 1, 1, …                      |
//!
//! The serialized form is the space-joined `"<weight>:<TERM>"` list, e.g.
//! `"13:MODERN 12:BATHROOM 11:SINK 3:AURA"`. That blob is what the catalog
//! store hands back at query time.

pub mod cache;

use std::fmt;

use crate::catalog::{CatalogItem, FinishTable};
use crate::contracts;
use crate::lang::Language;
use crate::normalize::{is_word_char, normalize_term, split_tokens};

/// Source field of a vector term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    CoreName,
    SecondaryName,
    Feature1,
    Feature2,
    Collection,
    Tag,
    Finish,
}

impl Field {
    pub const fn base_weight(self) -> u8 {
        match self {
            Field::CoreName => 13,
            Field::SecondaryName => 8,
            Field::Feature1 | Field::Feature2 => 5,
            Field::Collection => 3,
            Field::Tag => 2,
            Field::Finish => 1,
        }
    }
}

/// Highest weight any term can carry.
pub const MAX_WEIGHT: u8 = Field::CoreName.base_weight();

/// Weight of the `position`-th token of a field: `max(base - position, 1)`.
pub fn weight_at(base: u8, position: usize) -> u8 {
    let base = usize::from(base);
    base.saturating_sub(position).max(1) as u8
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedTerm {
    pub weight: u8,
    pub term: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeightedVector {
    pub terms: Vec<WeightedTerm>,
}

impl WeightedVector {
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Append one field's tokens. Empty text adds nothing.
    pub fn push_field(&mut self, field: Field, text: &str) {
        let base = field.base_weight();
        let start = self.terms.len();
        let tokens = split_tokens(text)
            .into_iter()
            .map(normalize_term)
            .filter(|t| !t.is_empty());
        for (position, term) in tokens.enumerate() {
            self.terms.push(WeightedTerm {
                weight: weight_at(base, position),
                term,
            });
        }
        contracts::check_weight_monotonic(base, &self.terms[start..]);
    }

    /// Parse a serialized blob. Malformed entries degrade instead of failing:
    /// a piece without a numeric `weight:` prefix is a weight-1 term.
    pub fn parse(blob: &str) -> Self {
        let terms = blob
            .split_whitespace()
            .filter_map(|piece| {
                let (weight, term) = match piece.split_once(':') {
                    Some((w, t)) => match w.parse::<u8>() {
                        Ok(w) => (w.max(1), t),
                        Err(_) => (1, piece),
                    },
                    None => (1, piece),
                };
                if term.is_empty() {
                    None
                } else {
                    Some(WeightedTerm {
                        weight,
                        term: term.to_string(),
                    })
                }
            })
            .collect();
        WeightedVector { terms }
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(|t| t.term.as_str())
    }
}

impl fmt::Display for WeightedVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, t) in self.terms.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}:{}", t.weight, t.term)?;
        }
        Ok(())
    }
}

/// Plain tokens of a serialized blob, weights stripped. Used for full-text
/// matching without allocating a full [`WeightedVector`].
pub fn blob_tokens(blob: &str) -> impl Iterator<Item = &str> {
    blob.split_whitespace().map(|piece| match piece.split_once(':') {
        Some((w, t)) if w.parse::<u8>().is_ok() => t,
        _ => piece,
    })
}

/// Words of a serialized blob as a full-text parser sees them, the same way
/// query terms are cleaned. A token with separators yields its joined form
/// and each part: `WALL-HUNG` gives `WALLHUNG`, `WALL` and `HUNG`;
/// `(60CM)` gives `60CM`.
pub fn text_words(blob: &str) -> Vec<String> {
    let mut words = Vec::new();
    for token in blob_tokens(blob) {
        if token.chars().all(is_word_char) {
            words.push(token.to_string());
            continue;
        }
        let joined: String = token.chars().filter(|c| is_word_char(*c)).collect();
        if joined.is_empty() {
            continue;
        }
        let parts: Vec<&str> = token.split(|c: char| !is_word_char(c)).filter(|p| !p.is_empty()).collect();
        words.push(joined);
        if parts.len() > 1 {
            words.extend(parts.into_iter().map(str::to_string));
        }
    }
    words
}

/// Build the vector for `item` in `lang`.
///
/// Returns `None` when the item has no text in that language at all; such
/// pairs are simply absent from the vector cache.
pub fn build_vector(item: &CatalogItem, lang: Language, finishes: &FinishTable) -> Option<WeightedVector> {
    let names = item.names(lang)?;
    let mut vector = WeightedVector::default();

    vector.push_field(Field::CoreName, &names.core);
    let optional = [
        (Field::SecondaryName, &names.secondary),
        (Field::Feature1, &names.feature1),
        (Field::Feature2, &names.feature2),
        (Field::Collection, &names.collection),
    ];
    for (field, text) in optional {
        if let Some(text) = text {
            vector.push_field(field, text);
        }
    }
    for tag in &names.tags {
        vector.push_field(Field::Tag, tag);
    }
    for label in finishes.labels_for(item, lang) {
        vector.push_field(Field::Finish, label);
    }

    Some(vector)
}
