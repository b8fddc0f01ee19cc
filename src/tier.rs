// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Match tiers: exact code → partial (code substring or text prefix) → fuzzy.
//!
//! Tiers are exclusive across the whole result set. If any item matches
//! exactly, only exact items are returned; otherwise if any item matches
//! partially, only partial items; only when neither exists does the fuzzy
//! scorer get a say. A user who typed a known SKU gets that SKU, not a
//! hundred items that happen to share a trigram with it.
//!
//! Stock policy sits here too: an item that is not stock-eligible survives
//! only as an exact code match.

use serde::Serialize;
use std::fmt;

use crate::catalog::CatalogItem;
use crate::normalize::normalize_term;
use crate::query::ParsedQuery;
use crate::vector::text_words;

/// Match quality of one item for one query. Higher is better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum MatchTier {
    /// No exact or partial match; a fuzzy candidate at best.
    #[default]
    Fuzzy = 0,
    Partial = 1,
    Exact = 2,
}

impl MatchTier {
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for MatchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MatchTier::Exact => "exact",
            MatchTier::Partial => "partial",
            MatchTier::Fuzzy => "fuzzy",
        })
    }
}

/// Which rule decided the tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TierReason {
    GlobalCode,
    InternalCode,
    CodeSubstring,
    FullText,
    NoMatch,
}

impl TierReason {
    pub fn tier(self) -> MatchTier {
        match self {
            TierReason::GlobalCode | TierReason::InternalCode => MatchTier::Exact,
            TierReason::CodeSubstring | TierReason::FullText => MatchTier::Partial,
            TierReason::NoMatch => MatchTier::Fuzzy,
        }
    }
}

/// Classify one item. `vector_text` is the item's serialized vector in the
/// request language.
pub fn resolve_tier(item: &CatalogItem, query: &ParsedQuery, vector_text: &str) -> TierReason {
    if let Some(ean) = item.ean.as_deref() {
        let ean = normalize_term(ean.trim());
        if !ean.is_empty() && query.raw_tokens.iter().any(|t| *t == ean) {
            return TierReason::GlobalCode;
        }
    }

    let code = normalize_term(item.code.trim());
    if !code.is_empty() {
        if query.perfect_codes.iter().any(|c| *c == code) {
            return TierReason::InternalCode;
        }
        if query.contains_patterns.iter().any(|p| p.matches(&code)) {
            return TierReason::CodeSubstring;
        }
    }

    let words = text_words(vector_text);
    if query.full_text.matches_any(words.iter().map(String::as_str)) {
        return TierReason::FullText;
    }

    TierReason::NoMatch
}

/// Non-exact matches require stock eligibility; exact code lookups bypass it.
pub fn passes_stock(item: &CatalogItem, tier: MatchTier) -> bool {
    tier == MatchTier::Exact || item.stock_eligible
}

/// The single tier the result set is drawn from: the best one present.
pub fn active_tier<I>(tiers: I) -> MatchTier
where
    I: IntoIterator<Item = MatchTier>,
{
    tiers.into_iter().max().unwrap_or(MatchTier::Fuzzy)
}
