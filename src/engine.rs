// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The request pipeline: raw query in, ranked page out.
//!
//! ```text
//! request ─▶ validate ─▶ language ─▶ ParsedQuery ─▶ snapshot
//!                                                      │
//!            ┌─────────────────────────────────────────┘
//!            ▼
//!      data-eligible items ─▶ vector lookup ─▶ tier + stock ─▶ active tier
//!                                                                  │
//!            ┌─────────────────────────────────────────────────────┘
//!            ▼
//!      similarity (fuzzy cut-off) ─▶ facets ─▶ filters ─▶ sort ─▶ page
//! ```
//!
//! Each request works on one catalog snapshot taken up front and shares
//! nothing mutable with other requests. Scoring is the only CPU-heavy step;
//! it runs after the eligibility, stock and tier cuts, so its cost follows
//! the surviving pool and not the catalog size. With the `parallel` feature
//! it is spread over rayon's pool in chunks, and the deadline is checked
//! between chunks.

use serde::Serialize;
use std::collections::{BTreeSet, HashSet};
use std::time::{Duration, Instant};

use tracing::{debug, info_span, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::catalog::{CatalogItem, CatalogStore, CatalogView, FinishId, ItemId, LocalizedNames, Price};
use crate::config::{EmptyQueryPolicy, EngineConfig};
use crate::contracts;
use crate::error::{Result, SearchError, SkipReason};
use crate::lang::Language;
use crate::normalize::normalize_term;
use crate::query::ParsedQuery;
use crate::ranking::{page_count, paginate, sort_results, Facets, FinishFacet, Filters, RankedResult};
use crate::similarity::{Scorer, Scores, Similarity, Trigram};
use crate::tier::{active_tier, passes_stock, resolve_tier, MatchTier, TierReason};
use crate::vector::WeightedVector;

/// Candidates scored between two deadline checks.
const SCORE_CHUNK: usize = 512;

/// Default page size of [`SearchRequest::new`].
pub const DEFAULT_LIMIT: i64 = 20;

/// One search request. Ephemeral.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub query: String,
    /// Language tag, e.g. `"pl"` or `"en-GB"`.
    pub language: String,
    /// 1-based.
    pub page: i64,
    pub limit: i64,
    pub zones: BTreeSet<String>,
    pub finishes: BTreeSet<FinishId>,
    /// Abort with [`SearchError::DeadlineExceeded`] once this passes.
    pub deadline: Option<Instant>,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            language: language.into(),
            page: 1,
            limit: DEFAULT_LIMIT,
            zones: BTreeSet::new(),
            finishes: BTreeSet::new(),
            deadline: None,
        }
    }

    pub fn page(mut self, page: i64, limit: i64) -> Self {
        self.page = page;
        self.limit = limit;
        self
    }

    pub fn zones<I, S>(mut self, zones: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.zones = zones.into_iter().map(Into::into).collect();
        self
    }

    pub fn finishes<I: IntoIterator<Item = FinishId>>(mut self, finishes: I) -> Self {
        self.finishes = finishes.into_iter().collect();
        self
    }

    pub fn deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn timeout(self, timeout: Duration) -> Self {
        self.deadline(Instant::now() + timeout)
    }

    fn filters(&self) -> Filters {
        Filters {
            zones: self.zones.clone(),
            finishes: self.finishes.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Availability {
    pub stock_eligible: bool,
    pub quantity: u32,
    pub in_stock: bool,
}

/// One item of a result page, localized to the request language.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultItem {
    pub id: ItemId,
    pub ean: Option<String>,
    pub code: String,
    pub names: LocalizedNames,
    pub price: Price,
    pub promoted: bool,
    pub availability: Availability,
    pub image: Option<String>,
    pub tier: MatchTier,
    pub scores: Scores,
}

impl ResultItem {
    fn from_ranked(result: &RankedResult<'_>, lang: Language) -> Self {
        let item = result.item;
        ResultItem {
            id: item.id,
            ean: item.ean.clone(),
            code: item.code.clone(),
            names: item.names(lang).cloned().unwrap_or_default(),
            price: item.price.clone(),
            promoted: result.promoted,
            availability: Availability {
                stock_eligible: item.stock_eligible,
                quantity: item.stock_quantity,
                in_stock: item.stock_eligible && item.stock_quantity > 0,
            },
            image: item.image.clone(),
            tier: result.tier,
            scores: result.scores,
        }
    }
}

/// A ranked page plus the numbers a caller needs to render pagination and
/// filters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchPage {
    pub items: Vec<ResultItem>,
    /// Candidates after filters, before pagination.
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub page_count: usize,
    /// Tier the whole result set was drawn from.
    pub tier: MatchTier,
    pub language: Language,
    pub zones: BTreeSet<String>,
    pub finishes: Vec<FinishFacet>,
    /// Items dropped for a missing vector.
    pub skipped: usize,
    pub snapshot_version: u64,
}

/// Per-item diagnostics returned by [`SearchEngine::explain`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Explanation {
    pub item: ItemId,
    pub language: Language,
    pub tokens: Vec<String>,
    pub perfect_codes: Vec<String>,
    pub full_text: String,
    pub similarity_terms: String,
    /// `None` when no vector exists for the pair.
    pub vector: Option<String>,
    pub data_eligible: bool,
    pub stock_eligible: bool,
    pub reason: TierReason,
    pub tier: MatchTier,
    /// Survives the stock policy at its own tier.
    pub passes_stock: bool,
    pub scores: Scores,
    /// Either figure strictly above the sensitivity.
    pub qualifies_fuzzy: bool,
}

/// An item that survived eligibility, vector lookup and the stock policy.
struct Candidate<'a> {
    item: &'a CatalogItem,
    vector: &'a str,
    reason: TierReason,
}

/// Search engine over a catalog store.
///
/// Cheap to share: every method takes `&self`, and concurrent searches only
/// contend on the snapshot pointer.
#[derive(Debug)]
pub struct SearchEngine<C, S = Trigram> {
    store: C,
    config: EngineConfig,
    scorer: Scorer<S>,
    promoted_codes: HashSet<String>,
}

impl<C: CatalogStore> SearchEngine<C, Trigram> {
    pub fn new(store: C, config: EngineConfig) -> Result<Self> {
        Self::with_similarity(store, config, Trigram)
    }
}

impl<C: CatalogStore, S: Similarity> SearchEngine<C, S> {
    /// Engine with a custom similarity primitive.
    pub fn with_similarity(store: C, config: EngineConfig, similarity: S) -> Result<Self> {
        config.validate()?;
        let promoted_codes = config
            .promoted_codes
            .iter()
            .map(|code| normalize_term(code.trim()))
            .filter(|code| !code.is_empty())
            .collect();
        Ok(Self {
            scorer: Scorer::new(similarity, config.weight_bonus),
            store,
            config,
            promoted_codes,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn store(&self) -> &C {
        &self.store
    }

    /// Run one request against the current catalog snapshot.
    pub fn search(&self, request: &SearchRequest) -> Result<SearchPage> {
        let span = info_span!(
            "search",
            language = %request.language,
            page = request.page,
            limit = request.limit
        );
        let _enter = span.enter();

        let (page, limit) = validate_pagination(request.page, request.limit)?;
        let lang = self.resolve_language(&request.language)?;
        let query = ParsedQuery::parse(&request.query, lang, self.config.max_query_tokens);
        if query.is_empty() && self.config.empty_query == EmptyQueryPolicy::Reject {
            return Err(SearchError::EmptyQuery);
        }
        check_deadline(request.deadline)?;

        let snapshot = self.store.snapshot();
        let view: &C::View = &snapshot;

        let (candidates, skipped) = self.candidates(view, &query, lang);
        let tier = active_tier(candidates.iter().map(|c| c.reason.tier()));
        let selected: Vec<Candidate<'_>> = candidates
            .into_iter()
            .filter(|c| c.reason.tier() == tier)
            .collect();
        debug!(
            tier = %tier,
            candidates = selected.len(),
            skipped,
            version = view.version(),
            "tier selected"
        );
        check_deadline(request.deadline)?;

        let mut pool = self.score(&selected, &query, request.deadline)?;
        if tier == MatchTier::Fuzzy && !query.is_empty() {
            let sensitivity = self.config.sensitivity;
            pool.retain(|r| r.scores.qualifies(sensitivity));
        }
        contracts::check_tier_exclusive(&pool, tier);
        contracts::check_stock_policy(&pool);

        let filters = request.filters();
        let facets = Facets::collect(&pool, &filters, view, lang);
        pool.retain(|r| filters.matches(r.item));
        sort_results(&mut pool);
        contracts::check_ranking_sorted(&pool);
        check_deadline(request.deadline)?;

        let total = pool.len();
        let items: Vec<ResultItem> = paginate(pool, page, limit)
            .iter()
            .map(|r| ResultItem::from_ranked(r, lang))
            .collect();
        contracts::check_page_bounds(items.len(), limit);
        debug!(total, returned = items.len(), "page assembled");

        Ok(SearchPage {
            items,
            total,
            page,
            limit,
            page_count: page_count(total, limit),
            tier,
            language: lang,
            zones: facets.zones,
            finishes: facets.finishes,
            skipped,
            snapshot_version: view.version(),
        })
    }

    /// Why `item` would or would not be listed for `query`. `None` if the
    /// item is not in the catalog.
    pub fn explain(&self, item: ItemId, query: &str, language: &str) -> Result<Option<Explanation>> {
        let lang = self.resolve_language(language)?;
        let parsed = ParsedQuery::parse(query, lang, self.config.max_query_tokens);
        let snapshot = self.store.snapshot();
        let view: &C::View = &snapshot;

        let Some(entry) = view.items().iter().find(|i| i.id == item) else {
            return Ok(None);
        };
        let vector = view.vector_text(item, lang);
        let reason = resolve_tier(entry, &parsed, vector.unwrap_or(""));
        let scores = match vector {
            Some(text) => self.scorer.score(&parsed.similarity_term_list(), &WeightedVector::parse(text)),
            None => Scores::ZERO,
        };

        Ok(Some(Explanation {
            item,
            language: lang,
            tokens: parsed.tokens.clone(),
            perfect_codes: parsed.perfect_codes.clone(),
            full_text: parsed.full_text.to_string(),
            similarity_terms: parsed.similarity_terms.clone(),
            vector: vector.map(str::to_string),
            data_eligible: entry.data_eligible,
            stock_eligible: entry.stock_eligible,
            reason,
            tier: reason.tier(),
            passes_stock: passes_stock(entry, reason.tier()),
            qualifies_fuzzy: scores.qualifies(self.config.sensitivity),
            scores,
        }))
    }

    fn resolve_language(&self, tag: &str) -> Result<Language> {
        match tag.parse::<Language>() {
            Ok(lang) => Ok(lang),
            Err(err) => match self.config.fallback_language {
                Some(fallback) => {
                    warn!(tag, fallback = %fallback, "unsupported language tag, using fallback");
                    Ok(fallback)
                }
                None => Err(err),
            },
        }
    }

    fn is_promoted(&self, item: &CatalogItem) -> bool {
        item.promoted
            || (!self.promoted_codes.is_empty() && self.promoted_codes.contains(&normalize_term(item.code.trim())))
    }

    /// Eligible items with a vector, classified, stock policy applied.
    fn candidates<'v>(&self, view: &'v C::View, query: &ParsedQuery, lang: Language) -> (Vec<Candidate<'v>>, usize) {
        let mut skipped = 0;
        let mut out = Vec::new();
        for item in view.items().iter().filter(|i| i.data_eligible) {
            let Some(vector) = view.vector_text(item.id, lang) else {
                warn!(item = item.id, reason = %SkipReason::VectorMissing, "item skipped");
                skipped += 1;
                continue;
            };
            let reason = if query.is_empty() {
                TierReason::NoMatch
            } else {
                resolve_tier(item, query, vector)
            };
            if passes_stock(item, reason.tier()) {
                out.push(Candidate { item, vector, reason });
            }
        }
        (out, skipped)
    }

    /// Similarity figures for every candidate. An empty query scores zero
    /// across the board.
    fn score<'v>(
        &self,
        candidates: &[Candidate<'v>],
        query: &ParsedQuery,
        deadline: Option<Instant>,
    ) -> Result<Vec<RankedResult<'v>>> {
        let terms = query.similarity_term_list();
        let mut out = Vec::with_capacity(candidates.len());
        for chunk in candidates.chunks(SCORE_CHUNK) {
            check_deadline(deadline)?;
            out.extend(self.score_chunk(chunk, &terms));
        }
        Ok(out)
    }

    fn rank_one<'v>(&self, candidate: &Candidate<'v>, terms: &[&str]) -> RankedResult<'v> {
        let scores = if terms.is_empty() {
            Scores::ZERO
        } else {
            self.scorer.score(terms, &WeightedVector::parse(candidate.vector))
        };
        RankedResult {
            item: candidate.item,
            tier: candidate.reason.tier(),
            reason: candidate.reason,
            scores,
            promoted: self.is_promoted(candidate.item),
        }
    }

    #[cfg(feature = "parallel")]
    fn score_chunk<'v>(&self, chunk: &[Candidate<'v>], terms: &[&str]) -> Vec<RankedResult<'v>> {
        chunk.par_iter().map(|c| self.rank_one(c, terms)).collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn score_chunk<'v>(&self, chunk: &[Candidate<'v>], terms: &[&str]) -> Vec<RankedResult<'v>> {
        chunk.iter().map(|c| self.rank_one(c, terms)).collect()
    }
}

/// Page and limit must both be at least 1.
pub fn validate_pagination(page: i64, limit: i64) -> Result<(usize, usize)> {
    match (usize::try_from(page), usize::try_from(limit)) {
        (Ok(p), Ok(l)) if p >= 1 && l >= 1 => Ok((p, l)),
        _ => Err(SearchError::InvalidPagination { page, limit }),
    }
}

fn check_deadline(deadline: Option<Instant>) -> Result<()> {
    match deadline {
        Some(deadline) if Instant::now() >= deadline => {
            warn!("search deadline exceeded, dropping partial results");
            Err(SearchError::DeadlineExceeded)
        }
        _ => Ok(()),
    }
}
