// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Multilingual product search: a raw, noisy query in eleven languages goes
//! in, a ranked and paginated page of catalog items comes out.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐   ┌─────────────┐   ┌──────────────────────────────┐
//! │ normalize   │──▶│ query       │──▶│ tier        similarity       │
//! │ (connectors,│   │ (codes,     │   │ (exact/      (trigram,       │
//! │  diacritics)│   │  full text) │   │  partial)    outlier drop)   │
//! └─────────────┘   └─────────────┘   └──────────────┬───────────────┘
//!                                                    │ both read
//! ┌─────────────┐   ┌─────────────┐                  ▼
//! │ catalog     │──▶│ vector      │───────▶ precomputed weighted vectors
//! │ (snapshots) │   │ (+ cache)   │
//! └─────────────┘   └─────────────┘
//!                                     ┌──────────────────────────────┐
//!                   engine ──────────▶│ ranking (filters, facets,    │
//!                                     │ order, pages)                │
//!                                     └──────────────────────────────┘
//! ```
//!
//! | Module       | Role                                                    |
//! |--------------|---------------------------------------------------------|
//! | `lang`       | supported languages, connector-word sets                |
//! | `normalize`  | connector trimming, diacritic stripping, case folding   |
//! | `query`      | tokens, perfect-code candidates, full-text expression   |
//! | `catalog`    | item model, store/snapshot contract, in-memory store    |
//! | `vector`     | weighted vectors and their versioned cache              |
//! | `tier`       | exact / partial / fuzzy classification, stock policy    |
//! | `similarity` | trigram primitive, `avg` and `avg_without_worst`        |
//! | `ranking`    | ordering keys, zone/finish filters, facets, pagination  |
//! | `engine`     | the end-to-end request pipeline                         |
//! | `config`     | figment-loaded engine settings                          |
//! | `contracts`  | debug-build invariant checks                            |
//!
//! # Usage
//!
//! ```ignore
//! use katalog::{EngineConfig, MemoryCatalog, SearchEngine, SearchRequest};
//!
//! let catalog = MemoryCatalog::from_path("catalog.json".as_ref())?;
//! let engine = SearchEngine::new(catalog, EngineConfig::load(None)?)?;
//!
//! let page = engine.search(&SearchRequest::new("umywalka nablatowa", "pl").page(1, 20))?;
//! for item in &page.items {
//!     println!("{} {}", item.code, item.names.core);
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod contracts;
pub mod engine;
pub mod error;
pub mod lang;
pub mod normalize;
pub mod query;
pub mod ranking;
pub mod similarity;
pub mod tier;
pub mod vector;

// Test utilities (always compiled, hidden from docs)
#[doc(hidden)]
pub mod testing;

// Re-exports for public API
pub use catalog::{
    CatalogFile, CatalogItem, CatalogSnapshot, CatalogStore, CatalogView, CategoryRef, FinishId, FinishRecord,
    FinishTable, ItemId, Lifecycle, LocalizedNames, MemoryCatalog, Price,
};
pub use config::{EmptyQueryPolicy, EngineConfig, DEFAULT_SENSITIVITY};
pub use engine::{
    validate_pagination, Availability, Explanation, ResultItem, SearchEngine, SearchPage, SearchRequest,
};
pub use error::{Result, SearchError, SkipReason};
pub use lang::Language;
pub use normalize::{normalize_query, normalize_term, strip_diacritics, trim_connectors};
pub use query::ParsedQuery;
pub use ranking::{compare_results, page_count, paginate, Facets, Filters, FinishFacet, RankedResult};
pub use similarity::{trigram_similarity, Scorer, Scores, Similarity, Trigram};
pub use tier::{resolve_tier, MatchTier, TierReason};
pub use vector::cache::{SnapshotCell, VectorSet};
pub use vector::{build_vector, weight_at, Field, WeightedTerm, WeightedVector, MAX_WEIGHT};
