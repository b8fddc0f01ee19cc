// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors surfaced to callers of the search engine.
//!
//! Only request-level problems are errors. Per-item problems (a missing or
//! empty weighted vector) never fail a query: the item is skipped and the
//! skip is logged, see [`SkipReason`].

use thiserror::Error;

/// Everything that can make a search request fail.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The language tag is not one of the supported languages and no
    /// fallback language is configured.
    #[error("unsupported language tag: {0:?}")]
    UnsupportedLanguage(String),

    /// The query normalized to zero tokens and the engine is configured to
    /// reject such queries.
    #[error("query is empty after normalization")]
    EmptyQuery,

    /// Page or limit below 1.
    #[error("invalid pagination: page={page}, limit={limit} (both must be >= 1)")]
    InvalidPagination { page: i64, limit: i64 },

    /// The caller's deadline passed before the evaluation finished.
    #[error("search deadline exceeded")]
    DeadlineExceeded,

    /// Configuration could not be loaded or failed validation.
    #[error("configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("catalog json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<figment::Error> for SearchError {
    fn from(err: figment::Error) -> Self {
        SearchError::Config(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, SearchError>;

/// Why an item was dropped from the candidate pool without failing the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// No weighted vector published for the (item, language) pair.
    VectorMissing,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::VectorMissing => f.write_str("VectorMissing"),
        }
    }
}
