// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Engine configuration.
//!
//! Merged by Figment from, lowest precedence first:
//!
//! 1. built-in defaults ([`EngineConfig::default`]),
//! 2. a TOML file (`katalog.toml` in the working directory, or an explicit path),
//! 3. `KATALOG_*` environment variables (`KATALOG_SENSITIVITY=0.4`).
//!
//! Every policy that the ranking pipeline would otherwise have to guess
//! (unsupported language tags, empty queries) is a field here.

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, SearchError};
use crate::lang::Language;

/// Default file looked up when no explicit config path is given.
pub const DEFAULT_CONFIG_FILE: &str = "katalog.toml";

/// Environment prefix for overrides.
pub const ENV_PREFIX: &str = "KATALOG_";

/// Default fuzzy-tier sensitivity.
pub const DEFAULT_SENSITIVITY: f64 = 0.35;

/// What to do with a query that has no tokens left after normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyQueryPolicy {
    /// List every eligible item, ordered by the usual ranking keys.
    #[default]
    MatchAll,
    /// Fail with [`SearchError::EmptyQuery`].
    Reject,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Minimum similarity for the fuzzy tier. Strictly-greater comparison.
    /// 0.25 is permissive, 0.5 conservative.
    pub sensitivity: f64,
    /// Bonus factor for matching a heavily weighted vector term.
    pub weight_bonus: f64,
    /// Language used when the request tag is unsupported. `None` rejects.
    pub fallback_language: Option<Language>,
    pub empty_query: EmptyQueryPolicy,
    /// Internal codes ranked as promoted, on top of the per-item flag.
    pub promoted_codes: Vec<String>,
    /// Tokens beyond this count are ignored.
    pub max_query_tokens: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sensitivity: DEFAULT_SENSITIVITY,
            weight_bonus: 0.15,
            fallback_language: None,
            empty_query: EmptyQueryPolicy::MatchAll,
            promoted_codes: Vec::new(),
            max_query_tokens: 16,
        }
    }
}

impl EngineConfig {
    /// Load defaults, then `path` (or `katalog.toml` if it exists), then env.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
        Self::from_figment(Self::figment(file))
    }

    /// The merged provider chain, exposed for callers that want to layer more.
    pub fn figment(file: &Path) -> Figment {
        Figment::from(Serialized::defaults(EngineConfig::default()))
            .merge(Toml::file(file))
            .merge(Env::prefixed(ENV_PREFIX).ignore(&["log"]))
    }

    pub fn from_figment(figment: Figment) -> Result<Self> {
        let config: EngineConfig = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.sensitivity) {
            return Err(SearchError::InvalidConfig(format!(
                "sensitivity must be within [0, 1], got {}",
                self.sensitivity
            )));
        }
        if !self.weight_bonus.is_finite() || self.weight_bonus < 0.0 {
            return Err(SearchError::InvalidConfig(format!(
                "weight_bonus must be a non-negative number, got {}",
                self.weight_bonus
            )));
        }
        if self.max_query_tokens == 0 {
            return Err(SearchError::InvalidConfig(
                "max_query_tokens must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn with_sensitivity(mut self, sensitivity: f64) -> Self {
        self.sensitivity = sensitivity;
        self
    }

    pub fn with_fallback_language(mut self, lang: Language) -> Self {
        self.fallback_language = Some(lang);
        self
    }

    pub fn with_empty_query(mut self, policy: EmptyQueryPolicy) -> Self {
        self.empty_query = policy;
        self
    }
}
