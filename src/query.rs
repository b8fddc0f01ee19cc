// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query tokenizing and code expansion.
//!
//! One normalized query produces four artifacts, each feeding a different
//! matching stage:
//!
//! | Artifact               | Example for `"NQS F4GM BATHROOM"`      | Used by          |
//! |------------------------|----------------------------------------|------------------|
//! | perfect-code candidates| `NQS, NQS_F4GM, F4GM, F4GM_BATHROOM, …`| exact code tier  |
//! | contains patterns      | `%NQS%, %NQS_F4GM%, …`                 | partial code tier|
//! | full-text expression   | `NQS OR F4G* OR BATHROO*`              | partial text tier|
//! | similarity terms       | `"NQS F4G BATHROO"`                    | fuzzy scoring    |
//!
//! Adjacent-pair candidates exist because users type compound SKU codes with
//! a space where the catalog has an underscore.

use std::fmt;

use crate::lang::Language;
use crate::normalize::{fold_case, is_word_char, normalize_query, split_tokens};

/// Tokens longer than this lose their last character in the full-text and
/// similarity passes.
pub const TRUNCATE_ABOVE: usize = 3;

/// A substring ("contains") pattern over internal codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainsPattern(pub String);

impl ContainsPattern {
    pub fn matches(&self, haystack: &str) -> bool {
        haystack.contains(self.0.as_str())
    }
}

impl fmt::Display for ContainsPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "%{}%", self.0)
    }
}

/// One term of the full-text expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullTextTerm {
    pub text: String,
    /// `true` when the term carries a prefix wildcard.
    pub prefix: bool,
}

impl FullTextTerm {
    /// Does this term match a single vector token?
    pub fn matches(&self, token: &str) -> bool {
        if self.prefix {
            token.starts_with(self.text.as_str())
        } else {
            token == self.text
        }
    }
}

impl fmt::Display for FullTextTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.prefix {
            write!(f, "{}*", self.text)
        } else {
            f.write_str(&self.text)
        }
    }
}

/// OR-joined prefix expression, compatible with starts-with full-text search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FullTextExpr {
    pub terms: Vec<FullTextTerm>,
}

impl FullTextExpr {
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// True if any term matches any of the given tokens.
    pub fn matches_any<'a, I>(&self, tokens: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        if self.terms.is_empty() {
            return false;
        }
        tokens
            .into_iter()
            .any(|token| self.terms.iter().any(|term| term.matches(token)))
    }
}

impl fmt::Display for FullTextExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                f.write_str(" OR ")?;
            }
            write!(f, "{term}")?;
        }
        Ok(())
    }
}

/// A query after normalization and expansion. Built once per request.
#[derive(Debug, Clone, Default)]
pub struct ParsedQuery {
    /// Raw input tokens, case-folded but otherwise untouched (no connector
    /// trimming, diacritics kept). Global codes are compared against these.
    pub raw_tokens: Vec<String>,
    /// Normalized tokens in query order.
    pub tokens: Vec<String>,
    pub perfect_codes: Vec<String>,
    pub contains_patterns: Vec<ContainsPattern>,
    pub full_text: FullTextExpr,
    /// Space-joined truncated tokens, input to the similarity scorer.
    pub similarity_terms: String,
}

impl ParsedQuery {
    /// Normalize and expand `raw` for `lang`. At most `max_tokens` tokens survive.
    pub fn parse(raw: &str, lang: Language, max_tokens: usize) -> Self {
        let normalized = normalize_query(raw, lang);
        let mut tokens: Vec<String> = split_tokens(&normalized)
            .into_iter()
            .map(str::to_string)
            .collect();
        tokens.truncate(max_tokens);

        let raw_tokens = split_tokens(raw).into_iter().map(fold_case).collect();
        let perfect_codes = perfect_code_candidates(&tokens);
        let contains_patterns = perfect_codes
            .iter()
            .map(|code| ContainsPattern(code.clone()))
            .collect();

        ParsedQuery {
            raw_tokens,
            full_text: full_text_expression(&tokens),
            similarity_terms: similarity_terms(&tokens),
            perfect_codes,
            contains_patterns,
            tokens,
        }
    }

    /// No tokens survived normalization.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Similarity terms as a list (the scorer's input).
    pub fn similarity_term_list(&self) -> Vec<&str> {
        self.similarity_terms.split(' ').filter(|t| !t.is_empty()).collect()
    }
}

/// Every token plus every adjacent pair joined by `_`, in query order.
///
/// `[A, B, C]` → `[A, A_B, B, B_C, C]`. Duplicates are kept: a repeated token
/// is a repeated candidate, and lookups treat the list as a set anyway.
pub fn perfect_code_candidates(tokens: &[String]) -> Vec<String> {
    let mut out = Vec::with_capacity(tokens.len() * 2);
    for (i, token) in tokens.iter().enumerate() {
        out.push(token.clone());
        if let Some(next) = tokens.get(i + 1) {
            out.push(format!("{token}_{next}"));
        }
    }
    out
}

/// Drop the last character of tokens longer than [`TRUNCATE_ABOVE`] chars.
fn truncate_token(token: &str) -> &str {
    if token.chars().count() > TRUNCATE_ABOVE {
        match token.char_indices().last() {
            Some((idx, _)) => &token[..idx],
            None => token,
        }
    } else {
        token
    }
}

/// Strip non-word characters, drop empties, truncate long tokens and mark
/// them as prefix terms.
pub fn full_text_expression(tokens: &[String]) -> FullTextExpr {
    let terms = tokens
        .iter()
        .map(|t| t.chars().filter(|c| is_word_char(*c)).collect::<String>())
        .filter(|t| !t.is_empty())
        .map(|t| {
            let long = t.chars().count() > TRUNCATE_ABOVE;
            FullTextTerm {
                text: truncate_token(&t).to_string(),
                prefix: long,
            }
        })
        .collect();
    FullTextExpr { terms }
}

/// Independent truncation pass for fuzzy scoring: no wildcard, no
/// character stripping, space-joined.
pub fn similarity_terms(tokens: &[String]) -> String {
    tokens
        .iter()
        .map(|t| truncate_token(t))
        .collect::<Vec<_>>()
        .join(" ")
}
