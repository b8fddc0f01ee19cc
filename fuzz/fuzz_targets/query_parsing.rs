// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for query normalization and expansion.
//!
//! Arbitrary text in any supported language must parse without panicking,
//! and the derived artifacts must stay consistent with the token list.

#![no_main]

use arbitrary::Arbitrary;
use katalog::{normalize_term, Language, ParsedQuery};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    query: String,
    lang: u8,
    max_tokens: u8,
}

fuzz_target!(|input: Input| {
    let lang = Language::ALL[usize::from(input.lang) % Language::ALL.len()];
    let max_tokens = usize::from(input.max_tokens).max(1);
    let parsed = ParsedQuery::parse(&input.query, lang, max_tokens);

    assert!(parsed.tokens.len() <= max_tokens);
    assert_eq!(
        parsed.perfect_codes.len(),
        (2 * parsed.tokens.len()).saturating_sub(1)
    );
    assert!(parsed.full_text.terms.len() <= parsed.tokens.len());
    assert_eq!(parsed.is_empty(), parsed.tokens.is_empty());

    for term in &parsed.full_text.terms {
        assert!(!term.text.is_empty());
        // an ASCII token is already in normal form
        if term.text.is_ascii() {
            assert_eq!(normalize_term(&term.text), term.text);
        }
    }
    for token in &parsed.tokens {
        assert!(!token.is_empty());
        assert!(!token.contains(char::is_whitespace), "token {:?} has whitespace", token);
    }
});
