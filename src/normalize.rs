// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text normalization shared by queries and weighted vectors.
//!
//! Queries and catalog text must land in the same form or nothing matches,
//! so both sides go through [`normalize_term`]:
//!
//! 1. Latin characters are NFD-decomposed and their combining marks dropped
//!    ("ń" → "n", "ő" → "o", "ș" → "s"). Letters that don't decompose get an
//!    explicit mapping ("ł" → "l", "ß" → "ss").
//! 2. Everything is upper-cased.
//!
//! Cyrillic is left alone. Decomposing "й" would produce "и" plus a breve,
//! and dropping the breve turns one letter into another; ru/uk catalog text
//! is stored in Cyrillic and must be matched as such.
//!
//! Connector trimming ([`trim_connectors`]) happens before any of this, on
//! the raw lowercase words, because the connector tables keep diacritics.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::lang::Language;

/// Split raw text into tokens on commas and whitespace. Empty pieces are dropped.
pub fn split_tokens(text: &str) -> Vec<&str> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Characters a full-text term keeps: alphanumerics and `_`, so internal
/// codes like `NQS_F4GM` stay whole.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Remove connector words strictly between the first and last token.
///
/// The endpoints always survive, connector or not. Users put the thing they
/// are looking for at the start or the end ("a sink", "sink for bathroom"),
/// so only the interior is trimmed.
pub fn trim_connectors<'a>(tokens: &[&'a str], lang: Language) -> Vec<&'a str> {
    if tokens.len() <= 2 {
        return tokens.to_vec();
    }

    let last = tokens.len() - 1;
    tokens
        .iter()
        .enumerate()
        .filter(|(i, token)| *i == 0 || *i == last || !lang.is_connector(token))
        .map(|(_, token)| *token)
        .collect()
}

/// Strip diacritics from Latin letters; leave every other script untouched.
pub fn strip_diacritics(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if let Some(mapped) = non_decomposing(c) {
            out.push_str(mapped);
        } else if is_latin(c) {
            out.extend(std::iter::once(c).nfd().filter(|m| !is_combining_mark(*m)));
        } else {
            out.push(c);
        }
    }
    out
}

/// Letters with no canonical decomposition that still need an ASCII form.
fn non_decomposing(c: char) -> Option<&'static str> {
    let mapped = match c {
        'ł' => "l",
        'Ł' => "L",
        'ß' => "ss",
        'ẞ' => "SS",
        'đ' => "d",
        'Đ' => "D",
        'ø' => "o",
        'Ø' => "O",
        'æ' => "ae",
        'Æ' => "AE",
        'œ' => "oe",
        'Œ' => "OE",
        'ı' => "i",
        _ => return None,
    };
    Some(mapped)
}

/// Latin-1 Supplement letters, Latin Extended-A/B, Latin Extended Additional.
fn is_latin(c: char) -> bool {
    matches!(c,
        '\u{00C0}'..='\u{00FF}' |
        '\u{0100}'..='\u{024F}' |
        '\u{1E00}'..='\u{1EFF}'
    )
}

/// Single case used for every comparison in the engine.
pub fn fold_case(value: &str) -> String {
    value.to_uppercase()
}

/// Diacritic-stripped and case-folded: the form stored in weighted vectors.
pub fn normalize_term(value: &str) -> String {
    fold_case(&strip_diacritics(value))
}

/// Full query normalization: split, trim interior connectors, strip
/// diacritics, fold case. Returns the surviving tokens joined by one space.
pub fn normalize_query(raw: &str, lang: Language) -> String {
    let tokens = split_tokens(raw);
    trim_connectors(&tokens, lang)
        .iter()
        .map(|t| normalize_term(t))
        .collect::<Vec<_>>()
        .join(" ")
}
