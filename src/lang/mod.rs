// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Supported catalog languages.
//!
//! Eleven languages, each with its own connector-word table. The table for
//! a language is built once on first use and shared for the life of the
//! process.

mod connectors;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::error::SearchError;

/// A resolved request language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Pl,
    De,
    En,
    Ru,
    Hu,
    Ro,
    Fr,
    It,
    Uk,
    Sl,
    Es,
}

impl Language {
    pub const ALL: [Language; 11] = [
        Language::Pl,
        Language::De,
        Language::En,
        Language::Ru,
        Language::Hu,
        Language::Ro,
        Language::Fr,
        Language::It,
        Language::Uk,
        Language::Sl,
        Language::Es,
    ];

    /// Two-letter tag, lowercase.
    pub fn tag(self) -> &'static str {
        match self {
            Language::Pl => "pl",
            Language::De => "de",
            Language::En => "en",
            Language::Ru => "ru",
            Language::Hu => "hu",
            Language::Ro => "ro",
            Language::Fr => "fr",
            Language::It => "it",
            Language::Uk => "uk",
            Language::Sl => "sl",
            Language::Es => "es",
        }
    }

    /// Cyrillic-script languages. Their stored text is matched in Cyrillic.
    pub fn is_cyrillic(self) -> bool {
        matches!(self, Language::Ru | Language::Uk)
    }

    fn index(self) -> usize {
        self as usize
    }

    /// Is `word` a connector (preposition, article, conjunction) in this language?
    ///
    /// Exact match after lowercasing; no stemming, no prefix matching.
    pub fn is_connector(self, word: &str) -> bool {
        let lowered = word.to_lowercase();
        CONNECTOR_SETS[self.index()].contains(lowered.as_str())
    }

    /// Number of entries in this language's connector table.
    pub fn connector_count(self) -> usize {
        CONNECTOR_SETS[self.index()].len()
    }
}

static CONNECTOR_SETS: LazyLock<Vec<HashSet<&'static str>>> = LazyLock::new(|| {
    Language::ALL
        .iter()
        .map(|lang| connectors::words(*lang).iter().copied().collect())
        .collect()
});

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Language {
    type Err = SearchError;

    /// Accepts `pl`, `PL`, `pl-PL`, `pl_PL`. Region subtags are ignored.
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let primary = tag
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        Language::ALL
            .iter()
            .copied()
            .find(|lang| lang.tag() == primary)
            .ok_or_else(|| SearchError::UnsupportedLanguage(tag.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tags_with_regions_and_case() {
        assert_eq!("pl".parse::<Language>().unwrap(), Language::Pl);
        assert_eq!("DE".parse::<Language>().unwrap(), Language::De);
        assert_eq!("en-GB".parse::<Language>().unwrap(), Language::En);
        assert_eq!("uk_UA".parse::<Language>().unwrap(), Language::Uk);
    }

    #[test]
    fn rejects_unknown_tags() {
        let err = "xx".parse::<Language>().unwrap_err();
        assert!(matches!(err, SearchError::UnsupportedLanguage(tag) if tag == "xx"));
        assert!("".parse::<Language>().is_err());
    }

    #[test]
    fn tag_round_trips_for_every_language() {
        for lang in Language::ALL {
            assert_eq!(lang.tag().parse::<Language>().unwrap(), lang);
        }
    }

    #[test]
    fn connector_lookup_is_case_insensitive() {
        assert!(Language::En.is_connector("for"));
        assert!(Language::En.is_connector("FOR"));
        assert!(Language::De.is_connector("Für"));
        assert!(Language::Pl.is_connector("dla"));
        assert!(Language::Ru.is_connector("Для"));
        assert!(!Language::En.is_connector("sink"));
    }

    #[test]
    fn connector_tables_are_substantial() {
        for lang in Language::ALL {
            assert!(
                lang.connector_count() >= 30,
                "{} has only {} connectors",
                lang,
                lang.connector_count()
            );
        }
    }

    #[test]
    fn connector_match_is_exact_not_prefix() {
        // "fore" starts with "for" but is not a connector
        assert!(!Language::En.is_connector("fore"));
        assert!(!Language::En.is_connector("fo"));
    }
}
