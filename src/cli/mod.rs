// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the katalog command-line interface.
//!
//! Four subcommands over a JSON catalog file: `search` to run a ranked
//! query, `vectors` to dump an item's weighted vectors, `explain` to see why
//! an item is or is not listed, and `config` to print the effective engine
//! configuration after file and environment overrides.

pub mod display;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "katalog",
    about = "Multilingual product search: match tiers, weighted vectors, trigram ranking",
    version
)]
pub struct Cli {
    /// Engine config file (TOML). Defaults to ./katalog.toml when present.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a query against a catalog file and print one result page
    Search {
        /// Catalog JSON file
        catalog: PathBuf,

        /// Search query (may be empty)
        query: String,

        /// Language tag, e.g. en, pl, de-AT
        #[arg(short = 'L', long, default_value = "en")]
        lang: String,

        /// 1-based page number
        #[arg(short, long, default_value = "1", allow_negative_numbers = true)]
        page: i64,

        /// Page size
        #[arg(short, long, default_value = "10", allow_negative_numbers = true)]
        limit: i64,

        /// Only items tagged with one of these zones (repeatable)
        #[arg(long = "zone")]
        zones: Vec<String>,

        /// Only items with one of these finish ids (repeatable)
        #[arg(long = "finish")]
        finishes: Vec<u32>,

        /// Abort after this many milliseconds
        #[arg(long)]
        timeout_ms: Option<u64>,

        /// Print the page as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print the weighted vectors of one item
    Vectors {
        /// Catalog JSON file
        catalog: PathBuf,

        /// Item id
        item: u64,

        /// Only this language (all languages with text otherwise)
        #[arg(short = 'L', long)]
        lang: Option<String>,
    },

    /// Show how one item is classified and scored for a query
    Explain {
        /// Catalog JSON file
        catalog: PathBuf,

        /// Item id
        item: u64,

        /// Search query
        query: String,

        /// Language tag
        #[arg(short = 'L', long, default_value = "en")]
        lang: String,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration (defaults, file, KATALOG_* env) as JSON
    Config,
}
