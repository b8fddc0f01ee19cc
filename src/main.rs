// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use std::path::Path;
use std::time::Duration;

use katalog::{
    CatalogStore, CatalogView, EngineConfig, Language, MemoryCatalog, Result, SearchEngine, SearchPage,
    SearchRequest,
};
use tracing_subscriber::EnvFilter;

mod cli;
use cli::display::{self, section_bot, section_top, row, themed, BOLD, DIM};
use cli::{Cli, Commands};

/// Env var holding the log filter, e.g. `KATALOG_LOG=katalog=debug`.
const LOG_ENV: &str = "KATALOG_LOG";

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = EngineConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Search {
            catalog,
            query,
            lang,
            page,
            limit,
            zones,
            finishes,
            timeout_ms,
            json,
        } => {
            let engine = SearchEngine::new(load_catalog(&catalog)?, config)?;
            let mut request = SearchRequest::new(query, lang)
                .page(page, limit)
                .zones(zones)
                .finishes(finishes);
            if let Some(ms) = timeout_ms {
                request = request.timeout(Duration::from_millis(ms));
            }
            let result = engine.search(&request)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_page(&request.query, &result);
            }
        }
        Commands::Vectors { catalog, item, lang } => {
            let catalog = load_catalog(&catalog)?;
            let langs = match lang {
                Some(tag) => vec![tag.parse::<Language>()?],
                None => Language::ALL.to_vec(),
            };
            let snapshot = catalog.snapshot();
            if !snapshot.items().iter().any(|i| i.id == item) {
                println!("item {} not in catalog", item);
                return Ok(());
            }
            for lang in langs {
                match snapshot.vector_text(item, lang) {
                    Some(vector) => println!("{:<3} {}", lang.tag(), vector),
                    None => println!("{:<3} {}", lang.tag(), themed(display::GRAY, &[DIM], "(no vector)")),
                }
            }
        }
        Commands::Explain {
            catalog,
            item,
            query,
            lang,
            json,
        } => {
            let engine = SearchEngine::new(load_catalog(&catalog)?, config)?;
            let Some(explanation) = engine.explain(item, &query, &lang)? else {
                println!("item {} not in catalog", item);
                return Ok(());
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&explanation)?);
            } else {
                section_top(&format!("item {} / {:?}", item, query));
                row(&format!(" tokens        {}", explanation.tokens.join(" ")));
                row(&format!(" codes         {}", explanation.perfect_codes.join(" ")));
                row(&format!(" full text     {}", explanation.full_text));
                row(&format!(" similarity    {}", explanation.similarity_terms));
                row(&format!(
                    " vector        {}",
                    display::truncate(explanation.vector.as_deref().unwrap_or("(missing)"), 80)
                ));
                row(&format!(
                    " tier          {} {:?}",
                    display::tier_badge(explanation.tier),
                    explanation.reason
                ));
                row(&format!(
                    " eligible      data={} stock={} passes_stock={}",
                    explanation.data_eligible, explanation.stock_eligible, explanation.passes_stock
                ));
                row(&format!(
                    " scores        {} (fuzzy: {})",
                    display::scores_value(&explanation.scores),
                    explanation.qualifies_fuzzy
                ));
                section_bot();
            }
        }
        Commands::Config => {
            let json = serde_json::to_string_pretty(&config)?;
            println!("{}", json);
        }
    }
    Ok(())
}

#[cfg(feature = "parallel")]
fn load_catalog(path: &Path) -> Result<MemoryCatalog> {
    use indicatif::{ProgressBar, ProgressStyle};

    if !atty::is(atty::Stream::Stderr) {
        return MemoryCatalog::from_path(path);
    }
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(format!("loading {}", path.display()));
    spinner.enable_steady_tick(Duration::from_millis(80));
    let catalog = MemoryCatalog::from_path(path);
    spinner.finish_and_clear();
    catalog
}

#[cfg(not(feature = "parallel"))]
fn load_catalog(path: &Path) -> Result<MemoryCatalog> {
    MemoryCatalog::from_path(path)
}

fn print_page(query: &str, page: &SearchPage) {
    let header = format!(
        "{:?} · {} · {} · {} results · page {}/{}",
        query,
        page.language,
        page.tier,
        page.total,
        page.page,
        page.page_count.max(1)
    );
    section_top(&header);
    if page.items.is_empty() {
        row(&themed(display::GRAY, &[DIM], " no results"));
    }
    for item in &page.items {
        let name = display::truncate(&item.names.core, 40);
        let price = item
            .price
            .gross
            .map(|p| format!("{:.2} {}", p, item.price.currency))
            .unwrap_or_default();
        row(&format!(
            " {} {} {} {} {} {} {}",
            display::promoted_mark(item.promoted),
            display::tier_badge(item.tier),
            display::pad_right(&themed(display::CYAN, &[BOLD], &display::truncate(&item.code, 16)), 16),
            display::pad_right(&name, 40),
            display::scores_value(&item.scores),
            display::pad_right(&price, 12),
            display::stock_mark(item.availability.in_stock),
        ));
    }
    if !page.zones.is_empty() {
        let zones: Vec<&str> = page.zones.iter().map(String::as_str).collect();
        row(&format!(" zones:    {}", zones.join(", ")));
    }
    if !page.finishes.is_empty() {
        let finishes: Vec<String> = page
            .finishes
            .iter()
            .map(|f| format!("{}={}", f.id, f.label.as_deref().unwrap_or("?")))
            .collect();
        row(&format!(" finishes: {}", finishes.join(", ")));
    }
    if page.skipped > 0 {
        row(&themed(
            display::YELLOW,
            &[],
            &format!(" {} items skipped (no vector)", page.skipped),
        ));
    }
    section_bot();
}
