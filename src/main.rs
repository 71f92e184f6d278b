//! craftwiki - Crafting tables for the game wiki.
//!
//! This is the main binary that prints item pages and comparison charts as
//! wiki markup or HTML. Output goes to stdout; logs go to stderr and are
//! filtered with `RUST_LOG`.

mod cli;

use std::path::Path;

use anyhow::{Context, bail};
use clap::Parser;
use craftwiki_config::Config;
use craftwiki_protocol::{Catalog, ChartResult, dummy::dummy_catalog};
use craftwiki_table::{
    HtmlOptions, HtmlRenderer, ItemPage, WikiOptions, WikiWriter, build_comparison_chart_table,
};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, prelude::*};

use crate::cli::{CatalogSource, Cli, Commands};

fn main() -> anyhow::Result<()> {
    init_logging();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load().context("loading config")?,
    };

    let output = match cli.command {
        Commands::Item {
            item_id,
            source,
            html,
        } => {
            let catalog = load_catalog(&source, &config)?
                .context("no catalog given: pass --catalog, --demo, or set `catalog` in the config")?;
            let Some(page) = ItemPage::from_catalog(&catalog, &item_id) else {
                bail!("unknown item: {item_id}");
            };
            if html {
                page.to_html(&HtmlRenderer::new(html_options(&config)))
            } else {
                page.to_wiki(&WikiWriter::new(wiki_options(&config)))
            }
        }
        Commands::Compchart {
            results,
            ingredients,
            source,
            html,
        } => {
            let results = load_results(&results)?;
            let items = load_catalog(&source, &config)?
                .map(|catalog| catalog.items)
                .unwrap_or_default();
            let table = build_comparison_chart_table(&results, &ingredients, &items)?;
            if html {
                HtmlRenderer::new(html_options(&config)).render(&table)
            } else {
                WikiWriter::new(wiki_options(&config)).table(&table)
            }
        }
    };

    println!("{output}");
    Ok(())
}

fn init_logging() {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(stderr_layer)
        .init();
}

/// Resolves the catalog from the command line, then the config.
fn load_catalog(source: &CatalogSource, config: &Config) -> anyhow::Result<Option<Catalog>> {
    if source.demo {
        debug!("using the sample catalog");
        return Ok(Some(dummy_catalog()));
    }
    let Some(path) = source.catalog.as_ref().or(config.catalog.as_ref()) else {
        return Ok(None);
    };
    let catalog = Catalog::load_from(path)
        .with_context(|| format!("loading catalog from {}", path.display()))?;
    Ok(Some(catalog))
}

fn load_results(path: &Path) -> anyhow::Result<Vec<ChartResult>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading planner results from {}", path.display()))?;
    let results: Vec<ChartResult> = serde_json::from_str(&content)
        .with_context(|| format!("parsing planner results from {}", path.display()))?;
    info!(count = results.len(), "loaded planner results");
    Ok(results)
}

fn wiki_options(config: &Config) -> WikiOptions {
    WikiOptions {
        image_dir: config.wiki.image_dir.clone(),
        image_size: config.wiki.image_size,
        row_kind_suffix: config.wiki.row_kind_suffix,
    }
}

fn html_options(config: &Config) -> HtmlOptions {
    HtmlOptions {
        page_base_url: config.html.page_base_url.clone(),
        image_base_url: config.html.image_base_url.clone(),
        image_size: config.wiki.image_size,
    }
}
