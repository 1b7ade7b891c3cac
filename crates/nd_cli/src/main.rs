use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use nd_core::{Category, DateInfo};
use nd_render::render_page;
use nd_search::{init_logging, queries, SearchArgs, SearchClient, SearchManager};
use tracing::info;

const OUTPUT_FILE: &str = "index.html";

#[derive(Parser, Debug)]
#[command(author, version, about = "Fetches the week's AI news and regenerates the static news page", long_about = None)]
pub struct Cli {
    /// Where to write the page. Defaults to index.html next to the executable.
    #[arg(long)]
    output: Option<PathBuf>,
    /// Log every request
    #[arg(short, long)]
    verbose: bool,
    #[command(flatten)]
    search: SearchArgs,
}

fn default_output_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(OUTPUT_FILE)))
        .unwrap_or_else(|| PathBuf::from(OUTPUT_FILE))
}

/// One full update: fetch every query, render, then write the page once.
async fn run(cli: &Cli, date: &DateInfo) -> Result<PathBuf> {
    let client = SearchClient::new(cli.search.search_config())
        .context("failed to build search client")?;
    let manager = SearchManager::new(client)
        .with_max_results(cli.search.max_results)
        .with_concurrency(cli.search.concurrency);

    let plan = queries::plan(date);
    let news = manager.collect(&plan).await;
    for category in Category::ALL {
        info!("📰 {}: {} items", category, news.get(category).len());
    }

    info!("🖨️ Generating HTML...");
    let html = render_page(&news, date);

    let output = cli.output.clone().unwrap_or_else(default_output_path);
    tokio::fs::write(&output, html)
        .await
        .with_context(|| format!("failed to write {}", output.display()))?;
    info!("💾 Updated: {}", output.display());

    Ok(output)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    info!("{}", "=".repeat(50));
    info!("🤖 AI News Site Auto-Updater");
    info!("{}", "=".repeat(50));

    let date = DateInfo::now();
    info!("🕒 Update time: {} {}", date.formatted, date.time);

    run(&cli, &date).await?;

    info!("{}", "=".repeat(50));
    info!("✨ Update complete!");
    Ok(())
}
