// Entrypoint for the gallery CLI.
// - Parse flags, set up logging, build the API client and load the page.
// - With `--export` the page is written once; otherwise the interactive
//   menu takes over until the user exits.

use anyhow::Context;
use clap::Parser;
use portfolio_gallery::{logger, ui, ApiClient, CliConfig, Filter, Page};
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();
    logger::init_cli_logger(config.verbose);
    tracing::debug!(?config, "CLI config");

    config.validate()?;

    let api = ApiClient::new(&config.api_url).context("Failed to build HTTP client")?;
    let mut page = Page::new(api);

    if let Err(e) = ui::with_spinner("Loading portfolio...", || page.load())? {
        tracing::error!(error = %e, api_url = %config.api_url, "failed to load portfolio");
        eprintln!("Failed to load portfolio from {}: {}", config.api_url, e);
    }

    let filter = config.initial_filter();
    if filter != Filter::All && !page.select(filter)? {
        tracing::warn!(?filter, "unknown category, showing all works");
    }

    match &config.export {
        Some(path) => ui::export_once(&page, path),
        None => ui::main_menu(&mut page, PathBuf::from("portfolio.html")),
    }
}
