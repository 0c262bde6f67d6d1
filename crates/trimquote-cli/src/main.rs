//! Trimquote CLI
//!
//! Collects estimate inputs, prices them, and prints or writes the quote.

mod cli;
mod config;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use trimquote_common::ClientInfo;
use trimquote_pricing::PricingEngine;
use trimquote_render::QuoteFormatter;

use crate::cli::Cli;
use crate::config::TrimquoteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over -v
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    debug!("Starting Trimquote v{}", trimquote_common::VERSION);
    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    let config = TrimquoteConfig::load(cli.config.as_deref())?;
    debug!("Loaded configuration: {:?}", config);

    // Validate and price before rendering anything
    let request = cli.command.to_request()?;
    let engine = PricingEngine::new(config.rates)?;
    let result = engine.compute(&request)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let date = cli
        .date
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    let client = ClientInfo::new(cli.client, cli.project, date);
    let formatter = QuoteFormatter::new(config.letterhead);

    match cli.out_dir {
        Some(dir) => {
            let artifacts = formatter.render_all(&cli.format.formats(), &client, &result)?;
            let paths = output::write_artifacts(&dir, &artifacts)?;
            for path in paths {
                println!("{}", path.display());
            }
            info!(total = %result.total.amount, "Quote complete");
        }
        None => print!("{}", formatter.render_text(&client, &result)),
    }

    Ok(())
}
