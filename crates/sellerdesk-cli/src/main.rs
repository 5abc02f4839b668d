mod report;

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use sellerdesk_core::AppConfig;
use sellerdesk_ingest::{normalize_json_str, NormalizeOptions, RecordSource};

#[derive(Debug, Parser)]
#[command(name = "sellerdesk")]
#[command(about = "Normalize seller product exports into canonical records")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the normalized records as a JSON array
    Normalize {
        /// JSON file to read, or `-` for stdin
        #[arg(default_value = "-")]
        input: String,
        #[arg(long, value_enum, default_value_t = Source::Import)]
        source: Source,
        #[arg(long)]
        pretty: bool,
    },
    /// Print margin, freight and stock figures for each normalized record
    Economics {
        /// JSON file to read, or `-` for stdin
        #[arg(default_value = "-")]
        input: String,
        #[arg(long, value_enum, default_value_t = Source::Import)]
        source: Source,
        /// Freight rate per chargeable kg; overrides SELLERDESK_FREIGHT_RATE_PER_KG
        #[arg(long)]
        rate_per_kg: Option<f64>,
    },
}

/// Which ingest path's defaults to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Source {
    /// Bulk file import
    Import,
    /// Live feed message or form save
    Feed,
}

impl From<Source> for RecordSource {
    fn from(source: Source) -> Self {
        match source {
            Source::Import => RecordSource::FileImport,
            Source::Feed => RecordSource::LiveFeed,
        }
    }
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = sellerdesk_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    // Logs go to stderr so stdout stays valid JSON.
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(!config.env.is_production())
        .init();

    let cli = Cli::parse();
    tracing::debug!(env = %config.env, "sellerdesk starting");

    match cli.command {
        Commands::Normalize {
            input,
            source,
            pretty,
        } => {
            let products = load_products(&config, &input, source)?;
            let out = if pretty {
                serde_json::to_string_pretty(&products)?
            } else {
                serde_json::to_string(&products)?
            };
            println!("{out}");
        }
        Commands::Economics {
            input,
            source,
            rate_per_kg,
        } => {
            let products = load_products(&config, &input, source)?;
            let rate = rate_per_kg.unwrap_or(config.freight_rate_per_kg);
            anyhow::ensure!(
                rate.is_finite() && rate >= 0.0,
                "--rate-per-kg must be a finite non-negative number"
            );
            for product in &products {
                let row = report::EconomicsRow::build(product, config.volumetric_divisor, rate);
                println!("{}", serde_json::to_string(&row)?);
            }
        }
    }

    Ok(())
}

fn load_products(
    config: &AppConfig,
    input: &str,
    source: Source,
) -> anyhow::Result<Vec<sellerdesk_core::Product>> {
    let text = read_input(input)?;
    let opts = NormalizeOptions::from_config(config, source.into());
    let products =
        normalize_json_str(&text, &opts).with_context(|| format!("failed to normalize {input}"))?;
    tracing::info!(input, count = products.len(), "loaded products");
    Ok(products)
}

fn read_input(input: &str) -> anyhow::Result<String> {
    if input == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        return Ok(text);
    }
    let path = PathBuf::from(input);
    std::fs::read_to_string(&path).with_context(|| format!("failed to read {}", path.display()))
}

#[cfg(test)]
mod tests;
