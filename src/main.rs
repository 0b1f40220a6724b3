//! Census-Catalog main entry point
//!
//! This is the command-line interface for the catalog scraper and the
//! bundle analyzer.

use census_catalog::analysis::analyze;
use census_catalog::config::{load_config_with_hash, Config};
use census_catalog::scrape::scrape;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Census-Catalog: product catalog scraper and bundle analyzer
///
/// `scrape` fetches every catalog page and saves the products as CSV.
/// `analyze` reads that CSV and reports the highest bundle price per county.
#[derive(Parser, Debug)]
#[command(name = "census-catalog")]
#[command(version)]
#[command(about = "Catalog scraper and bundle price analyzer", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in defaults when omitted)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose", global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch all catalog pages and write the products CSV
    Scrape {
        /// Products CSV to write
        #[arg(short, long, value_name = "FILE")]
        output: Option<String>,
    },

    /// Aggregate bundle prices from the products CSV
    Analyze {
        /// Products CSV to read
        #[arg(short, long, value_name = "FILE")]
        input: Option<String>,

        /// Summary CSV to write
        #[arg(short, long, value_name = "FILE")]
        output: Option<String>,
    },

    /// Print the effective configuration and exit
    ShowConfig,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            match load_config_with_hash(path) {
                Ok((cfg, hash)) => {
                    tracing::info!("Configuration loaded successfully (hash: {})", hash);
                    cfg
                }
                Err(e) => {
                    tracing::error!("Failed to load configuration: {}", e);
                    return Err(e.into());
                }
            }
        }
        None => Config::default(),
    };

    match cli.command {
        Command::Scrape { output } => {
            if let Some(path) = output {
                config.output.products_path = path;
            }
            handle_scrape(config).await?;
        }
        Command::Analyze { input, output } => {
            if let Some(path) = input {
                config.output.products_path = path;
            }
            if let Some(path) = output {
                config.output.summary_path = path;
            }
            handle_analyze(&config)?;
        }
        Command::ShowConfig => handle_show_config(&config),
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("census_catalog=info,warn"),
            1 => EnvFilter::new("census_catalog=debug,info"),
            2 => EnvFilter::new("census_catalog=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

async fn handle_scrape(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    census_catalog::config::validate(&config)?;

    match scrape(config).await {
        Ok(report) => {
            tracing::info!(
                "Scrape finished: {} pages fetched, {} skipped",
                report.pages_fetched(),
                report.pages_skipped()
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!("Scrape failed: {}", e);
            Err(e.into())
        }
    }
}

fn handle_analyze(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    census_catalog::config::validate(config)?;

    if let Err(e) = analyze(config) {
        tracing::error!("Analysis failed: {}", e);
        return Err(e.into());
    }

    Ok(())
}

/// Handles `show-config`: prints what a run would use
fn handle_show_config(config: &Config) {
    print!("{}", format_config(config));
}

fn format_config(config: &Config) -> String {
    let mut out = String::new();

    out.push_str("=== Census-Catalog Configuration ===\n\n");

    out.push_str("Catalog:\n");
    out.push_str(&format!("  Base URL: {}\n", config.catalog.base_url));
    out.push_str(&format!("  Pages: 1..={}\n", config.catalog.pages));
    out.push_str(&format!("  Timeout: {}s\n", config.catalog.timeout_secs));
    out.push_str(&format!(
        "  Delay after each successfully fetched page: {}ms\n",
        config.catalog.delay_ms
    ));

    out.push_str("\nExtractor:\n");
    out.push_str(&format!("  Container: {}\n", config.extractor.container));
    out.push_str(&format!("  Product link: {}\n", config.extractor.product_link));
    out.push_str(&format!("  Content column: {}\n", config.extractor.content_column));
    out.push_str(&format!("  Price column: {}\n", config.extractor.price_column));

    out.push_str("\nAnalysis:\n");
    out.push_str(&format!("  Keyword: {}\n", config.analysis.keyword));
    out.push_str(&format!("  Currency symbol: {}\n", config.analysis.currency_symbol));

    out.push_str("\nOutput:\n");
    out.push_str(&format!("  Products: {}\n", config.output.products_path));
    out.push_str(&format!("  Summary: {}\n", config.output.summary_path));

    out
}
