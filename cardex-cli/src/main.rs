//! Cardex - browse a bundled trading-card catalog
//!
//! Loads the bundled catalog once, then searches it by name or shows
//! a single card in detail.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use cardex_core::catalog::{ByteSource, CatalogIndex};
use cardex_core::config::BundleConfig;

mod catalog_cli;

use catalog_cli::CatalogSubcommand;

/// Log levels
#[derive(Debug, Clone, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Parser, Debug)]
#[clap(
    name = "cardex",
    about = "Browse and search a bundled trading-card catalog",
    version
)]
struct Cli {
    #[clap(subcommand)]
    command: CatalogSubcommand,

    /// Set log level
    #[clap(long, default_value = "warn", global = true)]
    log_level: LogLevel,

    /// Load the catalog from this file instead of the bundled resource
    #[clap(long, global = true)]
    catalog: Option<PathBuf>,

    /// Override the configuration file path
    #[clap(long, global = true)]
    config: Option<PathBuf>,
}

impl Cli {
    /// Resolve the byte source the catalog is read from
    fn catalog_source(&self) -> Result<ByteSource> {
        if let Some(path) = &self.catalog {
            return Ok(ByteSource::file(path));
        }

        let config = match &self.config {
            Some(path) => BundleConfig::load_from_path(path)?,
            None => BundleConfig::load()?,
        };
        Ok(ByteSource::bundled(&config))
    }
}

/// Initialize tracing from the --log-level flag
fn initialize_tracing(log_level: &LogLevel) {
    let filter = EnvFilter::new(log_level.to_filter_directive());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr) // logs to stderr, results to stdout
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_tracing(&cli.log_level);

    let source = cli.catalog_source()?;
    let index = load_index(&source)?;

    cli.command.execute(&index)
}

/// Load the catalog once; failures are reported by the caller
fn load_index(source: &ByteSource) -> Result<CatalogIndex> {
    tracing::debug!("Resolved catalog source: {}", source.describe());

    let index = CatalogIndex::new();
    let count = index
        .load(source)
        .with_context(|| format!("Failed to load card catalog from {}", source.describe()))?;

    tracing::debug!("Catalog ready with {} cards", count);
    Ok(index)
}
