//! Command-line postal code lookups.
//!
//! Loads a dataset once and answers a single exact or radius query,
//! printing the result as JSON or CSV on stdout.

mod config;
mod output;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use zipgeo::{Dataset, Format};

use crate::config::Config;
use crate::output::{write_neighbors, write_zip, OutputFormat};

#[derive(Parser, Debug)]
#[command(name = "zipq")]
#[command(about = "Postal code lookup and radius search")]
struct Args {
    /// Dataset file (overrides the config file)
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Dataset format: csv (quoted CSV) or tsv (gazetteer)
    #[arg(short, long)]
    format: Option<Format>,

    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    output: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Look up a single postal code
    Find { code: String },
    /// List postal codes within a radius of a postal code
    Radius {
        code: String,
        /// Radius in miles (defaults to the configured radius)
        miles: Option<f64>,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::default(),
    };

    let (path, format) = resolve_dataset(&args, &config)?;
    info!("Loading {} dataset from {}", format, path.display());

    let dataset = Dataset::load(&path, format)
        .with_context(|| format!("Failed to load dataset {}", path.display()))?;

    let stdout = io::stdout().lock();
    match &args.command {
        Command::Find { code } => {
            let zip = dataset
                .find(code)
                .with_context(|| format!("Postal code {} not found", code))?;
            write_zip(stdout, zip, args.output)?;
        }
        Command::Radius { code, miles } => {
            let miles = miles.unwrap_or(config.query.default_radius);
            let found = dataset.find_in_radius(code, miles);
            if found.is_empty() {
                warn!("Postal code {} not found", code);
            } else {
                info!("{} postal codes within {} miles of {}", found.len(), miles, code);
            }
            write_neighbors(stdout, &found, args.output)?;
        }
    }

    Ok(())
}

/// Pick the dataset path and format, preferring command-line flags.
fn resolve_dataset(args: &Args, config: &Config) -> Result<(PathBuf, Format)> {
    let configured = config.dataset.as_ref();

    let path = args
        .data
        .clone()
        .or_else(|| configured.map(|d| d.path.clone()))
        .context("No dataset given; pass --data or set [dataset] path in the config")?;

    let format = args
        .format
        .or_else(|| configured.map(|d| d.format))
        .context("No dataset format given; pass --format or set [dataset] format in the config")?;

    Ok((path, format))
}
