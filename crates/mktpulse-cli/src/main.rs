mod output;
mod report;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use mktpulse_core::{
    derive_all, derive_all_strict, AppConfig, BrandMetric, DerivedTables, FileLoader, Loader,
    Platform, RawTables, SampleLoader,
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "mktpulse-cli")]
#[command(about = "Marketing performance metrics command line interface")]
struct Cli {
    /// Dataset file (YAML or JSON). Overrides `MKTPULSE_DATASET_PATH`; the
    /// built-in sample is used when neither is set.
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print derived tables
    Tables {
        /// Print a single domain instead of all five
        #[arg(long, value_enum)]
        domain: Option<Domain>,

        /// Restrict monitoring rows to these platforms (repeatable)
        #[arg(long = "platform")]
        platforms: Vec<Platform>,

        /// Restrict brand pulse rows to one survey metric
        #[arg(long)]
        metric: Option<BrandMetric>,

        /// Emit JSON instead of fixed-width text
        #[arg(long)]
        json: bool,
    },
    /// Print KPI summaries for every domain
    Kpis {
        /// Emit JSON instead of fixed-width text
        #[arg(long)]
        json: bool,
    },
    /// Generate a markdown report
    Report,
    /// Check that every currency and percentage field parses
    Validate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum Domain {
    Social,
    Website,
    Events,
    Monitoring,
    BrandPulse,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = mktpulse_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let Some(command) = cli.command else {
        println!("mktpulse-cli ready; run with --help to list commands");
        return Ok(());
    };

    let (raw, source) = load_raw(cli.dataset, &config)?;
    tracing::debug!(env = %config.env, source = %source, "raw tables loaded");

    match command {
        Commands::Tables {
            domain,
            platforms,
            metric,
            json,
        } => {
            let derived = derive(&raw, &config)?;
            let selection = output::Selection {
                domain,
                platforms,
                metric,
            };
            output::print_tables(&derived, &selection, json)?;
        }
        Commands::Kpis { json } => {
            let derived = derive(&raw, &config)?;
            output::print_kpis(&mktpulse_core::summarize(&derived), json)?;
        }
        Commands::Report => {
            let derived = derive(&raw, &config)?;
            report::print_report(&derived, &source);
        }
        Commands::Validate => run_validate(&raw)?,
    }

    Ok(())
}

/// Picks the loader: `--dataset`, then the configured path, then the sample.
///
/// Returns the tables and a label describing where they came from.
fn load_raw(
    dataset: Option<PathBuf>,
    config: &AppConfig,
) -> anyhow::Result<(RawTables, String)> {
    match dataset.or_else(|| config.dataset_path.clone()) {
        Some(path) => {
            let loader = FileLoader::new(path);
            let raw = loader.load()?;
            Ok((raw, loader.path().display().to_string()))
        }
        None => Ok((SampleLoader.load()?, "built-in sample".to_string())),
    }
}

fn derive(raw: &RawTables, config: &AppConfig) -> anyhow::Result<DerivedTables> {
    if config.strict_parsing {
        Ok(derive_all_strict(raw)?)
    } else {
        Ok(derive_all(raw))
    }
}

/// Lists every field that would be defaulted and fails if there are any.
fn run_validate(raw: &RawTables) -> anyhow::Result<()> {
    let derived = derive_all(raw);
    if derived.is_clean() {
        println!(
            "dataset ok: {} rows across 5 tables, all fields parsed",
            raw.row_count()
        );
        return Ok(());
    }

    println!("{:<30}RAW VALUE", "FIELD");
    for issue in &derived.parse_defaults {
        println!("{:<30}{}", issue.field, issue.raw_value);
    }
    anyhow::bail!(
        "{} field(s) could not be parsed and would default to 0.0",
        derived.parse_defaults.len()
    )
}

#[cfg(test)]
mod tests;
