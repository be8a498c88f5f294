//! `spectral-verify`: run the validation sweep and print the report.
//!
//! Logging goes to stderr (`RUST_LOG=debug` for per-K summaries); stdout
//! carries only the report.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use spectral_verification::{experiment, ExperimentConfig};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Measure spectral-filter approximations of addition and multiplication"
)]
struct Cli {
    /// JSON config file; absent fields take their defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Override the trial count per filter count
    #[arg(long)]
    trials: Option<usize>,

    /// Override the filter counts, comma separated (e.g. 3,5,10)
    #[arg(long, value_delimiter = ',')]
    filters: Option<Vec<usize>>,

    /// Print the report as JSON instead of text
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn resolve_config(&self) -> Result<ExperimentConfig> {
        let mut config = match &self.config {
            Some(path) => ExperimentConfig::from_json_file(path)?,
            None => ExperimentConfig::default(),
        };
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(trials) = self.trials {
            config.trials = trials;
        }
        if let Some(filters) = &self.filters {
            config.filter_counts = filters.clone();
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    info!("seed {}", config.seed);

    let report = experiment::run(&config).context("invalid configuration")?;

    if cli.json {
        println!("{}", report.to_json().context("serializing report")?);
    } else {
        print!("{report}");
    }
    Ok(())
}
