use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::{Path, PathBuf};

use triad::WorkloadConfig;

mod bench;
mod datasets;
mod demo;
mod quick_bench;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "triad workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Walk through each structure's operations
    Demo {
        /// Which structure to demonstrate
        #[arg(value_enum, default_value_t = DemoTarget::All)]
        target: DemoTarget,
    },
    /// Write random benchmark datasets as JSON
    Datasets {
        /// Output directory
        #[arg(long, default_value = "datasets")]
        out: PathBuf,

        /// Dataset sizes, comma separated
        #[arg(long, value_delimiter = ',', default_values_t = [1_000usize, 10_000, 100_000, 1_000_000])]
        sizes: Vec<usize>,

        /// JSON file with generator bounds and seed
        #[arg(long)]
        config: Option<PathBuf>,

        /// Seed, overriding the config file
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Time bulk operations on small datasets and print a summary table
    QuickBench {
        /// Dataset sizes, comma separated
        #[arg(long, value_delimiter = ',', default_values_t = [1_000usize, 10_000, 100_000])]
        sizes: Vec<usize>,

        /// JSON file with generator bounds and seed
        #[arg(long)]
        config: Option<PathBuf>,

        /// Seed, overriding the config file
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run the criterion suite and write a markdown report
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,

        /// Name under which criterion saves this run
        #[arg(long, default_value = "current")]
        baseline: String,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DemoTarget {
    Trie,
    Fenwick,
    SkipList,
    All,
}

fn load_config(path: Option<&Path>, seed: Option<u64>) -> Result<WorkloadConfig> {
    let mut config = match path {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config {}", path.display()))?
        }
        None => WorkloadConfig::default(),
    };
    if seed.is_some() {
        config.seed = seed;
    }
    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Demo { target } => demo::run(target)?,
        Commands::Datasets { out, sizes, config, seed } => {
            let config = load_config(config.as_deref(), seed)?;
            datasets::generate(&out, &sizes, &config)?;
        }
        Commands::QuickBench { sizes, config, seed } => {
            let config = load_config(config.as_deref(), seed)?;
            quick_bench::run(&sizes, &config)?;
        }
        Commands::Bench { quick, report_only, baseline } => {
            if !report_only {
                bench::run_benchmarks(quick, &baseline)?;
            }
            bench::generate_report()?;
        }
    }

    Ok(())
}
