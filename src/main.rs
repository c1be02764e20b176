use chainset::{
    bench::{self, BenchConfig, KeyKind},
    Clock,
};

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

/// Times insert, search and delete on a separate-chaining hash table for sorted,
/// shuffled and reversed inputs.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// CSV dataset to read keys from. The first line is a header.
    dataset: PathBuf,

    /// Number of data lines to load.
    lines: usize,

    /// CSV log the results are appended to [default: analysis.txt]
    #[arg(short, long)]
    log_file: Option<PathBuf>,

    /// Kind of key to insert.
    #[arg(short, long, value_enum, default_value_t = KeyKind::Titles)]
    keys: KeyKind,

    /// Seed for the shuffled case, for repeatable runs.
    #[arg(short, long)]
    seed: Option<u64>,
}

impl Args {
    fn into_config(self) -> BenchConfig {
        let mut config = BenchConfig::new(self.dataset, self.lines).key_kind(self.keys);
        if let Some(log_file) = self.log_file {
            config = config.log_file(log_file);
        }
        if let Some(seed) = self.seed {
            config = config.seed(seed);
        }
        config
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = Args::parse().into_config();
    let clock = Clock::new();

    let results = bench::execute(&config, &clock)
        .with_context(|| format!("Benchmark on {} failed", config.dataset().display()))?;
    let loaded = results.first().map(|r| r.n()).unwrap_or_default();

    println!();
    println!("Dataset file: {}", config.dataset().display());
    println!(
        "Lines requested: {} | Lines loaded: {loaded}",
        config.lines()
    );
    println!();

    for result in &results {
        bench::print_result(result).context("Failed to print the results")?;
    }

    // The timings are already on screen, so a log failure is not fatal.
    match bench::append_csv(config.log_path(), &results) {
        Ok(()) => {
            println!();
            println!("Appended results to {}", config.log_path().display());
        }
        Err(e) => {
            log::error!("Could not write {}: {e}", config.log_path().display());
            println!("Could not write {}: {e}", config.log_path().display());
        }
    }

    Ok(())
}
