// Copyright 2026 the Shapegen Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Command line front end: writes `lines.txt` or `circles.txt`.
//!
//! Usage:
//!     shapegen                       # lines, default parameters
//!     shapegen circles --seed 42
//!     shapegen lines --count 10 --resolution 100 --out-dir /tmp

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use shapegen::{Scenario, ScenarioConfig, ScenarioRunner, DEFAULT_COUNT, DEFAULT_RESOLUTION};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Exit status for an unrecognized mode, matching clap's usage errors.
const USAGE_ERROR: u8 = 2;

/// Log filter when `RUST_LOG` is unset. A successful run stays silent;
/// `RUST_LOG=info` shows the seed and output path.
const DEFAULT_LOG_FILTER: &str = "warn";

/// Generate point samples along random circles or line segments.
#[derive(Debug, Parser)]
#[command(name = "shapegen", version, about, long_about = None)]
struct Cli {
    /// Scenario to generate: `lines` or `circles`.
    #[arg(default_value = "lines")]
    mode: String,

    /// Number of shapes to draw.
    #[arg(long, default_value_t = DEFAULT_COUNT)]
    count: usize,

    /// Number of samples per shape.
    #[arg(long, default_value_t = DEFAULT_RESOLUTION)]
    resolution: usize,

    /// Seed for the random source. A fresh seed is drawn and logged if omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Directory the output file is written to.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    // Resolve the mode before touching the filesystem.
    let scenario = match cli.mode.parse::<Scenario>() {
        Ok(scenario) => scenario,
        Err(err) => {
            println!("ERROR: {err}");
            return ExitCode::from(USAGE_ERROR);
        }
    };

    match run(&cli, scenario) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, scenario: Scenario) -> Result<()> {
    let config = ScenarioConfig::default()
        .with_count(cli.count)
        .with_resolution(cli.resolution);
    let seed = cli.seed.unwrap_or_else(rand::random);
    info!(%scenario, seed, count = config.count, resolution = config.resolution, "starting");

    let mut runner = ScenarioRunner::seeded(seed, config).context("invalid scenario configuration")?;
    let path = runner
        .run_in(scenario, &cli.out_dir)
        .with_context(|| format!("{scenario} scenario failed"))?;
    info!(path = %path.display(), "done");
    Ok(())
}
