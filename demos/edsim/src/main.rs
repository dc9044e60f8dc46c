//! edsim: command-line driver for the emergency department simulator.
//!
//! Loads a JSON config (optional), applies command-line overrides, runs one
//! simulated shift, and prints the report.  Set `RUST_LOG=debug` to see every
//! arrival and treatment start.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ed_core::{AdvancePolicy, SimConfig};
use ed_output::{CsvWriter, OutputWriter, SimOutputObserver, SqliteWriter};
use ed_sim::{NoopObserver, Sim, SimBuilder, SimSummary};

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Advance {
    Step,
    Jump,
}

impl From<Advance> for AdvancePolicy {
    fn from(a: Advance) -> Self {
        match a {
            Advance::Step => AdvancePolicy::Step,
            Advance::Jump => AdvancePolicy::Jump,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Format {
    Csv,
    Sqlite,
}

/// Emergency department discrete-event simulator
#[derive(Parser, Debug)]
#[command(name = "edsim", version)]
#[command(about = "Simulate patient flow through an emergency department", long_about = None)]
struct Cli {
    /// JSON config file; missing fields take their defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Arrival horizon in minutes
    #[arg(long)]
    horizon: Option<u64>,

    /// Number of doctors
    #[arg(long)]
    doctors: Option<u32>,

    /// Number of beds
    #[arg(long)]
    beds: Option<u32>,

    /// Base arrival rate (patients per hour)
    #[arg(long)]
    rate: Option<f64>,

    /// RNG seed; omitted means a fresh seed from the OS
    #[arg(long)]
    seed: Option<u64>,

    /// Clock advance policy
    #[arg(long, value_enum)]
    advance: Option<Advance>,

    /// Directory for per-patient and per-tick output files
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output backend used with --output
    #[arg(long, value_enum, default_value = "csv")]
    format: Format,

    /// Print the summary as JSON instead of the text report
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn load_config(&self) -> Result<SimConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("parsing config {}", path.display()))?
            }
            None => SimConfig::default(),
        };

        if let Some(h) = self.horizon {
            config.horizon_minutes = h;
        }
        if let Some(d) = self.doctors {
            config.doctors = d;
        }
        if let Some(b) = self.beds {
            config.beds = b;
        }
        if let Some(r) = self.rate {
            config.base_arrivals_per_hour = r;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(a) = self.advance {
            config.advance = a.into();
        }
        Ok(config)
    }
}

fn run_with_writer<W: OutputWriter>(sim: &mut Sim, writer: W) -> Result<SimSummary> {
    let mut obs = SimOutputObserver::new(writer);
    let summary = sim.run(&mut obs)?;
    if let Some(e) = obs.take_error() {
        return Err(e).context("writing run output");
    }
    Ok(summary)
}

fn run_with_output(sim: &mut Sim, dir: &Path, format: Format) -> Result<SimSummary> {
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    match format {
        Format::Csv => run_with_writer(sim, CsvWriter::new(dir)?),
        Format::Sqlite => run_with_writer(sim, SqliteWriter::new(dir)?),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = cli.load_config()?;
    info!(
        horizon = config.horizon_minutes,
        doctors = config.doctors,
        beds    = config.beds,
        rate    = config.base_arrivals_per_hour,
        advance = ?config.advance,
        "configuration loaded"
    );

    let mut sim = SimBuilder::new(config).build()?;

    let t0 = Instant::now();
    let summary = match &cli.output {
        Some(dir) => run_with_output(&mut sim, dir, cli.format)?,
        None => sim.run(&mut NoopObserver)?,
    };
    let elapsed = t0.elapsed();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{summary}");
        println!();
        println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
        if let Some(dir) = &cli.output {
            println!("Output written to {}", dir.display());
        }
        if summary.stalled {
            println!("Note: run ended with patients no resource could serve.");
        }
    }
    Ok(())
}
