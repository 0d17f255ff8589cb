mod cli;

use std::path::PathBuf;

use barcode_sim::error::{self, Result};
use barcode_sim::{logger, simulate};
use clap::{ArgAction, Parser, Subcommand};
use miette::IntoDiagnostic;

/// Simulate chip/barcode genotype panels and sample-swap corruptions.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a correlated pair of chip and barcode PLINK text panels.
    Simulate(SimulateArgs),
    /// Swap genotypes between random disjoint pairs of individuals of a panel.
    Switch(SwitchArgs),
}

#[derive(clap::Args, Debug)]
pub struct SimulateArgs {
    /// Output directory.
    #[arg(value_hint = clap::ValueHint::DirPath)]
    path: PathBuf,

    /// Number of individuals.
    #[arg(long, default_value_t = 1000)]
    n_ind: usize,

    /// Number of chip SNPs.
    #[arg(long, default_value_t = 12)]
    n_chip_snps: usize,

    /// Number of barcode SNPs. Can not be bigger than --n-chip-snps.
    #[arg(long, default_value_t = 12)]
    n_bar_snps: usize,

    /// PLINK file stem of the chip panel.
    #[arg(long, default_value = "chip")]
    chip_stem: String,

    /// PLINK file stem of the barcode panel.
    #[arg(long, default_value = "bar")]
    bar_stem: String,

    /// Per-marker mismatch rate of the barcode against the chip.
    #[arg(long, default_value_t = simulate::DEFAULT_MISMATCH_RATE)]
    mismatch_rate: f64,

    /// Simulate missing genotype calls.
    #[arg(long)]
    missing: bool,

    /// Per-marker probability that a chip marker drifts from the founder state.
    #[arg(long, default_value_t = simulate::LD_DECAY_RATE)]
    ld_decay_rate: f64,

    /// Seed of the random number generator.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(clap::Args, Debug)]
pub struct SwitchArgs {
    /// Directory holding the panel to corrupt.
    #[arg(value_hint = clap::ValueHint::DirPath)]
    path: PathBuf,

    /// Number of switches.
    #[arg(short, long = "n-switches", default_value_t = 1)]
    n: usize,

    /// PLINK file stem of the panel.
    #[arg(short = 'f', long, default_value = "chip")]
    stem: String,

    /// Seed of the random number generator.
    #[arg(long)]
    seed: Option<u64>,
}

fn try_main() -> Result<()> {
    let args = Args::parse();
    logger::init(args.verbose);

    match &args.command {
        Command::Simulate(sim_args) => {
            std::fs::create_dir_all(&sim_args.path).map_err(|e| {
                error::CustomError::CreateDir {
                    source: e,
                    path: sim_args.path.clone(),
                }
            })?;
            let spec = cli::SimulateSpec::from_args(sim_args);
            spec.print_paths();
            spec.run()?;
        }
        Command::Switch(switch_args) => {
            let spec = cli::SwitchSpec::from_args(switch_args);
            spec.print_paths();
            spec.run()?;
        }
    }
    Ok(())
}

fn main() -> miette::Result<()> {
    try_main().into_diagnostic()
}
