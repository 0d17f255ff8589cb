use std::path::{Path, PathBuf};

use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

use barcode_sim::error::{CustomError, Result};
use barcode_sim::output::{write_map, write_ped, write_switch_log, write_switched_ped};
use barcode_sim::reader::ped::read_ped;
use barcode_sim::simulate::{SimulationParams, simulate_panels};
use barcode_sim::switch::switch_samples;

use crate::{SimulateArgs, SwitchArgs};

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            info!("Seeding random number generator with {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    }
}

fn stem_path(dir: &Path, stem: &str, extension: &str) -> PathBuf {
    dir.join(format!("{stem}.{extension}"))
}

#[derive(Debug, Clone)]
pub struct SimulateSpec {
    chip_ped: PathBuf,
    chip_map: PathBuf,
    bar_ped: PathBuf,
    bar_map: PathBuf,
    params: SimulationParams,
    seed: Option<u64>,
}

impl SimulateSpec {
    pub fn from_args(args: &SimulateArgs) -> Self {
        Self {
            chip_ped: stem_path(&args.path, &args.chip_stem, "ped"),
            chip_map: stem_path(&args.path, &args.chip_stem, "map"),
            bar_ped: stem_path(&args.path, &args.bar_stem, "ped"),
            bar_map: stem_path(&args.path, &args.bar_stem, "map"),
            params: SimulationParams {
                n_individuals: args.n_ind,
                n_chip_markers: args.n_chip_snps,
                n_bar_markers: args.n_bar_snps,
                mismatch_rate: args.mismatch_rate,
                ld_decay_rate: args.ld_decay_rate,
                with_missing: args.missing,
            },
            seed: args.seed,
        }
    }

    pub fn print_paths(&self) {
        println!("CHIP PED: {}", self.chip_ped.display());
        println!("CHIP MAP: {}", self.chip_map.display());
        println!("BAR PED : {}", self.bar_ped.display());
        println!("BAR MAP : {}", self.bar_map.display());
        println!();
    }

    pub fn run(&self) -> Result<()> {
        let mut rng = make_rng(self.seed);
        let panels = simulate_panels(&self.params, &mut rng)?;
        if panels.chip.is_empty() {
            warn!("No individuals simulated; writing empty panels");
        }
        info!(
            "Simulated {} chip records ({} markers) and {} barcode records ({} markers)",
            panels.chip.len(),
            panels.chip.n_markers(),
            panels.barcode.len(),
            panels.barcode.n_markers()
        );

        println!("Writing chip panel to {}...", self.chip_ped.display());
        write_ped(&panels.chip, &self.chip_ped)?;
        write_map(&panels.chip, &self.chip_map)?;

        println!("Writing barcode panel to {}...", self.bar_ped.display());
        write_ped(&panels.barcode, &self.bar_ped)?;
        write_map(&panels.barcode, &self.bar_map)?;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct SwitchSpec {
    ped: PathBuf,
    map: PathBuf,
    switched_ped: PathBuf,
    switched_map: PathBuf,
    switch_list: PathBuf,
    n_switches: usize,
    seed: Option<u64>,
}

impl SwitchSpec {
    pub fn from_args(args: &SwitchArgs) -> Self {
        Self {
            ped: stem_path(&args.path, &args.stem, "ped"),
            map: stem_path(&args.path, &args.stem, "map"),
            switched_ped: stem_path(&args.path, &args.stem, "switched.ped"),
            switched_map: stem_path(&args.path, &args.stem, "switched.map"),
            switch_list: stem_path(&args.path, &args.stem, "list.of.switch"),
            n_switches: args.n,
            seed: args.seed,
        }
    }

    pub fn print_paths(&self) {
        println!("PED : {}", self.ped.display());
        println!("MAP : {}", self.map.display());
        println!();
    }

    pub fn run(&self) -> Result<()> {
        let mut rng = make_rng(self.seed);
        let source = read_ped(&self.ped)?;
        info!(
            "Read {} individuals with {} markers from {}",
            source.len(),
            source.first().map_or(0, |record| record.n_markers()),
            self.ped.display()
        );
        let switched = switch_samples(&source, self.n_switches, &mut rng)?;

        std::fs::copy(&self.map, &self.switched_map).map_err(|e| CustomError::Copy {
            source: e,
            from: self.map.clone(),
            to: self.switched_map.clone(),
        })?;

        println!("Writing switched panel to {}...", self.switched_ped.display());
        write_switched_ped(&switched.records, &self.switched_ped)?;

        println!("Writing list of switches to {}...", self.switch_list.display());
        write_switch_log(&switched.switches, &self.switch_list)?;
        Ok(())
    }
}
