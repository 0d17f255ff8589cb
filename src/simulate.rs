use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use rand::Rng;

use crate::error::{CustomError, Result};
use crate::model::{Genotype, Individual, Panel, SampleMeta, Sex};

/// Per-marker probability that a chip marker drifts away from the founder state (~90% LD).
pub const LD_DECAY_RATE: f64 = 0.10;
pub const DEFAULT_MISMATCH_RATE: f64 = 0.01;

/// Integer weights over the genotype codes 0..=3 used when a marker is resampled.
///
/// A resample never returns the current value: the current code's weight is dropped
/// and the draw is taken from what remains. The tables reproduce the realized
/// frequencies of the historical draws:
/// - chip: `randrange(0, 3) % 3 + 1`, or `randrange(0, 4)` with a single redraw on 0
///   when missing data is simulated;
/// - barcode: `randrange(1, 12) % 3 + 1`, or `randrange(1, 12) % 4` when missing data
///   is simulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResampleWeights {
    weights: [u32; 4],
}

impl ResampleWeights {
    pub const CHIP: Self = Self {
        weights: [0, 1, 1, 1],
    };
    pub const CHIP_WITH_MISSING: Self = Self {
        weights: [1, 5, 5, 5],
    };
    pub const BARCODE: Self = Self {
        weights: [0, 3, 4, 4],
    };
    pub const BARCODE_WITH_MISSING: Self = Self {
        weights: [2, 3, 3, 3],
    };

    pub fn chip(with_missing: bool) -> Self {
        if with_missing {
            Self::CHIP_WITH_MISSING
        } else {
            Self::CHIP
        }
    }

    pub fn barcode(with_missing: bool) -> Self {
        if with_missing {
            Self::BARCODE_WITH_MISSING
        } else {
            Self::BARCODE
        }
    }

    fn total_excluding(&self, current: Genotype) -> u32 {
        self.weights.iter().sum::<u32>() - self.weights[current.code() as usize]
    }

    /// Probability that a resample of `current` yields a missing call.
    pub fn p_missing(&self, current: Genotype) -> f64 {
        if current == Genotype::Missing {
            return 0.0;
        }
        match self.total_excluding(current) {
            0 => 0.0,
            total => self.weights[0] as f64 / total as f64,
        }
    }

    pub fn resample(&self, current: Genotype, rng: &mut impl Rng) -> Genotype {
        let total = self.total_excluding(current);
        if total == 0 {
            return current;
        }
        let mut draw = rng.random_range(0..total);
        for genotype in Genotype::ALL {
            if genotype == current {
                continue;
            }
            let weight = self.weights[genotype.code() as usize];
            if draw < weight {
                return genotype;
            }
            draw -= weight;
        }
        unreachable!("draw {draw} exceeds resample weight total {total}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationParams {
    pub n_individuals: usize,
    pub n_chip_markers: usize,
    pub n_bar_markers: usize,
    pub mismatch_rate: f64,
    pub ld_decay_rate: f64,
    pub with_missing: bool,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            n_individuals: 1000,
            n_chip_markers: 12,
            n_bar_markers: 12,
            mismatch_rate: DEFAULT_MISMATCH_RATE,
            ld_decay_rate: LD_DECAY_RATE,
            with_missing: false,
        }
    }
}

pub struct SimulatedPanels {
    pub chip: Panel,
    pub barcode: Panel,
}

/// Founder state seeding every chip marker. Never missing.
pub fn draw_founder(rng: &mut impl Rng) -> Genotype {
    Genotype::ALL[rng.random_range(1..=3usize)]
}

fn draw_sex(rng: &mut impl Rng) -> Sex {
    if rng.random_range(1..=2u8) == 1 {
        Sex::Male
    } else {
        Sex::Female
    }
}

fn decay(genotypes: &mut [Genotype], rate: f64, weights: &ResampleWeights, rng: &mut impl Rng) {
    for genotype in genotypes.iter_mut() {
        if rng.random::<f64>() < rate {
            *genotype = weights.resample(*genotype, rng);
        }
    }
}

/// Simulate the chip and barcode records of individual `idx`.
///
/// The barcode vector decays from the already-decayed chip vector, so chip/barcode
/// discordance compounds both error sources.
pub fn simulate_individual(
    idx: usize,
    params: &SimulationParams,
    rng: &mut impl Rng,
) -> Result<(Individual, Individual)> {
    let founder = draw_founder(rng);
    let mut genotypes = vec![founder; params.n_chip_markers];
    decay(
        &mut genotypes,
        params.ld_decay_rate,
        &ResampleWeights::chip(params.with_missing),
        rng,
    );

    let meta = SampleMeta::simulated(idx, draw_sex(rng));
    let chip = Individual {
        meta: meta.clone(),
        genotypes: genotypes.clone(),
    };

    let bar_genotypes =
        genotypes
            .get_mut(..params.n_bar_markers)
            .ok_or(CustomError::BarcodeExceedsChip {
                n_bar: params.n_bar_markers,
                n_chip: params.n_chip_markers,
            })?;
    decay(
        bar_genotypes,
        params.mismatch_rate,
        &ResampleWeights::barcode(params.with_missing),
        rng,
    );
    let barcode = Individual {
        meta,
        genotypes: bar_genotypes.to_vec(),
    };
    Ok((chip, barcode))
}

pub fn simulate_panels(params: &SimulationParams, rng: &mut impl Rng) -> Result<SimulatedPanels> {
    info!(
        "Simulating {} individuals ({} chip markers, {} barcode markers)",
        params.n_individuals, params.n_chip_markers, params.n_bar_markers
    );
    debug!("Simulation parameters: {params:?}");

    let pb = ProgressBar::new(params.n_individuals as u64);
    pb.set_style(
        ProgressStyle::with_template("[{elapsed_precise}] {bar:30} {pos}/{len} individuals")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let mut chip = Panel::new(params.n_chip_markers);
    let mut barcode = Panel::new(params.n_bar_markers);
    for idx in 0..params.n_individuals {
        let (chip_ind, bar_ind) = simulate_individual(idx, params, rng)?;
        chip.push(chip_ind)?;
        barcode.push(bar_ind)?;
        pb.inc(1);
    }
    pb.abandon();
    Ok(SimulatedPanels { chip, barcode })
}
