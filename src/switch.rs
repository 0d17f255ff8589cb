use log::{debug, info};
use rand::Rng;
use rand::seq::index;

use crate::error::{CustomError, Result};
use crate::reader::ped::PedRecord;

/// Ground-truth record of one exchange, naming the original owners of the genotype
/// content that moved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchEntry {
    pub first: (String, String),
    pub second: (String, String),
}

impl SwitchEntry {
    fn identities(first: &PedRecord, second: &PedRecord) -> Self {
        Self {
            first: (first.fid().to_string(), first.iid().to_string()),
            second: (second.fid().to_string(), second.iid().to_string()),
        }
    }
}

pub struct SwitchedPanel {
    pub records: Vec<PedRecord>,
    pub switches: Vec<SwitchEntry>,
}

/// Pick `n_switches` pairs of individual indices such that no index appears twice.
///
/// A random subset of `2 * n_switches` distinct indices is drawn and consumed two at a
/// time, so selection always terminates.
pub fn select_disjoint_pairs(
    n_individuals: usize,
    n_switches: usize,
    rng: &mut impl Rng,
) -> Result<Vec<(usize, usize)>> {
    let n_needed = n_switches
        .checked_mul(2)
        .filter(|&n| n <= n_individuals)
        .ok_or(CustomError::SwitchPairs {
            n_switches,
            n_individuals,
        })?;
    let picked = index::sample(rng, n_individuals, n_needed).into_vec();
    Ok(picked
        .chunks_exact(2)
        .map(|pair| (pair[0], pair[1]))
        .collect())
}

/// Return copies of both records with their genotype columns exchanged. Metadata stays
/// with the original record.
pub fn swap_genotypes(first: &PedRecord, second: &PedRecord) -> (PedRecord, PedRecord) {
    (
        PedRecord {
            meta: first.meta.clone(),
            alleles: second.alleles.clone(),
        },
        PedRecord {
            meta: second.meta.clone(),
            alleles: first.alleles.clone(),
        },
    )
}

/// Corrupt `source` by exchanging genotype content between `n_switches` disjoint pairs.
/// `source` is left untouched.
pub fn switch_samples(
    source: &[PedRecord],
    n_switches: usize,
    rng: &mut impl Rng,
) -> Result<SwitchedPanel> {
    let pairs = select_disjoint_pairs(source.len(), n_switches, rng)?;
    info!(
        "Switching genotypes of {} pairs among {} individuals",
        pairs.len(),
        source.len()
    );

    let mut records = source.to_vec();
    let mut switches = Vec::with_capacity(pairs.len());
    for (n, m) in pairs {
        debug!("Switching line {} with line {}", n + 1, m + 1);
        let (switched_n, switched_m) = swap_genotypes(&source[n], &source[m]);
        records[n] = switched_n;
        records[m] = switched_m;
        switches.push(SwitchEntry::identities(&source[n], &source[m]));
    }
    Ok(SwitchedPanel { records, switches })
}
