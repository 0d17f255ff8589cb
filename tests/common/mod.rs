#![allow(dead_code)]

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub const N_INDIVIDUALS: usize = 10;
pub const N_MARKERS: usize = 5;

pub struct Dataset {
    // Held so the directory lives as long as the dataset
    _dir: TempDir,
    pub path: PathBuf,
}

impl Dataset {
    pub fn file(&self, name: &str) -> PathBuf {
        self.path.join(name)
    }
}

pub fn empty_dataset() -> io::Result<Dataset> {
    let dir = tempfile::Builder::new().prefix("barcode-sim-tests").tempdir()?;
    let path = dir.path().to_path_buf();
    Ok(Dataset { _dir: dir, path })
}

/// A small chip panel that uses nucleotide alleles, with a distinct genotype row for
/// every individual.
pub fn create_dataset(stem: &str) -> io::Result<Dataset> {
    let dataset = empty_dataset()?;
    write_ped(dataset.file(&format!("{stem}.ped")))?;
    write_map(dataset.file(&format!("{stem}.map")))?;
    Ok(dataset)
}

pub fn fixture_alleles(idx: usize) -> Vec<String> {
    const NUCLEOTIDES: [&str; 4] = ["A", "C", "G", "T"];
    const PAIRS: [&str; 4] = ["A A", "A G", "G G", "0 0"];
    // First marker is unique for up to 16 individuals
    let first = format!("{} {}", NUCLEOTIDES[idx % 4], NUCLEOTIDES[(idx / 4) % 4]);
    std::iter::once(first)
        .chain((1..N_MARKERS).map(|marker| PAIRS[(idx + marker) % PAIRS.len()].to_string()))
        .collect()
}

fn write_ped(path: impl AsRef<Path>) -> io::Result<()> {
    let mut file = File::create(path)?;
    for idx in 0..N_INDIVIDUALS {
        let sex = 1 + idx % 2;
        write!(file, "FAM{idx}\tS{idx}\t0\t0\t-9\t{sex}")?;
        for pair in fixture_alleles(idx) {
            write!(file, "\t{pair}")?;
        }
        writeln!(file)?;
    }
    Ok(())
}

fn write_map(path: impl AsRef<Path>) -> io::Result<()> {
    let mut file = File::create(path)?;
    for idx in 1..=N_MARKERS {
        // Column layout left untouched by the switcher
        writeln!(file, "1 snp{idx} 0.0 {}", idx * 1000)?;
    }
    Ok(())
}

/// Split a pedigree line into its six metadata fields and its allele pairs.
pub fn split_ped_line(line: &str) -> (Vec<String>, Vec<String>) {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    assert!(tokens.len() >= 6, "short pedigree line: {line}");
    let meta = tokens[..6].iter().map(|s| s.to_string()).collect();
    let alleles = tokens[6..]
        .chunks(2)
        .map(|pair| {
            assert_eq!(pair.len(), 2, "odd allele count in line: {line}");
            format!("{} {}", pair[0], pair[1])
        })
        .collect();
    (meta, alleles)
}

pub fn read_ped_lines(path: impl AsRef<Path>) -> Vec<(Vec<String>, Vec<String>)> {
    fs::read_to_string(path)
        .expect("could not read pedigree file")
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(split_ped_line)
        .collect()
}
