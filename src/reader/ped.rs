use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{CustomError, Result};

pub const PED_META_FIELDS: usize = 6;

/// One line of a pedigree file, kept as text: the six metadata fields followed by one
/// allele pair (`"a b"`) per marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PedRecord {
    pub meta: [String; PED_META_FIELDS],
    pub alleles: Vec<String>,
}

impl PedRecord {
    pub fn fid(&self) -> &str {
        &self.meta[0]
    }

    pub fn iid(&self) -> &str {
        &self.meta[1]
    }

    pub fn n_markers(&self) -> usize {
        self.alleles.len()
    }

    pub fn parse(line: &str, line_num: usize) -> Result<Self> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < PED_META_FIELDS {
            return Err(CustomError::PedFields {
                line_num,
                n_fields: fields.len(),
                expected: PED_META_FIELDS,
            });
        }
        let (meta, alleles) = fields.split_at(PED_META_FIELDS);
        if alleles.len() % 2 != 0 {
            return Err(CustomError::PedAlleles {
                line_num,
                n_alleles: alleles.len(),
            });
        }
        Ok(Self {
            meta: std::array::from_fn(|i| meta[i].to_string()),
            alleles: alleles
                .chunks_exact(2)
                .map(|pair| format!("{} {}", pair[0], pair[1]))
                .collect(),
        })
    }
}

pub fn read_ped(path: &impl AsRef<Path>) -> Result<Vec<PedRecord>> {
    let f = File::open(path).map_err(|e| CustomError::ReadWithPath {
        source: e,
        path: path.as_ref().to_path_buf(),
    })?;
    let mut records: Vec<PedRecord> = Vec::new();
    for (line_idx, line) in BufReader::new(f).lines().enumerate() {
        let line = line.map_err(|e| CustomError::ReadWithPath {
            source: e,
            path: path.as_ref().to_path_buf(),
        })?;
        if line.trim().is_empty() {
            continue;
        }
        let record = PedRecord::parse(&line, line_idx + 1)?;
        if let Some(first) = records.first()
            && record.n_markers() != first.n_markers()
        {
            return Err(CustomError::PedMarkerCount {
                line_num: line_idx + 1,
                n_markers: record.n_markers(),
                expected: first.n_markers(),
            });
        }
        records.push(record);
    }
    Ok(records)
}
