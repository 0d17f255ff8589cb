use thiserror::Error;

#[derive(Debug, Error)]
pub enum CustomError {
    #[error("could not read {path}")]
    ReadWithPath {
        #[source]
        source: std::io::Error,
        path: std::path::PathBuf,
    },

    #[error("could not write to {path}")]
    Write {
        #[source]
        source: std::io::Error,
        path: std::path::PathBuf,
    },

    #[error("could not create output directory {path}")]
    CreateDir {
        #[source]
        source: std::io::Error,
        path: std::path::PathBuf,
    },

    #[error("could not copy {from} to {to}")]
    Copy {
        #[source]
        source: std::io::Error,
        from: std::path::PathBuf,
        to: std::path::PathBuf,
    },

    #[error("could not write switch list")]
    CsvWrite(#[from] csv::Error),

    #[error("expected at least {expected} fields (got {n_fields}) in line {line_num} of .ped file")]
    PedFields {
        line_num: usize,
        n_fields: usize,
        expected: usize,
    },

    #[error("odd number of allele tokens ({n_alleles}) in line {line_num} of .ped file")]
    PedAlleles { line_num: usize, n_alleles: usize },

    #[error("expected {expected} markers (got {n_markers}) in line {line_num} of .ped file")]
    PedMarkerCount {
        line_num: usize,
        n_markers: usize,
        expected: usize,
    },

    #[error("individual {iid} carries {n_markers} genotypes but the panel has {expected} markers")]
    PanelMarkerCount {
        iid: String,
        n_markers: usize,
        expected: usize,
    },

    #[error("barcode marker count ({n_bar}) exceeds chip marker count ({n_chip})")]
    BarcodeExceedsChip { n_bar: usize, n_chip: usize },

    #[error("cannot select {n_switches} disjoint pairs from {n_individuals} individuals")]
    SwitchPairs {
        n_switches: usize,
        n_individuals: usize,
    },

    #[error("allele pair \"{pair}\" does not encode a genotype code")]
    AlleleCode { pair: String },
}

pub type Result<T> = std::result::Result<T, CustomError>;
