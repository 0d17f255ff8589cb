use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use itertools::Itertools;

use crate::error::{CustomError, Result};
use crate::model::{Individual, Marker, Panel};
use crate::reader::ped::PedRecord;
use crate::switch::SwitchEntry;

fn create(path: &Path) -> Result<BufWriter<File>> {
    let f = File::create(path).map_err(|e| CustomError::Write {
        source: e,
        path: path.to_path_buf(),
    })?;
    Ok(BufWriter::new(f))
}

fn write_lines<I>(path: &Path, lines: I) -> Result<()>
where
    I: IntoIterator<Item = String>,
{
    let mut wtr = create(path)?;
    let write_err = |e| CustomError::Write {
        source: e,
        path: path.to_path_buf(),
    };
    for line in lines {
        writeln!(wtr, "{line}").map_err(write_err)?;
    }
    wtr.flush().map_err(write_err)?;
    Ok(())
}

pub fn ped_line(individual: &Individual) -> String {
    let meta = &individual.meta;
    let sex = meta.sex.code().to_string();
    [
        meta.fid.as_str(),
        meta.iid.as_str(),
        meta.father.as_str(),
        meta.mother.as_str(),
        meta.phenotype.as_str(),
        sex.as_str(),
    ]
    .into_iter()
    .chain(individual.genotypes.iter().map(|g| g.encode()))
    .join("\t")
}

pub fn map_line(marker: &Marker) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        marker.index,
        marker.name(),
        Marker::CHROMOSOME,
        marker.position()
    )
}

pub fn write_ped(panel: &Panel, path: &Path) -> Result<()> {
    write_lines(path, panel.individuals().iter().map(ped_line))
}

/// One line per marker of the panel's declared marker count.
pub fn write_map(panel: &Panel, path: &Path) -> Result<()> {
    write_lines(path, panel.markers().map(|marker| map_line(&marker)))
}

pub fn write_switched_ped(records: &[PedRecord], path: &Path) -> Result<()> {
    write_lines(
        path,
        records
            .iter()
            .map(|record| record.meta.iter().chain(&record.alleles).join("\t")),
    )
}

/// Writes `FID IID;FID IID`, one exchanged pair per line.
pub fn write_switch_log(switches: &[SwitchEntry], path: &Path) -> Result<()> {
    let f = File::create(path).map_err(|e| CustomError::Write {
        source: e,
        path: path.to_path_buf(),
    })?;
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Never)
        .from_writer(f);
    for entry in switches {
        wtr.write_record([
            format!("{} {}", entry.first.0, entry.first.1),
            format!("{} {}", entry.second.0, entry.second.1),
        ])?;
    }
    wtr.flush().map_err(|e| CustomError::Write {
        source: e,
        path: path.into(),
    })?;
    Ok(())
}
