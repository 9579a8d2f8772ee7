// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use csv::{ReaderBuilder, Writer};

use crate::config::consts::CSV_SUFFIX;
use crate::data::{AircraftDataset, FlightRecord, COLUMNS};
use crate::error::{Result, ScrapeError};

/// `<dir>/<CODE>_flight_data.csv`
pub fn dataset_path(dir: &Path, code: &str) -> PathBuf {
    dir.join(join!(code, CSV_SUFFIX))
}

fn csv_error(path: &Path, e: csv::Error) -> ScrapeError {
    let line = e.position().map(|p| p.line() as usize).unwrap_or(0);
    let reason = e.to_string();
    match e.into_kind() {
        csv::ErrorKind::Io(io) => ScrapeError::Io(io),
        _ => ScrapeError::Csv { path: path.to_path_buf(), line, reason },
    }
}

/// Dump the whole dataset, including rows without an ETE.
///
/// Layout: a header row `,ID,TYPE,…,ETE` (index column unnamed), then one
/// row per record led by its 0-based position in the dataset.
pub fn write_dataset_csv(dir: &Path, dataset: &AircraftDataset) -> Result<PathBuf> {
    ensure_directory(dir)?;
    let path = dataset_path(dir, &dataset.code);

    let mut out = Writer::from_path(&path).map_err(|e| csv_error(&path, e))?; // truncate/overwrite
    out.write_record(std::iter::once("").chain(COLUMNS))
        .map_err(|e| csv_error(&path, e))?;
    for (i, rec) in dataset.records.iter().enumerate() {
        let index = i.to_string();
        out.write_record(std::iter::once(index.as_str()).chain(rec.cells()))
            .map_err(|e| csv_error(&path, e))?;
    }
    out.flush()?;

    logf!("Wrote {} ({} rows)", path.display(), dataset.len());
    Ok(path)
}

/// Read a file written by `write_dataset_csv` back into a dataset.
pub fn read_dataset_csv(path: &Path, code: &str) -> Result<AircraftDataset> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| csv_error(path, e))?;

    let bad = |line: u64, reason: String| ScrapeError::Csv {
        path: path.to_path_buf(),
        line: line as usize,
        reason,
    };

    let header = reader.headers().map_err(|e| csv_error(path, e))?.clone();
    if !header.iter().skip(1).eq(COLUMNS) {
        return Err(bad(1, format!("unexpected header {header:?}")));
    }

    let mut dataset = AircraftDataset::new(code);
    for result in reader.records() {
        let row = result.map_err(|e| csv_error(path, e))?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);
        let cells: Vec<String> = row.iter().skip(1).map(str::to_string).collect(); // index column
        let record = FlightRecord::from_cells(cells).ok_or_else(|| {
            bad(line, format!("expected {} fields, found {}", COLUMNS.len() + 1, row.len()))
        })?;
        dataset.records.push(record);
    }
    Ok(dataset)
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(ScrapeError::Io(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        )));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
