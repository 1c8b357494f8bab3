// src/input/mod.rs
use crate::utils::error::InputError;
use std::io::Read;
use std::path::Path;

/// Reads a readout export from disk into raw rows.
pub fn read_rows<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<String>>, InputError> {
    let path = path.as_ref();
    tracing::info!("Reading readout export: {}", path.display());
    let file = std::fs::File::open(path)?;
    read_rows_from(file)
}

/// Decodes comma-separated rows of any width. Invalid UTF-8 is replaced
/// rather than rejected; stray quotes inside cells are left for the row
/// normalizer.
pub fn read_rows_from<R: Read>(reader: R) -> Result<Vec<Vec<String>>, InputError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in reader.byte_records() {
        let record = record?;
        rows.push(
            record
                .iter()
                .map(|cell| String::from_utf8_lossy(cell).into_owned())
                .collect(),
        );
    }

    tracing::debug!("Read {} raw rows", rows.len());
    Ok(rows)
}
