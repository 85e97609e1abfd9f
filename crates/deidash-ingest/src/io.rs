use csv::{ReaderBuilder, StringRecord, Trim};
use deidash_types::{ContractTable, LoadError, LoadResult};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::agency::AgencyCatalog;
use crate::columns::ColumnLayout;
use crate::normalize::normalize_row;

/// Load and normalize the dataset at `path`.
pub fn load_table(path: &Path, catalog: &AgencyCatalog) -> LoadResult<ContractTable> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), "reading contract dataset");
    read_table(BufReader::new(file), catalog)
}

/// Normalize CSV text from any reader. The first failing row aborts the load.
pub fn read_table<R: Read>(reader: R, catalog: &AgencyCatalog) -> LoadResult<ContractTable> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

    let headers = reader.headers().map_err(csv_error)?.clone();
    let layout = ColumnLayout::resolve(&headers)?;

    let mut records = Vec::new();
    let mut negative_durations = 0usize;
    let mut row = StringRecord::new();
    let mut row_number = 0usize;

    while reader.read_record(&mut row).map_err(csv_error)? {
        row_number += 1;
        let record = normalize_row(row_number, &row, &layout, catalog)?;
        if record.contract_duration_days < 0 {
            negative_durations += 1;
            tracing::debug!(
                row = row_number,
                award_id = %record.award_id,
                days = record.contract_duration_days,
                "contract ends before it starts"
            );
        }
        records.push(record);
    }

    if negative_durations > 0 {
        tracing::warn!(
            count = negative_durations,
            "contracts with end date before start date keep a negative duration"
        );
    }

    tracing::info!(
        rows = records.len(),
        themes = layout.schema.len(),
        "contract dataset loaded"
    );

    Ok(ContractTable::new(layout.schema, records))
}

fn csv_error(err: csv::Error) -> LoadError {
    LoadError::Csv(err.to_string())
}
