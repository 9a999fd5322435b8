//! Required column checks.

use std::io::Read;
use std::path::Path;

use catalog_model::REQUIRED_COLUMNS;
use tracing::debug;

use crate::error::{IngestError, Result};
use crate::table::{RawTable, read_csv_table, read_csv_table_from_reader};

/// Returns the required columns absent from `headers`, in canonical order.
pub fn missing_columns(headers: &[String]) -> Vec<String> {
    REQUIRED_COLUMNS
        .iter()
        .filter(|column| !headers.iter().any(|header| header == *column))
        .map(|column| (*column).to_string())
        .collect()
}

fn ensure_required_columns(table: RawTable) -> Result<RawTable> {
    let missing = missing_columns(&table.headers);
    if !missing.is_empty() {
        return Err(IngestError::MissingColumns {
            columns: missing,
            path: table.source,
        });
    }
    debug!(
        source = %table.source.display(),
        rows = table.len(),
        columns = table.headers.len(),
        "catalog source read"
    );
    Ok(table)
}

/// Reads a catalog CSV file and checks that every required column exists.
pub fn read_catalog_table(path: &Path) -> Result<RawTable> {
    ensure_required_columns(read_csv_table(path)?)
}

/// Reads catalog CSV content from a reader and checks the required columns.
pub fn read_catalog_table_from_reader<R: Read>(reader: R, source: &Path) -> Result<RawTable> {
    ensure_required_columns(read_csv_table_from_reader(reader, source)?)
}
