//! Error types for catalog ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a catalog source.
///
/// Every variant is fatal for the whole load; no partial table is returned.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// Malformed CSV content.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// CSV source has no header row.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    /// A data row has more cells than the header.
    #[error("row at line {line} of {path} has {found} cells, header has {expected}")]
    ExtraCells {
        path: PathBuf,
        line: u64,
        found: usize,
        expected: usize,
    },

    /// A header cell is blank.
    #[error("empty column name at position {index} in {path}")]
    EmptyColumnName { path: PathBuf, index: usize },

    /// The same header appears twice.
    #[error("duplicate column '{column}' in {path}")]
    DuplicateColumn { column: String, path: PathBuf },

    // === Schema Errors ===
    /// Required columns are absent.
    #[error("required columns missing from {path}: {}", columns.join(", "))]
    MissingColumns { columns: Vec<String>, path: PathBuf },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/titles.csv"),
        };
        assert_eq!(err.to_string(), "CSV file not found: /path/to/titles.csv");
    }

    #[test]
    fn test_missing_columns_display() {
        let err = IngestError::MissingColumns {
            columns: vec!["cast".to_string(), "country".to_string()],
            path: PathBuf::from("titles.csv"),
        };
        assert_eq!(
            err.to_string(),
            "required columns missing from titles.csv: cast, country"
        );
    }

    #[test]
    fn test_extra_cells_display() {
        let err = IngestError::ExtraCells {
            path: PathBuf::from("titles.csv"),
            line: 3,
            found: 4,
            expected: 2,
        };
        assert_eq!(
            err.to_string(),
            "row at line 3 of titles.csv has 4 cells, header has 2"
        );
    }
}
