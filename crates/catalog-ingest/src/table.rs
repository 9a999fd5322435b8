//! CSV reading into raw rows.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use catalog_model::RawRow;
use csv::ReaderBuilder;

use crate::error::{IngestError, Result};

/// Raw catalog source: normalized headers plus one column-to-text map per row.
#[derive(Debug, Clone)]
pub struct RawTable {
    /// Where the table was read from (used in messages only).
    pub source: PathBuf,
    /// Header names in source order.
    pub headers: Vec<String>,
    /// Data rows in source order. Cells are untouched raw text.
    pub rows: Vec<RawRow>,
}

impl RawTable {
    /// Returns the number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if there are no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns true if the table has the given column.
    pub fn has_column(&self, column: &str) -> bool {
        self.headers.iter().any(|header| header == column)
    }
}

/// Trims a header cell and drops a leading byte-order mark.
fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').trim().to_string()
}

fn csv_error(path: &Path, error: csv::Error) -> IngestError {
    if error.is_io_error() {
        if let csv::ErrorKind::Io(io) = error.into_kind() {
            return IngestError::FileRead {
                path: path.to_path_buf(),
                source: io,
            };
        }
        return IngestError::CsvParse {
            path: path.to_path_buf(),
            message: "I/O error".to_string(),
        };
    }
    IngestError::CsvParse {
        path: path.to_path_buf(),
        message: error.to_string(),
    }
}

/// Reads a CSV file with a single header row.
pub fn read_csv_table(path: &Path) -> Result<RawTable> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    read_csv_table_from_reader(file, path)
}

/// Reads CSV content from any reader. `source` labels the input in errors.
///
/// Short rows are padded with empty cells; a row longer than the header is
/// an error.
pub fn read_csv_table_from_reader<R: Read>(reader: R, source: &Path) -> Result<RawTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| csv_error(source, e))?
        .iter()
        .map(normalize_header)
        .collect();

    if headers.is_empty() {
        return Err(IngestError::EmptyCsv {
            path: source.to_path_buf(),
        });
    }
    let mut seen = BTreeSet::new();
    for (index, header) in headers.iter().enumerate() {
        if header.is_empty() {
            return Err(IngestError::EmptyColumnName {
                path: source.to_path_buf(),
                index,
            });
        }
        if !seen.insert(header.as_str()) {
            return Err(IngestError::DuplicateColumn {
                column: header.clone(),
                path: source.to_path_buf(),
            });
        }
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| csv_error(source, e))?;
        if record.len() > headers.len() {
            return Err(IngestError::ExtraCells {
                path: source.to_path_buf(),
                line: record.position().map_or(0, csv::Position::line),
                found: record.len(),
                expected: headers.len(),
            });
        }
        let row: RawRow = headers
            .iter()
            .enumerate()
            .map(|(idx, header)| (header.clone(), record.get(idx).unwrap_or("").to_string()))
            .collect();
        rows.push(row);
    }

    Ok(RawTable {
        source: source.to_path_buf(),
        headers,
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_read_csv_table_basic() {
        let file = create_temp_csv("type,title\nMovie,A\nTV Show,\"B, the sequel\"\n");
        let table = read_csv_table(file.path()).unwrap();

        assert_eq!(table.headers, vec!["type", "title"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[1]["title"], "B, the sequel");
        assert!(table.has_column("type"));
        assert!(!table.has_column("cast"));
    }

    #[test]
    fn test_read_csv_table_keeps_raw_cells() {
        let file = create_temp_csv("type,date_added\n Movie , August 4, 2017\n");
        let result = read_csv_table(file.path());
        // Unquoted comma inside the date makes the row too long.
        assert!(matches!(
            result,
            Err(IngestError::ExtraCells {
                line: 2,
                found: 3,
                expected: 2,
                ..
            })
        ));

        let file = create_temp_csv("type,date_added\n Movie ,\" August 4, 2017\"\n");
        let table = read_csv_table(file.path()).unwrap();
        assert_eq!(table.rows[0]["type"], " Movie ");
        assert_eq!(table.rows[0]["date_added"], " August 4, 2017");
    }

    #[test]
    fn test_read_csv_table_with_bom() {
        let file = create_temp_csv("\u{feff}type , title\nMovie,A\n");
        let table = read_csv_table(file.path()).unwrap();
        assert_eq!(table.headers, vec!["type", "title"]);
    }

    #[test]
    fn test_read_csv_table_empty_file() {
        let file = create_temp_csv("");
        let result = read_csv_table(file.path());
        assert!(matches!(result, Err(IngestError::EmptyCsv { .. })));
    }

    #[test]
    fn test_read_csv_table_header_only() {
        let file = create_temp_csv("type,title\n");
        let table = read_csv_table(file.path()).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_read_csv_table_duplicate_header() {
        let file = create_temp_csv("type,type\nMovie,Movie\n");
        let result = read_csv_table(file.path());
        assert!(matches!(
            result,
            Err(IngestError::DuplicateColumn { ref column, .. }) if column == "type"
        ));
    }

    #[test]
    fn test_read_csv_table_short_row_is_padded() {
        let file = create_temp_csv("type,title,cast\nMovie,A,Ann Lee\nTV Show\nMovie,B\n");
        let table = read_csv_table(file.path()).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.rows[1]["type"], "TV Show");
        assert_eq!(table.rows[1]["title"], "");
        assert_eq!(table.rows[1]["cast"], "");
        assert_eq!(table.rows[2]["title"], "B");
        assert_eq!(table.rows[2]["cast"], "");
    }

    #[test]
    fn test_read_csv_table_missing_file() {
        let result = read_csv_table(Path::new("/definitely/not/here.csv"));
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }

    #[test]
    fn test_read_from_reader() {
        let data = "type,title\nMovie,A\n";
        let table = read_csv_table_from_reader(data.as_bytes(), Path::new("memory")).unwrap();
        assert_eq!(table.source, PathBuf::from("memory"));
        assert_eq!(table.len(), 1);
    }
}
