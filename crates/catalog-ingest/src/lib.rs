//! Title catalog ingestion utilities.
//!
//! This crate reads a delimited catalog export into raw rows (column name to
//! raw text) and checks that the columns the pipeline needs are present.
//! It performs no type coercion; see `catalog-normalization` for that.
//!
//! # Features
//!
//! - **CSV Loading**: Read a CSV file or any reader with a header row
//! - **Header Cleanup**: Trim header names and strip a UTF-8 byte-order mark
//! - **Column Checks**: Reject sources missing any required column
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use catalog_ingest::read_catalog_table;
//!
//! let table = read_catalog_table(Path::new("netflix_titles.csv"))?;
//! println!("{} rows, {} columns", table.len(), table.headers.len());
//! ```

mod columns;
mod error;
mod table;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use table::{RawTable, read_csv_table, read_csv_table_from_reader};

// === Column Checks ===
pub use columns::{missing_columns, read_catalog_table, read_catalog_table_from_reader};
