//! Title catalog normalization crate.
//!
//! Turns raw source rows (column name to raw text) into typed
//! [`catalog_model::Record`] values.
//!
//! # Overview
//!
//! This crate provides:
//! - **Text cleanup**: trimming, BOM removal, empty cells as null
//! - **Date coercion**: `date_added` in the formats catalog exports use
//! - **Year coercion**: `release_year` from integer or integral float text
//! - **Row normalization**: one [`catalog_model::Record`] per source row
//!
//! # Example
//!
//! ```
//! use catalog_normalization::{RawRow, normalize_row};
//!
//! let row = RawRow::from([
//!     ("type".to_string(), " Movie ".to_string()),
//!     ("release_year".to_string(), "2020".to_string()),
//!     ("date_added".to_string(), "September 25, 2021".to_string()),
//! ]);
//! let record = normalize_row(0, &row);
//! assert_eq!(record.content_type.as_deref(), Some("Movie"));
//! assert_eq!(record.year_added, Some(2021));
//! ```
//!
//! # Design Principles
//!
//! - **Stateless functions**: pure functions, no I/O
//! - **Degrade, never reject**: a malformed field becomes null; the row is kept

pub mod datetime;
pub mod numeric;
pub mod row;
pub mod text;

pub use catalog_model::RawRow;
pub use datetime::{derive_calendar, parse_date_added};
pub use numeric::parse_release_year;
pub use row::{normalize_row, normalize_rows};
pub use text::normalize_text;
