//! Data model for the title catalog explorer.
//!
//! Defines the normalized [`Record`], the filter inputs ([`FilterCriteria`],
//! [`YearRange`]), the multi-valued source fields and the aggregation result
//! types handed to a rendering layer.

pub mod criteria;
pub mod error;
pub mod field;
pub mod record;
pub mod results;

pub use criteria::{FilterCriteria, YearRange};
pub use error::{ModelError, Result};
pub use field::{MULTI_VALUE_DELIMITER, MultiValuedField, REQUIRED_COLUMNS, columns};
pub use record::{RawRow, Record};
pub use results::{CategoryCounts, RankedList, WordCorpus, YearSeries};
