//! Normalized catalog record.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::field::{MultiValuedField, columns};

/// One raw source row: column name to raw cell text.
pub type RawRow = BTreeMap<String, String>;

/// One normalized catalog entry.
///
/// Text fields are trimmed and empty cells are `None`. `year_added` and
/// `month_added` always mirror `date_added`: both are `None` when the date
/// is `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Row position in the source (0-based).
    pub id: usize,
    /// Category label from the `type` column ("Movie", "TV Show", ...).
    pub content_type: Option<String>,
    pub release_year: Option<i32>,
    pub date_added: Option<NaiveDate>,
    pub year_added: Option<i32>,
    pub month_added: Option<u32>,
    pub listed_in: Option<String>,
    pub country: Option<String>,
    pub director: Option<String>,
    pub cast: Option<String>,
    /// Remaining source columns keyed by header.
    pub extra: BTreeMap<String, Option<String>>,
}

impl Record {
    /// Raw text of a multi-valued field, if present.
    pub fn multi_valued(&self, field: MultiValuedField) -> Option<&str> {
        let value = match field {
            MultiValuedField::Genre => &self.listed_in,
            MultiValuedField::Country => &self.country,
            MultiValuedField::Director => &self.director,
            MultiValuedField::Cast => &self.cast,
        };
        value.as_deref()
    }

    /// Title of the entry when the source carries a `title` column.
    pub fn title(&self) -> Option<&str> {
        self.extra.get(columns::TITLE).and_then(|v| v.as_deref())
    }
}
