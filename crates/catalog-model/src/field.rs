//! Source column names and the multi-valued fields derived from them.

use serde::{Deserialize, Serialize};

/// Delimiter between values inside a multi-valued text field.
///
/// Values themselves are assumed never to contain this exact substring; no
/// escaping is recognised.
pub const MULTI_VALUE_DELIMITER: &str = ", ";

/// Source column names.
pub mod columns {
    pub const TYPE: &str = "type";
    pub const RELEASE_YEAR: &str = "release_year";
    pub const DATE_ADDED: &str = "date_added";
    pub const LISTED_IN: &str = "listed_in";
    pub const COUNTRY: &str = "country";
    pub const DIRECTOR: &str = "director";
    pub const CAST: &str = "cast";
    pub const TITLE: &str = "title";
}

/// Columns that every catalog source must provide.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    columns::TYPE,
    columns::RELEASE_YEAR,
    columns::DATE_ADDED,
    columns::LISTED_IN,
    columns::COUNTRY,
    columns::DIRECTOR,
    columns::CAST,
];

/// A text field encoding a list of values joined by [`MULTI_VALUE_DELIMITER`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MultiValuedField {
    Genre,
    Country,
    Director,
    Cast,
}

impl MultiValuedField {
    pub const ALL: [MultiValuedField; 4] = [
        MultiValuedField::Genre,
        MultiValuedField::Country,
        MultiValuedField::Director,
        MultiValuedField::Cast,
    ];

    /// Name of the source column holding this field.
    pub fn column(self) -> &'static str {
        match self {
            MultiValuedField::Genre => columns::LISTED_IN,
            MultiValuedField::Country => columns::COUNTRY,
            MultiValuedField::Director => columns::DIRECTOR,
            MultiValuedField::Cast => columns::CAST,
        }
    }

    /// Human-readable label used in summaries.
    pub fn label(self) -> &'static str {
        match self {
            MultiValuedField::Genre => "Genre",
            MultiValuedField::Country => "Country",
            MultiValuedField::Director => "Director",
            MultiValuedField::Cast => "Cast",
        }
    }
}
