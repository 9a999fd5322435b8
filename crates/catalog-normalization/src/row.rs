//! Row-level normalization into [`Record`] values.

use catalog_model::{REQUIRED_COLUMNS, RawRow, Record, columns};
use tracing::trace;

use crate::datetime::{derive_calendar, parse_date_added};
use crate::numeric::parse_release_year;
use crate::text::normalize_text;

fn text_field(row: &RawRow, column: &str) -> Option<String> {
    row.get(column).and_then(|raw| normalize_text(raw))
}

/// Normalizes one raw row.
///
/// `id` is the row position in the source. Malformed dates and years become
/// `None`; the row itself is never rejected. Columns that are absent from
/// `row` are treated as null.
pub fn normalize_row(id: usize, row: &RawRow) -> Record {
    let date_text = text_field(row, columns::DATE_ADDED);
    let date_added = date_text.as_deref().and_then(parse_date_added);
    if date_text.is_some() && date_added.is_none() {
        trace!(row = id, column = columns::DATE_ADDED, "coerced to null");
    }
    let (year_added, month_added) = derive_calendar(date_added);

    let year_text = text_field(row, columns::RELEASE_YEAR);
    let release_year = year_text.as_deref().and_then(parse_release_year);
    if year_text.is_some() && release_year.is_none() {
        trace!(row = id, column = columns::RELEASE_YEAR, "coerced to null");
    }

    let extra = row
        .iter()
        .filter(|(column, _)| !REQUIRED_COLUMNS.contains(&column.as_str()))
        .map(|(column, raw)| (column.clone(), normalize_text(raw)))
        .collect();

    Record {
        id,
        content_type: text_field(row, columns::TYPE),
        release_year,
        date_added,
        year_added,
        month_added,
        listed_in: text_field(row, columns::LISTED_IN),
        country: text_field(row, columns::COUNTRY),
        director: text_field(row, columns::DIRECTOR),
        cast: text_field(row, columns::CAST),
        extra,
    }
}

/// Normalizes every row, assigning ids by position.
pub fn normalize_rows<'a, I>(rows: I) -> Vec<Record>
where
    I: IntoIterator<Item = &'a RawRow>,
{
    rows.into_iter()
        .enumerate()
        .map(|(id, row)| normalize_row(id, row))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn row(cells: &[(&str, &str)]) -> RawRow {
        cells
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn normalizes_complete_row() {
        let raw = row(&[
            ("show_id", "s1"),
            ("type", "Movie "),
            ("title", " Dick Johnson Is Dead"),
            ("director", "Kirsten Johnson"),
            ("cast", ""),
            ("country", "United States"),
            ("date_added", "September 25, 2021"),
            ("release_year", "2020"),
            ("listed_in", "Documentaries"),
        ]);
        let record = normalize_row(0, &raw);

        assert_eq!(record.id, 0);
        assert_eq!(record.content_type.as_deref(), Some("Movie"));
        assert_eq!(record.release_year, Some(2020));
        assert_eq!(record.date_added, NaiveDate::from_ymd_opt(2021, 9, 25));
        assert_eq!(record.year_added, Some(2021));
        assert_eq!(record.month_added, Some(9));
        assert_eq!(record.director.as_deref(), Some("Kirsten Johnson"));
        assert_eq!(record.cast, None);
        assert_eq!(record.title(), Some("Dick Johnson Is Dead"));
        assert_eq!(record.extra.len(), 2);
        assert!(!record.extra.contains_key("type"));
    }

    #[test]
    fn bad_date_nulls_derived_fields() {
        let raw = row(&[
            ("type", "Movie"),
            ("release_year", "2015"),
            ("date_added", "not a date"),
        ]);
        let record = normalize_row(4, &raw);
        assert_eq!(record.date_added, None);
        assert_eq!(record.year_added, None);
        assert_eq!(record.month_added, None);
        assert_eq!(record.release_year, Some(2015));
    }

    #[test]
    fn bad_year_is_kept_as_null() {
        let raw = row(&[("type", "TV Show"), ("release_year", "TBA")]);
        let record = normalize_row(1, &raw);
        assert_eq!(record.release_year, None);
        assert_eq!(record.content_type.as_deref(), Some("TV Show"));
    }

    #[test]
    fn assigns_ids_by_position() {
        let rows = vec![row(&[("type", "Movie")]), row(&[("type", "TV Show")])];
        let records = normalize_rows(&rows);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, 0);
        assert_eq!(records[1].id, 1);
    }
}
