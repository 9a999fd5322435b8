//! Tabular preview of a filtered view as a Polars `DataFrame`.

use polars::prelude::{Column, DataFrame, PolarsResult};

use catalog_model::Record;

use crate::filter::FilteredView;

fn text_column<'r>(
    name: &str,
    records: &[&'r Record],
    value: impl Fn(&'r Record) -> Option<&'r str>,
) -> Column {
    let values: Vec<Option<&str>> = records.iter().copied().map(value).collect();
    Column::new(name.into(), values)
}

/// Builds a preview frame from the first `limit` records of `view`.
///
/// Columns: `id`, `type`, `title`, `release_year`, `date_added`
/// (`YYYY-MM-DD`), `listed_in`, `country`, `director`, `cast`. Nulls stay
/// null.
pub fn build_preview_dataframe(view: &FilteredView<'_>, limit: usize) -> PolarsResult<DataFrame> {
    records_to_dataframe(view.head(limit))
}

/// Same columns as [`build_preview_dataframe`] for an explicit record list.
pub fn records_to_dataframe(records: &[&Record]) -> PolarsResult<DataFrame> {
    let ids: Vec<u64> = records.iter().map(|record| record.id as u64).collect();
    let years: Vec<Option<i32>> = records.iter().map(|record| record.release_year).collect();
    let dates: Vec<Option<String>> = records
        .iter()
        .map(|record| record.date_added.map(|date| date.format("%Y-%m-%d").to_string()))
        .collect();

    let columns = vec![
        Column::new("id".into(), ids),
        text_column("type", records, |r| r.content_type.as_deref()),
        text_column("title", records, Record::title),
        Column::new("release_year".into(), years),
        Column::new("date_added".into(), dates),
        text_column("listed_in", records, |r| r.listed_in.as_deref()),
        text_column("country", records, |r| r.country.as_deref()),
        text_column("director", records, |r| r.director.as_deref()),
        text_column("cast", records, |r| r.cast.as_deref()),
    ];
    DataFrame::new(columns)
}
