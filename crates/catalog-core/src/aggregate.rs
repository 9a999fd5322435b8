//! Summary statistics over a [`FilteredView`].
//!
//! Every function here is pure and recomputes from the view it is given.
//! Null fields are skipped, never counted under a placeholder, and an empty
//! view yields an empty result rather than an error.

use std::collections::{BTreeMap, HashMap};

use catalog_model::{
    CategoryCounts, MULTI_VALUE_DELIMITER, MultiValuedField, RankedList, WordCorpus, YearSeries,
};

use crate::filter::FilteredView;

/// Length of the genre, country and director rankings.
pub const TOP_N: usize = 10;

/// Splits a multi-valued field into trimmed, non-empty values.
pub fn split_multi_valued(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(MULTI_VALUE_DELIMITER)
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

/// All values of `field` across the view, one per value per record.
pub fn flatten_field<'s, 'v>(
    view: &'s FilteredView<'v>,
    field: MultiValuedField,
) -> impl Iterator<Item = &'v str> + 's {
    view.iter()
        .filter_map(move |record| record.multi_valued(field))
        .flat_map(split_multi_valued)
}

/// Number of records per observed content type.
pub fn type_distribution(view: &FilteredView<'_>) -> CategoryCounts {
    let mut counts = CategoryCounts::default();
    for content_type in view.iter().filter_map(|r| r.content_type.as_deref()) {
        counts.increment(content_type);
    }
    counts
}

/// Number of records added per calendar year, ascending, sparse.
pub fn additions_by_year(view: &FilteredView<'_>) -> YearSeries {
    let mut counts: BTreeMap<i32, usize> = BTreeMap::new();
    for year in view.iter().filter_map(|r| r.year_added) {
        *counts.entry(year).or_insert(0) += 1;
    }
    YearSeries::from_counts(counts)
}

/// The `n` most frequent values of `field`.
///
/// Ordered by count descending. Equal counts keep the order in which the
/// values were first encountered in the view.
pub fn top_values(view: &FilteredView<'_>, field: MultiValuedField, n: usize) -> RankedList {
    let mut order: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for value in flatten_field(view, field) {
        match index.get(value) {
            Some(&slot) => order[slot].1 += 1,
            None => {
                index.insert(value, order.len());
                order.push((value.to_string(), 1));
            }
        }
    }
    // Stable sort: ties stay in first-seen order.
    order.sort_by(|a, b| b.1.cmp(&a.1));
    order.truncate(n);
    RankedList::from_entries(order)
}

/// Space-joined cast names for an external word-cloud renderer.
///
/// Records without cast contribute nothing.
pub fn cast_corpus(view: &FilteredView<'_>) -> WordCorpus {
    let mut text = String::new();
    let mut token_count = 0usize;
    for name in flatten_field(view, MultiValuedField::Cast) {
        if token_count > 0 {
            text.push(' ');
        }
        text.push_str(name);
        token_count += 1;
    }
    WordCorpus { text, token_count }
}
