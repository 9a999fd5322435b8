//! Type and release-year filtering.

use catalog_model::{FilterCriteria, Record};

use crate::catalog::Catalog;

/// Read-only subset of a [`Catalog`] in catalog order.
#[derive(Debug, Clone)]
pub struct FilteredView<'a> {
    catalog: &'a Catalog,
    records: Vec<&'a Record>,
}

impl<'a> FilteredView<'a> {
    pub fn records(&self) -> &[&'a Record] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Record> + '_ {
        self.records.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// `(rows, columns)` where columns counts the source columns.
    pub fn shape(&self) -> (usize, usize) {
        (self.records.len(), self.catalog.columns().len())
    }

    /// The first `n` records.
    pub fn head(&self, n: usize) -> &[&'a Record] {
        &self.records[..n.min(self.records.len())]
    }

    /// Ids of the records in the view, in order.
    pub fn ids(&self) -> Vec<usize> {
        self.records.iter().map(|r| r.id).collect()
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }
}

/// Returns true if `record` satisfies `criteria`.
///
/// A record without a content type or release year never matches.
pub fn matches(record: &Record, criteria: &FilterCriteria) -> bool {
    let type_ok = record
        .content_type
        .as_deref()
        .is_some_and(|t| criteria.allows_type(t));
    let year_ok = record
        .release_year
        .is_some_and(|year| criteria.year_range.contains(year));
    type_ok && year_ok
}

/// Applies `criteria` to the whole catalog.
///
/// An empty type selection yields an empty view. The year range is used as
/// given; callers clamp it beforehand if they need to.
pub fn filter<'a>(catalog: &'a Catalog, criteria: &FilterCriteria) -> FilteredView<'a> {
    let records = if criteria.allowed_types.is_empty() {
        Vec::new()
    } else {
        catalog
            .records()
            .iter()
            .filter(|record| matches(record, criteria))
            .collect()
    };
    FilteredView { catalog, records }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_model::YearRange;

    fn record(id: usize, content_type: &str, year: Option<i32>) -> Record {
        Record {
            id,
            content_type: Some(content_type.to_string()),
            release_year: year,
            ..Record::default()
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(
            vec!["type".to_string(), "release_year".to_string(), "title".to_string()],
            vec![
                record(0, "Movie", Some(2015)),
                record(1, "TV Show", Some(2015)),
                record(2, "Movie", Some(2021)),
                record(3, "Movie", None),
                record(4, "Movie", Some(2010)),
                record(5, "Movie", Some(2020)),
            ],
        )
    }

    fn range(min: i32, max: i32) -> YearRange {
        YearRange::new(min, max).unwrap()
    }

    #[test]
    fn filters_by_type_and_inclusive_range() {
        let catalog = catalog();
        let view = filter(&catalog, &FilterCriteria::new(["Movie"], range(2010, 2020)));
        assert_eq!(view.ids(), vec![0, 4, 5]);
        assert_eq!(view.shape(), (3, 3));
    }

    #[test]
    fn null_year_never_matches() {
        let catalog = catalog();
        let view = filter(
            &catalog,
            &FilterCriteria::new(["Movie", "TV Show"], range(i32::MIN, i32::MAX)),
        );
        assert!(!view.ids().contains(&3));
        assert_eq!(view.len(), 5);
    }

    #[test]
    fn empty_selection_matches_nothing() {
        let catalog = catalog();
        let view = filter(
            &catalog,
            &FilterCriteria::new(Vec::<String>::new(), range(2000, 2030)),
        );
        assert!(view.is_empty());
        assert_eq!(view.shape(), (0, 3));
    }

    #[test]
    fn type_match_is_exact() {
        let catalog = catalog();
        let view = filter(&catalog, &FilterCriteria::new(["movie"], range(2000, 2030)));
        assert!(view.is_empty());
    }

    #[test]
    fn head_is_bounded() {
        let catalog = catalog();
        let view = filter(&catalog, &FilterCriteria::new(["Movie"], range(2010, 2020)));
        assert_eq!(view.head(2).len(), 2);
        assert_eq!(view.head(10).len(), 3);
    }
}
