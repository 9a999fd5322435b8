//! The in-memory catalog for one loaded dataset.
//!
//! A [`Catalog`] is built once from a source and never mutated; reloading
//! the source builds a new one.

use std::io::Read;
use std::path::Path;
use std::time::Instant;

use catalog_ingest::{RawTable, read_catalog_table, read_catalog_table_from_reader};
use catalog_model::{FilterCriteria, Record, YearRange};
use catalog_normalization::normalize_rows;
use tracing::{info, info_span};

use crate::error::{CoreError, Result};

/// Ordered, immutable collection of normalized records.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    columns: Vec<String>,
    records: Vec<Record>,
}

impl Catalog {
    /// Creates a catalog from source column names and records in row order.
    pub fn new(columns: Vec<String>, records: Vec<Record>) -> Self {
        Self { columns, records }
    }

    /// Normalizes every row of a raw table.
    pub fn from_table(table: &RawTable) -> Self {
        Self::new(table.headers.clone(), normalize_rows(&table.rows))
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Source column names in source order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct observed content types in first-seen order.
    pub fn content_types(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for content_type in self.records.iter().filter_map(|r| r.content_type.as_deref()) {
            if !seen.contains(&content_type) {
                seen.push(content_type);
            }
        }
        seen
    }

    /// Min/max observed release year, ignoring nulls.
    ///
    /// `None` when no record has a release year.
    pub fn year_bounds(&self) -> Option<YearRange> {
        let mut years = self.records.iter().filter_map(|r| r.release_year);
        let first = years.next()?;
        let (min, max) = years.fold((first, first), |(min, max), year| {
            (min.min(year), max.max(year))
        });
        YearRange::new(min, max).ok()
    }

    /// Like [`Catalog::year_bounds`], but a catalog without any release year
    /// is an error.
    pub fn require_year_bounds(&self) -> Result<YearRange> {
        self.year_bounds().ok_or(CoreError::NoReleaseYears)
    }

    /// Clamps a requested range into the observed bounds.
    ///
    /// Returns `None` when the catalog has no release years or the ranges
    /// do not overlap. The filter itself never clamps; callers do.
    pub fn clamp(&self, requested: YearRange) -> Option<YearRange> {
        requested.clamp_to(self.year_bounds()?)
    }

    /// Checks caller-supplied criteria against what the catalog contains.
    ///
    /// Every allowed type must be observed and the year range must lie
    /// within the observed bounds. An empty type selection is valid.
    pub fn validate(&self, criteria: &FilterCriteria) -> Result<()> {
        check_criteria(criteria, &self.content_types(), self.require_year_bounds()?)
    }
}

/// Validation against an already computed type list and year bounds.
pub(crate) fn check_criteria<S: AsRef<str>>(
    criteria: &FilterCriteria,
    known: &[S],
    bounds: YearRange,
) -> Result<()> {
    let is_known = |t: &str| known.iter().any(|k| k.as_ref() == t);
    if let Some(unknown) = criteria.allowed_types.iter().find(|t| !is_known(t.as_str())) {
        return Err(CoreError::UnknownContentType {
            content_type: unknown.clone(),
            known: known.iter().map(|t| t.as_ref().to_string()).collect(),
        });
    }
    if !bounds.covers(criteria.year_range) {
        return Err(CoreError::YearRangeOutOfBounds {
            requested: criteria.year_range,
            bounds,
        });
    }
    Ok(())
}

fn log_loaded(catalog: &Catalog, source: &Path, started: Instant) {
    let null_dates = catalog
        .records()
        .iter()
        .filter(|r| r.date_added.is_none())
        .count();
    let null_years = catalog
        .records()
        .iter()
        .filter(|r| r.release_year.is_none())
        .count();
    info!(
        source = %source.display(),
        rows = catalog.len(),
        columns = catalog.columns().len(),
        null_date_added = null_dates,
        null_release_year = null_years,
        duration_ms = started.elapsed().as_millis(),
        "catalog loaded"
    );
}

/// Reads, checks and normalizes a catalog CSV file.
///
/// Missing required columns or an unreadable file are fatal; no partial
/// catalog is produced.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let span = info_span!("load_catalog", source = %path.display());
    let _guard = span.enter();
    let started = Instant::now();
    let table = read_catalog_table(path)?;
    let catalog = Catalog::from_table(&table);
    log_loaded(&catalog, path, started);
    Ok(catalog)
}

/// Reads a catalog from any CSV reader. `source` labels the input in errors.
pub fn load_catalog_from_reader<R: Read>(reader: R, source: &Path) -> Result<Catalog> {
    let started = Instant::now();
    let table = read_catalog_table_from_reader(reader, source)?;
    let catalog = Catalog::from_table(&table);
    log_loaded(&catalog, source, started);
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: usize, content_type: Option<&str>, year: Option<i32>) -> Record {
        Record {
            id,
            content_type: content_type.map(str::to_string),
            release_year: year,
            ..Record::default()
        }
    }

    fn sample() -> Catalog {
        Catalog::new(
            vec!["type".to_string(), "release_year".to_string()],
            vec![
                record(0, Some("TV Show"), Some(2021)),
                record(1, Some("Movie"), None),
                record(2, Some("Movie"), Some(1942)),
                record(3, None, Some(2030)),
                record(4, Some("TV Show"), Some(2001)),
            ],
        )
    }

    #[test]
    fn content_types_in_first_seen_order() {
        assert_eq!(sample().content_types(), vec!["TV Show", "Movie"]);
    }

    #[test]
    fn year_bounds_ignore_nulls() {
        let bounds = sample().year_bounds().unwrap();
        assert_eq!((bounds.min(), bounds.max()), (1942, 2030));
    }

    #[test]
    fn all_null_years_have_no_bounds() {
        let catalog = Catalog::new(vec![], vec![record(0, Some("Movie"), None)]);
        assert_eq!(catalog.year_bounds(), None);
        assert!(matches!(
            catalog.require_year_bounds(),
            Err(CoreError::NoReleaseYears)
        ));
        assert!(Catalog::default().year_bounds().is_none());
    }

    #[test]
    fn clamps_requested_range() {
        let catalog = sample();
        let clamped = catalog.clamp(YearRange::new(1900, 2000).unwrap()).unwrap();
        assert_eq!((clamped.min(), clamped.max()), (1942, 2000));
        assert_eq!(catalog.clamp(YearRange::new(2040, 2050).unwrap()), None);
    }

    #[test]
    fn validate_rejects_unknown_type() {
        let catalog = sample();
        let criteria = FilterCriteria::new(["Movie", "Anime"], YearRange::new(2000, 2010).unwrap());
        match catalog.validate(&criteria) {
            Err(CoreError::UnknownContentType {
                content_type,
                known,
            }) => {
                assert_eq!(content_type, "Anime");
                assert_eq!(known, vec!["TV Show", "Movie"]);
            }
            other => panic!("expected unknown type, got {other:?}"),
        }
    }

    #[test]
    fn validate_rejects_out_of_bounds_range() {
        let catalog = sample();
        let criteria = FilterCriteria::new(["Movie"], YearRange::new(1900, 2000).unwrap());
        assert!(matches!(
            catalog.validate(&criteria),
            Err(CoreError::YearRangeOutOfBounds { .. })
        ));
    }

    #[test]
    fn validate_accepts_empty_selection() {
        let catalog = sample();
        let criteria =
            FilterCriteria::new(Vec::<String>::new(), YearRange::new(2000, 2010).unwrap());
        assert!(catalog.validate(&criteria).is_ok());
    }

    #[test]
    fn loads_from_reader() {
        let data = "type,title,director,cast,country,date_added,release_year,listed_in\n\
                    Movie,A,,,,\"September 25, 2021\",2020,Dramas\n\
                    TV Show,B,,,,,unknown,\n";
        let catalog = load_catalog_from_reader(data.as_bytes(), Path::new("memory.csv")).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.columns().len(), 8);
        assert_eq!(catalog.records()[0].year_added, Some(2021));
        assert_eq!(catalog.records()[1].release_year, None);
    }

    #[test]
    fn load_fails_without_required_columns() {
        let data = "type,title\nMovie,A\n";
        let result = load_catalog_from_reader(data.as_bytes(), Path::new("memory.csv"));
        assert!(matches!(result, Err(CoreError::Ingest(_))));
    }
}
