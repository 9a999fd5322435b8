//! Dashboard session over one loaded catalog.
//!
//! The [`Dashboard`] owns the [`Catalog`] for the lifetime of a load and
//! turns each criteria change into a full [`DashboardSnapshot`]. Nothing is
//! cached between refreshes: every snapshot is recomputed from scratch.

use std::time::Instant;

use catalog_model::{
    CategoryCounts, FilterCriteria, MultiValuedField, RankedList, Record, WordCorpus, YearRange,
    YearSeries,
};
use polars::prelude::{DataFrame, PolarsResult};
use serde::Serialize;
use tracing::{debug, debug_span};

use crate::aggregate::{TOP_N, additions_by_year, cast_corpus, top_values, type_distribution};
use crate::catalog::{Catalog, check_criteria};
use crate::error::Result;
use crate::filter::{FilteredView, filter};
use crate::preview::records_to_dataframe;

/// Release-year range selected before the user picks one.
pub const DEFAULT_YEAR_RANGE: (i32, i32) = (2010, 2020);

/// Number of records in the tabular preview.
pub const PREVIEW_ROWS: usize = 5;

/// Presentation knobs for a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardOptions {
    /// Length of each ranking.
    pub top_n: usize,
    /// Records kept in the preview.
    pub preview_rows: usize,
    /// Initial release-year selection, clamped to the catalog bounds.
    pub default_year_range: (i32, i32),
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            top_n: TOP_N,
            preview_rows: PREVIEW_ROWS,
            default_year_range: DEFAULT_YEAR_RANGE,
        }
    }
}

impl DashboardOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn with_preview_rows(mut self, preview_rows: usize) -> Self {
        self.preview_rows = preview_rows;
        self
    }

    pub fn with_default_year_range(mut self, min: i32, max: i32) -> Self {
        self.default_year_range = (min, max);
        self
    }
}

/// Everything a renderer needs for one filter selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSnapshot {
    pub criteria: FilterCriteria,
    pub row_count: usize,
    pub column_count: usize,
    pub preview: Vec<Record>,
    pub type_distribution: CategoryCounts,
    pub additions_by_year: YearSeries,
    pub top_genres: RankedList,
    pub top_countries: RankedList,
    pub top_directors: RankedList,
    pub cast_corpus: WordCorpus,
}

impl DashboardSnapshot {
    /// Runs every aggregation over `view`.
    pub fn from_view(
        view: &FilteredView<'_>,
        criteria: &FilterCriteria,
        options: &DashboardOptions,
    ) -> Self {
        let (row_count, column_count) = view.shape();
        Self {
            criteria: criteria.clone(),
            row_count,
            column_count,
            preview: view
                .head(options.preview_rows)
                .iter()
                .map(|record| (*record).clone())
                .collect(),
            type_distribution: type_distribution(view),
            additions_by_year: additions_by_year(view),
            top_genres: top_values(view, MultiValuedField::Genre, options.top_n),
            top_countries: top_values(view, MultiValuedField::Country, options.top_n),
            top_directors: top_values(view, MultiValuedField::Director, options.top_n),
            cast_corpus: cast_corpus(view),
        }
    }

    /// The preview records as a Polars frame.
    pub fn preview_dataframe(&self) -> PolarsResult<DataFrame> {
        let records: Vec<&Record> = self.preview.iter().collect();
        records_to_dataframe(&records)
    }
}

/// One loaded catalog plus its observed filter choices.
#[derive(Debug, Clone)]
pub struct Dashboard {
    catalog: Catalog,
    content_types: Vec<String>,
    bounds: YearRange,
    options: DashboardOptions,
}

impl Dashboard {
    /// Takes ownership of `catalog`.
    ///
    /// A catalog without any release year cannot bound the year filter and
    /// is rejected.
    pub fn new(catalog: Catalog) -> Result<Self> {
        let bounds = catalog.require_year_bounds()?;
        let content_types = catalog
            .content_types()
            .into_iter()
            .map(str::to_string)
            .collect();
        Ok(Self {
            catalog,
            content_types,
            bounds,
            options: DashboardOptions::default(),
        })
    }

    pub fn with_options(mut self, options: DashboardOptions) -> Self {
        self.options = options;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn options(&self) -> &DashboardOptions {
        &self.options
    }

    /// Observed content types in first-seen order.
    pub fn content_types(&self) -> &[String] {
        &self.content_types
    }

    /// Observed min/max release year.
    pub fn year_bounds(&self) -> YearRange {
        self.bounds
    }

    /// Every observed type and the default year range clamped to the bounds.
    ///
    /// Falls back to the full bounds when the default range does not overlap
    /// the catalog.
    pub fn default_criteria(&self) -> FilterCriteria {
        let (min, max) = self.options.default_year_range;
        let year_range = YearRange::new(min, max)
            .ok()
            .and_then(|range| range.clamp_to(self.bounds))
            .unwrap_or(self.bounds);
        FilterCriteria::new(self.content_types.iter().cloned(), year_range)
    }

    /// Filters with `criteria` without validating it.
    pub fn view(&self, criteria: &FilterCriteria) -> FilteredView<'_> {
        filter(&self.catalog, criteria)
    }

    /// Validates `criteria`, filters, and recomputes every summary.
    pub fn refresh(&self, criteria: &FilterCriteria) -> Result<DashboardSnapshot> {
        let span = debug_span!(
            "refresh",
            types = criteria.allowed_types.len(),
            years = %criteria.year_range
        );
        let _guard = span.enter();
        let started = Instant::now();

        check_criteria(criteria, &self.content_types, self.bounds)?;
        let view = self.view(criteria);
        let snapshot = DashboardSnapshot::from_view(&view, criteria, &self.options);

        debug!(
            rows = snapshot.row_count,
            duration_us = started.elapsed().as_micros(),
            "snapshot computed"
        );
        Ok(snapshot)
    }
}
