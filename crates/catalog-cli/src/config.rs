//! Dashboard configuration file.
//!
//! ```toml
//! [filter]
//! types = ["Movie", "TV Show"]
//! year_min = 2010
//! year_max = 2020
//!
//! [output]
//! top_n = 10
//! preview_rows = 5
//! ```
//!
//! Every key is optional. Command-line flags override file values and
//! anything still unset falls back to the dashboard defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use catalog_core::{CoreError, Dashboard, DashboardOptions, PREVIEW_ROWS, TOP_N};
use catalog_model::{FilterCriteria, YearRange};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    pub filter: FilterConfig,
    pub output: OutputConfig,
}

/// Initial filter selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterConfig {
    pub types: Option<Vec<String>>,
    pub year_min: Option<i32>,
    pub year_max: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub top_n: usize,
    pub preview_rows: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            top_n: TOP_N,
            preview_rows: PREVIEW_ROWS,
        }
    }
}

impl DashboardConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents, path)
    }

    /// Parses TOML text. `source` labels the input in errors.
    pub fn parse(contents: &str, source: &Path) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|error| ConfigError::Toml {
            path: source.to_path_buf(),
            source: error,
        })
    }

    pub fn options(&self) -> DashboardOptions {
        DashboardOptions::new()
            .with_top_n(self.output.top_n)
            .with_preview_rows(self.output.preview_rows)
    }
}

impl FilterConfig {
    /// Keeps each value from `overrides` that is set, else the current one.
    #[must_use]
    pub fn overridden_by(self, overrides: FilterConfig) -> Self {
        Self {
            types: overrides.types.or(self.types),
            year_min: overrides.year_min.or(self.year_min),
            year_max: overrides.year_max.or(self.year_max),
        }
    }

    /// Builds criteria for `dashboard`, filling gaps from its defaults.
    ///
    /// The requested range is clamped to the observed release years; a range
    /// that misses them entirely is an error.
    pub fn resolve(&self, dashboard: &Dashboard) -> Result<FilterCriteria, CoreError> {
        let defaults = dashboard.default_criteria();
        let min = self.year_min.unwrap_or(defaults.year_range.min());
        let max = self.year_max.unwrap_or(defaults.year_range.max());
        let requested = YearRange::new(min, max)?;
        let bounds = dashboard.year_bounds();
        let year_range = requested
            .clamp_to(bounds)
            .ok_or(CoreError::YearRangeOutOfBounds { requested, bounds })?;

        Ok(match &self.types {
            Some(types) => FilterCriteria::new(types.iter().cloned(), year_range),
            None => FilterCriteria {
                year_range,
                ..defaults
            },
        })
    }
}
