//! Filter inputs supplied by the hosting application.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::error::{ModelError, Result};

/// Inclusive release-year range. `min <= max` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct YearRange {
    min: i32,
    max: i32,
}

impl YearRange {
    /// Creates a range, rejecting `min > max`.
    pub fn new(min: i32, max: i32) -> Result<Self> {
        if min > max {
            return Err(ModelError::InvertedYearRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(self) -> i32 {
        self.min
    }

    pub fn max(self) -> i32 {
        self.max
    }

    /// Returns true if `year` lies within the range (both ends inclusive).
    pub fn contains(self, year: i32) -> bool {
        self.min <= year && year <= self.max
    }

    /// Returns true if `other` lies entirely within this range.
    pub fn covers(self, other: YearRange) -> bool {
        self.min <= other.min && other.max <= self.max
    }

    /// Clamps this range into `bounds`.
    ///
    /// Returns `None` when the two ranges do not overlap.
    pub fn clamp_to(self, bounds: YearRange) -> Option<YearRange> {
        let min = self.min.max(bounds.min);
        let max = self.max.min(bounds.max);
        YearRange::new(min, max).ok()
    }
}

impl fmt::Display for YearRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// Current filter selection.
///
/// An empty `allowed_types` set is valid and selects nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterCriteria {
    pub allowed_types: BTreeSet<String>,
    pub year_range: YearRange,
}

impl FilterCriteria {
    pub fn new<I, S>(allowed_types: I, year_range: YearRange) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed_types: allowed_types.into_iter().map(Into::into).collect(),
            year_range,
        }
    }

    /// Returns true if `content_type` is one of the selected types.
    pub fn allows_type(&self, content_type: &str) -> bool {
        self.allowed_types.contains(content_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_inverted_range() {
        assert_eq!(
            YearRange::new(2021, 2010),
            Err(ModelError::InvertedYearRange {
                min: 2021,
                max: 2010
            })
        );
        assert!(YearRange::new(2010, 2010).is_ok());
    }

    #[test]
    fn contains_is_inclusive() {
        let range = YearRange::new(2010, 2020).unwrap();
        assert!(range.contains(2010));
        assert!(range.contains(2020));
        assert!(!range.contains(2009));
        assert!(!range.contains(2021));
    }

    #[test]
    fn clamps_into_bounds() {
        let bounds = YearRange::new(1942, 2021).unwrap();
        let wide = YearRange::new(1900, 2030).unwrap();
        assert_eq!(wide.clamp_to(bounds), Some(bounds));

        let inside = YearRange::new(2010, 2020).unwrap();
        assert_eq!(inside.clamp_to(bounds), Some(inside));

        let disjoint = YearRange::new(2050, 2060).unwrap();
        assert_eq!(disjoint.clamp_to(bounds), None);
    }

    #[test]
    fn criteria_collects_types() {
        let criteria =
            FilterCriteria::new(["Movie", "TV Show"], YearRange::new(2000, 2001).unwrap());
        assert!(criteria.allows_type("Movie"));
        assert!(!criteria.allows_type("movie"));
        assert_eq!(criteria.year_range.to_string(), "2000-2001");
    }
}
