//! Aggregation results consumed by a rendering layer.

use std::collections::BTreeMap;

use serde::Serialize;

/// Count of records per observed category label.
///
/// Only labels present in the data appear; there is no fixed universe and no
/// zero-count entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategoryCounts {
    counts: BTreeMap<String, usize>,
}

impl CategoryCounts {
    pub fn increment(&mut self, label: &str) {
        match self.counts.get_mut(label) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(label.to_string(), 1);
            }
        }
    }

    pub fn get(&self, label: &str) -> Option<usize> {
        self.counts.get(label).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(label, count)| (label.as_str(), *count))
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Sparse per-year counts, strictly ascending by year.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct YearSeries {
    points: Vec<(i32, usize)>,
}

impl YearSeries {
    /// Builds a series from per-year counts. Zero counts are dropped.
    pub fn from_counts(counts: BTreeMap<i32, usize>) -> Self {
        Self {
            points: counts.into_iter().filter(|(_, count)| *count > 0).collect(),
        }
    }

    pub fn points(&self) -> &[(i32, usize)] {
        &self.points
    }

    pub fn get(&self, year: i32) -> Option<usize> {
        self.points
            .binary_search_by_key(&year, |(y, _)| *y)
            .ok()
            .map(|idx| self.points[idx].1)
    }

    pub fn total(&self) -> usize {
        self.points.iter().map(|(_, count)| count).sum()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Values ordered by count descending, truncated to a top-N.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RankedList {
    entries: Vec<(String, usize)>,
}

impl RankedList {
    /// Wraps already-ranked entries.
    pub fn from_entries(entries: Vec<(String, usize)>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[(String, usize)] {
        &self.entries
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(value, _)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Flattened, space-joined names for an external word-frequency renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WordCorpus {
    pub text: String,
    /// Number of names joined into `text`.
    pub token_count: usize,
}

impl WordCorpus {
    pub fn is_empty(&self) -> bool {
        self.token_count == 0
    }
}
