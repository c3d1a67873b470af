//! Core domain types for the movie dataset.
//!
//! A `Dataset` is built once by the loader and only read afterwards, so
//! every query hands out borrows into it rather than clones.

use serde::{Deserialize, Serialize};

// =============================================================================
// Movie Record
// =============================================================================

/// One row of the input file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub title: String,
    /// Release year. Expected to be roughly 1900..=2021 but not enforced here.
    pub year: i32,
    /// Language names in file order
    pub languages: Vec<String>,
    /// No bounds are enforced on the rating
    pub rating: f64,
}

impl MovieRecord {
    pub fn new(
        title: impl Into<String>,
        year: i32,
        languages: Vec<String>,
        rating: f64,
    ) -> Self {
        Self {
            title: title.into(),
            year,
            languages,
            rating,
        }
    }

    /// Exact, case-sensitive membership test on the language list
    pub fn has_language(&self, language: &str) -> bool {
        self.languages.iter().any(|l| l == language)
    }
}

// =============================================================================
// Dataset
// =============================================================================

/// Ordered collection of records. Insertion order is file order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    records: Vec<MovieRecord>,
}

impl Dataset {
    /// Creates a new, empty Dataset
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<MovieRecord>) -> Self {
        Self { records }
    }

    /// Append a record at the end
    pub fn push(&mut self, record: MovieRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&MovieRecord> {
        self.records.get(index)
    }

    /// All records as a slice, in file order
    pub fn records(&self) -> &[MovieRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MovieRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a MovieRecord;
    type IntoIter = std::slice::Iter<'a, MovieRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<MovieRecord> for Dataset {
    fn from_iter<I: IntoIterator<Item = MovieRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
