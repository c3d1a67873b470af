//! Highest-rated movie for each year.
//!
//! ## Algorithm
//! 1. Walk the dataset once
//! 2. Skip movies whose year is outside the configured window
//! 3. Keep the best record per year in a `BTreeMap`, replacing it only on a
//!    strictly greater rating (so the first of equal ratings wins)
//! 4. Emit the map in key order, i.e. ascending year

use crate::config::YearRange;
use crate::traits::Query;
use data_loader::{Dataset, MovieRecord};
use serde::Serialize;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use tracing::debug;

/// Best movie of one year
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YearBest<'a> {
    pub year: i32,
    pub rating: f64,
    pub title: &'a str,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HighestRatedPerYear {
    year_range: YearRange,
}

impl HighestRatedPerYear {
    /// Uses the default 1900..=2021 window
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_year_range(mut self, year_range: YearRange) -> Self {
        self.year_range = year_range;
        self
    }
}

impl Query for HighestRatedPerYear {
    type Output<'a> = Vec<YearBest<'a>>;

    fn name(&self) -> &str {
        "HighestRatedPerYear"
    }

    fn run<'a>(&self, dataset: &'a Dataset) -> Self::Output<'a> {
        let mut best: BTreeMap<i32, &'a MovieRecord> = BTreeMap::new();
        let mut skipped = 0usize;

        for movie in dataset {
            if !self.year_range.contains(movie.year) {
                skipped += 1;
                continue;
            }
            match best.entry(movie.year) {
                Entry::Vacant(slot) => {
                    slot.insert(movie);
                }
                Entry::Occupied(mut slot) => {
                    if beats(movie.rating, slot.get().rating) {
                        slot.insert(movie);
                    }
                }
            }
        }

        if skipped > 0 {
            debug!(
                "{} movies outside {}..={} ignored",
                skipped, self.year_range.first, self.year_range.last
            );
        }

        best.into_values()
            .map(|movie| YearBest {
                year: movie.year,
                rating: movie.rating,
                title: &movie.title,
            })
            .collect()
    }
}

/// Strictly greater, with any real rating beating a NaN one
fn beats(candidate: f64, current: f64) -> bool {
    candidate > current || (current.is_nan() && !candidate.is_nan())
}
