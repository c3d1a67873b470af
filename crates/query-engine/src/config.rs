//! Query configuration.

use serde::{Deserialize, Serialize};

/// First year considered by the highest-rated query by default
pub const DEFAULT_FIRST_YEAR: i32 = 1900;

/// Last year considered by the highest-rated query by default
pub const DEFAULT_LAST_YEAR: i32 = 2021;

/// Inclusive window of release years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    pub first: i32,
    pub last: i32,
}

impl YearRange {
    /// `first..=last`. An inverted range contains nothing.
    pub fn new(first: i32, last: i32) -> Self {
        Self { first, last }
    }

    /// Every representable year
    pub fn unbounded() -> Self {
        Self::new(i32::MIN, i32::MAX)
    }

    pub fn contains(&self, year: i32) -> bool {
        self.first <= year && year <= self.last
    }
}

impl Default for YearRange {
    fn default() -> Self {
        Self::new(DEFAULT_FIRST_YEAR, DEFAULT_LAST_YEAR)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Window used by `HighestRatedPerYear`
    pub year_range: YearRange,
}

impl QueryConfig {
    pub fn with_year_range(mut self, year_range: YearRange) -> Self {
        self.year_range = year_range;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_range_bounds_are_inclusive() {
        let range = YearRange::default();
        assert!(range.contains(1900));
        assert!(range.contains(2021));
        assert!(!range.contains(1899));
        assert!(!range.contains(2022));
    }

    #[test]
    fn test_unbounded_and_inverted_ranges() {
        assert!(YearRange::unbounded().contains(0));
        assert!(YearRange::unbounded().contains(i32::MAX));
        assert!(!YearRange::new(2000, 1990).contains(1995));
    }
}
