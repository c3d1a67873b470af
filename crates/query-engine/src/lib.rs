//! Read-only queries over a loaded movie `Dataset`.
//!
//! This crate provides:
//! - Query trait and the three queries (by year, best per year, by language)
//! - QueryEngine for running them against one dataset
//! - QueryConfig / YearRange for the year window of the best-per-year query
//!
//! All queries are a single pass over the dataset and return borrows into it.
//!
//! ## Example Usage
//! ```ignore
//! use query_engine::QueryEngine;
//!
//! let engine = QueryEngine::new(&dataset);
//! let titles = engine.movies_by_year(2010);
//! let best = engine.highest_rated_per_year();
//! let french = engine.movies_by_language("French");
//! ```

pub mod by_language;
pub mod by_year;
pub mod config;
pub mod engine;
pub mod highest_rated;
pub mod traits;

// Re-export main types
pub use by_language::{LanguageMatch, MoviesByLanguage};
pub use by_year::MoviesByYear;
pub use config::{QueryConfig, YearRange};
pub use engine::QueryEngine;
pub use highest_rated::{HighestRatedPerYear, YearBest};
pub use traits::Query;

use data_loader::Dataset;

/// Titles released in `year`, in dataset order
pub fn movies_by_year(dataset: &Dataset, year: i32) -> Vec<&str> {
    MoviesByYear::new(year).run(dataset)
}

/// Best movie per year within the default 1900..=2021 window
pub fn highest_rated_per_year(dataset: &Dataset) -> Vec<YearBest<'_>> {
    HighestRatedPerYear::new().run(dataset)
}

/// `(year, title)` of every movie listing `language`, in dataset order
pub fn movies_by_language<'a>(dataset: &'a Dataset, language: &str) -> Vec<LanguageMatch<'a>> {
    MoviesByLanguage::new(language).run(dataset)
}
