//! The QueryEngine ties a loaded dataset to a query configuration.
//!
//! It is what the shell talks to: one method per query, each one logging
//! the query name and how many rows it produced.

use crate::by_language::{LanguageMatch, MoviesByLanguage};
use crate::by_year::MoviesByYear;
use crate::config::QueryConfig;
use crate::highest_rated::{HighestRatedPerYear, YearBest};
use crate::traits::Query;
use data_loader::Dataset;

/// Read-only query front end over a `Dataset`.
///
/// ## Usage
/// ```ignore
/// let engine = QueryEngine::new(&dataset);
///
/// for title in engine.movies_by_year(2010) {
///     println!("{title}");
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct QueryEngine<'d> {
    dataset: &'d Dataset,
    config: QueryConfig,
}

impl<'d> QueryEngine<'d> {
    /// Create an engine with the default configuration
    pub fn new(dataset: &'d Dataset) -> Self {
        Self::with_config(dataset, QueryConfig::default())
    }

    pub fn with_config(dataset: &'d Dataset, config: QueryConfig) -> Self {
        Self { dataset, config }
    }

    pub fn dataset(&self) -> &'d Dataset {
        self.dataset
    }

    pub fn config(&self) -> &QueryConfig {
        &self.config
    }

    /// Run any query against the dataset, logging its name
    pub fn run<Q: Query>(&self, query: &Q) -> Q::Output<'d> {
        tracing::debug!(
            "Running query {} over {} movies",
            query.name(),
            self.dataset.len()
        );
        query.run(self.dataset)
    }

    /// Titles released in `year`; empty when there are none
    pub fn movies_by_year(&self, year: i32) -> Vec<&'d str> {
        let titles = self.run(&MoviesByYear::new(year));
        tracing::debug!("MoviesByYear({}) -> {} titles", year, titles.len());
        titles
    }

    /// Best movie of each year inside the configured window, ascending
    pub fn highest_rated_per_year(&self) -> Vec<YearBest<'d>> {
        let query = HighestRatedPerYear::new().with_year_range(self.config.year_range);
        let best = self.run(&query);
        tracing::debug!("HighestRatedPerYear -> {} years", best.len());
        best
    }

    /// Movies listing `language`; empty when there are none
    pub fn movies_by_language(&self, language: &str) -> Vec<LanguageMatch<'d>> {
        let matches = self.run(&MoviesByLanguage::new(language));
        tracing::debug!("MoviesByLanguage({}) -> {} movies", language, matches.len());
        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::YearRange;
    use data_loader::MovieRecord;

    fn create_test_dataset() -> Dataset {
        Dataset::from_records(vec![
            MovieRecord::new("Metropolis", 1927, vec!["German".to_string()], 8.3),
            MovieRecord::new("Dune", 2021, vec!["English".to_string()], 8.0),
            MovieRecord::new("Future", 2030, vec!["English".to_string()], 9.9),
        ])
    }

    #[test]
    fn test_engine_uses_configured_year_range() {
        let dataset = create_test_dataset();

        let default_engine = QueryEngine::new(&dataset);
        assert_eq!(default_engine.highest_rated_per_year().len(), 2);

        let narrow = QueryConfig::default().with_year_range(YearRange::new(2000, 2100));
        let engine = QueryEngine::with_config(&dataset, narrow);
        let best = engine.highest_rated_per_year();
        assert_eq!(best.len(), 2);
        assert_eq!(best[1].title, "Future");
    }

    #[test]
    fn test_accessors_expose_dataset_and_config() {
        let dataset = create_test_dataset();

        let engine = QueryEngine::new(&dataset);
        assert_eq!(engine.dataset().len(), 3);
        assert_eq!(engine.config().year_range, YearRange::new(1900, 2021));

        let config = QueryConfig::default().with_year_range(YearRange::unbounded());
        let engine = QueryEngine::with_config(&dataset, config);
        assert_eq!(engine.config().year_range, YearRange::unbounded());
        assert!(std::ptr::eq(engine.dataset(), &dataset));
    }

    #[test]
    fn test_results_outlive_the_engine() {
        let dataset = create_test_dataset();
        let titles = {
            let engine = QueryEngine::new(&dataset);
            engine.movies_by_year(1927)
        };
        assert_eq!(titles, vec!["Metropolis"]);
    }
}
