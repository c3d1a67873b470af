//! Titles of the movies released in a given year.

use crate::traits::Query;
use data_loader::Dataset;

/// Titles whose year equals `year`, in dataset order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoviesByYear {
    pub year: i32,
}

impl MoviesByYear {
    pub fn new(year: i32) -> Self {
        Self { year }
    }
}

impl Query for MoviesByYear {
    type Output<'a> = Vec<&'a str>;

    fn name(&self) -> &str {
        "MoviesByYear"
    }

    fn run<'a>(&self, dataset: &'a Dataset) -> Self::Output<'a> {
        dataset
            .iter()
            .filter(|movie| movie.year == self.year)
            .map(|movie| movie.title.as_str())
            .collect()
    }
}
