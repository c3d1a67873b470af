//! Movies available in a given language.

use crate::traits::Query;
use data_loader::Dataset;
use serde::Serialize;

/// One matching movie
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LanguageMatch<'a> {
    pub year: i32,
    pub title: &'a str,
}

/// Movies whose language list contains `language` (exact, case-sensitive),
/// in dataset order. A movie listing the language twice is reported once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoviesByLanguage {
    pub language: String,
}

impl MoviesByLanguage {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
        }
    }
}

impl Query for MoviesByLanguage {
    type Output<'a> = Vec<LanguageMatch<'a>>;

    fn name(&self) -> &str {
        "MoviesByLanguage"
    }

    fn run<'a>(&self, dataset: &'a Dataset) -> Self::Output<'a> {
        dataset
            .iter()
            .filter(|movie| movie.has_language(&self.language))
            .map(|movie| LanguageMatch {
                year: movie.year,
                title: &movie.title,
            })
            .collect()
    }
}
