//! Core trait for the query engine.
//!
//! Every query is a small value holding its arguments. Running it borrows
//! the dataset and returns a view into it, so nothing is cloned.

use data_loader::Dataset;

/// A read-only traversal producing a derived view of a `Dataset`.
pub trait Query {
    /// What the query produces. Usually borrows from the dataset.
    type Output<'a>;

    /// Returns the name of this query (for logging/debugging)
    fn name(&self) -> &str;

    /// Run the query against the dataset.
    ///
    /// Queries never fail: "no match" is an empty output.
    fn run<'a>(&self, dataset: &'a Dataset) -> Self::Output<'a>;
}
