//! # Data Loader Crate
//!
//! This crate loads a movie file into an in-memory, ordered `Dataset`.
//!
//! ## File format
//!
//! ```text
//! title,year,languages,rating
//! Inception,2010,[English;Japanese],8.8
//! Parasite,2019,[Korean],8.6
//! ```
//!
//! The first line is a header and is skipped without being checked.
//!
//! ## Main Components
//!
//! - **types**: `MovieRecord` and `Dataset`
//! - **parser**: Parse one line into a `MovieRecord` (strict or faithful)
//! - **loader**: Read a file and build the `Dataset`
//! - **config**: `LoaderConfig` and `ParseMode`
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::{Dataset, LoaderConfig};
//! use std::path::Path;
//!
//! let dataset = Dataset::load_from_file(Path::new("movies.csv"), &LoaderConfig::default())?;
//! println!("Loaded {} movies", dataset.len());
//! ```

// Public modules
pub mod config;
pub mod error;
pub mod loader;
pub mod parser;
pub mod types;

// Re-export commonly used types for convenience
pub use config::{LoaderConfig, ParseMode};
pub use error::{DataLoadError, RecordError, Result};
pub use parser::parse_record;
pub use types::{Dataset, MovieRecord};
