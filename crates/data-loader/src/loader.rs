//! Building a `Dataset` from a movie file.
//!
//! Steps:
//! 1. Open the file (the handle is dropped as soon as its bytes are read)
//! 2. Drop the header line without looking at it
//! 3. Check each line's raw length, then decode it lossily to UTF-8
//! 4. Parse the remaining lines in parallel with Rayon
//! 5. Collect in file order, stopping at the first bad line

use crate::config::LoaderConfig;
use crate::error::{DataLoadError, Result};
use crate::parser;
use crate::types::{Dataset, MovieRecord};
use rayon::prelude::*;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, instrument};

/// The header is line 1, so the first data line is line 2
const FIRST_DATA_LINE: usize = 2;

impl Dataset {
    /// Load a dataset from a file on disk
    ///
    /// Fails with `DataLoadError::FileOpen` if the file cannot be opened,
    /// and with `Parse` / `LineTooLong` on the first bad line.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn load_from_file(path: &Path, config: &LoaderConfig) -> Result<Self> {
        let file = File::open(path).map_err(|source| DataLoadError::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;

        let dataset = Self::load_from_reader(file, config)?;
        info!(
            "Processed file {} and parsed data for {} movies",
            path.display(),
            dataset.len()
        );
        Ok(dataset)
    }

    /// Load a dataset from any reader (the first line is the header)
    pub fn load_from_reader<R: Read>(mut reader: R, config: &LoaderConfig) -> Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Self::parse_bytes(&bytes, config)
    }

    /// Parse already-read file contents (the first line is the header)
    pub fn parse_str(contents: &str, config: &LoaderConfig) -> Result<Self> {
        Self::parse_bytes(contents.as_bytes(), config)
    }

    /// Parse raw file contents (the first line is the header)
    ///
    /// Line lengths are measured on the raw bytes; each line is decoded
    /// lossily to UTF-8 only after that check.
    pub fn parse_bytes(contents: &[u8], config: &LoaderConfig) -> Result<Self> {
        let mut lines = split_lines(contents);
        if let Some(header) = lines.next() {
            debug!("Skipping header: {:?}", String::from_utf8_lossy(header));
        }
        let body: Vec<&[u8]> = lines.collect();

        // Rayon keeps the order of an indexed iterator when collecting into
        // a Vec, so errors are checked afterwards to report the earliest one.
        let parsed: Vec<Result<Option<MovieRecord>>> = body
            .par_iter()
            .enumerate()
            .map(|(idx, line)| parse_line(line, idx + FIRST_DATA_LINE, config))
            .collect();

        let records = parsed
            .into_iter()
            .filter_map(|result| result.transpose())
            .collect::<Result<Vec<_>>>()?;

        debug!("Parsed {} records from {} body lines", records.len(), body.len());
        Ok(Dataset::from_records(records))
    }
}

/// Split on `\n`, dropping a trailing `\r` from each line and the empty
/// piece after a final newline
fn split_lines(contents: &[u8]) -> impl Iterator<Item = &[u8]> {
    let contents = contents.strip_suffix(b"\n").unwrap_or(contents);
    contents
        .split(|&b| b == b'\n')
        .filter(move |_| !contents.is_empty())
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
}

/// `Ok(None)` for blank lines, which are not records
fn parse_line(line: &[u8], line_no: usize, config: &LoaderConfig) -> Result<Option<MovieRecord>> {
    if let Some(limit) = config.max_line_len {
        if line.len() > limit {
            return Err(DataLoadError::LineTooLong {
                line: line_no,
                len: line.len(),
                limit,
            });
        }
    }

    let line = String::from_utf8_lossy(line);
    if line.trim().is_empty() {
        return Ok(None);
    }

    parser::parse_record(&line, config)
        .map(Some)
        .map_err(|reason| DataLoadError::Parse {
            line: line_no,
            reason,
        })
}
