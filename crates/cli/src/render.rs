//! Text and JSON rendering of query results.
//!
//! Text output is line oriented:
//! - by year: one title per line
//! - best per year: `YEAR RATING TITLE`, rating with one decimal
//! - by language: `YEAR TITLE`

use clap::ValueEnum;
use query_engine::{LanguageMatch, YearBest};
use serde::Serialize;
use std::io::{self, Write};

/// Output format of the scripted subcommands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub fn write_movies_by_year<W: Write>(out: &mut W, year: i32, titles: &[&str]) -> io::Result<()> {
    if titles.is_empty() {
        return writeln!(out, "No data about movies released in the year {}", year);
    }
    for title in titles {
        writeln!(out, "{}", title)?;
    }
    Ok(())
}

pub fn write_highest_rated<W: Write>(out: &mut W, best: &[YearBest<'_>]) -> io::Result<()> {
    for entry in best {
        writeln!(out, "{} {:.1} {}", entry.year, entry.rating, entry.title)?;
    }
    Ok(())
}

pub fn write_movies_by_language<W: Write>(
    out: &mut W,
    language: &str,
    matches: &[LanguageMatch<'_>],
) -> io::Result<()> {
    if matches.is_empty() {
        return writeln!(out, "No data about movies released in {}", language);
    }
    for m in matches {
        writeln!(out, "{} {}", m.year, m.title)?;
    }
    Ok(())
}

/// Pretty-printed JSON followed by a newline
pub fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}
