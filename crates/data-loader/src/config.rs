//! Loader configuration.
//!
//! The defaults are strict and unbounded. `LoaderConfig::compat()` reproduces
//! the legacy format limits: silent zero defaults for bad numbers,
//! at most five languages per record, 1024-byte lines.

use serde::{Deserialize, Serialize};

/// Maximum number of languages kept per record in compatibility mode
pub const COMPAT_MAX_LANGUAGES: usize = 5;

/// Maximum line length in bytes in compatibility mode
pub const COMPAT_MAX_LINE_LEN: usize = 1024;

/// How malformed fields are treated by the record parser
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParseMode {
    /// Reject malformed rows with a `RecordError`
    #[default]
    Strict,
    /// Unparsable numbers become 0 / 0.0, missing fields are tolerated
    Faithful,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderConfig {
    pub mode: ParseMode,
    /// Languages beyond this count are dropped. `None` keeps all of them.
    pub max_languages: Option<usize>,
    /// Lines longer than this (in bytes, terminator excluded) are rejected.
    pub max_line_len: Option<usize>,
}

impl LoaderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Legacy-compatible limits, except that over-long lines are
    /// reported instead of being cut.
    pub fn compat() -> Self {
        Self {
            mode: ParseMode::Faithful,
            max_languages: Some(COMPAT_MAX_LANGUAGES),
            max_line_len: Some(COMPAT_MAX_LINE_LEN),
        }
    }

    pub fn with_mode(mut self, mode: ParseMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_max_languages(mut self, max: Option<usize>) -> Self {
        self.max_languages = max;
        self
    }

    pub fn with_max_line_len(mut self, max: Option<usize>) -> Self {
        self.max_line_len = max;
        self
    }
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            mode: ParseMode::Strict,
            max_languages: None,
            max_line_len: None,
        }
    }
}
