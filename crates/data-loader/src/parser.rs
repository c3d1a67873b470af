//! Parser for a single line of the movie file.
//!
//! Format: `title,year,[lang1;lang2;...],rating`
//!
//! There is no escaping: a comma inside a title or a semicolon inside a
//! language name is not supported.
//!
//! Two modes are available (see `ParseMode`):
//! - strict: every field must be well formed, otherwise a `RecordError`
//! - faithful: tokens are split like `strtok`, numbers are read like
//!   `atoi`/`strtod`, so garbage turns into 0 instead of an error

use crate::config::{LoaderConfig, ParseMode};
use crate::error::RecordError;
use crate::types::MovieRecord;

/// Number of comma-separated fields in a row
pub const FIELD_COUNT: usize = 4;

/// Parse one line into a `MovieRecord`.
///
/// Trailing `\r` and `\n` are ignored. Blank lines are the loader's
/// business; here they are reported as a field-count error.
pub fn parse_record(line: &str, config: &LoaderConfig) -> Result<MovieRecord, RecordError> {
    let line = line.trim_end_matches(['\r', '\n']);
    match config.mode {
        ParseMode::Strict => parse_strict(line, config.max_languages),
        ParseMode::Faithful => parse_faithful(line, config.max_languages),
    }
}

// =============================================================================
// Strict mode
// =============================================================================

fn parse_strict(line: &str, max_languages: Option<usize>) -> Result<MovieRecord, RecordError> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != FIELD_COUNT {
        return Err(RecordError::FieldCount {
            expected: FIELD_COUNT,
            found: fields.len(),
        });
    }

    let title = fields[0];
    if title.trim().is_empty() {
        return Err(RecordError::EmptyTitle);
    }

    let year = fields[1]
        .trim()
        .parse::<i32>()
        .map_err(|_| invalid("year", fields[1]))?;

    let languages = parse_languages_strict(fields[2], max_languages)?;

    let rating = fields[3]
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|r| r.is_finite())
        .ok_or_else(|| invalid("rating", fields[3]))?;

    Ok(MovieRecord::new(title, year, languages, rating))
}

/// `[English;French]` -> `["English", "French"]`, `[]` -> `[]`
fn parse_languages_strict(
    field: &str,
    max_languages: Option<usize>,
) -> Result<Vec<String>, RecordError> {
    let inner = field
        .trim()
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .ok_or_else(|| invalid("languages", field))?;

    Ok(inner
        .split(';')
        .filter(|lang| !lang.is_empty())
        .take(max_languages.unwrap_or(usize::MAX))
        .map(str::to_string)
        .collect())
}

fn invalid(field: &'static str, value: &str) -> RecordError {
    RecordError::InvalidValue {
        field,
        value: value.to_string(),
    }
}

// =============================================================================
// Faithful mode
// =============================================================================

fn parse_faithful(line: &str, max_languages: Option<usize>) -> Result<MovieRecord, RecordError> {
    // strtok never yields empty tokens
    let mut tokens = line.split(',').filter(|t| !t.is_empty());

    let title = tokens.next().ok_or(RecordError::FieldCount {
        expected: FIELD_COUNT,
        found: 0,
    })?;
    let year = tokens.next().map(leading_int).unwrap_or(0);
    let languages = tokens
        .next()
        .map(|t| parse_languages_faithful(t, max_languages))
        .unwrap_or_default();
    let rating = tokens.next().map(leading_float).unwrap_or(0.0);

    Ok(MovieRecord::new(title, year, languages, rating))
}

/// Skip the first character, split on `;`, cut the last kept token at `]`.
fn parse_languages_faithful(token: &str, max_languages: Option<usize>) -> Vec<String> {
    let mut chars = token.chars();
    chars.next();

    let mut languages: Vec<String> = chars
        .as_str()
        .split(';')
        .filter(|lang| !lang.is_empty())
        .take(max_languages.unwrap_or(usize::MAX))
        .map(str::to_string)
        .collect();

    if let Some(last) = languages.last_mut() {
        if let Some(pos) = last.find(']') {
            last.truncate(pos);
        }
        if last.is_empty() {
            languages.pop();
        }
    }
    languages
}

/// `atoi`: optional whitespace and sign, then as many digits as there are.
/// Saturates at the `i32` bounds.
fn leading_int(s: &str) -> i32 {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        value = (value * 10 + i64::from(b - b'0')).min(i64::from(i32::MAX) + 1);
    }
    if negative {
        value = -value;
    }
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// `strtod`: the longest prefix that reads as a decimal float, else 0.0
fn leading_float(s: &str) -> f64 {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let rest = &s[end..];
    for word in ["infinity", "inf", "nan"] {
        if rest
            .get(..word.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(word))
        {
            return s[..end + word.len()].parse().unwrap_or(0.0);
        }
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return 0.0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse().unwrap_or(0.0)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
