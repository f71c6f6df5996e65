//! birthdate.rs
//!
//! Birthdates arrive as free-form strings typed into profile forms. Lenient
//! mode accepts the layouts those forms have historically stored; strict mode
//! accepts ISO 8601 calendar dates only.
//!
//! Slash-separated dates with the year last are read month-first
//! (`01/02/2020` is January 2nd), never day-first. Every layout needs a
//! four-digit year; `01/01/20` is rejected rather than read as year 1.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use tracing::trace;

use crate::error::AgeError;

/// Layouts tried in order by lenient parsing: format, separator and the
/// position of the year field.
const DATE_FORMATS: [(&str, char, usize); 3] = [
    ("%Y-%m-%d", '-', 0), // 2020-01-31
    ("%Y/%m/%d", '/', 0), // 2020/01/31
    ("%m/%d/%Y", '/', 2), // 01/31/2020
];

const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// How permissive birthdate parsing is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// Every accepted layout, including timestamps.
    #[default]
    Lenient,
    /// `YYYY-MM-DD` only.
    Strict,
}

/// Parses a birthdate string into a calendar date.
pub fn parse_birthdate(input: &str, mode: ParseMode) -> Result<NaiveDate, AgeError> {
    let s = input.trim();
    if s.is_empty() {
        return Err(AgeError::invalid(input));
    }

    let parsed = match mode {
        ParseMode::Strict => parse_iso(s),
        ParseMode::Lenient => parse_lenient(s),
    };

    match parsed {
        Some(date) => {
            trace!(input = s, %date, ?mode, "parsed birthdate");
            Ok(date)
        }
        None => Err(AgeError::invalid(input)),
    }
}

fn parse_iso(s: &str) -> Option<NaiveDate> {
    let b = s.as_bytes();
    // zero-padded YYYY-MM-DD
    if b.len() != 10 || b[4] != b'-' || b[7] != b'-' {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Chrono's `%Y` also takes one or two digits, so the width is checked here.
fn has_full_year(date: &str, sep: char, year_field: usize) -> bool {
    let fields: Vec<&str> = date.split(sep).collect();
    fields.len() == 3
        && fields[year_field].len() == 4
        && fields[year_field].bytes().all(|b| b.is_ascii_digit())
}

fn parse_lenient(s: &str) -> Option<NaiveDate> {
    for (format, sep, year_field) in DATE_FORMATS {
        if !has_full_year(s, sep, year_field) {
            continue;
        }
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return Some(date);
        }
    }

    let date_part = s.split(['T', 't', ' ']).next().unwrap_or_default();
    if !has_full_year(date_part, '-', 0) {
        return None;
    }

    // Timestamps keep the calendar date as written, whatever the offset.
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(dt.date());
        }
    }

    None
}
