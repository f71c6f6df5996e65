//! age.rs
//!
//! Turns a cat's birthdate into a profile-page age such as "3歳7ヶ月".
//!
//! Chrono does not provide a year/month diff, so the calendar borrowing is
//! done by hand. Profile pages only show completed years and months, and the
//! rollover rules below are the ones those pages have always displayed:
//!   • month underflow borrows a year
//!   • a birthday later in the current month has not completed the year yet
//!   • a single elapsed month whose day has not come round yet counts as zero
//!
//! Days beyond that are not borrowed. A birthdate in the future comes out
//! negative and is displayed as "not yet born".

use std::fmt;

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::birthdate::{ParseMode, parse_birthdate};
use crate::error::AgeError;

/// Completed years and months between a birthdate and a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Age {
    pub years: i32,
    pub months: i32,
}

/// Language the age is displayed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Locale {
    #[default]
    Ja,
    En,
}

impl Age {
    /// True when the birthdate lies after the reference date.
    pub fn is_unborn(&self) -> bool {
        self.years < 0 || (self.years == 0 && self.months < 0)
    }

    /// Renders the age for display in `locale`.
    pub fn render(&self, locale: Locale) -> String {
        let (years, months) = (self.years, self.months);
        match locale {
            Locale::Ja if self.is_unborn() => "これから生まれる".to_string(),
            Locale::Ja if months == 0 => format!("{years}歳"),
            Locale::Ja => format!("{years}歳{months}ヶ月"),
            Locale::En if self.is_unborn() => "not yet born".to_string(),
            Locale::En if months == 0 => format!("{years} years"),
            Locale::En => format!("{years} years {months} months"),
        }
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Locale::Ja))
    }
}

/// Age on `now` of something born on `birth`.
pub fn age_between(birth: NaiveDate, now: NaiveDate) -> Age {
    let mut years = now.year() - birth.year();
    let mut months = now.month() as i32 - birth.month() as i32;
    let day_not_reached = now.day() < birth.day();

    // Fix month underflow
    if months < 0 {
        years -= 1;
        months += 12;
    } else if months == 0 && day_not_reached {
        years -= 1;
        months = 11;
    }

    // Only the one-month case is corrected; longer spans keep their count.
    if day_not_reached && months == 1 {
        months = 0;
    }

    Age { years, months }
}

/// Parses `birthdate` leniently and returns the age on `now`.
pub fn calculate_age(birthdate: &str, now: NaiveDate) -> Result<Age, AgeError> {
    calculate_age_with(birthdate, now, ParseMode::Lenient)
}

pub fn calculate_age_with(
    birthdate: &str,
    now: NaiveDate,
    mode: ParseMode,
) -> Result<Age, AgeError> {
    let birth = parse_birthdate(birthdate, mode)?;
    let age = age_between(birth, now);
    debug!(%birth, %now, years = age.years, months = age.months, "calculated age");
    Ok(age)
}

/// Same as [`calculate_age`] with today's date from the local clock.
pub fn calculate_age_today(birthdate: &str) -> Result<Age, AgeError> {
    calculate_age(birthdate, Local::now().date_naive())
}
