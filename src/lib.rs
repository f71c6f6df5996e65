//! Cat age calculation and profile cards.
//!
//! ```
//! use chrono::NaiveDate;
//! use nekoage::calculate_age;
//!
//! let today = NaiveDate::from_ymd_opt(2023, 1, 15).unwrap();
//! let age = calculate_age("2015-06-15", today).unwrap();
//! assert_eq!((age.years, age.months), (7, 7));
//! assert_eq!(age.to_string(), "7歳7ヶ月");
//! ```

mod age;
mod ascii;
mod birthdate;
mod card;
mod error;
mod profile;

pub use age::{Age, Locale, age_between, calculate_age, calculate_age_today, calculate_age_with};
pub use birthdate::{ParseMode, parse_birthdate};
pub use card::{Theme, ThemeColors, build_stat_row, generate_svg};
pub use error::AgeError;
pub use profile::CatProfile;
