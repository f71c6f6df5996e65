use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::age::{Age, calculate_age_with};
use crate::birthdate::ParseMode;

/// A cat's profile page, as exported from the site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatProfile {
    pub name: String,
    pub birthdate: String,
    #[serde(default)]
    pub breed: Option<String>,
    #[serde(default)]
    pub sex: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub personality: Option<String>,
    #[serde(default)]
    pub favorite_food: Option<String>,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub hashtags: Vec<String>,
}

impl CatProfile {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to deserialize cat profile")
    }

    /// Read a profile from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read profile {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("Invalid profile {}", path.display()))
    }

    pub fn age_on(&self, now: NaiveDate, mode: ParseMode) -> Result<Age> {
        calculate_age_with(&self.birthdate, now, mode)
            .with_context(|| format!("Cannot compute age of {}", self.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TAMA: &str = r#"{
        "name": "Tama",
        "birthdate": "2020-01-20",
        "breed": "Japanese Bobtail",
        "hashtags": ["calico", "sleepy"],
        "avatar_url": "https://example.invalid/tama.jpg"
    }"#;

    #[test]
    fn parses_profile_and_ignores_unknown_fields() {
        let p = CatProfile::from_json(TAMA).unwrap();
        assert_eq!(p.name, "Tama");
        assert_eq!(p.breed.as_deref(), Some("Japanese Bobtail"));
        assert_eq!(p.sex, None);
        assert_eq!(p.hashtags, vec!["calico", "sleepy"]);
    }

    #[test]
    fn missing_birthdate_is_rejected() {
        assert!(CatProfile::from_json(r#"{"name": "Tama"}"#).is_err());
    }

    #[test]
    fn age_on_reference_date() {
        let p = CatProfile::from_json(TAMA).unwrap();
        let now = NaiveDate::from_ymd_opt(2023, 1, 15).unwrap();
        let age = p.age_on(now, ParseMode::Strict).unwrap();
        assert_eq!(age, Age { years: 2, months: 11 });
    }

    #[test]
    fn bad_birthdate_error_names_the_cat() {
        let mut p = CatProfile::from_json(TAMA).unwrap();
        p.birthdate = "someday".into();
        let now = NaiveDate::from_ymd_opt(2023, 1, 15).unwrap();
        let err = p.age_on(now, ParseMode::Lenient).unwrap_err();
        assert!(format!("{err:#}").contains("Tama"));
        assert!(format!("{err:#}").contains("someday"));
    }

    #[test]
    fn load_reports_missing_file() {
        let err = CatProfile::load(Path::new("/nonexistent/tama.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/tama.json"));
    }
}
