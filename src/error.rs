use thiserror::Error;

/// Errors produced while turning a birthdate into an age.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AgeError {
    #[error("invalid birthdate '{input}': expected a calendar date such as 2020-01-31")]
    InvalidDate { input: String },
}

impl AgeError {
    pub(crate) fn invalid(input: &str) -> Self {
        AgeError::InvalidDate {
            input: input.to_string(),
        }
    }
}
