use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

use crate::shared::errors::{AppError, AppResult};

// ASCII digits, spaces, '+', '-', parentheses; at least 7 of them
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9\s\-+()]{7,}$").expect("phone pattern is valid"));

/// Phone number shared by clinics and patients
///
/// Stored exactly as given; only the shape is checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn new(value: &str) -> AppResult<Self> {
        if !PHONE_PATTERN.is_match(value) {
            return Err(AppError::ValidationError(
                "Invalid phone format".to_string(),
            ));
        }
        Ok(Self(value.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
