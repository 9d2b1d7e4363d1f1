use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

use crate::shared::errors::{AppError, AppResult};

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// `local@domain.tld`, lowercased once at construction
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    pub fn new(value: &str) -> AppResult<Self> {
        if !EMAIL_PATTERN.is_match(value) {
            return Err(AppError::ValidationError(
                "Invalid email format".to_string(),
            ));
        }
        Ok(Self(value.to_lowercase()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
