use serde::Serialize;
use std::fmt;

use crate::shared::{errors::AppResult, utils::Validator};

pub const MIN_LENGTH: usize = 2;
pub const MAX_LENGTH: usize = 50;

/// Trimmed given name, 2 to 50 characters
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct FirstName(String);

impl FirstName {
    pub fn new(value: &str) -> AppResult<Self> {
        Validator::bounded_text("First name", value, MIN_LENGTH, MAX_LENGTH).map(Self)
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FirstName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Trimmed family name, 2 to 50 characters
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct LastName(String);

impl LastName {
    pub fn new(value: &str) -> AppResult<Self> {
        Validator::bounded_text("Last name", value, MIN_LENGTH, MAX_LENGTH).map(Self)
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LastName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
