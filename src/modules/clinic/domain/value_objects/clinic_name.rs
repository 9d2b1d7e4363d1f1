use serde::Serialize;
use std::fmt;

use crate::shared::{errors::AppResult, utils::Validator};

pub const MIN_LENGTH: usize = 2;
pub const MAX_LENGTH: usize = 100;

/// Trimmed clinic name, 2 to 100 characters
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ClinicName(String);

impl ClinicName {
    pub fn new(value: &str) -> AppResult<Self> {
        Validator::bounded_text("Clinic name", value, MIN_LENGTH, MAX_LENGTH).map(Self)
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClinicName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
