use serde::Serialize;
use std::fmt;

use crate::shared::{errors::AppResult, utils::Validator};

pub const MIN_LENGTH: usize = 5;
pub const MAX_LENGTH: usize = 255;

/// Trimmed postal address, 5 to 255 characters
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ClinicAddress(String);

impl ClinicAddress {
    pub fn new(value: &str) -> AppResult<Self> {
        Validator::bounded_text("Clinic address", value, MIN_LENGTH, MAX_LENGTH).map(Self)
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClinicAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
