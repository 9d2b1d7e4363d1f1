use serde::Serialize;
use std::fmt;

use crate::shared::{errors::AppResult, utils::Validator};

/// Kind of specimen collected ("Blood", "Urine", ...)
///
/// Free text stored exactly as given; only blank input is refused.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SampleType(String);

impl SampleType {
    pub fn new(value: &str) -> AppResult<Self> {
        Validator::require_non_blank("Sample type", value)?;
        Ok(Self(value.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SampleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_value_as_given() {
        assert_eq!(SampleType::new(" Blood ").unwrap().value(), " Blood ");
        assert_ne!(SampleType::new(" Blood ").unwrap(), SampleType::new("Blood").unwrap());
    }

    #[test]
    fn test_rejects_blank() {
        let err = SampleType::new("   ").unwrap_err();
        assert_eq!(err.message(), "Sample type cannot be empty");
    }
}
