use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::errors::AppError;

/// Processing state of a sample
///
/// `Pending -> Processing -> Completed`, and `Pending | Processing -> Rejected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SampleStatus {
    Pending,
    Processing,
    Completed,
    Rejected,
}

impl SampleStatus {
    /// No transition leaves a terminal state
    pub fn is_terminal(&self) -> bool {
        matches!(self, SampleStatus::Completed | SampleStatus::Rejected)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SampleStatus::Pending => "PENDING",
            SampleStatus::Processing => "PROCESSING",
            SampleStatus::Completed => "COMPLETED",
            SampleStatus::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for SampleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SampleStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "PENDING" => Ok(SampleStatus::Pending),
            "PROCESSING" => Ok(SampleStatus::Processing),
            "COMPLETED" => Ok(SampleStatus::Completed),
            "REJECTED" => Ok(SampleStatus::Rejected),
            other => Err(AppError::ValidationError(format!(
                "Invalid sample status: {}",
                other
            ))),
        }
    }
}
