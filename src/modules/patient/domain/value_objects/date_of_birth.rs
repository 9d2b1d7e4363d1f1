use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::Serialize;
use std::fmt;

use crate::shared::errors::{AppError, AppResult};

/// Calendar date of birth; never in the future
///
/// Age is always derived from the current date, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct DateOfBirth(NaiveDate);

impl DateOfBirth {
    pub fn new(value: NaiveDate) -> AppResult<Self> {
        if value > Utc::now().date_naive() {
            return Err(AppError::ValidationError(
                "Date of birth cannot be in the future".to_string(),
            ));
        }
        Ok(Self(value))
    }

    /// Parse `YYYY-MM-DD`, or an RFC 3339 timestamp (the date as written, in its own offset)
    pub fn parse(raw: &str) -> AppResult<Self> {
        let raw = raw.trim();
        let date = match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(date) => date,
            Err(_) => DateTime::parse_from_rfc3339(raw)?.date_naive(),
        };
        Self::new(date)
    }

    pub fn value(&self) -> NaiveDate {
        self.0
    }

    pub fn age(&self) -> u32 {
        self.age_on(Utc::now().date_naive())
    }

    /// Completed years on `today`; the birthday itself counts
    pub fn age_on(&self, today: NaiveDate) -> u32 {
        let born = self.0;
        let mut years = today.year() - born.year();
        if (today.month(), today.day()) < (born.month(), born.day()) {
            years -= 1;
        }
        years.max(0) as u32
    }
}

impl fmt::Display for DateOfBirth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
