use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Serialize;
use std::fmt;

use crate::shared::errors::{AppError, AppResult};

/// Instant the sample was taken; never after "now"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CollectionDate(DateTime<Utc>);

impl CollectionDate {
    pub fn new(value: DateTime<Utc>) -> AppResult<Self> {
        if value > Utc::now() {
            return Err(AppError::ValidationError(
                "Collection date cannot be in the future".to_string(),
            ));
        }
        Ok(Self(value))
    }

    /// Parse an RFC 3339 timestamp, or a bare `YYYY-MM-DD` taken as midnight UTC
    pub fn parse(raw: &str) -> AppResult<Self> {
        let raw = raw.trim();
        let instant = match DateTime::parse_from_rfc3339(raw) {
            Ok(instant) => instant.with_timezone(&Utc),
            Err(_) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")?
                .and_time(NaiveTime::MIN)
                .and_utc(),
        };
        Self::new(instant)
    }

    pub fn value(&self) -> DateTime<Utc> {
        self.0
    }
}

impl fmt::Display for CollectionDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}
