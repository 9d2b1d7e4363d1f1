//! Opaque aggregate identifiers
//!
//! Ids are plain strings at the boundary. Freshly created aggregates get a
//! UUID v4; parsing only rejects blank input, since any other string is a
//! legitimate (possibly unknown) id.

use serde::Serialize;
use std::fmt;
use uuid::Uuid;

use crate::shared::errors::{AppError, AppResult};

macro_rules! entity_id {
    ($name:ident, $label:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn generate() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            pub fn parse(raw: &str) -> AppResult<Self> {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return Err(AppError::ValidationError(
                        concat!($label, " ID cannot be empty").to_string(),
                    ));
                }
                Ok(Self(trimmed.to_string()))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

entity_id!(ClinicId, "Clinic");
entity_id!(PatientId, "Patient");
entity_id!(SampleId, "Sample");
