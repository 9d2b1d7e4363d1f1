use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::modules::clinic::domain::Clinic;

/// Full clinic projection returned by create, get, list and update
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClinicDto {
    pub id: String,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Clinic> for ClinicDto {
    fn from(clinic: &Clinic) -> Self {
        Self {
            id: clinic.id().to_string(),
            name: clinic.name().value().to_string(),
            address: clinic.address().value().to_string(),
            phone: clinic.phone().value().to_string(),
            is_active: clinic.is_active(),
            created_at: clinic.created_at(),
            updated_at: clinic.updated_at(),
        }
    }
}

/// Projection returned by activate / deactivate
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClinicStatusDto {
    pub id: String,
    pub name: String,
    pub is_active: bool,
    pub updated_at: DateTime<Utc>,
}

impl From<&Clinic> for ClinicStatusDto {
    fn from(clinic: &Clinic) -> Self {
        Self {
            id: clinic.id().to_string(),
            name: clinic.name().value().to_string(),
            is_active: clinic.is_active(),
            updated_at: clinic.updated_at(),
        }
    }
}
