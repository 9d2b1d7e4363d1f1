use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::modules::patient::domain::Patient;

/// Full patient projection; `full_name` and `age` are derived on the fly
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientDto {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: NaiveDate,
    pub age: u32,
    pub clinic_id: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Patient> for PatientDto {
    fn from(patient: &Patient) -> Self {
        Self {
            id: patient.id().to_string(),
            first_name: patient.first_name().value().to_string(),
            last_name: patient.last_name().value().to_string(),
            full_name: patient.full_name(),
            email: patient.email().value().to_string(),
            phone: patient.phone().value().to_string(),
            date_of_birth: patient.date_of_birth().value(),
            age: patient.age(),
            clinic_id: patient.clinic_id().to_string(),
            is_active: patient.is_active(),
            created_at: patient.created_at(),
            updated_at: patient.updated_at(),
        }
    }
}

/// Projection returned by activate / deactivate
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientStatusDto {
    pub id: String,
    pub full_name: String,
    pub is_active: bool,
    pub updated_at: DateTime<Utc>,
}

impl From<&Patient> for PatientStatusDto {
    fn from(patient: &Patient) -> Self {
        Self {
            id: patient.id().to_string(),
            full_name: patient.full_name(),
            is_active: patient.is_active(),
            updated_at: patient.updated_at(),
        }
    }
}
