use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::modules::sample::domain::{Sample, SampleStatus};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleDto {
    pub id: String,
    pub patient_id: String,
    pub clinic_id: String,
    pub sample_type: String,
    pub status: SampleStatus,
    pub collection_date: DateTime<Utc>,
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Sample> for SampleDto {
    fn from(sample: &Sample) -> Self {
        Self {
            id: sample.id().to_string(),
            patient_id: sample.patient_id().to_string(),
            clinic_id: sample.clinic_id().to_string(),
            sample_type: sample.sample_type().value().to_string(),
            status: sample.status(),
            collection_date: sample.collection_date().value(),
            notes: sample.notes().to_string(),
            created_at: sample.created_at(),
            updated_at: sample.updated_at(),
        }
    }
}

/// Projection returned by the status transitions
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleStatusDto {
    pub id: String,
    pub patient_id: String,
    pub sample_type: String,
    pub status: SampleStatus,
    pub notes: String,
    pub updated_at: DateTime<Utc>,
}

impl From<&Sample> for SampleStatusDto {
    fn from(sample: &Sample) -> Self {
        Self {
            id: sample.id().to_string(),
            patient_id: sample.patient_id().to_string(),
            sample_type: sample.sample_type().value().to_string(),
            status: sample.status(),
            notes: sample.notes().to_string(),
            updated_at: sample.updated_at(),
        }
    }
}
