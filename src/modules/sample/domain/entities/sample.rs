use chrono::{DateTime, Utc};

use crate::modules::sample::domain::value_objects::{CollectionDate, SampleStatus, SampleType};
use crate::shared::{
    domain::{next_timestamp, ClinicId, PatientId, SampleId},
    errors::{AppError, AppResult},
};

/// Biological sample taken from a patient at a clinic
///
/// New samples start `Pending` with empty notes. Status only moves through
/// `start_processing`, `complete` and `reject`.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    id: SampleId,
    patient_id: PatientId,
    clinic_id: ClinicId,
    sample_type: SampleType,
    status: SampleStatus,
    collection_date: CollectionDate,
    notes: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Sample {
    pub fn new(
        patient_id: PatientId,
        clinic_id: ClinicId,
        sample_type: SampleType,
        collection_date: CollectionDate,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: SampleId::generate(),
            patient_id,
            clinic_id,
            sample_type,
            status: SampleStatus::Pending,
            collection_date,
            notes: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> &SampleId {
        &self.id
    }

    pub fn patient_id(&self) -> &PatientId {
        &self.patient_id
    }

    pub fn clinic_id(&self) -> &ClinicId {
        &self.clinic_id
    }

    pub fn sample_type(&self) -> &SampleType {
        &self.sample_type
    }

    pub fn status(&self) -> SampleStatus {
        self.status
    }

    pub fn collection_date(&self) -> CollectionDate {
        self.collection_date
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn change_sample_type(&mut self, sample_type: SampleType) {
        self.sample_type = sample_type;
        self.touch();
    }

    /// Replace notes wholesale; allowed in any status
    pub fn update_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
        self.touch();
    }

    pub fn start_processing(&mut self) -> AppResult<()> {
        if self.status != SampleStatus::Pending {
            return Err(AppError::Conflict(
                "Only pending samples can start processing".to_string(),
            ));
        }
        self.status = SampleStatus::Processing;
        self.touch();
        Ok(())
    }

    pub fn complete(&mut self) -> AppResult<()> {
        if self.status != SampleStatus::Processing {
            return Err(AppError::Conflict(
                "Only processing samples can be completed".to_string(),
            ));
        }
        self.status = SampleStatus::Completed;
        self.touch();
        Ok(())
    }

    /// Reject a pending or processing sample. Existing notes are overwritten
    /// with `Rejected: {reason}`.
    pub fn reject(&mut self, reason: &str) -> AppResult<()> {
        if self.status.is_terminal() {
            return Err(AppError::Conflict(
                "Cannot reject a completed or already rejected sample".to_string(),
            ));
        }
        self.status = SampleStatus::Rejected;
        self.notes = format!("Rejected: {}", reason);
        self.touch();
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = next_timestamp(self.updated_at);
    }
}
