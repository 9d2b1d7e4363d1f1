use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::patient::{application::dto::PatientDto, domain::PatientRepository};
use crate::shared::{application::use_case::Query, domain::ClinicId, errors::AppResult};

#[derive(Debug, Clone)]
pub struct ListPatientsByClinicQuery {
    pub clinic_id: String,
}

impl ListPatientsByClinicQuery {
    pub fn new(clinic_id: impl Into<String>) -> Self {
        Self {
            clinic_id: clinic_id.into(),
        }
    }
}

/// Patients of one clinic; an unknown clinic simply has none
pub struct ListPatientsByClinicHandler {
    patient_repository: Arc<dyn PatientRepository>,
}

impl ListPatientsByClinicHandler {
    pub fn new(patient_repository: Arc<dyn PatientRepository>) -> Self {
        Self { patient_repository }
    }
}

#[async_trait]
impl Query<ListPatientsByClinicQuery, Vec<PatientDto>> for ListPatientsByClinicHandler {
    async fn execute(&self, query: ListPatientsByClinicQuery) -> AppResult<Vec<PatientDto>> {
        let clinic_id = ClinicId::parse(&query.clinic_id)?;
        let patients = self.patient_repository.find_by_clinic_id(&clinic_id).await?;

        log::debug!("Clinic {} has {} patients", clinic_id, patients.len());
        Ok(patients.iter().map(PatientDto::from).collect())
    }
}
