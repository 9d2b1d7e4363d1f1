use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::patient::{application::dto::PatientDto, domain::PatientRepository};
use crate::shared::{application::use_case::Query, errors::AppResult};

use super::require_patient;

#[derive(Debug, Clone)]
pub struct GetPatientQuery {
    pub patient_id: String,
}

impl GetPatientQuery {
    pub fn new(patient_id: impl Into<String>) -> Self {
        Self {
            patient_id: patient_id.into(),
        }
    }
}

pub struct GetPatientHandler {
    patient_repository: Arc<dyn PatientRepository>,
}

impl GetPatientHandler {
    pub fn new(patient_repository: Arc<dyn PatientRepository>) -> Self {
        Self { patient_repository }
    }
}

#[async_trait]
impl Query<GetPatientQuery, PatientDto> for GetPatientHandler {
    async fn execute(&self, query: GetPatientQuery) -> AppResult<PatientDto> {
        let patient =
            require_patient(self.patient_repository.as_ref(), &query.patient_id).await?;
        Ok(PatientDto::from(&patient))
    }
}
