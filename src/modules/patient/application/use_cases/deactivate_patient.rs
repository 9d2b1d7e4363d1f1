use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::patient::{application::dto::PatientStatusDto, domain::PatientRepository};
use crate::shared::{application::use_case::UseCase, errors::AppResult};

use super::require_patient;

#[derive(Debug, Clone)]
pub struct DeactivatePatientCommand {
    pub patient_id: String,
}

impl DeactivatePatientCommand {
    pub fn new(patient_id: impl Into<String>) -> Self {
        Self {
            patient_id: patient_id.into(),
        }
    }
}

pub struct DeactivatePatientHandler {
    patient_repository: Arc<dyn PatientRepository>,
}

impl DeactivatePatientHandler {
    pub fn new(patient_repository: Arc<dyn PatientRepository>) -> Self {
        Self { patient_repository }
    }
}

#[async_trait]
impl UseCase<DeactivatePatientCommand, PatientStatusDto> for DeactivatePatientHandler {
    async fn execute(&self, command: DeactivatePatientCommand) -> AppResult<PatientStatusDto> {
        let mut patient =
            require_patient(self.patient_repository.as_ref(), &command.patient_id).await?;

        patient.deactivate()?;
        self.patient_repository.update(&patient).await?;

        log::info!("Patient {} deactivated", patient.id());
        Ok(PatientStatusDto::from(&patient))
    }
}
