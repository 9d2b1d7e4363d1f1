use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::patient::{application::dto::PatientStatusDto, domain::PatientRepository};
use crate::shared::{application::use_case::UseCase, errors::AppResult};

use super::require_patient;

#[derive(Debug, Clone)]
pub struct ActivatePatientCommand {
    pub patient_id: String,
}

impl ActivatePatientCommand {
    pub fn new(patient_id: impl Into<String>) -> Self {
        Self {
            patient_id: patient_id.into(),
        }
    }
}

pub struct ActivatePatientHandler {
    patient_repository: Arc<dyn PatientRepository>,
}

impl ActivatePatientHandler {
    pub fn new(patient_repository: Arc<dyn PatientRepository>) -> Self {
        Self { patient_repository }
    }
}

#[async_trait]
impl UseCase<ActivatePatientCommand, PatientStatusDto> for ActivatePatientHandler {
    async fn execute(&self, command: ActivatePatientCommand) -> AppResult<PatientStatusDto> {
        let mut patient =
            require_patient(self.patient_repository.as_ref(), &command.patient_id).await?;

        patient.activate()?;
        self.patient_repository.update(&patient).await?;

        log::info!("Patient {} activated", patient.id());
        Ok(PatientStatusDto::from(&patient))
    }
}
