use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::patient::domain::PatientRepository;
use crate::shared::{application::use_case::UseCase, errors::AppResult};

use super::require_patient;

#[derive(Debug, Clone)]
pub struct DeletePatientCommand {
    pub patient_id: String,
}

impl DeletePatientCommand {
    pub fn new(patient_id: impl Into<String>) -> Self {
        Self {
            patient_id: patient_id.into(),
        }
    }
}

/// Removes a patient. Samples referencing it are left in place.
pub struct DeletePatientHandler {
    patient_repository: Arc<dyn PatientRepository>,
}

impl DeletePatientHandler {
    pub fn new(patient_repository: Arc<dyn PatientRepository>) -> Self {
        Self { patient_repository }
    }
}

#[async_trait]
impl UseCase<DeletePatientCommand, ()> for DeletePatientHandler {
    async fn execute(&self, command: DeletePatientCommand) -> AppResult<()> {
        let patient =
            require_patient(self.patient_repository.as_ref(), &command.patient_id).await?;
        self.patient_repository.delete(patient.id()).await?;

        log::info!("Patient {} deleted", patient.id());
        Ok(())
    }
}
