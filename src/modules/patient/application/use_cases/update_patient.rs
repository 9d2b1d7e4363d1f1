use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;

use crate::modules::patient::{
    application::dto::PatientDto,
    domain::{Email, FirstName, LastName, PatientRepository},
};
use crate::shared::{
    application::use_case::UseCase, domain::PhoneNumber, errors::AppResult,
};

use super::require_patient;

/// Partial update of a patient's contact data.
/// Date of birth and clinic are fixed at registration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePatientCommand {
    #[serde(default)]
    pub patient_id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl UpdatePatientCommand {
    pub fn new(patient_id: impl Into<String>) -> Self {
        Self {
            patient_id: patient_id.into(),
            ..Self::default()
        }
    }

    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }
}

pub struct UpdatePatientHandler {
    patient_repository: Arc<dyn PatientRepository>,
}

impl UpdatePatientHandler {
    pub fn new(patient_repository: Arc<dyn PatientRepository>) -> Self {
        Self { patient_repository }
    }
}

#[async_trait]
impl UseCase<UpdatePatientCommand, PatientDto> for UpdatePatientHandler {
    async fn execute(&self, command: UpdatePatientCommand) -> AppResult<PatientDto> {
        let mut patient =
            require_patient(self.patient_repository.as_ref(), &command.patient_id).await?;

        let first_name = command
            .first_name
            .as_deref()
            .map(FirstName::new)
            .transpose()?;
        let last_name = command
            .last_name
            .as_deref()
            .map(LastName::new)
            .transpose()?;
        let email = command.email.as_deref().map(Email::new).transpose()?;
        let phone = command.phone.as_deref().map(PhoneNumber::new).transpose()?;

        patient.update(first_name, last_name, email, phone);
        self.patient_repository.update(&patient).await?;

        log::info!("Patient {} updated", patient.id());
        Ok(PatientDto::from(&patient))
    }
}
