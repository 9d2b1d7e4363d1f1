use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::clinic::domain::ClinicRepository;
use crate::modules::patient::{
    application::dto::PatientDto,
    domain::{DateOfBirth, Email, FirstName, LastName, Patient, PatientRepository},
};
use crate::shared::{
    application::use_case::UseCase,
    domain::{ClinicId, PhoneNumber},
    errors::{AppError, AppResult},
};

use super::command::CreatePatientCommand;

/// Use case handler for registering a patient
///
/// The referenced clinic must exist. A missing clinic is a bad request body,
/// so it fails as a validation error rather than `NotFound`.
pub struct CreatePatientHandler {
    patient_repository: Arc<dyn PatientRepository>,
    clinic_repository: Arc<dyn ClinicRepository>,
}

impl CreatePatientHandler {
    pub fn new(
        patient_repository: Arc<dyn PatientRepository>,
        clinic_repository: Arc<dyn ClinicRepository>,
    ) -> Self {
        Self {
            patient_repository,
            clinic_repository,
        }
    }
}

#[async_trait]
impl UseCase<CreatePatientCommand, PatientDto> for CreatePatientHandler {
    async fn execute(&self, command: CreatePatientCommand) -> AppResult<PatientDto> {
        let clinic_id = ClinicId::parse(&command.clinic_id)?;
        if self.clinic_repository.find_by_id(&clinic_id).await?.is_none() {
            log::warn!("Rejected patient for unknown clinic {}", clinic_id);
            return Err(AppError::ValidationError(format!(
                "Clinic with id {} not found",
                clinic_id
            )));
        }

        let first_name = FirstName::new(&command.first_name)?;
        let last_name = LastName::new(&command.last_name)?;
        let email = Email::new(&command.email)?;
        let phone = PhoneNumber::new(&command.phone)?;
        let date_of_birth = DateOfBirth::parse(&command.date_of_birth)?;

        let patient = Patient::new(first_name, last_name, email, phone, date_of_birth, clinic_id);
        self.patient_repository.save(&patient).await?;

        log::info!(
            "Patient {} registered at clinic {}",
            patient.id(),
            patient.clinic_id()
        );
        Ok(PatientDto::from(&patient))
    }
}
