use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::clinic::domain::ClinicRepository;
use crate::modules::patient::domain::PatientRepository;
use crate::modules::sample::{
    application::dto::SampleDto,
    domain::{CollectionDate, Sample, SampleRepository, SampleType},
};
use crate::shared::{
    application::use_case::UseCase,
    domain::{ClinicId, PatientId},
    errors::{AppError, AppResult},
};

use super::command::CreateSampleCommand;

/// Use case handler for registering a sample
///
/// Checks run in order: patient exists, clinic exists, patient belongs to
/// that clinic. Each failure is a validation error and nothing is written.
pub struct CreateSampleHandler {
    sample_repository: Arc<dyn SampleRepository>,
    patient_repository: Arc<dyn PatientRepository>,
    clinic_repository: Arc<dyn ClinicRepository>,
}

impl CreateSampleHandler {
    pub fn new(
        sample_repository: Arc<dyn SampleRepository>,
        patient_repository: Arc<dyn PatientRepository>,
        clinic_repository: Arc<dyn ClinicRepository>,
    ) -> Self {
        Self {
            sample_repository,
            patient_repository,
            clinic_repository,
        }
    }
}

#[async_trait]
impl UseCase<CreateSampleCommand, SampleDto> for CreateSampleHandler {
    async fn execute(&self, command: CreateSampleCommand) -> AppResult<SampleDto> {
        let patient_id = PatientId::parse(&command.patient_id)?;
        let clinic_id = ClinicId::parse(&command.clinic_id)?;

        let Some(patient) = self.patient_repository.find_by_id(&patient_id).await? else {
            log::warn!("Rejected sample for unknown patient {}", patient_id);
            return Err(AppError::ValidationError(format!(
                "Patient with id {} not found",
                patient_id
            )));
        };

        if self.clinic_repository.find_by_id(&clinic_id).await?.is_none() {
            log::warn!("Rejected sample for unknown clinic {}", clinic_id);
            return Err(AppError::ValidationError(format!(
                "Clinic with id {} not found",
                clinic_id
            )));
        }

        if patient.clinic_id() != &clinic_id {
            log::warn!(
                "Patient {} belongs to clinic {}, not {}",
                patient_id,
                patient.clinic_id(),
                clinic_id
            );
            return Err(AppError::ValidationError(
                "Patient does not belong to the specified clinic".to_string(),
            ));
        }

        let sample_type = SampleType::new(&command.sample_type)?;
        let collection_date = CollectionDate::parse(&command.collection_date)?;

        let sample = Sample::new(patient_id, clinic_id, sample_type, collection_date);
        self.sample_repository.save(&sample).await?;

        log::info!(
            "Sample {} ({}) registered for patient {}",
            sample.id(),
            sample.sample_type(),
            sample.patient_id()
        );
        Ok(SampleDto::from(&sample))
    }
}
