use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::clinic::{application::dto::ClinicStatusDto, domain::ClinicRepository};
use crate::shared::{application::use_case::UseCase, errors::AppResult};

use super::require_clinic;

#[derive(Debug, Clone)]
pub struct DeactivateClinicCommand {
    pub clinic_id: String,
}

impl DeactivateClinicCommand {
    pub fn new(clinic_id: impl Into<String>) -> Self {
        Self {
            clinic_id: clinic_id.into(),
        }
    }
}

pub struct DeactivateClinicHandler {
    clinic_repository: Arc<dyn ClinicRepository>,
}

impl DeactivateClinicHandler {
    pub fn new(clinic_repository: Arc<dyn ClinicRepository>) -> Self {
        Self { clinic_repository }
    }
}

#[async_trait]
impl UseCase<DeactivateClinicCommand, ClinicStatusDto> for DeactivateClinicHandler {
    async fn execute(&self, command: DeactivateClinicCommand) -> AppResult<ClinicStatusDto> {
        let mut clinic =
            require_clinic(self.clinic_repository.as_ref(), &command.clinic_id).await?;

        clinic.deactivate()?;
        self.clinic_repository.update(&clinic).await?;

        log::info!("Clinic {} deactivated", clinic.id());
        Ok(ClinicStatusDto::from(&clinic))
    }
}
