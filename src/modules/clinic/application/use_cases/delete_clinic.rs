use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::clinic::domain::ClinicRepository;
use crate::shared::{application::use_case::UseCase, errors::AppResult};

use super::require_clinic;

#[derive(Debug, Clone)]
pub struct DeleteClinicCommand {
    pub clinic_id: String,
}

impl DeleteClinicCommand {
    pub fn new(clinic_id: impl Into<String>) -> Self {
        Self {
            clinic_id: clinic_id.into(),
        }
    }
}

pub struct DeleteClinicHandler {
    clinic_repository: Arc<dyn ClinicRepository>,
}

impl DeleteClinicHandler {
    pub fn new(clinic_repository: Arc<dyn ClinicRepository>) -> Self {
        Self { clinic_repository }
    }
}

#[async_trait]
impl UseCase<DeleteClinicCommand, ()> for DeleteClinicHandler {
    async fn execute(&self, command: DeleteClinicCommand) -> AppResult<()> {
        let clinic = require_clinic(self.clinic_repository.as_ref(), &command.clinic_id).await?;

        // The repository re-checks existence at delete time
        self.clinic_repository.delete(clinic.id()).await?;

        log::info!("Clinic {} deleted", clinic.id());
        Ok(())
    }
}
