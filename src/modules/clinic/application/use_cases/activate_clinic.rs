use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::clinic::{application::dto::ClinicStatusDto, domain::ClinicRepository};
use crate::shared::{application::use_case::UseCase, errors::AppResult};

use super::require_clinic;

#[derive(Debug, Clone)]
pub struct ActivateClinicCommand {
    pub clinic_id: String,
}

impl ActivateClinicCommand {
    pub fn new(clinic_id: impl Into<String>) -> Self {
        Self {
            clinic_id: clinic_id.into(),
        }
    }
}

pub struct ActivateClinicHandler {
    clinic_repository: Arc<dyn ClinicRepository>,
}

impl ActivateClinicHandler {
    pub fn new(clinic_repository: Arc<dyn ClinicRepository>) -> Self {
        Self { clinic_repository }
    }
}

#[async_trait]
impl UseCase<ActivateClinicCommand, ClinicStatusDto> for ActivateClinicHandler {
    async fn execute(&self, command: ActivateClinicCommand) -> AppResult<ClinicStatusDto> {
        let mut clinic =
            require_clinic(self.clinic_repository.as_ref(), &command.clinic_id).await?;

        clinic.activate()?;
        self.clinic_repository.update(&clinic).await?;

        log::info!("Clinic {} activated", clinic.id());
        Ok(ClinicStatusDto::from(&clinic))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::clinic::domain::{
        repositories::MockClinicRepository, Clinic, ClinicAddress, ClinicName,
    };
    use crate::shared::{domain::PhoneNumber, errors::ErrorKind};

    #[tokio::test]
    async fn test_active_clinic_conflicts_without_writing() {
        let clinic = Clinic::new(
            ClinicName::new("Central Clinic").unwrap(),
            ClinicAddress::new("Main Street 123").unwrap(),
            PhoneNumber::new("+34 912345678").unwrap(),
        );
        let clinic_id = clinic.id().to_string();

        let mut repo = MockClinicRepository::new();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(clinic.clone())));
        repo.expect_update().never();

        let handler = ActivateClinicHandler::new(Arc::new(repo));
        let err = handler
            .execute(ActivateClinicCommand::new(clinic_id))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Conflict);
        assert_eq!(err.message(), "Clinic is already active");
    }

    #[tokio::test]
    async fn test_unknown_clinic_is_not_found() {
        let mut repo = MockClinicRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        repo.expect_update().never();

        let handler = ActivateClinicHandler::new(Arc::new(repo));
        let err = handler
            .execute(ActivateClinicCommand::new("missing"))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.message(), "Clinic with id missing not found");
    }
}
