use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::clinic::{
    application::dto::ClinicDto,
    domain::{Clinic, ClinicAddress, ClinicName, ClinicRepository},
};
use crate::shared::{
    application::use_case::UseCase, domain::PhoneNumber, errors::AppResult,
};

use super::command::CreateClinicCommand;

/// Use case handler for registering a new clinic
pub struct CreateClinicHandler {
    clinic_repository: Arc<dyn ClinicRepository>,
}

impl CreateClinicHandler {
    pub fn new(clinic_repository: Arc<dyn ClinicRepository>) -> Self {
        Self { clinic_repository }
    }
}

#[async_trait]
impl UseCase<CreateClinicCommand, ClinicDto> for CreateClinicHandler {
    async fn execute(&self, command: CreateClinicCommand) -> AppResult<ClinicDto> {
        let name = ClinicName::new(&command.name)?;
        let address = ClinicAddress::new(&command.address)?;
        let phone = PhoneNumber::new(&command.phone)?;

        let clinic = Clinic::new(name, address, phone);
        self.clinic_repository.save(&clinic).await?;

        log::info!("Clinic {} created ({})", clinic.id(), clinic.name());
        Ok(ClinicDto::from(&clinic))
    }
}
