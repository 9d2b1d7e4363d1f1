use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;

use crate::modules::clinic::{
    application::dto::ClinicDto,
    domain::{ClinicAddress, ClinicName, ClinicRepository},
};
use crate::shared::{
    application::use_case::UseCase, domain::PhoneNumber, errors::AppResult,
};

use super::require_clinic;

/// Partial update: `None` keeps the current value. `Some("")` is validated
/// like any other input and therefore rejected; a field cannot be cleared.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClinicCommand {
    #[serde(default)]
    pub clinic_id: String,
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
}

impl UpdateClinicCommand {
    pub fn new(clinic_id: impl Into<String>) -> Self {
        Self {
            clinic_id: clinic_id.into(),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }
}

pub struct UpdateClinicHandler {
    clinic_repository: Arc<dyn ClinicRepository>,
}

impl UpdateClinicHandler {
    pub fn new(clinic_repository: Arc<dyn ClinicRepository>) -> Self {
        Self { clinic_repository }
    }
}

#[async_trait]
impl UseCase<UpdateClinicCommand, ClinicDto> for UpdateClinicHandler {
    async fn execute(&self, command: UpdateClinicCommand) -> AppResult<ClinicDto> {
        let mut clinic =
            require_clinic(self.clinic_repository.as_ref(), &command.clinic_id).await?;

        // Validate everything before touching the aggregate
        let name = command.name.as_deref().map(ClinicName::new).transpose()?;
        let address = command
            .address
            .as_deref()
            .map(ClinicAddress::new)
            .transpose()?;
        let phone = command.phone.as_deref().map(PhoneNumber::new).transpose()?;

        clinic.update(name, address, phone);
        self.clinic_repository.update(&clinic).await?;

        log::info!("Clinic {} updated", clinic.id());
        Ok(ClinicDto::from(&clinic))
    }
}
