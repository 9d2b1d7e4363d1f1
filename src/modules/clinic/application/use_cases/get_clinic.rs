use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::clinic::{application::dto::ClinicDto, domain::ClinicRepository};
use crate::shared::{application::use_case::Query, errors::AppResult};

use super::require_clinic;

#[derive(Debug, Clone)]
pub struct GetClinicQuery {
    pub clinic_id: String,
}

impl GetClinicQuery {
    pub fn new(clinic_id: impl Into<String>) -> Self {
        Self {
            clinic_id: clinic_id.into(),
        }
    }
}

/// Query handler for a single clinic; a missing id is `NotFound`
pub struct GetClinicHandler {
    clinic_repository: Arc<dyn ClinicRepository>,
}

impl GetClinicHandler {
    pub fn new(clinic_repository: Arc<dyn ClinicRepository>) -> Self {
        Self { clinic_repository }
    }
}

#[async_trait]
impl Query<GetClinicQuery, ClinicDto> for GetClinicHandler {
    async fn execute(&self, query: GetClinicQuery) -> AppResult<ClinicDto> {
        let clinic = require_clinic(self.clinic_repository.as_ref(), &query.clinic_id).await?;
        Ok(ClinicDto::from(&clinic))
    }
}
