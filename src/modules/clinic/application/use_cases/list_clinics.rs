use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::clinic::{application::dto::ClinicDto, domain::ClinicRepository};
use crate::shared::{application::use_case::Query, errors::AppResult};

#[derive(Debug, Clone, Default)]
pub struct ListClinicsQuery;

/// Lists every clinic in insertion order
pub struct ListClinicsHandler {
    clinic_repository: Arc<dyn ClinicRepository>,
}

impl ListClinicsHandler {
    pub fn new(clinic_repository: Arc<dyn ClinicRepository>) -> Self {
        Self { clinic_repository }
    }
}

#[async_trait]
impl Query<ListClinicsQuery, Vec<ClinicDto>> for ListClinicsHandler {
    async fn execute(&self, _query: ListClinicsQuery) -> AppResult<Vec<ClinicDto>> {
        let clinics = self.clinic_repository.find_all().await?;
        log::debug!("Listing {} clinics", clinics.len());
        Ok(clinics.iter().map(ClinicDto::from).collect())
    }
}
