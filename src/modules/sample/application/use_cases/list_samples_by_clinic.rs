use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::sample::{application::dto::SampleDto, domain::SampleRepository};
use crate::shared::{application::use_case::Query, domain::ClinicId, errors::AppResult};

#[derive(Debug, Clone)]
pub struct ListSamplesByClinicQuery {
    pub clinic_id: String,
}

impl ListSamplesByClinicQuery {
    pub fn new(clinic_id: impl Into<String>) -> Self {
        Self {
            clinic_id: clinic_id.into(),
        }
    }
}

pub struct ListSamplesByClinicHandler {
    sample_repository: Arc<dyn SampleRepository>,
}

impl ListSamplesByClinicHandler {
    pub fn new(sample_repository: Arc<dyn SampleRepository>) -> Self {
        Self { sample_repository }
    }
}

#[async_trait]
impl Query<ListSamplesByClinicQuery, Vec<SampleDto>> for ListSamplesByClinicHandler {
    async fn execute(&self, query: ListSamplesByClinicQuery) -> AppResult<Vec<SampleDto>> {
        let clinic_id = ClinicId::parse(&query.clinic_id)?;
        let samples = self.sample_repository.find_by_clinic_id(&clinic_id).await?;

        log::debug!("Clinic {} has {} samples", clinic_id, samples.len());
        Ok(samples.iter().map(SampleDto::from).collect())
    }
}
