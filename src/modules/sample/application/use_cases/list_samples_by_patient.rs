use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::sample::{application::dto::SampleDto, domain::SampleRepository};
use crate::shared::{application::use_case::Query, domain::PatientId, errors::AppResult};

#[derive(Debug, Clone)]
pub struct ListSamplesByPatientQuery {
    pub patient_id: String,
}

impl ListSamplesByPatientQuery {
    pub fn new(patient_id: impl Into<String>) -> Self {
        Self {
            patient_id: patient_id.into(),
        }
    }
}

/// Samples of one patient in insertion order; unknown patients yield `[]`
pub struct ListSamplesByPatientHandler {
    sample_repository: Arc<dyn SampleRepository>,
}

impl ListSamplesByPatientHandler {
    pub fn new(sample_repository: Arc<dyn SampleRepository>) -> Self {
        Self { sample_repository }
    }
}

#[async_trait]
impl Query<ListSamplesByPatientQuery, Vec<SampleDto>> for ListSamplesByPatientHandler {
    async fn execute(&self, query: ListSamplesByPatientQuery) -> AppResult<Vec<SampleDto>> {
        let patient_id = PatientId::parse(&query.patient_id)?;
        let samples = self.sample_repository.find_by_patient_id(&patient_id).await?;

        log::debug!("Patient {} has {} samples", patient_id, samples.len());
        Ok(samples.iter().map(SampleDto::from).collect())
    }
}
