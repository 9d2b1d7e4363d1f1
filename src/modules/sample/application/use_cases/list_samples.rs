use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::sample::{application::dto::SampleDto, domain::SampleRepository};
use crate::shared::{application::use_case::Query, errors::AppResult};

#[derive(Debug, Clone, Default)]
pub struct ListSamplesQuery;

/// Every sample across clinics, in insertion order
pub struct ListSamplesHandler {
    sample_repository: Arc<dyn SampleRepository>,
}

impl ListSamplesHandler {
    pub fn new(sample_repository: Arc<dyn SampleRepository>) -> Self {
        Self { sample_repository }
    }
}

#[async_trait]
impl Query<ListSamplesQuery, Vec<SampleDto>> for ListSamplesHandler {
    async fn execute(&self, _query: ListSamplesQuery) -> AppResult<Vec<SampleDto>> {
        let samples = self.sample_repository.find_all().await?;
        log::debug!("Listing {} samples", samples.len());
        Ok(samples.iter().map(SampleDto::from).collect())
    }
}
