use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::sample::{application::dto::SampleDto, domain::SampleRepository};
use crate::shared::{application::use_case::Query, errors::AppResult};

use super::require_sample;

#[derive(Debug, Clone)]
pub struct GetSampleQuery {
    pub sample_id: String,
}

impl GetSampleQuery {
    pub fn new(sample_id: impl Into<String>) -> Self {
        Self {
            sample_id: sample_id.into(),
        }
    }
}

pub struct GetSampleHandler {
    sample_repository: Arc<dyn SampleRepository>,
}

impl GetSampleHandler {
    pub fn new(sample_repository: Arc<dyn SampleRepository>) -> Self {
        Self { sample_repository }
    }
}

#[async_trait]
impl Query<GetSampleQuery, SampleDto> for GetSampleHandler {
    async fn execute(&self, query: GetSampleQuery) -> AppResult<SampleDto> {
        let sample = require_sample(self.sample_repository.as_ref(), &query.sample_id).await?;
        Ok(SampleDto::from(&sample))
    }
}
