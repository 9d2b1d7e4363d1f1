use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::sample::domain::SampleRepository;
use crate::shared::{application::use_case::UseCase, errors::AppResult};

use super::require_sample;

#[derive(Debug, Clone)]
pub struct DeleteSampleCommand {
    pub sample_id: String,
}

impl DeleteSampleCommand {
    pub fn new(sample_id: impl Into<String>) -> Self {
        Self {
            sample_id: sample_id.into(),
        }
    }
}

pub struct DeleteSampleHandler {
    sample_repository: Arc<dyn SampleRepository>,
}

impl DeleteSampleHandler {
    pub fn new(sample_repository: Arc<dyn SampleRepository>) -> Self {
        Self { sample_repository }
    }
}

#[async_trait]
impl UseCase<DeleteSampleCommand, ()> for DeleteSampleHandler {
    async fn execute(&self, command: DeleteSampleCommand) -> AppResult<()> {
        let sample = require_sample(self.sample_repository.as_ref(), &command.sample_id).await?;
        self.sample_repository.delete(sample.id()).await?;

        log::info!("Sample {} deleted", sample.id());
        Ok(())
    }
}
