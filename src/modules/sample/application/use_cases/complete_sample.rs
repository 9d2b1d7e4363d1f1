use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::sample::{application::dto::SampleStatusDto, domain::SampleRepository};
use crate::shared::{application::use_case::UseCase, errors::AppResult};

use super::require_sample;

#[derive(Debug, Clone)]
pub struct CompleteSampleCommand {
    pub sample_id: String,
}

impl CompleteSampleCommand {
    pub fn new(sample_id: impl Into<String>) -> Self {
        Self {
            sample_id: sample_id.into(),
        }
    }
}

pub struct CompleteSampleHandler {
    sample_repository: Arc<dyn SampleRepository>,
}

impl CompleteSampleHandler {
    pub fn new(sample_repository: Arc<dyn SampleRepository>) -> Self {
        Self { sample_repository }
    }
}

#[async_trait]
impl UseCase<CompleteSampleCommand, SampleStatusDto> for CompleteSampleHandler {
    async fn execute(&self, command: CompleteSampleCommand) -> AppResult<SampleStatusDto> {
        let mut sample =
            require_sample(self.sample_repository.as_ref(), &command.sample_id).await?;

        sample.complete()?;
        self.sample_repository.update(&sample).await?;

        log::info!("Sample {} completed", sample.id());
        Ok(SampleStatusDto::from(&sample))
    }
}
