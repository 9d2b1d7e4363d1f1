use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::sample::{application::dto::SampleStatusDto, domain::SampleRepository};
use crate::shared::{application::use_case::UseCase, errors::AppResult};

use super::require_sample;

#[derive(Debug, Clone)]
pub struct StartProcessingSampleCommand {
    pub sample_id: String,
}

impl StartProcessingSampleCommand {
    pub fn new(sample_id: impl Into<String>) -> Self {
        Self {
            sample_id: sample_id.into(),
        }
    }
}

pub struct StartProcessingSampleHandler {
    sample_repository: Arc<dyn SampleRepository>,
}

impl StartProcessingSampleHandler {
    pub fn new(sample_repository: Arc<dyn SampleRepository>) -> Self {
        Self { sample_repository }
    }
}

#[async_trait]
impl UseCase<StartProcessingSampleCommand, SampleStatusDto> for StartProcessingSampleHandler {
    async fn execute(&self, command: StartProcessingSampleCommand) -> AppResult<SampleStatusDto> {
        let mut sample =
            require_sample(self.sample_repository.as_ref(), &command.sample_id).await?;

        sample.start_processing()?;
        self.sample_repository.update(&sample).await?;

        log::info!("Sample {} moved to processing", sample.id());
        Ok(SampleStatusDto::from(&sample))
    }
}
