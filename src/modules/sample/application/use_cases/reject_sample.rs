use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;

use crate::modules::sample::{application::dto::SampleStatusDto, domain::SampleRepository};
use crate::shared::{
    application::use_case::UseCase,
    errors::{AppError, AppResult},
};

use super::require_sample;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectSampleCommand {
    #[serde(default)]
    pub sample_id: String,
    pub reason: String,
}

impl RejectSampleCommand {
    pub fn new(sample_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            sample_id: sample_id.into(),
            reason: reason.into(),
        }
    }
}

/// Rejects a pending or processing sample, recording the reason in its notes
pub struct RejectSampleHandler {
    sample_repository: Arc<dyn SampleRepository>,
}

impl RejectSampleHandler {
    pub fn new(sample_repository: Arc<dyn SampleRepository>) -> Self {
        Self { sample_repository }
    }
}

#[async_trait]
impl UseCase<RejectSampleCommand, SampleStatusDto> for RejectSampleHandler {
    async fn execute(&self, command: RejectSampleCommand) -> AppResult<SampleStatusDto> {
        if command.reason.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Reason field is required".to_string(),
            ));
        }

        let mut sample =
            require_sample(self.sample_repository.as_ref(), &command.sample_id).await?;

        sample.reject(&command.reason)?;
        self.sample_repository.update(&sample).await?;

        log::info!("Sample {} rejected: {}", sample.id(), command.reason);
        Ok(SampleStatusDto::from(&sample))
    }
}
