use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;

use crate::modules::sample::{
    application::dto::SampleDto,
    domain::{SampleRepository, SampleType},
};
use crate::shared::{application::use_case::UseCase, errors::AppResult};

use super::require_sample;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeSampleTypeCommand {
    #[serde(default)]
    pub sample_id: String,
    pub sample_type: String,
}

impl ChangeSampleTypeCommand {
    pub fn new(sample_id: impl Into<String>, sample_type: impl Into<String>) -> Self {
        Self {
            sample_id: sample_id.into(),
            sample_type: sample_type.into(),
        }
    }
}

/// Relabels a sample. Allowed in any status, like notes.
pub struct ChangeSampleTypeHandler {
    sample_repository: Arc<dyn SampleRepository>,
}

impl ChangeSampleTypeHandler {
    pub fn new(sample_repository: Arc<dyn SampleRepository>) -> Self {
        Self { sample_repository }
    }
}

#[async_trait]
impl UseCase<ChangeSampleTypeCommand, SampleDto> for ChangeSampleTypeHandler {
    async fn execute(&self, command: ChangeSampleTypeCommand) -> AppResult<SampleDto> {
        let mut sample =
            require_sample(self.sample_repository.as_ref(), &command.sample_id).await?;
        let sample_type = SampleType::new(&command.sample_type)?;

        sample.change_sample_type(sample_type);
        self.sample_repository.update(&sample).await?;

        log::info!("Sample {} relabeled as {}", sample.id(), sample.sample_type());
        Ok(SampleDto::from(&sample))
    }
}
