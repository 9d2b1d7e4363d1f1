use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;

use crate::modules::sample::{application::dto::SampleDto, domain::SampleRepository};
use crate::shared::{application::use_case::UseCase, errors::AppResult};

use super::require_sample;

/// Replaces the notes of a sample in any status; an empty string clears them
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSampleNotesCommand {
    #[serde(default)]
    pub sample_id: String,
    pub notes: String,
}

impl UpdateSampleNotesCommand {
    pub fn new(sample_id: impl Into<String>, notes: impl Into<String>) -> Self {
        Self {
            sample_id: sample_id.into(),
            notes: notes.into(),
        }
    }
}

pub struct UpdateSampleNotesHandler {
    sample_repository: Arc<dyn SampleRepository>,
}

impl UpdateSampleNotesHandler {
    pub fn new(sample_repository: Arc<dyn SampleRepository>) -> Self {
        Self { sample_repository }
    }
}

#[async_trait]
impl UseCase<UpdateSampleNotesCommand, SampleDto> for UpdateSampleNotesHandler {
    async fn execute(&self, command: UpdateSampleNotesCommand) -> AppResult<SampleDto> {
        let mut sample =
            require_sample(self.sample_repository.as_ref(), &command.sample_id).await?;

        sample.update_notes(command.notes);
        self.sample_repository.update(&sample).await?;

        log::info!("Sample {} notes updated", sample.id());
        Ok(SampleDto::from(&sample))
    }
}
