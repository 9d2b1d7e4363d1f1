pub mod change_sample_type;
pub mod complete_sample;
pub mod create_sample;
pub mod delete_sample;
pub mod get_sample;
pub mod list_samples;
pub mod list_samples_by_clinic;
pub mod list_samples_by_patient;
pub mod reject_sample;
pub mod start_processing_sample;
pub mod update_sample_notes;

pub use change_sample_type::{ChangeSampleTypeCommand, ChangeSampleTypeHandler};
pub use complete_sample::{CompleteSampleCommand, CompleteSampleHandler};
pub use create_sample::{CreateSampleCommand, CreateSampleHandler};
pub use delete_sample::{DeleteSampleCommand, DeleteSampleHandler};
pub use get_sample::{GetSampleHandler, GetSampleQuery};
pub use list_samples::{ListSamplesHandler, ListSamplesQuery};
pub use list_samples_by_clinic::{ListSamplesByClinicHandler, ListSamplesByClinicQuery};
pub use list_samples_by_patient::{ListSamplesByPatientHandler, ListSamplesByPatientQuery};
pub use reject_sample::{RejectSampleCommand, RejectSampleHandler};
pub use start_processing_sample::{StartProcessingSampleCommand, StartProcessingSampleHandler};
pub use update_sample_notes::{UpdateSampleNotesCommand, UpdateSampleNotesHandler};

use crate::modules::sample::domain::{Sample, SampleRepository};
use crate::shared::{
    domain::SampleId,
    errors::{AppError, AppResult},
};

/// Load a sample by raw id or fail with `NotFound`
pub(crate) async fn require_sample(
    repository: &dyn SampleRepository,
    raw_id: &str,
) -> AppResult<Sample> {
    let sample_id = SampleId::parse(raw_id)?;
    let Some(sample) = repository.find_by_id(&sample_id).await? else {
        log::warn!("Sample {} not found", sample_id);
        return Err(AppError::NotFound(format!(
            "Sample with id {} not found",
            sample_id
        )));
    };
    Ok(sample)
}
