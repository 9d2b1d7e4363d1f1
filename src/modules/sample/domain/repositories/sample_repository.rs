/// Repository port for sample persistence
use async_trait::async_trait;

use crate::modules::sample::domain::entities::Sample;
use crate::shared::{
    domain::{ClinicId, PatientId, SampleId},
    errors::AppResult,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SampleRepository: Send + Sync {
    /// Insert a new sample
    async fn save(&self, sample: &Sample) -> AppResult<()>;

    async fn find_by_id(&self, id: &SampleId) -> AppResult<Option<Sample>>;

    /// Samples taken from a patient, in insertion order
    async fn find_by_patient_id(&self, patient_id: &PatientId) -> AppResult<Vec<Sample>>;

    /// Samples collected at a clinic, in insertion order
    async fn find_by_clinic_id(&self, clinic_id: &ClinicId) -> AppResult<Vec<Sample>>;

    async fn find_all(&self) -> AppResult<Vec<Sample>>;

    /// Replace an existing sample; `NotFound` if the id is unknown
    async fn update(&self, sample: &Sample) -> AppResult<()>;

    /// Remove a sample; `NotFound` if the id is unknown
    async fn delete(&self, id: &SampleId) -> AppResult<()>;
}
