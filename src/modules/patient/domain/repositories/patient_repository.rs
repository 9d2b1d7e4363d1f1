/// Repository port for patient persistence
use async_trait::async_trait;

use crate::modules::patient::domain::entities::Patient;
use crate::shared::{
    domain::{ClinicId, PatientId},
    errors::AppResult,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PatientRepository: Send + Sync {
    /// Insert a new patient
    async fn save(&self, patient: &Patient) -> AppResult<()>;

    /// Find patient by ID
    async fn find_by_id(&self, id: &PatientId) -> AppResult<Option<Patient>>;

    /// Patients registered at a clinic, in insertion order
    async fn find_by_clinic_id(&self, clinic_id: &ClinicId) -> AppResult<Vec<Patient>>;

    /// Replace an existing patient; `NotFound` if the id is unknown
    async fn update(&self, patient: &Patient) -> AppResult<()>;

    /// Remove a patient; `NotFound` if the id is unknown
    async fn delete(&self, id: &PatientId) -> AppResult<()>;
}
