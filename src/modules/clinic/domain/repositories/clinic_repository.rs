/// Repository port for clinic persistence
///
/// Storage-agnostic: the application layer depends only on this trait and
/// infrastructure provides the implementation.
use async_trait::async_trait;

use crate::modules::clinic::domain::entities::Clinic;
use crate::shared::{domain::ClinicId, errors::AppResult};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClinicRepository: Send + Sync {
    /// Insert a new clinic
    async fn save(&self, clinic: &Clinic) -> AppResult<()>;

    /// Find clinic by ID
    async fn find_by_id(&self, id: &ClinicId) -> AppResult<Option<Clinic>>;

    /// All clinics, in insertion order
    async fn find_all(&self) -> AppResult<Vec<Clinic>>;

    /// Replace an existing clinic; `NotFound` if the id is unknown (never an upsert)
    async fn update(&self, clinic: &Clinic) -> AppResult<()>;

    /// Remove a clinic; `NotFound` if the id is unknown
    async fn delete(&self, id: &ClinicId) -> AppResult<()>;
}
