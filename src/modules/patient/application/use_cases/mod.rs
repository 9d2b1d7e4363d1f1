pub mod activate_patient;
pub mod create_patient;
pub mod deactivate_patient;
pub mod delete_patient;
pub mod get_patient;
pub mod list_patients_by_clinic;
pub mod update_patient;

pub use activate_patient::{ActivatePatientCommand, ActivatePatientHandler};
pub use create_patient::{CreatePatientCommand, CreatePatientHandler};
pub use deactivate_patient::{DeactivatePatientCommand, DeactivatePatientHandler};
pub use delete_patient::{DeletePatientCommand, DeletePatientHandler};
pub use get_patient::{GetPatientHandler, GetPatientQuery};
pub use list_patients_by_clinic::{ListPatientsByClinicHandler, ListPatientsByClinicQuery};
pub use update_patient::{UpdatePatientCommand, UpdatePatientHandler};

use crate::modules::patient::domain::{Patient, PatientRepository};
use crate::shared::{
    domain::PatientId,
    errors::{AppError, AppResult},
};

/// Load a patient by raw id or fail with `NotFound`
pub(crate) async fn require_patient(
    repository: &dyn PatientRepository,
    raw_id: &str,
) -> AppResult<Patient> {
    let patient_id = PatientId::parse(raw_id)?;
    repository.find_by_id(&patient_id).await?.ok_or_else(|| {
        log::warn!("Patient {} not found", patient_id);
        AppError::NotFound(format!("Patient with id {} not found", patient_id))
    })
}
