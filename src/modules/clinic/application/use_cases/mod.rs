pub mod activate_clinic;
pub mod create_clinic;
pub mod deactivate_clinic;
pub mod delete_clinic;
pub mod get_clinic;
pub mod list_clinics;
pub mod update_clinic;

pub use activate_clinic::{ActivateClinicCommand, ActivateClinicHandler};
pub use create_clinic::{CreateClinicCommand, CreateClinicHandler};
pub use deactivate_clinic::{DeactivateClinicCommand, DeactivateClinicHandler};
pub use delete_clinic::{DeleteClinicCommand, DeleteClinicHandler};
pub use get_clinic::{GetClinicHandler, GetClinicQuery};
pub use list_clinics::{ListClinicsHandler, ListClinicsQuery};
pub use update_clinic::{UpdateClinicCommand, UpdateClinicHandler};

use crate::modules::clinic::domain::{Clinic, ClinicRepository};
use crate::shared::{
    domain::ClinicId,
    errors::{AppError, AppResult},
};

/// Load a clinic by raw id or fail with `NotFound`
pub(crate) async fn require_clinic(
    repository: &dyn ClinicRepository,
    raw_id: &str,
) -> AppResult<Clinic> {
    let clinic_id = ClinicId::parse(raw_id)?;
    let Some(clinic) = repository.find_by_id(&clinic_id).await? else {
        log::warn!("Clinic {} not found", clinic_id);
        return Err(AppError::NotFound(format!(
            "Clinic with id {} not found",
            clinic_id
        )));
    };
    Ok(clinic)
}
