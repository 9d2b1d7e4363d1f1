pub mod dto;
pub mod use_cases;

use std::sync::Arc;

use crate::modules::clinic::domain::ClinicRepository;

pub use dto::{ClinicDto, ClinicStatusDto};
pub use use_cases::*;

/// Every clinic use case, wired to one repository
pub struct ClinicUseCases {
    pub create: CreateClinicHandler,
    pub get: GetClinicHandler,
    pub list: ListClinicsHandler,
    pub update: UpdateClinicHandler,
    pub delete: DeleteClinicHandler,
    pub activate: ActivateClinicHandler,
    pub deactivate: DeactivateClinicHandler,
}

impl ClinicUseCases {
    pub fn new(clinic_repository: Arc<dyn ClinicRepository>) -> Self {
        Self {
            create: CreateClinicHandler::new(Arc::clone(&clinic_repository)),
            get: GetClinicHandler::new(Arc::clone(&clinic_repository)),
            list: ListClinicsHandler::new(Arc::clone(&clinic_repository)),
            update: UpdateClinicHandler::new(Arc::clone(&clinic_repository)),
            delete: DeleteClinicHandler::new(Arc::clone(&clinic_repository)),
            activate: ActivateClinicHandler::new(Arc::clone(&clinic_repository)),
            deactivate: DeactivateClinicHandler::new(clinic_repository),
        }
    }
}
