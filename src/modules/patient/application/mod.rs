pub mod dto;
pub mod use_cases;

use std::sync::Arc;

use crate::modules::clinic::domain::ClinicRepository;
use crate::modules::patient::domain::PatientRepository;

pub use dto::{PatientDto, PatientStatusDto};
pub use use_cases::*;

/// Every patient use case; creation also needs the clinic repository
pub struct PatientUseCases {
    pub create: CreatePatientHandler,
    pub get: GetPatientHandler,
    pub list_by_clinic: ListPatientsByClinicHandler,
    pub update: UpdatePatientHandler,
    pub delete: DeletePatientHandler,
    pub activate: ActivatePatientHandler,
    pub deactivate: DeactivatePatientHandler,
}

impl PatientUseCases {
    pub fn new(
        patient_repository: Arc<dyn PatientRepository>,
        clinic_repository: Arc<dyn ClinicRepository>,
    ) -> Self {
        Self {
            create: CreatePatientHandler::new(Arc::clone(&patient_repository), clinic_repository),
            get: GetPatientHandler::new(Arc::clone(&patient_repository)),
            list_by_clinic: ListPatientsByClinicHandler::new(Arc::clone(&patient_repository)),
            update: UpdatePatientHandler::new(Arc::clone(&patient_repository)),
            delete: DeletePatientHandler::new(Arc::clone(&patient_repository)),
            activate: ActivatePatientHandler::new(Arc::clone(&patient_repository)),
            deactivate: DeactivatePatientHandler::new(patient_repository),
        }
    }
}
