//! Composition root: wires repository adapters into every use case

use std::sync::Arc;

use crate::modules::{
    clinic::{ClinicRepository, ClinicUseCases, InMemoryClinicRepository},
    patient::{InMemoryPatientRepository, PatientRepository, PatientUseCases},
    sample::{InMemorySampleRepository, SampleRepository, SampleUseCases},
};

/// All use cases of the application, sharing one set of repositories
pub struct AppContext {
    pub clinics: ClinicUseCases,
    pub patients: PatientUseCases,
    pub samples: SampleUseCases,
}

impl AppContext {
    pub fn new(
        clinic_repository: Arc<dyn ClinicRepository>,
        patient_repository: Arc<dyn PatientRepository>,
        sample_repository: Arc<dyn SampleRepository>,
    ) -> Self {
        Self {
            clinics: ClinicUseCases::new(Arc::clone(&clinic_repository)),
            patients: PatientUseCases::new(
                Arc::clone(&patient_repository),
                Arc::clone(&clinic_repository),
            ),
            samples: SampleUseCases::new(sample_repository, patient_repository, clinic_repository),
        }
    }

    /// Fresh, empty in-memory stores. Each call gets its own state.
    pub fn in_memory() -> Self {
        log::debug!("Building application context over in-memory repositories");

        let clinic_repository: Arc<dyn ClinicRepository> =
            Arc::new(InMemoryClinicRepository::new());
        let patient_repository: Arc<dyn PatientRepository> =
            Arc::new(InMemoryPatientRepository::new());
        let sample_repository: Arc<dyn SampleRepository> =
            Arc::new(InMemorySampleRepository::new());

        Self::new(clinic_repository, patient_repository, sample_repository)
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::in_memory()
    }
}
