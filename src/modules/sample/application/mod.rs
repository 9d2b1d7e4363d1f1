pub mod dto;
pub mod use_cases;

use std::sync::Arc;

use crate::modules::clinic::domain::ClinicRepository;
use crate::modules::patient::domain::PatientRepository;
use crate::modules::sample::domain::SampleRepository;

pub use dto::{SampleDto, SampleStatusDto};
pub use use_cases::*;

/// Every sample use case; creation cross-checks patients and clinics
pub struct SampleUseCases {
    pub create: CreateSampleHandler,
    pub get: GetSampleHandler,
    pub list: ListSamplesHandler,
    pub list_by_patient: ListSamplesByPatientHandler,
    pub list_by_clinic: ListSamplesByClinicHandler,
    pub update_notes: UpdateSampleNotesHandler,
    pub change_type: ChangeSampleTypeHandler,
    pub start_processing: StartProcessingSampleHandler,
    pub complete: CompleteSampleHandler,
    pub reject: RejectSampleHandler,
    pub delete: DeleteSampleHandler,
}

impl SampleUseCases {
    pub fn new(
        sample_repository: Arc<dyn SampleRepository>,
        patient_repository: Arc<dyn PatientRepository>,
        clinic_repository: Arc<dyn ClinicRepository>,
    ) -> Self {
        Self {
            create: CreateSampleHandler::new(
                Arc::clone(&sample_repository),
                patient_repository,
                clinic_repository,
            ),
            get: GetSampleHandler::new(Arc::clone(&sample_repository)),
            list: ListSamplesHandler::new(Arc::clone(&sample_repository)),
            list_by_patient: ListSamplesByPatientHandler::new(Arc::clone(&sample_repository)),
            list_by_clinic: ListSamplesByClinicHandler::new(Arc::clone(&sample_repository)),
            update_notes: UpdateSampleNotesHandler::new(Arc::clone(&sample_repository)),
            change_type: ChangeSampleTypeHandler::new(Arc::clone(&sample_repository)),
            start_processing: StartProcessingSampleHandler::new(Arc::clone(&sample_repository)),
            complete: CompleteSampleHandler::new(Arc::clone(&sample_repository)),
            reject: RejectSampleHandler::new(Arc::clone(&sample_repository)),
            delete: DeleteSampleHandler::new(sample_repository),
        }
    }
}
