/// Test helper functions and context builders
use super::factories::{ClinicFactory, PatientFactory, SampleFactory};
use clinicflow::modules::{
    clinic::ClinicDto, patient::PatientDto, sample::SampleDto,
};
use clinicflow::shared::application::UseCase;
use clinicflow::AppContext;

/// Fresh context over empty in-memory repositories
pub fn build_test_context() -> AppContext {
    AppContext::in_memory()
}

pub async fn seed_clinic(ctx: &AppContext) -> ClinicDto {
    ctx.clinics
        .create
        .execute(ClinicFactory::new().build())
        .await
        .expect("seed clinic")
}

pub async fn seed_patient(ctx: &AppContext, clinic_id: &str) -> PatientDto {
    ctx.patients
        .create
        .execute(PatientFactory::new(clinic_id).build())
        .await
        .expect("seed patient")
}

pub async fn seed_sample(ctx: &AppContext, patient: &PatientDto) -> SampleDto {
    ctx.samples
        .create
        .execute(SampleFactory::new(&patient.id, &patient.clinic_id).build())
        .await
        .expect("seed sample")
}

/// Clinic with one patient, the usual starting point for sample tests
pub async fn seed_clinic_with_patient(ctx: &AppContext) -> (ClinicDto, PatientDto) {
    let clinic = seed_clinic(ctx).await;
    let patient = seed_patient(ctx, &clinic.id).await;
    (clinic, patient)
}
