/// Sample use case tests - full context over in-memory repositories
///
/// Tests cover:
/// - Cross-aggregate checks on creation
/// - Status state machine
/// - Notes and sample type changes
mod utils;

use clinicflow::modules::sample::{
    application::{
        ChangeSampleTypeCommand, CompleteSampleCommand, DeleteSampleCommand, GetSampleQuery,
        ListSamplesByClinicQuery, ListSamplesQuery, ListSamplesByPatientQuery, RejectSampleCommand,
        StartProcessingSampleCommand, UpdateSampleNotesCommand,
    },
    SampleStatus,
};
use clinicflow::shared::application::{Query, UseCase};
use clinicflow::ErrorKind;
use utils::factories::{ClinicFactory, PatientFactory, SampleFactory};
use utils::helpers::{build_test_context, seed_clinic_with_patient, seed_sample};

#[tokio::test]
async fn new_sample_is_pending_with_empty_notes() {
    let ctx = build_test_context();
    let (clinic, patient) = seed_clinic_with_patient(&ctx).await;

    let sample = seed_sample(&ctx, &patient).await;

    assert_eq!(sample.status, SampleStatus::Pending);
    assert_eq!(sample.notes, "");
    assert_eq!(sample.patient_id, patient.id);
    assert_eq!(sample.clinic_id, clinic.id);
}

#[tokio::test]
async fn future_collection_date_is_not_persisted() {
    let ctx = build_test_context();
    let (_, patient) = seed_clinic_with_patient(&ctx).await;

    let err = ctx
        .samples
        .create
        .execute(
            SampleFactory::new(&patient.id, &patient.clinic_id)
                .collected_tomorrow()
                .build(),
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(err.message(), "Collection date cannot be in the future");

    let samples = ctx
        .samples
        .list_by_patient
        .execute(ListSamplesByPatientQuery::new(&patient.id))
        .await
        .unwrap();
    assert!(samples.is_empty());
}

#[tokio::test]
async fn date_only_collection_date_is_accepted() {
    let ctx = build_test_context();
    let (_, patient) = seed_clinic_with_patient(&ctx).await;

    let sample = ctx
        .samples
        .create
        .execute(
            SampleFactory::new(&patient.id, &patient.clinic_id)
                .with_collection_date("2024-03-01")
                .build(),
        )
        .await
        .unwrap();

    assert_eq!(sample.collection_date.to_rfc3339(), "2024-03-01T00:00:00+00:00");
}

#[tokio::test]
async fn cross_aggregate_checks() {
    let ctx = build_test_context();
    let (clinic, patient) = seed_clinic_with_patient(&ctx).await;
    let other = ctx
        .clinics
        .create
        .execute(ClinicFactory::new().with_name("North Clinic").build())
        .await
        .unwrap();

    let err = ctx
        .samples
        .create
        .execute(SampleFactory::new("ghost", &clinic.id).build())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(err.message(), "Patient with id ghost not found");

    let err = ctx
        .samples
        .create
        .execute(SampleFactory::new(&patient.id, "ghost").build())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(err.message(), "Clinic with id ghost not found");

    let err = ctx
        .samples
        .create
        .execute(SampleFactory::new(&patient.id, &other.id).build())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(err.message(), "Patient does not belong to the specified clinic");

    let err = ctx
        .samples
        .create
        .execute(
            SampleFactory::new(&patient.id, &clinic.id)
                .with_sample_type("  ")
                .build(),
        )
        .await
        .unwrap_err();
    assert_eq!(err.message(), "Sample type cannot be empty");

    let by_clinic = ctx
        .samples
        .list_by_clinic
        .execute(ListSamplesByClinicQuery::new(&clinic.id))
        .await
        .unwrap();
    assert!(by_clinic.is_empty());
}

#[tokio::test]
async fn full_lifecycle_then_terminal() {
    let ctx = build_test_context();
    let (_, patient) = seed_clinic_with_patient(&ctx).await;
    let sample = seed_sample(&ctx, &patient).await;

    let err = ctx
        .samples
        .complete
        .execute(CompleteSampleCommand::new(&sample.id))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conflict);
    assert_eq!(err.message(), "Only processing samples can be completed");

    let processing = ctx
        .samples
        .start_processing
        .execute(StartProcessingSampleCommand::new(&sample.id))
        .await
        .unwrap();
    assert_eq!(processing.status, SampleStatus::Processing);

    let completed = ctx
        .samples
        .complete
        .execute(CompleteSampleCommand::new(&sample.id))
        .await
        .unwrap();
    assert_eq!(completed.status, SampleStatus::Completed);

    let err = ctx
        .samples
        .start_processing
        .execute(StartProcessingSampleCommand::new(&sample.id))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conflict);
    assert_eq!(err.message(), "Only pending samples can start processing");

    let err = ctx
        .samples
        .reject
        .execute(RejectSampleCommand::new(&sample.id, "Too late"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conflict);
    assert_eq!(
        err.message(),
        "Cannot reject a completed or already rejected sample"
    );

    let stored = ctx
        .samples
        .get
        .execute(GetSampleQuery::new(&sample.id))
        .await
        .unwrap();
    assert_eq!(stored.status, SampleStatus::Completed);
}

#[tokio::test]
async fn reject_replaces_notes() {
    let ctx = build_test_context();
    let (_, patient) = seed_clinic_with_patient(&ctx).await;
    let sample = seed_sample(&ctx, &patient).await;

    let noted = ctx
        .samples
        .update_notes
        .execute(UpdateSampleNotesCommand::new(&sample.id, "Patient was fasting"))
        .await
        .unwrap();
    assert_eq!(noted.notes, "Patient was fasting");

    let rejected = ctx
        .samples
        .reject
        .execute(RejectSampleCommand::new(&sample.id, "Hemolyzed"))
        .await
        .unwrap();
    assert_eq!(rejected.status, SampleStatus::Rejected);
    assert_eq!(rejected.notes, "Rejected: Hemolyzed");

    let err = ctx
        .samples
        .start_processing
        .execute(StartProcessingSampleCommand::new(&sample.id))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conflict);
}

#[tokio::test]
async fn change_sample_type_and_list_by_patient() {
    let ctx = build_test_context();
    let (_, patient) = seed_clinic_with_patient(&ctx).await;
    let first = seed_sample(&ctx, &patient).await;
    let second = ctx
        .samples
        .create
        .execute(
            SampleFactory::new(&patient.id, &patient.clinic_id)
                .with_sample_type("Urine")
                .build(),
        )
        .await
        .unwrap();

    let relabeled = ctx
        .samples
        .change_type
        .execute(ChangeSampleTypeCommand::new(&first.id, " Plasma "))
        .await
        .unwrap();
    assert_eq!(relabeled.sample_type, " Plasma ");
    assert!(relabeled.updated_at > first.updated_at);

    let types: Vec<String> = ctx
        .samples
        .list_by_patient
        .execute(ListSamplesByPatientQuery::new(&patient.id))
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.sample_type)
        .collect();
    assert_eq!(types, [" Plasma ", "Urine"]);
    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn samples_from_other_clinics_are_not_listed() {
    let ctx = build_test_context();
    let (central, john) = seed_clinic_with_patient(&ctx).await;
    let north = ctx
        .clinics
        .create
        .execute(ClinicFactory::new().with_name("North Clinic").build())
        .await
        .unwrap();
    let jane = ctx
        .patients
        .create
        .execute(PatientFactory::new(&north.id).with_name("Jane", "Doe").build())
        .await
        .unwrap();

    let johns = seed_sample(&ctx, &john).await;
    seed_sample(&ctx, &jane).await;

    let ids: Vec<String> = ctx
        .samples
        .list_by_clinic
        .execute(ListSamplesByClinicQuery::new(&central.id))
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.id)
        .collect();
    assert_eq!(ids, [johns.id]);
}

#[tokio::test]
async fn missing_sample_is_not_found() {
    let ctx = build_test_context();
    let expected = "Sample with id ghost not found";

    let err = ctx.samples.get.execute(GetSampleQuery::new("ghost")).await.unwrap_err();
    assert_eq!((err.kind(), err.message()), (ErrorKind::NotFound, expected));

    let err = ctx
        .samples
        .update_notes
        .execute(UpdateSampleNotesCommand::new("ghost", "x"))
        .await
        .unwrap_err();
    assert_eq!((err.kind(), err.message()), (ErrorKind::NotFound, expected));

    let err = ctx
        .samples
        .delete
        .execute(DeleteSampleCommand::new("ghost"))
        .await
        .unwrap_err();
    assert_eq!((err.kind(), err.message()), (ErrorKind::NotFound, expected));
}

#[tokio::test]
async fn delete_sample() {
    let ctx = build_test_context();
    let (_, patient) = seed_clinic_with_patient(&ctx).await;
    let sample = seed_sample(&ctx, &patient).await;

    ctx.samples
        .delete
        .execute(DeleteSampleCommand::new(&sample.id))
        .await
        .unwrap();

    let remaining = ctx
        .samples
        .list_by_patient
        .execute(ListSamplesByPatientQuery::new(&patient.id))
        .await
        .unwrap();
    assert!(remaining.is_empty());
}

#[tokio::test]
async fn list_returns_samples_of_every_clinic() {
    let ctx = build_test_context();
    let (_, john) = seed_clinic_with_patient(&ctx).await;
    let north = ctx
        .clinics
        .create
        .execute(ClinicFactory::new().with_name("North Clinic").build())
        .await
        .unwrap();
    let jane = ctx
        .patients
        .create
        .execute(PatientFactory::new(&north.id).with_name("Jane", "Doe").build())
        .await
        .unwrap();

    let first = seed_sample(&ctx, &john).await;
    let second = seed_sample(&ctx, &jane).await;

    let ids: Vec<String> = ctx
        .samples
        .list
        .execute(ListSamplesQuery)
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.id)
        .collect();
    assert_eq!(ids, [first.id, second.id]);
}
