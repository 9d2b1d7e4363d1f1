/// Clinic use case tests - full context over in-memory repositories
///
/// Tests cover:
/// - Creation and input normalization
/// - Validation failures leave no clinic behind
/// - Activate / deactivate toggles
/// - Partial updates and deletion
mod utils;

use clinicflow::modules::clinic::application::{
    ActivateClinicCommand, DeactivateClinicCommand, DeleteClinicCommand, GetClinicQuery,
    ListClinicsQuery, UpdateClinicCommand,
};
use clinicflow::shared::application::{Query, UseCase};
use clinicflow::ErrorKind;
use utils::factories::ClinicFactory;
use utils::helpers::{build_test_context, seed_clinic};

#[tokio::test]
async fn central_clinic_deactivate_twice_conflicts() {
    let ctx = build_test_context();

    let clinic = seed_clinic(&ctx).await;
    assert!(clinic.is_active);
    assert_eq!(clinic.name, "Central Clinic");

    let status = ctx
        .clinics
        .deactivate
        .execute(DeactivateClinicCommand::new(&clinic.id))
        .await
        .unwrap();
    assert!(!status.is_active);

    let err = ctx
        .clinics
        .deactivate
        .execute(DeactivateClinicCommand::new(&clinic.id))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conflict);
    assert_eq!(err.message(), "Clinic is already inactive");

    let stored = ctx
        .clinics
        .get
        .execute(GetClinicQuery::new(&clinic.id))
        .await
        .unwrap();
    assert!(!stored.is_active);
}

#[tokio::test]
async fn activate_after_deactivate_flips_once() {
    let ctx = build_test_context();
    let clinic = seed_clinic(&ctx).await;

    let err = ctx
        .clinics
        .activate
        .execute(ActivateClinicCommand::new(&clinic.id))
        .await
        .unwrap_err();
    assert_eq!(err.message(), "Clinic is already active");

    ctx.clinics
        .deactivate
        .execute(DeactivateClinicCommand::new(&clinic.id))
        .await
        .unwrap();
    let status = ctx
        .clinics
        .activate
        .execute(ActivateClinicCommand::new(&clinic.id))
        .await
        .unwrap();

    assert!(status.is_active);
    assert!(status.updated_at > clinic.updated_at);
}

#[tokio::test]
async fn create_trims_name_and_address() {
    let ctx = build_test_context();

    let clinic = ctx
        .clinics
        .create
        .execute(
            ClinicFactory::new()
                .with_name("  North Clinic  ")
                .with_address(" Harbour Road 9 ")
                .build(),
        )
        .await
        .unwrap();

    assert_eq!(clinic.name, "North Clinic");
    assert_eq!(clinic.address, "Harbour Road 9");
    assert_eq!(clinic.phone, "+34 912345678");
}

#[tokio::test]
async fn invalid_input_creates_nothing() {
    let ctx = build_test_context();

    let cases = [
        (ClinicFactory::new().with_name(""), "Clinic name cannot be empty"),
        (
            ClinicFactory::new().with_name("A"),
            "Clinic name must be at least 2 characters long",
        ),
        (
            ClinicFactory::new().with_name(&"x".repeat(101)),
            "Clinic name cannot exceed 100 characters",
        ),
        (
            ClinicFactory::new().with_address("Road"),
            "Clinic address must be at least 5 characters long",
        ),
        (ClinicFactory::new().with_phone("call me"), "Invalid phone format"),
        (ClinicFactory::new().with_phone("12345"), "Invalid phone format"),
        (ClinicFactory::new().with_phone("١٢٣٤٥٦٧"), "Invalid phone format"),
        (ClinicFactory::new().with_phone("１２３４５６７"), "Invalid phone format"),
    ];

    for (factory, message) in cases {
        let err = ctx.clinics.create.execute(factory.build()).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.message(), message);
    }

    let clinics = ctx.clinics.list.execute(ListClinicsQuery).await.unwrap();
    assert!(clinics.is_empty());
}

#[tokio::test]
async fn list_keeps_insertion_order() {
    let ctx = build_test_context();
    for name in ["Zeta Clinic", "Alpha Clinic"] {
        ctx.clinics
            .create
            .execute(ClinicFactory::new().with_name(name).build())
            .await
            .unwrap();
    }

    let names: Vec<String> = ctx
        .clinics
        .list
        .execute(ListClinicsQuery)
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, ["Zeta Clinic", "Alpha Clinic"]);
}

#[tokio::test]
async fn update_with_omitted_fields_keeps_them() {
    let ctx = build_test_context();
    let clinic = seed_clinic(&ctx).await;

    let updated = ctx
        .clinics
        .update
        .execute(UpdateClinicCommand::new(&clinic.id).with_phone("+34 600000000"))
        .await
        .unwrap();
    assert_eq!(updated.name, clinic.name);
    assert_eq!(updated.address, clinic.address);
    assert_eq!(updated.phone, "+34 600000000");
    assert!(updated.updated_at > clinic.updated_at);

    let untouched = ctx
        .clinics
        .update
        .execute(UpdateClinicCommand::new(&clinic.id))
        .await
        .unwrap();
    assert_eq!(untouched.phone, "+34 600000000");
    assert!(untouched.updated_at > updated.updated_at);
}

#[tokio::test]
async fn update_with_empty_string_is_rejected() {
    let ctx = build_test_context();
    let clinic = seed_clinic(&ctx).await;

    let err = ctx
        .clinics
        .update
        .execute(UpdateClinicCommand::new(&clinic.id).with_name(""))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);

    let stored = ctx
        .clinics
        .get
        .execute(GetClinicQuery::new(&clinic.id))
        .await
        .unwrap();
    assert_eq!(stored, clinic);
}

#[tokio::test]
async fn missing_clinic_is_not_found_everywhere() {
    let ctx = build_test_context();
    let expected = "Clinic with id ghost not found";

    let err = ctx.clinics.get.execute(GetClinicQuery::new("ghost")).await.unwrap_err();
    assert_eq!((err.kind(), err.message()), (ErrorKind::NotFound, expected));

    let err = ctx
        .clinics
        .update
        .execute(UpdateClinicCommand::new("ghost").with_name("Other Clinic"))
        .await
        .unwrap_err();
    assert_eq!((err.kind(), err.message()), (ErrorKind::NotFound, expected));

    let err = ctx
        .clinics
        .delete
        .execute(DeleteClinicCommand::new("ghost"))
        .await
        .unwrap_err();
    assert_eq!((err.kind(), err.message()), (ErrorKind::NotFound, expected));

    let err = ctx
        .clinics
        .activate
        .execute(ActivateClinicCommand::new("ghost"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn blank_id_is_validation() {
    let ctx = build_test_context();

    let err = ctx.clinics.get.execute(GetClinicQuery::new("  ")).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(err.message(), "Clinic ID cannot be empty");
}

#[tokio::test]
async fn delete_removes_clinic() {
    let ctx = build_test_context();
    let clinic = seed_clinic(&ctx).await;

    ctx.clinics
        .delete
        .execute(DeleteClinicCommand::new(&clinic.id))
        .await
        .unwrap();

    let err = ctx
        .clinics
        .get
        .execute(GetClinicQuery::new(&clinic.id))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(ctx.clinics.list.execute(ListClinicsQuery).await.unwrap().is_empty());
}
