use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use serde::Serialize;

use clinicflow::modules::{
    clinic::application::{CreateClinicCommand, DeactivateClinicCommand, ListClinicsQuery},
    patient::application::CreatePatientCommand,
    sample::application::{
        CompleteSampleCommand, CreateSampleCommand, ListSamplesByPatientQuery,
        RejectSampleCommand, StartProcessingSampleCommand,
    },
};
use clinicflow::shared::{
    application::{Query, UseCase},
    utils::{init_logger, TimedOperation},
};
use clinicflow::{AppConfig, AppContext, AppResult};

fn print_json<T: Serialize>(label: &str, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .with_context(|| format!("failed to serialize {}", label))?;
    println!("== {}\n{}", label, json);
    Ok(())
}

/// Print either the projection or the error body a boundary would send back
fn report<T: Serialize>(label: &str, result: AppResult<T>, config: &AppConfig) -> Result<()> {
    match result {
        Ok(value) => print_json(label, &value),
        Err(err) => print_json(label, &err.to_response(config)),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::from_env().context("invalid configuration")?;
    init_logger(&config);

    let timer = TimedOperation::new("clinic walkthrough");
    let ctx = AppContext::in_memory();

    let clinic = ctx
        .clinics
        .create
        .execute(CreateClinicCommand::new(
            "Central Clinic",
            "Main Street 123",
            "+34 912345678",
        ))
        .await?;
    print_json("created clinic", &clinic)?;

    let deactivated = ctx
        .clinics
        .deactivate
        .execute(DeactivateClinicCommand::new(&clinic.id))
        .await;
    report("deactivate clinic", deactivated, &config)?;

    let again = ctx
        .clinics
        .deactivate
        .execute(DeactivateClinicCommand::new(&clinic.id))
        .await;
    report("deactivate clinic again", again, &config)?;

    let patient = ctx
        .patients
        .create
        .execute(CreatePatientCommand {
            first_name: "John".to_string(),
            last_name: "Smith".to_string(),
            email: "John.Smith@Example.com".to_string(),
            phone: "+34 987654321".to_string(),
            date_of_birth: "1990-01-15".to_string(),
            clinic_id: clinic.id.clone(),
        })
        .await?;
    print_json("registered patient", &patient)?;

    let sample = ctx
        .samples
        .create
        .execute(CreateSampleCommand {
            patient_id: patient.id.clone(),
            clinic_id: clinic.id.clone(),
            sample_type: "Blood".to_string(),
            collection_date: Utc::now().to_rfc3339(),
        })
        .await?;
    print_json("collected sample", &sample)?;

    let processing = ctx
        .samples
        .start_processing
        .execute(StartProcessingSampleCommand::new(&sample.id))
        .await?;
    print_json("processing", &processing)?;

    let completed = ctx
        .samples
        .complete
        .execute(CompleteSampleCommand::new(&sample.id))
        .await?;
    print_json("completed", &completed)?;

    let late_reject = ctx
        .samples
        .reject
        .execute(RejectSampleCommand::new(&sample.id, "Hemolyzed"))
        .await;
    report("reject completed sample", late_reject, &config)?;

    let future_sample = ctx
        .samples
        .create
        .execute(CreateSampleCommand {
            patient_id: patient.id.clone(),
            clinic_id: clinic.id.clone(),
            sample_type: "Urine".to_string(),
            collection_date: (Utc::now() + Duration::days(1)).to_rfc3339(),
        })
        .await;
    report("sample collected tomorrow", future_sample, &config)?;

    let samples = ctx
        .samples
        .list_by_patient
        .execute(ListSamplesByPatientQuery::new(&patient.id))
        .await?;
    print_json("samples of patient", &samples)?;

    let clinics = ctx.clinics.list.execute(ListClinicsQuery).await?;
    print_json("clinics", &clinics)?;

    timer.finish();
    Ok(())
}
