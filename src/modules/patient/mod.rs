/// Patient bounded context
///
/// Patients belong to exactly one clinic, referenced by id.
pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{PatientDto, PatientStatusDto, PatientUseCases};
pub use domain::{DateOfBirth, Email, FirstName, LastName, Patient, PatientRepository};
pub use infrastructure::InMemoryPatientRepository;
