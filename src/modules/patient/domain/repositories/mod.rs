pub mod patient_repository;

pub use patient_repository::PatientRepository;
#[cfg(test)]
pub use patient_repository::MockPatientRepository;
