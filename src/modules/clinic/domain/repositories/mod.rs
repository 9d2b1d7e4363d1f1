pub mod clinic_repository;

pub use clinic_repository::ClinicRepository;
#[cfg(test)]
pub use clinic_repository::MockClinicRepository;
