pub mod in_memory_clinic_repository;

pub use in_memory_clinic_repository::InMemoryClinicRepository;
