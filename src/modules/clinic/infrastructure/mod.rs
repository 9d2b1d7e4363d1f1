pub mod persistence;

pub use persistence::InMemoryClinicRepository;
