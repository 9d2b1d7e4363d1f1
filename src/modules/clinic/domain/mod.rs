pub mod entities;
pub mod repositories;
pub mod value_objects;

// Re-exports for easy access
pub use entities::Clinic;
pub use repositories::ClinicRepository;
pub use value_objects::{ClinicAddress, ClinicName};
