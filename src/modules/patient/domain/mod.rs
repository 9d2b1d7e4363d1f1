pub mod entities;
pub mod repositories;
pub mod value_objects;

pub use entities::Patient;
pub use repositories::PatientRepository;
pub use value_objects::{DateOfBirth, Email, FirstName, LastName};
