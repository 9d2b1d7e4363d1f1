//! Patient-specific value objects

pub mod date_of_birth;
pub mod email;
pub mod patient_name;

pub use date_of_birth::DateOfBirth;
pub use email::Email;
pub use patient_name::{FirstName, LastName};
