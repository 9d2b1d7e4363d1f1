//! Value objects shared across bounded contexts

pub mod identifiers;
pub mod phone_number;

pub use identifiers::{ClinicId, PatientId, SampleId};
pub use phone_number::PhoneNumber;
