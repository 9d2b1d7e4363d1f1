pub mod timestamps;
pub mod value_objects;

pub use timestamps::next_timestamp;
pub use value_objects::{ClinicId, PatientId, PhoneNumber, SampleId};
