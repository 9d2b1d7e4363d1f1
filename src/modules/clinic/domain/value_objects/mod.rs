//! Clinic-specific value objects

pub mod clinic_address;
pub mod clinic_name;

pub use clinic_address::ClinicAddress;
pub use clinic_name::ClinicName;
