pub mod clinic;

pub use clinic::Clinic;
