pub mod clinic;
pub mod patient;
pub mod sample;
