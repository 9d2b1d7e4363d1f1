pub mod sample_repository;

pub use sample_repository::SampleRepository;
#[cfg(test)]
pub use sample_repository::MockSampleRepository;
