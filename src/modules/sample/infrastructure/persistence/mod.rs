pub mod in_memory_sample_repository;

pub use in_memory_sample_repository::InMemorySampleRepository;
