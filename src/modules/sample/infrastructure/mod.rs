pub mod persistence;

pub use persistence::InMemorySampleRepository;
