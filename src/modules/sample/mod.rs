/// Sample bounded context
///
/// Samples reference a patient and the clinic that patient belongs to, and
/// move through a small status machine (see `SampleStatus`).
pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{SampleDto, SampleStatusDto, SampleUseCases};
pub use domain::{CollectionDate, Sample, SampleRepository, SampleStatus, SampleType};
pub use infrastructure::InMemorySampleRepository;
