pub mod entities;
pub mod repositories;
pub mod value_objects;

pub use entities::Sample;
pub use repositories::SampleRepository;
pub use value_objects::{CollectionDate, SampleStatus, SampleType};
