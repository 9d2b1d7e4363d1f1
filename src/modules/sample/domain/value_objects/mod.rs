pub mod collection_date;
pub mod sample_status;
pub mod sample_type;

pub use collection_date::CollectionDate;
pub use sample_status::SampleStatus;
pub use sample_type::SampleType;
