pub mod logger;
pub mod validation;

pub use logger::{init_logger, TimedOperation};
pub use validation::Validator;
