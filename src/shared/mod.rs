// Shared kernel used by the clinic, patient and sample bounded contexts

pub mod application; // Use case traits
pub mod config; // Environment-driven configuration
pub mod domain; // Shared value objects and identifiers
pub mod errors; // Shared error types
pub mod infrastructure; // Shared in-memory storage
pub mod utils; // Logging and validation helpers

pub use config::{AppConfig, Environment};
pub use errors::{AppError, AppResult, ErrorKind};
