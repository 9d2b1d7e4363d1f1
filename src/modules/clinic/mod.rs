/// Clinic bounded context
///
/// - Domain: Clinic aggregate, its value objects and repository port
/// - Application: one handler per use case plus response projections
/// - Infrastructure: in-memory repository adapter
pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::{ClinicDto, ClinicStatusDto, ClinicUseCases};
pub use domain::{Clinic, ClinicAddress, ClinicName, ClinicRepository};
pub use infrastructure::InMemoryClinicRepository;
