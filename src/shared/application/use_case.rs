use crate::shared::errors::AppResult;
/// Base traits for all use cases following the CQRS split
///
/// Mutating operations implement [`UseCase`]; read-only lookups implement
/// [`Query`]. Both expose a single `execute` entry point so the boundary can
/// call every handler the same way.
///
/// # Example
///
/// ```ignore
/// struct ActivateClinicCommand {
///     clinic_id: String,
/// }
///
/// struct ActivateClinicHandler {
///     clinic_repository: Arc<dyn ClinicRepository>,
/// }
///
/// #[async_trait]
/// impl UseCase<ActivateClinicCommand, ClinicStatusDto> for ActivateClinicHandler {
///     async fn execute(&self, command: ActivateClinicCommand) -> AppResult<ClinicStatusDto> {
///         // load, invoke entity behavior, persist, project
///     }
/// }
/// ```
use async_trait::async_trait;

/// Base trait for use cases (command handlers)
#[async_trait]
pub trait UseCase<TCommand, TResult> {
    /// Execute the use case with the given command
    async fn execute(&self, command: TCommand) -> AppResult<TResult>;
}

/// Base trait for queries (query handlers)
#[async_trait]
pub trait Query<TQuery, TResult> {
    /// Execute the query
    async fn execute(&self, query: TQuery) -> AppResult<TResult>;
}
