pub mod context;
pub mod modules;
pub mod shared;

pub use context::AppContext;
pub use shared::{AppConfig, AppError, AppResult, Environment, ErrorKind};
