mod command;
mod handler;

pub use command::CreateSampleCommand;
pub use handler::CreateSampleHandler;
