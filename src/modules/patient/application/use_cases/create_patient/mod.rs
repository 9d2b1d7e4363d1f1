mod command;
mod handler;

pub use command::CreatePatientCommand;
pub use handler::CreatePatientHandler;
