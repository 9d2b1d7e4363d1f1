mod command;
mod handler;

pub use command::CreateClinicCommand;
pub use handler::CreateClinicHandler;
