mod app_error;
mod startup_error;


pub use app_error::{AppError, AppResult};
pub use startup_error::StartupError;
