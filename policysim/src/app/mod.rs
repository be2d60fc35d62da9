mod app_error;
mod operation;
mod policysim_app;

pub use app_error::PolicySimAppError;
pub use operation::PolicySimOperation;
pub use policysim_app::PolicySimApp;
