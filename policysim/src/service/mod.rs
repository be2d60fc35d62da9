mod data_service;
mod diagnostic;
mod loaded;
mod restore_report;

pub use data_service::DataService;
pub use diagnostic::{Diagnostic, DiagnosticLevel};
pub use loaded::Loaded;
pub use restore_report::{RestoreReport, RestoreStatus, RestoreTarget};
