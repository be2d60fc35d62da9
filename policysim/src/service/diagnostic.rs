use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticLevel {
    Warning,
    Error,
}

/// a short, human-readable note about a degraded read, for display by the
/// host application.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub level: DiagnosticLevel,
    pub message: String,
}

impl Diagnostic {
    pub fn warning<S: Into<String>>(message: S) -> Diagnostic {
        Diagnostic {
            level: DiagnosticLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error<S: Into<String>>(message: S) -> Diagnostic {
        Diagnostic {
            level: DiagnosticLevel::Error,
            message: message.into(),
        }
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.level {
            DiagnosticLevel::Warning => write!(f, "warning: {}", self.message),
            DiagnosticLevel::Error => write!(f, "error: {}", self.message),
        }
    }
}
