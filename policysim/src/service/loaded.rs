use super::Diagnostic;
use serde::{Deserialize, Serialize};

/// a read result that is always present, possibly empty, along with any
/// diagnostics raised while producing it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Loaded<T> {
    pub value: T,
    pub diagnostics: Vec<Diagnostic>,
}

impl<T> Loaded<T> {
    pub fn new(value: T) -> Loaded<T> {
        Loaded {
            value,
            diagnostics: vec![],
        }
    }

    pub fn with_diagnostic(mut self, diagnostic: Diagnostic) -> Loaded<T> {
        self.diagnostics.push(diagnostic);
        self
    }

    /// true when nothing was degraded or skipped.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}
