use serde::{Deserialize, Serialize};

/// result of a successful restore: whether a modified artifact was actually
/// removed, or the dataset was already in its original state.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RestoreOutcome {
    Removed,
    AlreadyOriginal,
}

impl RestoreOutcome {
    pub fn removed(&self) -> bool {
        matches!(self, RestoreOutcome::Removed)
    }

    /// combines the outcomes of restoring several datasets. the combined
    /// outcome is `Removed` if any of them removed an artifact.
    pub fn merge(self, other: RestoreOutcome) -> RestoreOutcome {
        if self.removed() || other.removed() {
            RestoreOutcome::Removed
        } else {
            RestoreOutcome::AlreadyOriginal
        }
    }
}
