use serde::{Deserialize, Serialize};

use super::DatasetKind;

/// filenames of the original and modified artifacts of one dataset,
/// relative to the data directory.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ArtifactFiles {
    pub original: String,
    pub modified: String,
}

impl ArtifactFiles {
    pub fn new(original: &str, modified: &str) -> ArtifactFiles {
        ArtifactFiles {
            original: original.to_string(),
            modified: modified.to_string(),
        }
    }

    /// the storage layout used by the dashboard under `data/`.
    pub fn default_for(dataset: DatasetKind) -> ArtifactFiles {
        match dataset {
            DatasetKind::Policy => ArtifactFiles::new("policy_db.csv", "policy_db_modified.csv"),
            DatasetKind::Coefficients => {
                ArtifactFiles::new("coefficients.csv", "coefficients_modified.csv")
            }
        }
    }
}
