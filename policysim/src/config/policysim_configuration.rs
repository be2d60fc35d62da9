use crate::{
    coefficient::{AccessibilityFallbackPolicy, CoefficientStructurer},
    service::DataService,
    store::{ArtifactFiles, DatasetKind, FileOverlayStore, StoreError},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// defines where datasets live and how coefficients are structured.
/// every field has a default, so a configuration file only needs to name
/// the values it changes.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct PolicySimConfiguration {
    pub data_directory: PathBuf,
    pub policy_files: ArtifactFiles,
    pub coefficients_files: ArtifactFiles,
    pub baseline_model_type: String,
    pub default_s_max: f64,
    pub accessibility_fallback: AccessibilityFallbackPolicy,
}

impl Default for PolicySimConfiguration {
    fn default() -> Self {
        Self {
            data_directory: PathBuf::from("data"),
            policy_files: ArtifactFiles::default_for(DatasetKind::Policy),
            coefficients_files: ArtifactFiles::default_for(DatasetKind::Coefficients),
            baseline_model_type: String::from(CoefficientStructurer::BASELINE_MODEL_TYPE),
            default_s_max: CoefficientStructurer::DEFAULT_S_MAX,
            accessibility_fallback: AccessibilityFallbackPolicy::default(),
        }
    }
}

impl PolicySimConfiguration {
    /// opens the file-backed store, creating the data directory if needed.
    pub fn build_store(&self) -> Result<FileOverlayStore, StoreError> {
        FileOverlayStore::new(
            &self.data_directory,
            self.policy_files.clone(),
            self.coefficients_files.clone(),
        )
    }

    pub fn build_structurer(&self) -> CoefficientStructurer {
        CoefficientStructurer::new(
            &self.baseline_model_type,
            self.default_s_max,
            self.accessibility_fallback,
        )
    }

    pub fn build_service(&self) -> Result<DataService<FileOverlayStore>, StoreError> {
        Ok(DataService::new(self.build_store()?, self.build_structurer()))
    }
}

impl TryFrom<&Path> for PolicySimConfiguration {
    type Error = StoreError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let f = path.to_string_lossy();
        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
        match extension {
            "toml" => {
                let s = std::fs::read_to_string(path).map_err(|e| {
                    StoreError::ConfigurationError(format!("failure reading {f}: {e}"))
                })?;
                toml::from_str(&s).map_err(|e| {
                    StoreError::ConfigurationError(format!("failure decoding {f}: {e}"))
                })
            }
            "json" => {
                let s = std::fs::read_to_string(path).map_err(|e| {
                    StoreError::ConfigurationError(format!("failure reading {f}: {e}"))
                })?;
                serde_json::from_str(&s).map_err(|e| {
                    StoreError::ConfigurationError(format!("failure decoding {f}: {e}"))
                })
            }
            _ => Err(StoreError::ConfigurationError(format!(
                "unsupported file type: {f}"
            ))),
        }
    }
}
