//! Model artifact locations

use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::error::ValidationError;

/// Where the three pre-fitted artifacts live on disk.
///
/// All three are required; there are no defaults.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ArtifactsConfig {
    /// Scaler parameters (per-feature mean and scale)
    pub scaler_path: PathBuf,

    /// Classifier model
    pub classifier_path: PathBuf,

    /// Ordered category names
    pub label_map_path: PathBuf,
}

impl ArtifactsConfig {
    /// Points at `scaler.json`, `classifier.json` and `labels.json` inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            scaler_path: dir.join("scaler.json"),
            classifier_path: dir.join("classifier.json"),
            label_map_path: dir.join("labels.json"),
        }
    }

    /// Validate artifact configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.scaler_path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("ARTIFACTS__SCALER_PATH"));
        }
        if self.classifier_path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("ARTIFACTS__CLASSIFIER_PATH"));
        }
        if self.label_map_path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("ARTIFACTS__LABEL_MAP_PATH"));
        }
        Ok(())
    }
}
