//! Artifact loader - reads the pre-fitted artifacts from disk at startup.
//!
//! Files are JSON or YAML, selected by extension (`.json`, `.yaml`, `.yml`).

use serde::de::DeserializeOwned;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;

use crate::adapters::model::ClassifierArtifact;
use crate::application::{ArtifactMismatch, ModelArtifacts};
use crate::config::ArtifactsConfig;
use crate::domain::inference::{LabelMap, ScalerParams};
use crate::ports::Classifier;

/// Which of the three artifacts an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Scaler,
    Classifier,
    LabelMap,
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ArtifactKind::Scaler => "scaler",
            ArtifactKind::Classifier => "classifier",
            ArtifactKind::LabelMap => "label map",
        };
        write!(f, "{}", s)
    }
}

/// An artifact could not be loaded. The process must not serve requests.
#[derive(Debug, Error)]
pub enum FatalLoadError {
    #[error("{artifact} artifact not found at {}", .path.display())]
    Missing { artifact: ArtifactKind, path: PathBuf },

    #[error("{artifact} artifact at {} could not be read: {source}", .path.display())]
    Io {
        artifact: ArtifactKind,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{artifact} artifact at {} has unsupported format (expected .json, .yaml or .yml)", .path.display())]
    UnsupportedFormat { artifact: ArtifactKind, path: PathBuf },

    #[error("{artifact} artifact at {} is corrupt: {reason}", .path.display())]
    Corrupt {
        artifact: ArtifactKind,
        path: PathBuf,
        reason: String,
    },

    #[error("Artifacts are incompatible: {0}")]
    Incompatible(#[from] ArtifactMismatch),
}

impl FatalLoadError {
    /// The artifact at fault, if the error concerns a single one.
    pub fn artifact(&self) -> Option<ArtifactKind> {
        match self {
            FatalLoadError::Missing { artifact, .. }
            | FatalLoadError::Io { artifact, .. }
            | FatalLoadError::UnsupportedFormat { artifact, .. }
            | FatalLoadError::Corrupt { artifact, .. } => Some(*artifact),
            FatalLoadError::Incompatible(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Yaml,
}

impl Format {
    fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "json" => Some(Format::Json),
            "yaml" | "yml" => Some(Format::Yaml),
            _ => None,
        }
    }
}

/// Loads and cross-checks the three artifacts.
pub struct ArtifactLoader;

impl ArtifactLoader {
    /// Loads every artifact named in `config` and verifies they fit together.
    ///
    /// # Errors
    ///
    /// Returns [`FatalLoadError`] for the first artifact that is missing,
    /// unreadable, corrupt, or inconsistent with the others.
    pub async fn load(config: &ArtifactsConfig) -> Result<ModelArtifacts, FatalLoadError> {
        let scaler: ScalerParams = read_artifact(ArtifactKind::Scaler, &config.scaler_path).await?;
        tracing::info!(
            path = %config.scaler_path.display(),
            features = scaler.feature_count(),
            "Loaded scaler parameters"
        );

        let classifier: ClassifierArtifact =
            read_artifact(ArtifactKind::Classifier, &config.classifier_path).await?;
        tracing::info!(
            path = %config.classifier_path.display(),
            kind = classifier.kind(),
            features = classifier.feature_count(),
            classes = classifier.class_count(),
            "Loaded classifier"
        );

        let labels: LabelMap = read_artifact(ArtifactKind::LabelMap, &config.label_map_path).await?;
        tracing::info!(
            path = %config.label_map_path.display(),
            classes = labels.len(),
            "Loaded label map"
        );

        let artifacts = ModelArtifacts::new(scaler, Box::new(classifier), labels)?;
        Ok(artifacts)
    }
}

async fn read_artifact<T: DeserializeOwned>(
    artifact: ArtifactKind,
    path: &Path,
) -> Result<T, FatalLoadError> {
    let format = Format::from_path(path).ok_or_else(|| FatalLoadError::UnsupportedFormat {
        artifact,
        path: path.to_path_buf(),
    })?;

    let text = fs::read_to_string(path).await.map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => FatalLoadError::Missing {
            artifact,
            path: path.to_path_buf(),
        },
        _ => FatalLoadError::Io {
            artifact,
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let parsed = match format {
        Format::Json => serde_json::from_str(&text).map_err(|e| e.to_string()),
        Format::Yaml => serde_yaml::from_str(&text).map_err(|e| e.to_string()),
    };
    parsed.map_err(|reason| FatalLoadError::Corrupt {
        artifact,
        path: path.to_path_buf(),
        reason,
    })
}
