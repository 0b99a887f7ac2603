//! ModelArtifacts - the immutable bundle every prediction reads from.

use std::fmt;
use thiserror::Error;

use crate::domain::inference::{LabelMap, ScalerParams};
use crate::ports::Classifier;

/// The three artifacts disagree about the model's dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArtifactMismatch {
    #[error("scaler has {scaler} features but classifier expects {classifier}")]
    FeatureCount { scaler: usize, classifier: usize },

    #[error("classifier outputs {classifier} classes but label map has {labels}")]
    ClassCount { classifier: usize, labels: usize },
}

/// Scaler, classifier, and label map, checked against each other.
///
/// Built once at startup and shared read-only behind an `Arc`.
pub struct ModelArtifacts {
    scaler: ScalerParams,
    classifier: Box<dyn Classifier>,
    labels: LabelMap,
}

impl ModelArtifacts {
    pub fn new(
        scaler: ScalerParams,
        classifier: Box<dyn Classifier>,
        labels: LabelMap,
    ) -> Result<Self, ArtifactMismatch> {
        if scaler.feature_count() != classifier.feature_count() {
            return Err(ArtifactMismatch::FeatureCount {
                scaler: scaler.feature_count(),
                classifier: classifier.feature_count(),
            });
        }
        if classifier.class_count() != labels.len() {
            return Err(ArtifactMismatch::ClassCount {
                classifier: classifier.class_count(),
                labels: labels.len(),
            });
        }
        Ok(Self {
            scaler,
            classifier,
            labels,
        })
    }

    pub fn scaler(&self) -> &ScalerParams {
        &self.scaler
    }

    pub fn classifier(&self) -> &dyn Classifier {
        self.classifier.as_ref()
    }

    pub fn labels(&self) -> &LabelMap {
        &self.labels
    }
}

impl fmt::Debug for ModelArtifacts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelArtifacts")
            .field("features", &self.scaler.feature_count())
            .field("classifier", &self.classifier.kind())
            .field("labels", &self.labels.names())
            .finish()
    }
}
