//! Classifier Port - opaque pre-trained decision function.
//!
//! The pipeline depends only on this trait. Concrete scoring backends
//! (linear models, tree ensembles) live in `adapters::model`.

use thiserror::Error;

/// Port for a pre-trained classifier.
///
/// # Contract
///
/// Implementations must:
/// - Be deterministic: the same input always yields the same index
/// - Have no side effects
/// - Return an index in `[0, class_count())` on success
/// - Reject inputs whose length differs from `feature_count()`
pub trait Classifier: Send + Sync {
    /// Scores a normalized feature vector and returns the winning label index.
    fn predict(&self, features: &[f64]) -> Result<usize, InferenceError>;

    /// Number of features the model was trained on.
    fn feature_count(&self) -> usize;

    /// Number of classes the model can output.
    fn class_count(&self) -> usize;

    /// Short backend identifier for diagnostics.
    fn kind(&self) -> &'static str;
}

/// The classifier artifact could not score a well-formed vector.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InferenceError {
    #[error("Model expects {expected} features, got {actual}")]
    FeatureCountMismatch { expected: usize, actual: usize },

    #[error("Model produced a non-finite score")]
    NonFiniteScore,

    #[error("Malformed model: {0}")]
    MalformedModel(String),
}

impl InferenceError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        InferenceError::MalformedModel(reason.into())
    }
}
