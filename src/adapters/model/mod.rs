//! Model Adapters - concrete scoring backends for the `Classifier` port.
//!
//! The classifier artifact declares its backend with a `kind` tag:
//!
//! ```json
//! {"kind": "linear", "coefficients": [[...]], "intercepts": [...]}
//! {"kind": "forest", "n_features": 11, "n_classes": 7, "trees": [...]}
//! ```

mod forest;
mod linear;

pub use forest::{DecisionTree, TreeEnsemble, TreeNode};
pub use linear::LinearModel;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ports::{Classifier, InferenceError};

/// Structural problems found while building a model from its artifact.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("{0} is empty")]
    Empty(&'static str),

    #[error("row {row} has {actual} values, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("expected {expected} {what}, got {actual}")]
    CountMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("{0} contains a non-finite value")]
    NonFinite(String),

    #[error("tree {tree} node {node}: {reason}")]
    InvalidNode {
        tree: usize,
        node: usize,
        reason: String,
    },
}

/// A classifier artifact of any supported backend.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClassifierArtifact {
    Linear(LinearModel),
    Forest(TreeEnsemble),
}

impl ClassifierArtifact {
    fn backend(&self) -> &dyn Classifier {
        match self {
            ClassifierArtifact::Linear(model) => model,
            ClassifierArtifact::Forest(model) => model,
        }
    }
}

impl Classifier for ClassifierArtifact {
    fn predict(&self, features: &[f64]) -> Result<usize, InferenceError> {
        self.backend().predict(features)
    }

    fn feature_count(&self) -> usize {
        self.backend().feature_count()
    }

    fn class_count(&self) -> usize {
        self.backend().class_count()
    }

    fn kind(&self) -> &'static str {
        self.backend().kind()
    }
}

/// Index of the first maximum, or `None` for an empty slice.
pub(crate) fn argmax(values: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, &value) in values.iter().enumerate() {
        match best {
            Some((_, top)) if value <= top => {}
            _ => best = Some((index, value)),
        }
    }
    best.map(|(index, _)| index)
}
