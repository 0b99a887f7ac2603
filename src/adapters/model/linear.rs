//! Linear classifier backend.
//!
//! Covers multinomial logistic regression and one-vs-rest linear SVMs: the
//! winning class is the argmax of `W·x + b`. A single coefficient row is the
//! binary form, where a positive score selects class 1.

use serde::{Deserialize, Serialize};

use crate::ports::{Classifier, InferenceError};

use super::{argmax, ModelError};

/// Linear model artifact exactly as stored on disk.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LinearArtifact {
    coefficients: Vec<Vec<f64>>,
    intercepts: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(try_from = "LinearArtifact", into = "LinearArtifact")]
pub struct LinearModel {
    coefficients: Vec<Vec<f64>>,
    intercepts: Vec<f64>,
}

impl LinearModel {
    /// Creates a linear model from one coefficient row per class.
    ///
    /// # Errors
    ///
    /// Fails on an empty matrix, ragged rows, an intercept count that does
    /// not match the row count, or non-finite parameters.
    pub fn new(coefficients: Vec<Vec<f64>>, intercepts: Vec<f64>) -> Result<Self, ModelError> {
        let width = match coefficients.first() {
            Some(row) if !row.is_empty() => row.len(),
            _ => return Err(ModelError::Empty("coefficient matrix")),
        };
        for (row, values) in coefficients.iter().enumerate() {
            if values.len() != width {
                return Err(ModelError::RaggedRow {
                    row,
                    expected: width,
                    actual: values.len(),
                });
            }
            if values.iter().any(|v| !v.is_finite()) {
                return Err(ModelError::NonFinite(format!("coefficient row {}", row)));
            }
        }
        if intercepts.len() != coefficients.len() {
            return Err(ModelError::CountMismatch {
                what: "intercepts",
                expected: coefficients.len(),
                actual: intercepts.len(),
            });
        }
        if intercepts.iter().any(|v| !v.is_finite()) {
            return Err(ModelError::NonFinite("intercepts".to_string()));
        }
        Ok(Self {
            coefficients,
            intercepts,
        })
    }

    /// Raw decision scores, one per coefficient row.
    pub fn decision_function(&self, features: &[f64]) -> Result<Vec<f64>, InferenceError> {
        if features.len() != self.feature_count() {
            return Err(InferenceError::FeatureCountMismatch {
                expected: self.feature_count(),
                actual: features.len(),
            });
        }
        let scores: Vec<f64> = self
            .coefficients
            .iter()
            .zip(&self.intercepts)
            .map(|(row, bias)| row.iter().zip(features).map(|(w, x)| w * x).sum::<f64>() + bias)
            .collect();
        if scores.iter().any(|s| !s.is_finite()) {
            return Err(InferenceError::NonFiniteScore);
        }
        Ok(scores)
    }

    fn is_binary(&self) -> bool {
        self.coefficients.len() == 1
    }
}

impl Classifier for LinearModel {
    fn predict(&self, features: &[f64]) -> Result<usize, InferenceError> {
        let scores = self.decision_function(features)?;
        if self.is_binary() {
            return Ok(usize::from(scores[0] > 0.0));
        }
        argmax(&scores).ok_or_else(|| InferenceError::malformed("linear model has no classes"))
    }

    fn feature_count(&self) -> usize {
        self.coefficients.first().map_or(0, Vec::len)
    }

    fn class_count(&self) -> usize {
        if self.is_binary() {
            2
        } else {
            self.coefficients.len()
        }
    }

    fn kind(&self) -> &'static str {
        "linear"
    }
}

impl TryFrom<LinearArtifact> for LinearModel {
    type Error = ModelError;

    fn try_from(artifact: LinearArtifact) -> Result<Self, Self::Error> {
        LinearModel::new(artifact.coefficients, artifact.intercepts)
    }
}

impl From<LinearModel> for LinearArtifact {
    fn from(model: LinearModel) -> Self {
        Self {
            coefficients: model.coefficients,
            intercepts: model.intercepts,
        }
    }
}
