//! Scaler - pre-fitted per-feature standardization.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::DimensionMismatch;
use crate::domain::survey::{FEATURE_COUNT, FEATURE_NAMES};

/// Structural problems in a scaler artifact.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScalerError {
    #[error("mean has {mean} entries but scale has {scale}")]
    LengthMismatch { mean: usize, scale: usize },

    #[error("expected {expected} features, artifact has {actual}")]
    WrongFeatureCount { expected: usize, actual: usize },

    #[error("parameter {index} is not a finite number")]
    NonFinite { index: usize },

    #[error("scale {index} is zero")]
    ZeroScale { index: usize },

    #[error("feature {index} is named '{actual}', expected '{expected}'")]
    FeatureOrder {
        index: usize,
        expected: &'static str,
        actual: String,
    },
}

/// Scaler artifact exactly as stored on disk.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScalerArtifact {
    mean: Vec<f64>,
    scale: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    feature_names: Option<Vec<String>>,
}

/// Fitted `(mean, scale)` pairs, one per feature.
///
/// Immutable once constructed; construction enforces the training schema.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(try_from = "ScalerArtifact", into = "ScalerArtifact")]
pub struct ScalerParams {
    mean: Vec<f64>,
    scale: Vec<f64>,
}

impl ScalerParams {
    /// Creates scaler parameters for the fixed feature schema.
    ///
    /// # Errors
    ///
    /// Fails when lengths disagree or differ from [`FEATURE_COUNT`], or when
    /// any parameter is non-finite or a scale is zero.
    pub fn new(mean: Vec<f64>, scale: Vec<f64>) -> Result<Self, ScalerError> {
        if mean.len() != scale.len() {
            return Err(ScalerError::LengthMismatch {
                mean: mean.len(),
                scale: scale.len(),
            });
        }
        if mean.len() != FEATURE_COUNT {
            return Err(ScalerError::WrongFeatureCount {
                expected: FEATURE_COUNT,
                actual: mean.len(),
            });
        }
        for (index, (m, s)) in mean.iter().zip(&scale).enumerate() {
            if !m.is_finite() || !s.is_finite() {
                return Err(ScalerError::NonFinite { index });
            }
            if *s == 0.0 {
                return Err(ScalerError::ZeroScale { index });
            }
        }
        Ok(Self { mean, scale })
    }

    /// Number of features the parameters were fitted on.
    pub fn feature_count(&self) -> usize {
        self.mean.len()
    }

    pub fn mean(&self) -> &[f64] {
        &self.mean
    }

    pub fn scale(&self) -> &[f64] {
        &self.scale
    }

    /// Applies `(x - mean) / scale` element-wise.
    pub fn transform(&self, values: &[f64]) -> Result<Vec<f64>, DimensionMismatch> {
        if values.len() != self.feature_count() {
            return Err(DimensionMismatch {
                expected: self.feature_count(),
                actual: values.len(),
            });
        }
        Ok(values
            .iter()
            .zip(self.mean.iter().zip(&self.scale))
            .map(|(x, (mean, scale))| (x - mean) / scale)
            .collect())
    }
}

impl TryFrom<ScalerArtifact> for ScalerParams {
    type Error = ScalerError;

    fn try_from(artifact: ScalerArtifact) -> Result<Self, Self::Error> {
        if let Some(names) = &artifact.feature_names {
            if names.len() != FEATURE_COUNT {
                return Err(ScalerError::WrongFeatureCount {
                    expected: FEATURE_COUNT,
                    actual: names.len(),
                });
            }
            for (index, (actual, expected)) in names.iter().zip(FEATURE_NAMES).enumerate() {
                if actual != expected {
                    return Err(ScalerError::FeatureOrder {
                        index,
                        expected,
                        actual: actual.clone(),
                    });
                }
            }
        }
        ScalerParams::new(artifact.mean, artifact.scale)
    }
}

impl From<ScalerParams> for ScalerArtifact {
    fn from(params: ScalerParams) -> Self {
        Self {
            mean: params.mean,
            scale: params.scale,
            feature_names: Some(FEATURE_NAMES.iter().map(|n| n.to_string()).collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> ScalerParams {
        ScalerParams::new(
            vec![24.0, 0.5, 86.0, 0.7, 0.9, 2.4, 0.05, 2.0, 0.8, 1.0, 1.1],
            vec![6.0, 0.5, 26.0, 0.5, 0.3, 0.5, 0.2, 0.6, 0.4, 0.85, 0.45],
        )
        .unwrap()
    }

    #[test]
    fn transform_standardizes_each_feature() {
        let scaled = params()
            .transform(&[30.0, 1.0, 60.0, 0.7, 0.0, 2.4, 0.05, 2.6, 0.0, 1.0, 2.0])
            .unwrap();
        let expected = [1.0, 1.0, -1.0, 0.0, -3.0, 0.0, 0.0, 1.0, -2.0, 0.0, 2.0];
        for (i, (got, want)) in scaled.iter().zip(expected).enumerate() {
            assert!((got - want).abs() < 1e-9, "feature {}: {} != {}", i, got, want);
        }
    }

    #[test]
    fn transform_rejects_short_vector() {
        let err = params().transform(&[0.0; 10]).unwrap_err();
        assert_eq!(
            err,
            DimensionMismatch {
                expected: 11,
                actual: 10
            }
        );
    }

    #[test]
    fn transform_rejects_long_vector() {
        let err = params().transform(&[0.0; 12]).unwrap_err();
        assert_eq!(err.actual, 12);
        assert_eq!(err.expected, 11);
    }

    #[test]
    fn transform_is_pure() {
        let params = params();
        let input = [25.0, 1.0, 70.0, 0.0, 1.0, 2.0, 0.0, 2.0, 1.0, 1.0, 1.0];
        assert_eq!(params.transform(&input), params.transform(&input));
    }

    #[test]
    fn new_rejects_mismatched_lengths() {
        let err = ScalerParams::new(vec![0.0; 11], vec![1.0; 10]).unwrap_err();
        assert_eq!(err, ScalerError::LengthMismatch { mean: 11, scale: 10 });
    }

    #[test]
    fn new_rejects_wrong_feature_count() {
        let err = ScalerParams::new(vec![0.0; 12], vec![1.0; 12]).unwrap_err();
        assert_eq!(
            err,
            ScalerError::WrongFeatureCount {
                expected: 11,
                actual: 12
            }
        );
    }

    #[test]
    fn new_rejects_zero_scale() {
        let mut scale = vec![1.0; 11];
        scale[4] = 0.0;
        let err = ScalerParams::new(vec![0.0; 11], scale).unwrap_err();
        assert_eq!(err, ScalerError::ZeroScale { index: 4 });
    }

    #[test]
    fn new_rejects_non_finite_parameters() {
        let mut mean = vec![0.0; 11];
        mean[7] = f64::NAN;
        let err = ScalerParams::new(mean, vec![1.0; 11]).unwrap_err();
        assert_eq!(err, ScalerError::NonFinite { index: 7 });
    }

    #[test]
    fn deserialize_validates_artifact() {
        let json = r#"{"mean": [0,0,0,0,0,0,0,0,0,0,0], "scale": [1,1,1,1,1,1,1,1,1,1,1]}"#;
        let params: ScalerParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.feature_count(), 11);

        let bad = r#"{"mean": [0,0,0], "scale": [1,1,1]}"#;
        assert!(serde_json::from_str::<ScalerParams>(bad).is_err());
    }

    #[test]
    fn deserialize_checks_feature_order_when_named() {
        let mut names: Vec<String> = FEATURE_NAMES.iter().map(|n| n.to_string()).collect();
        names.swap(2, 3);
        let json = serde_json::json!({
            "mean": vec![0.0; 11],
            "scale": vec![1.0; 11],
            "feature_names": names,
        });
        let err = serde_json::from_value::<ScalerParams>(json).unwrap_err();
        assert!(err.to_string().contains("expected 'Weight'"));
    }

    #[test]
    fn serialize_includes_feature_names() {
        let value = serde_json::to_value(params()).unwrap();
        assert_eq!(value["feature_names"][8], "family_history_with_overweight");
        let restored: ScalerParams = serde_json::from_value(value).unwrap();
        assert_eq!(restored, params());
    }
}
