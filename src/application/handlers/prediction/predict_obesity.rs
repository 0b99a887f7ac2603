//! PredictObesityHandler - runs one survey response through the full pipeline.
//!
//! encode -> scale -> classify -> decode label -> advisory tier

use std::sync::Arc;
use thiserror::Error;

use crate::application::ModelArtifacts;
use crate::domain::foundation::{DimensionMismatch, ErrorCode, UnknownLabelIndex, ValidationError};
use crate::domain::inference::{AdvisoryClassifier, PredictionResult};
use crate::domain::survey::{FeatureEncoder, RawAnswers};
use crate::ports::InferenceError;

/// Query carrying one survey response.
#[derive(Debug, Clone)]
pub struct PredictObesityQuery {
    pub answers: RawAnswers,
}

/// Result of a successful prediction.
pub type PredictObesityResult = PredictionResult;

/// Any failure of a single prediction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictionError {
    #[error("Invalid answer: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    DimensionMismatch(#[from] DimensionMismatch),

    #[error("Inference failed: {0}")]
    Inference(#[from] InferenceError),

    #[error(transparent)]
    UnknownLabel(#[from] UnknownLabelIndex),
}

impl PredictionError {
    pub fn code(&self) -> ErrorCode {
        match self {
            PredictionError::Validation(_) => ErrorCode::ValidationFailed,
            PredictionError::DimensionMismatch(_) => ErrorCode::DimensionMismatch,
            PredictionError::Inference(_) => ErrorCode::InferenceFailed,
            PredictionError::UnknownLabel(_) => ErrorCode::UnknownLabelIndex,
        }
    }

    /// True when the caller's answers are at fault; false for artifact faults.
    pub fn is_input_fault(&self) -> bool {
        self.code().is_input_fault()
    }
}

/// Handler for a single prediction.
///
/// Holds only a shared reference to the immutable artifacts, so any number
/// of handlers may run concurrently.
#[derive(Clone)]
pub struct PredictObesityHandler {
    artifacts: Arc<ModelArtifacts>,
}

impl PredictObesityHandler {
    pub fn new(artifacts: Arc<ModelArtifacts>) -> Self {
        Self { artifacts }
    }

    pub fn handle(&self, query: PredictObesityQuery) -> Result<PredictObesityResult, PredictionError> {
        self.predict(&query.answers).map_err(|e| {
            if !e.is_input_fault() {
                tracing::warn!(code = %e.code(), "Prediction failed on loaded artifacts: {}", e);
            }
            e
        })
    }

    fn predict(&self, answers: &RawAnswers) -> Result<PredictionResult, PredictionError> {
        let vector = FeatureEncoder::encode(answers)?;
        let scaled = self.artifacts.scaler().transform(vector.as_slice())?;
        let index = self.artifacts.classifier().predict(&scaled)?;
        let category = self.artifacts.labels().decode(index)?;
        let advisory = AdvisoryClassifier::classify(category);

        tracing::debug!(category, tier = %advisory.tier, index, "Prediction complete");

        Ok(PredictionResult::new(category, advisory, vector))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::model::LinearModel;
    use crate::domain::inference::{LabelMap, ScalerParams, Tier};
    use crate::domain::survey::test_support::sample_answers;
    use crate::ports::Classifier;

    // ─────────────────────────────────────────────────────────────────────
    // Test Fixtures
    // ─────────────────────────────────────────────────────────────────────

    /// Only weight is standardized; everything else passes through.
    fn scaler() -> ScalerParams {
        let mut mean = vec![0.0; 11];
        let mut scale = vec![1.0; 11];
        mean[2] = 86.6;
        scale[2] = 26.2;
        ScalerParams::new(mean, scale).unwrap()
    }

    /// Binary model: heavier than roughly 113 kg scores as obese.
    fn weight_model() -> LinearModel {
        let mut row = vec![0.0; 11];
        row[2] = 1.0;
        LinearModel::new(vec![row], vec![-1.0]).unwrap()
    }

    fn labels() -> LabelMap {
        LabelMap::new(vec!["Normal_Weight".to_string(), "Obesity_Type_I".to_string()]).unwrap()
    }

    fn handler_with(classifier: Box<dyn Classifier>) -> PredictObesityHandler {
        let artifacts = ModelArtifacts::new(scaler(), classifier, labels()).unwrap();
        PredictObesityHandler::new(Arc::new(artifacts))
    }

    fn handler() -> PredictObesityHandler {
        handler_with(Box::new(weight_model()))
    }

    fn query(answers: RawAnswers) -> PredictObesityQuery {
        PredictObesityQuery { answers }
    }

    /// Returns a fixed outcome regardless of input.
    struct StubClassifier {
        outcome: Result<usize, InferenceError>,
    }

    impl Classifier for StubClassifier {
        fn predict(&self, _features: &[f64]) -> Result<usize, InferenceError> {
            self.outcome.clone()
        }

        fn feature_count(&self) -> usize {
            11
        }

        fn class_count(&self) -> usize {
            2
        }

        fn kind(&self) -> &'static str {
            "stub"
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Success Cases
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn reference_response_is_normal_weight() {
        let result = handler().handle(query(sample_answers())).unwrap();

        assert_eq!(result.category, "Normal_Weight");
        assert_eq!(result.display_name, "Normal Weight");
        assert_eq!(result.tier, Tier::NormalWeight);
        assert_eq!(result.message, Tier::NormalWeight.message());
        assert_eq!(
            result.echoed_vector.as_slice(),
            &[25.0, 1.0, 70.0, 0.0, 1.0, 2.0, 0.0, 2.0, 1.0, 1.0, 1.0]
        );
    }

    #[test]
    fn heavy_response_is_obesity() {
        let answers = RawAnswers {
            weight: Some(150.0),
            ..sample_answers()
        };
        let result = handler().handle(query(answers)).unwrap();

        assert_eq!(result.category, "Obesity_Type_I");
        assert_eq!(result.tier, Tier::Obesity);
    }

    #[test]
    fn pipeline_is_idempotent() {
        let handler = handler();
        let first = handler.handle(query(sample_answers())).unwrap();
        let second = handler.handle(query(sample_answers())).unwrap();
        assert_eq!(first, second);
    }

    // ─────────────────────────────────────────────────────────────────────
    // Failure Cases
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn invalid_answers_are_input_faults() {
        let answers = RawAnswers {
            calc: Some("Maybe".to_string()),
            ..sample_answers()
        };
        let err = handler().handle(query(answers)).unwrap_err();

        assert!(matches!(err, PredictionError::Validation(ref v) if v.field() == "calc"));
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
        assert!(err.is_input_fault());
    }

    #[test]
    fn out_of_range_label_index_is_reported() {
        let handler = handler_with(Box::new(StubClassifier { outcome: Ok(2) }));
        let err = handler.handle(query(sample_answers())).unwrap_err();

        assert_eq!(
            err,
            PredictionError::UnknownLabel(UnknownLabelIndex { index: 2, len: 2 })
        );
        assert_eq!(err.code(), ErrorCode::UnknownLabelIndex);
        assert!(!err.is_input_fault());
    }

    #[test]
    fn classifier_failure_is_inference_error() {
        let handler = handler_with(Box::new(StubClassifier {
            outcome: Err(InferenceError::NonFiniteScore),
        }));
        let err = handler.handle(query(sample_answers())).unwrap_err();

        assert_eq!(err, PredictionError::Inference(InferenceError::NonFiniteScore));
        assert_eq!(err.code(), ErrorCode::InferenceFailed);
    }

    #[test]
    fn dimension_mismatch_maps_to_its_code() {
        let err = PredictionError::from(DimensionMismatch {
            expected: 11,
            actual: 10,
        });
        assert_eq!(err.code(), ErrorCode::DimensionMismatch);
        assert_eq!(err.to_string(), "Feature vector has 10 elements, scaler expects 11");
    }
}
