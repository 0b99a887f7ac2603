//! HTTP DTOs for prediction endpoints.
//!
//! The request body is `RawAnswers` itself; only responses get their own types.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::domain::foundation::{ErrorCode, ValidationError};
use crate::domain::inference::{PredictionResult, Tier};
use crate::domain::survey::FeatureVector;

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Successful prediction.
#[derive(Debug, Clone, Serialize)]
pub struct PredictResponse {
    pub category: String,
    pub display_name: String,
    pub tier: Tier,
    pub message: String,
    /// The encoded (unscaled) feature vector, in model order.
    pub features: FeatureVector,
    /// The same vector keyed by feature name.
    pub echoed_input: EchoedInput,
}

impl From<PredictionResult> for PredictResponse {
    fn from(result: PredictionResult) -> Self {
        Self {
            category: result.category,
            display_name: result.display_name,
            tier: result.tier,
            message: result.message,
            echoed_input: EchoedInput(result.echoed_vector),
            features: result.echoed_vector,
        }
    }
}

/// Serializes a feature vector as a `{name: value}` object in model order.
#[derive(Debug, Clone, PartialEq)]
pub struct EchoedInput(pub FeatureVector);

impl Serialize for EchoedInput {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in self.0.named() {
            map.serialize_entry(name, &value)?;
        }
        map.end()
    }
}

/// Loaded model summary for `GET /health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub backend: &'static str,
    pub feature_count: usize,
    pub labels: Vec<String>,
}

/// Error response body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn validation(error: &ValidationError) -> Self {
        Self {
            code: ErrorCode::ValidationFailed.to_string(),
            message: error.to_string(),
            details: Some(serde_json::json!({
                "field": error.field(),
                "reason": error.reason(),
            })),
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::MalformedRequest, message)
    }
}
