//! HTTP handlers for prediction endpoints.
//!
//! These handlers connect Axum routes to the application layer prediction handler.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::{PredictObesityHandler, PredictObesityQuery, PredictionError};
use crate::application::ModelArtifacts;
use crate::domain::foundation::ErrorCode;
use crate::domain::survey::RawAnswers;

use super::dto::{ErrorResponse, HealthResponse, PredictResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Prediction API error that implements IntoResponse.
#[derive(Debug)]
pub enum PredictApiError {
    /// Body was not valid JSON for `RawAnswers`.
    Malformed(String),
    Prediction(PredictionError),
}

impl IntoResponse for PredictApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            PredictApiError::Malformed(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::malformed(msg))
            }
            PredictApiError::Prediction(PredictionError::Validation(err)) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::validation(&err))
            }
            PredictApiError::Prediction(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new(err.code(), err.to_string()),
            ),
        };
        (status, Json(error)).into_response()
    }
}

impl From<PredictionError> for PredictApiError {
    fn from(error: PredictionError) -> Self {
        PredictApiError::Prediction(error)
    }
}

impl From<JsonRejection> for PredictApiError {
    fn from(rejection: JsonRejection) -> Self {
        PredictApiError::Malformed(rejection.body_text())
    }
}

impl PredictApiError {
    pub fn code(&self) -> ErrorCode {
        match self {
            PredictApiError::Malformed(_) => ErrorCode::MalformedRequest,
            PredictApiError::Prediction(err) => err.code(),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state holding the loaded model artifacts.
#[derive(Clone)]
pub struct PredictAppState {
    pub artifacts: Arc<ModelArtifacts>,
}

impl PredictAppState {
    pub fn new(artifacts: Arc<ModelArtifacts>) -> Self {
        Self { artifacts }
    }

    pub fn predict_handler(&self) -> PredictObesityHandler {
        PredictObesityHandler::new(self.artifacts.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/predict
///
/// Classifies one survey response.
pub async fn predict(
    State(state): State<PredictAppState>,
    body: Result<Json<RawAnswers>, JsonRejection>,
) -> Result<Json<PredictResponse>, PredictApiError> {
    let Json(answers) = body?;

    let result = state
        .predict_handler()
        .handle(PredictObesityQuery { answers })?;

    Ok(Json(PredictResponse::from(result)))
}

/// GET /health
///
/// Reports the loaded model. Artifacts are loaded before the server binds,
/// so a response here means the service is ready.
pub async fn health(State(state): State<PredictAppState>) -> Json<HealthResponse> {
    let artifacts = &state.artifacts;
    Json(HealthResponse {
        status: "ok",
        backend: artifacts.classifier().kind(),
        feature_count: artifacts.classifier().feature_count(),
        labels: artifacts.labels().names().to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DimensionMismatch, UnknownLabelIndex, ValidationError};

    #[test]
    fn validation_errors_are_bad_requests() {
        let err = PredictApiError::from(PredictionError::Validation(ValidationError::missing("weight")));
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn malformed_bodies_are_bad_requests() {
        let err = PredictApiError::Malformed("expected value".to_string());
        assert_eq!(err.code(), ErrorCode::MalformedRequest);
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn artifact_faults_are_server_errors() {
        let errors = [
            PredictionError::DimensionMismatch(DimensionMismatch {
                expected: 11,
                actual: 12,
            }),
            PredictionError::UnknownLabel(UnknownLabelIndex { index: 7, len: 7 }),
        ];
        for err in errors {
            let response = PredictApiError::from(err).into_response();
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}
