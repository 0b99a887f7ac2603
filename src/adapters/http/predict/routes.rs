//! HTTP routes for prediction endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{health, predict, PredictAppState};

/// Creates the prediction router with all routes.
pub fn predict_routes(state: PredictAppState) -> Router {
    Router::new()
        // POST /api/predict
        .route("/api/predict", post(predict))
        // GET /health
        .route("/health", get(health))
        .with_state(state)
}
