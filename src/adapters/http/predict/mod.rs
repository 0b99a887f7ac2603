//! Prediction HTTP adapter module.
//!
//! Provides the REST endpoints for classifying survey responses.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{ErrorResponse, HealthResponse, PredictResponse};
pub use handlers::{PredictApiError, PredictAppState};
pub use routes::predict_routes;
