//! HTTP adapters - REST API implementations.
//!
//! The prediction module exposes the pipeline; `router` wraps it with the
//! tracing, request-id, CORS, compression and timeout layers.

pub mod predict;
mod router;

// Re-export key types for convenience
pub use predict::predict_routes;
pub use predict::PredictAppState;
pub use router::app_router;
