//! Application layer - artifact bundle and prediction handlers.
//!
//! This layer wires the domain stages to the classifier port. It owns no I/O;
//! artifacts arrive already loaded from `adapters::artifacts`.

mod artifacts;
pub mod handlers;

pub use artifacts::{ArtifactMismatch, ModelArtifacts};
pub use handlers::{PredictObesityHandler, PredictObesityQuery, PredictionError};
