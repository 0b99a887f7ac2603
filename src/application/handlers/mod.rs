//! Application handlers.
//!
//! Query handlers that orchestrate the domain pipeline.

mod prediction;

pub use prediction::{
    PredictObesityHandler, PredictObesityQuery, PredictObesityResult, PredictionError,
};
