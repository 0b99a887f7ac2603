//! Prediction handlers.

mod predict_obesity;

pub use predict_obesity::{
    PredictObesityHandler, PredictObesityQuery, PredictObesityResult, PredictionError,
};
