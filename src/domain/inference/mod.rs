//! Inference module - the pure stages between a feature vector and an advisory.
//!
//! # Components
//!
//! - `ScalerParams` - pre-fitted standardization, `(x - mean) / scale`
//! - `LabelMap` - classifier output index to category name
//! - `AdvisoryClassifier` - ordered rules from category name to [`Tier`]
//! - `PredictionResult` - what one pipeline run produces
//!
//! The classifier itself is a port (`crate::ports::Classifier`); everything
//! here is stateless apart from the immutable fitted parameters.

mod advisory;
mod label_map;
mod prediction;
mod scaler;

pub use advisory::{Advisory, AdvisoryClassifier, CategoryMatcher, Tier, ADVISORY_RULES};
pub use label_map::{LabelMap, LabelMapError};
pub use prediction::{display_name, PredictionResult};
pub use scaler::{ScalerError, ScalerParams};
