//! Prediction result returned for one survey response.

use serde::Serialize;

use crate::domain::survey::FeatureVector;

use super::advisory::{Advisory, Tier};

/// Outcome of the full pipeline for one response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionResult {
    /// Category name exactly as it appears in the label map.
    pub category: String,
    /// Category with underscores replaced by spaces, for display.
    pub display_name: String,
    pub tier: Tier,
    pub message: String,
    /// The unscaled feature vector the prediction was made from.
    pub echoed_vector: FeatureVector,
}

impl PredictionResult {
    pub fn new(category: impl Into<String>, advisory: Advisory, echoed_vector: FeatureVector) -> Self {
        let category = category.into();
        Self {
            display_name: display_name(&category),
            category,
            tier: advisory.tier,
            message: advisory.message.to_string(),
            echoed_vector,
        }
    }
}

/// `"Obesity_Type_II"` becomes `"Obesity Type II"`.
pub fn display_name(category: &str) -> String {
    category.replace('_', " ")
}
