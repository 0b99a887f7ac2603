//! Feature Encoder - survey answers to the fixed-order model input.

use serde::{Deserialize, Serialize};
use std::ops::Index;

use crate::domain::foundation::ValidationError;

use super::answers::{RawAnswers, SurveyResponse};

/// Number of features the pre-fitted artifacts were trained on.
pub const FEATURE_COUNT: usize = 11;

/// Column names of the training schema, in model input order.
///
/// The artifacts were fitted on exactly this ordering; never reorder.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "Age",
    "Gender",
    "Weight",
    "CALC",
    "FAVC",
    "FCVC",
    "SCC",
    "CH2O",
    "family_history_with_overweight",
    "FAF",
    "CAEC",
];

/// An encoded survey response in training-schema order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn new(values: [f64; FEATURE_COUNT]) -> Self {
        Self(values)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        FEATURE_COUNT
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Pairs each value with its training column name.
    pub fn named(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        FEATURE_NAMES.iter().copied().zip(self.0.iter().copied())
    }
}

impl Index<usize> for FeatureVector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

/// Stateless encoder from survey answers to [`FeatureVector`].
pub struct FeatureEncoder;

impl FeatureEncoder {
    /// Validates raw answers and encodes them.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found, in feature order.
    pub fn encode(raw: &RawAnswers) -> Result<FeatureVector, ValidationError> {
        let response = SurveyResponse::try_from(raw)?;
        Ok(Self::encode_response(&response))
    }

    /// Encodes an already validated response. Never fails.
    pub fn encode_response(response: &SurveyResponse) -> FeatureVector {
        FeatureVector([
            f64::from(response.age),
            response.gender.code(),
            response.weight,
            response.alcohol.code(),
            flag_code(response.high_calorie_food),
            response.vegetable_frequency,
            flag_code(response.monitors_calories),
            response.water_intake,
            flag_code(response.family_history_overweight),
            response.physical_activity,
            response.snacking.code(),
        ])
    }
}

fn flag_code(value: bool) -> f64 {
    if value {
        1.0
    } else {
        0.0
    }
}
