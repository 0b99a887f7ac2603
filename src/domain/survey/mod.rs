//! Survey module - raw lifestyle answers and their numeric encoding.
//!
//! # Components
//!
//! - `RawAnswers` - one response as received, every field optional
//! - `SurveyResponse` - the validated, typed form
//! - `FeatureEncoder` - validation plus encoding into a [`FeatureVector`]

mod answers;
mod encoder;

pub use answers::{
    FlagAnswer, Frequency, Gender, RawAnswers, SurveyResponse, ACTIVITY_RANGE, AGE_RANGE,
    VEGETABLE_RANGE, WATER_RANGE, WEIGHT_RANGE,
};
pub use encoder::{FeatureEncoder, FeatureVector, FEATURE_COUNT, FEATURE_NAMES};
