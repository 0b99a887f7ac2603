//! Domain layer containing the prediction vocabulary and pure pipeline stages.
//!
//! # Module Organization
//!
//! - `foundation` - Shared error types and codes
//! - `survey` - Raw answers, validation, and feature encoding
//! - `inference` - Scaling, label decoding, and advisory tiers

pub mod foundation;
pub mod inference;
pub mod survey;
