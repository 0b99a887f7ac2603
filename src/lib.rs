//! Obesity Advisor - lifestyle survey to obesity category and advisory.
//!
//! A survey response is encoded into an 11-feature vector, standardized with
//! pre-fitted scaler parameters, scored by a pre-trained classifier, decoded
//! to a category name, and mapped to a fixed advisory message.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
