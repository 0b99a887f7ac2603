//! Foundation module - Shared domain primitives.
//!
//! Contains the error vocabulary shared by the survey and inference
//! modules.

mod errors;

pub use errors::{DimensionMismatch, ErrorCode, UnknownLabelIndex, ValidationError};
