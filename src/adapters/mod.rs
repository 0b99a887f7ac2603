//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `artifacts` - Loads scaler, classifier and label map files
//! - `model` - Classifier backends (linear, tree ensemble)
//! - `http` - Axum REST API

pub mod artifacts;
pub mod http;
pub mod model;

pub use artifacts::{ArtifactLoader, FatalLoadError};
pub use model::ClassifierArtifact;
