//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `Classifier` - The pre-trained model, treated as a black box

mod classifier;

pub use classifier::{Classifier, InferenceError};
