//! Artifact adapters - load the pre-fitted model files from disk.

mod loader;

pub use loader::{ArtifactKind, ArtifactLoader, FatalLoadError};
