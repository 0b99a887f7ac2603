//! Label map - classifier output index to category name.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use crate::domain::foundation::UnknownLabelIndex;

/// Structural problems in a label map artifact.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LabelMapError {
    #[error("label map has no classes")]
    Empty,

    #[error("class {index} has an empty name")]
    BlankName { index: usize },

    #[error("class '{name}' appears more than once")]
    Duplicate { name: String },
}

/// Label map artifact exactly as stored on disk.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LabelMapArtifact {
    classes: Vec<String>,
}

/// Ordered category names, indexed by label index.
///
/// The order is whatever the training pipeline fixed and cannot be
/// re-derived here.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "LabelMapArtifact", into = "LabelMapArtifact")]
pub struct LabelMap {
    classes: Vec<String>,
}

impl LabelMap {
    pub fn new(classes: Vec<String>) -> Result<Self, LabelMapError> {
        if classes.is_empty() {
            return Err(LabelMapError::Empty);
        }
        let mut seen = HashSet::new();
        for (index, name) in classes.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(LabelMapError::BlankName { index });
            }
            if !seen.insert(name.as_str()) {
                return Err(LabelMapError::Duplicate { name: name.clone() });
            }
        }
        Ok(Self { classes })
    }

    /// Returns the category name for a classifier output index.
    pub fn decode(&self, index: usize) -> Result<&str, UnknownLabelIndex> {
        self.classes
            .get(index)
            .map(String::as_str)
            .ok_or(UnknownLabelIndex {
                index,
                len: self.classes.len(),
            })
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.classes
    }
}

impl TryFrom<LabelMapArtifact> for LabelMap {
    type Error = LabelMapError;

    fn try_from(artifact: LabelMapArtifact) -> Result<Self, Self::Error> {
        LabelMap::new(artifact.classes)
    }
}

impl From<LabelMap> for LabelMapArtifact {
    fn from(map: LabelMap) -> Self {
        Self {
            classes: map.classes,
        }
    }
}
