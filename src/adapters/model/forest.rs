//! Decision-tree ensemble backend (random forest).
//!
//! Each tree routes the input to a leaf holding a class distribution
//! (`x[feature] <= threshold` goes left). Distributions are normalized per
//! tree, averaged across trees, and the argmax wins.

use serde::{Deserialize, Serialize};

use crate::ports::{Classifier, InferenceError};

use super::{argmax, ModelError};

/// One node of a flattened decision tree. Node 0 is the root.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: Vec<f64>,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DecisionTree {
    pub nodes: Vec<TreeNode>,
}

impl DecisionTree {
    /// Child indices must point strictly forward so that every walk ends at a leaf.
    fn validate(&self, tree: usize, n_features: usize, n_classes: usize) -> Result<(), ModelError> {
        if self.nodes.is_empty() {
            return Err(ModelError::Empty("decision tree"));
        }
        for (index, node) in self.nodes.iter().enumerate() {
            let invalid = |reason: String| ModelError::InvalidNode {
                tree,
                node: index,
                reason,
            };
            match node {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if *feature >= n_features {
                        return Err(invalid(format!(
                            "feature {} out of range for {} features",
                            feature, n_features
                        )));
                    }
                    if !threshold.is_finite() {
                        return Err(invalid("threshold is not finite".to_string()));
                    }
                    for child in [*left, *right] {
                        if child <= index || child >= self.nodes.len() {
                            return Err(invalid(format!("child {} is not a later node", child)));
                        }
                    }
                }
                TreeNode::Leaf { value } => {
                    if value.len() != n_classes {
                        return Err(invalid(format!(
                            "leaf has {} class weights, expected {}",
                            value.len(),
                            n_classes
                        )));
                    }
                    if value.iter().any(|v| !v.is_finite() || *v < 0.0) {
                        return Err(invalid("leaf weights must be finite and non-negative".to_string()));
                    }
                    if value.iter().sum::<f64>() <= 0.0 {
                        return Err(invalid("leaf weights sum to zero".to_string()));
                    }
                }
            }
        }
        Ok(())
    }

    /// Walks from the root and returns the reached leaf's weights.
    fn leaf_for(&self, features: &[f64]) -> Result<&[f64], InferenceError> {
        let mut index = 0;
        // A valid walk visits each node at most once.
        for _ in 0..self.nodes.len() {
            match self.nodes.get(index) {
                Some(TreeNode::Leaf { value }) => return Ok(value.as_slice()),
                Some(TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                }) => {
                    let x = features.get(*feature).ok_or_else(|| {
                        InferenceError::malformed(format!("split on missing feature {}", feature))
                    })?;
                    index = if x <= threshold { *left } else { *right };
                }
                None => {
                    return Err(InferenceError::malformed(format!(
                        "node {} does not exist",
                        index
                    )))
                }
            }
        }
        Err(InferenceError::malformed("tree walk did not reach a leaf"))
    }
}

/// Tree ensemble artifact exactly as stored on disk.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ForestArtifact {
    n_features: usize,
    n_classes: usize,
    trees: Vec<DecisionTree>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(try_from = "ForestArtifact", into = "ForestArtifact")]
pub struct TreeEnsemble {
    n_features: usize,
    n_classes: usize,
    trees: Vec<DecisionTree>,
}

impl TreeEnsemble {
    pub fn new(n_features: usize, n_classes: usize, trees: Vec<DecisionTree>) -> Result<Self, ModelError> {
        if n_features == 0 {
            return Err(ModelError::Empty("feature set"));
        }
        if n_classes == 0 {
            return Err(ModelError::Empty("class set"));
        }
        if trees.is_empty() {
            return Err(ModelError::Empty("tree list"));
        }
        for (index, tree) in trees.iter().enumerate() {
            tree.validate(index, n_features, n_classes)?;
        }
        Ok(Self {
            n_features,
            n_classes,
            trees,
        })
    }

    /// Mean class probabilities across all trees.
    pub fn predict_proba(&self, features: &[f64]) -> Result<Vec<f64>, InferenceError> {
        if features.len() != self.n_features {
            return Err(InferenceError::FeatureCountMismatch {
                expected: self.n_features,
                actual: features.len(),
            });
        }
        let mut totals = vec![0.0; self.n_classes];
        for tree in &self.trees {
            let leaf = tree.leaf_for(features)?;
            let sum: f64 = leaf.iter().sum();
            for (total, weight) in totals.iter_mut().zip(leaf) {
                *total += weight / sum;
            }
        }
        let count = self.trees.len() as f64;
        let proba: Vec<f64> = totals.into_iter().map(|t| t / count).collect();
        if proba.iter().any(|p| !p.is_finite()) {
            return Err(InferenceError::NonFiniteScore);
        }
        Ok(proba)
    }

    pub fn tree_count(&self) -> usize {
        self.trees.len()
    }
}

impl Classifier for TreeEnsemble {
    fn predict(&self, features: &[f64]) -> Result<usize, InferenceError> {
        let proba = self.predict_proba(features)?;
        argmax(&proba).ok_or_else(|| InferenceError::malformed("forest has no classes"))
    }

    fn feature_count(&self) -> usize {
        self.n_features
    }

    fn class_count(&self) -> usize {
        self.n_classes
    }

    fn kind(&self) -> &'static str {
        "forest"
    }
}

impl TryFrom<ForestArtifact> for TreeEnsemble {
    type Error = ModelError;

    fn try_from(artifact: ForestArtifact) -> Result<Self, Self::Error> {
        TreeEnsemble::new(artifact.n_features, artifact.n_classes, artifact.trees)
    }
}

impl From<TreeEnsemble> for ForestArtifact {
    fn from(model: TreeEnsemble) -> Self {
        Self {
            n_features: model.n_features,
            n_classes: model.n_classes,
            trees: model.trees,
        }
    }
}
