//! Regression trees and gradient-boosted tree ensembles.
//!
//! Trees are stored as nested [`RegressionTreeNode`]s. A sample goes left
//! when `x[feature_idx] <= threshold`, right otherwise, until it reaches a
//! leaf.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ValuerError};
use crate::traits::Regressor;

mod gradient_boosting;

pub use gradient_boosting::GradientBoostingRegressor;

/// Leaf node in a regression tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressionLeaf {
    /// Predicted value for this leaf.
    pub value: f64,
    /// Number of training samples in this leaf.
    #[serde(default)]
    pub n_samples: usize,
}

/// Internal node in a regression tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressionNode {
    /// Index of the feature to split on
    pub feature_idx: usize,
    /// Threshold value for the split
    pub threshold: f64,
    /// Left subtree (samples where feature <= threshold)
    pub left: Box<RegressionTreeNode>,
    /// Right subtree (samples where feature > threshold)
    pub right: Box<RegressionTreeNode>,
}

/// A node in a regression tree (either internal node or leaf).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RegressionTreeNode {
    /// Internal decision node with split condition
    Node(RegressionNode),
    /// Leaf node with value prediction
    Leaf(RegressionLeaf),
}

impl RegressionTreeNode {
    /// Leaf shorthand.
    #[must_use]
    pub fn leaf(value: f64) -> Self {
        RegressionTreeNode::Leaf(RegressionLeaf {
            value,
            n_samples: 0,
        })
    }

    /// Split shorthand.
    #[must_use]
    pub fn split(feature_idx: usize, threshold: f64, left: Self, right: Self) -> Self {
        RegressionTreeNode::Node(RegressionNode {
            feature_idx,
            threshold,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// Returns the depth of the tree rooted at this node.
    ///
    /// Leaf nodes have depth 0, internal nodes have depth 1 + max(left, right).
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            RegressionTreeNode::Leaf(_) => 0,
            RegressionTreeNode::Node(node) => 1 + node.left.depth().max(node.right.depth()),
        }
    }

    /// Largest feature index any split reads.
    #[must_use]
    pub fn max_feature_idx(&self) -> Option<usize> {
        match self {
            RegressionTreeNode::Leaf(_) => None,
            RegressionTreeNode::Node(node) => [
                Some(node.feature_idx),
                node.left.max_feature_idx(),
                node.right.max_feature_idx(),
            ]
            .into_iter()
            .flatten()
            .max(),
        }
    }

    /// Walks the tree for one sample.
    fn evaluate(&self, x: &[f64]) -> Result<f64> {
        let mut node = self;
        loop {
            match node {
                RegressionTreeNode::Leaf(leaf) => return Ok(leaf.value),
                RegressionTreeNode::Node(internal) => {
                    let value = x.get(internal.feature_idx).ok_or_else(|| {
                        ValuerError::unavailable(format!(
                            "tree splits on feature {} but row has {} values",
                            internal.feature_idx,
                            x.len()
                        ))
                    })?;
                    node = if *value <= internal.threshold {
                        internal.left.as_ref()
                    } else {
                        internal.right.as_ref()
                    };
                }
            }
        }
    }
}

/// Fitted CART regression tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTreeRegressor {
    tree: RegressionTreeNode,
    n_features: usize,
}

impl DecisionTreeRegressor {
    /// Wraps a fitted tree.
    ///
    /// # Errors
    ///
    /// Returns an error if a split reads a feature index `>= n_features`.
    pub fn new(tree: RegressionTreeNode, n_features: usize) -> Result<Self> {
        let model = Self { tree, n_features };
        model.validate()?;
        Ok(model)
    }

    /// Root of the tree.
    #[must_use]
    pub fn root(&self) -> &RegressionTreeNode {
        &self.tree
    }

    /// Depth of the tree.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.tree.depth()
    }

    /// Checks that every split reads a feature inside the declared width.
    ///
    /// # Errors
    ///
    /// [`ValuerError::ModelUnavailable`] naming the offending index.
    pub fn validate(&self) -> Result<()> {
        match self.tree.max_feature_idx() {
            Some(idx) if idx >= self.n_features => Err(ValuerError::unavailable(format!(
                "tree splits on feature {idx} but declares {} features",
                self.n_features
            ))),
            _ => Ok(()),
        }
    }
}

impl Regressor for DecisionTreeRegressor {
    fn n_features(&self) -> usize {
        self.n_features
    }

    fn is_fitted(&self) -> bool {
        self.n_features > 0
    }

    fn predict_row(&self, row: &[f64]) -> Result<f64> {
        if row.len() != self.n_features {
            return Err(ValuerError::unavailable(format!(
                "tree expects {} features, got {}",
                self.n_features,
                row.len()
            )));
        }
        self.tree.evaluate(row)
    }
}
