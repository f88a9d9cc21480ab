//! Gradient Boosting Regressor inference.
//!
//! Prediction is `init_prediction + learning_rate * Σ tree(x)` over the
//! fitted ensemble of regression trees.

use serde::{Deserialize, Serialize};

use super::DecisionTreeRegressor;
use crate::error::{Result, ValuerError};
use crate::traits::Regressor;

/// Gradient-boosted ensemble of regression trees.
///
/// # Algorithm
///
/// 1. Start from a constant prediction (training-target mean)
/// 2. Add each tree's output scaled by the learning rate (shrinkage)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientBoostingRegressor {
    /// Initial prediction (target mean at fit time)
    init_prediction: f64,
    /// Learning rate (shrinkage parameter)
    learning_rate: f64,
    /// Ensemble of regression trees
    estimators: Vec<DecisionTreeRegressor>,
    /// Feature width shared by every tree
    n_features: usize,
}

impl GradientBoostingRegressor {
    /// Assembles a fitted ensemble.
    ///
    /// # Errors
    ///
    /// Returns an error if the ensemble is empty, the learning rate is not
    /// finite, or a tree disagrees with `n_features`.
    pub fn new(
        init_prediction: f64,
        learning_rate: f64,
        estimators: Vec<DecisionTreeRegressor>,
        n_features: usize,
    ) -> Result<Self> {
        let model = Self {
            init_prediction,
            learning_rate,
            estimators,
            n_features,
        };
        model.validate()?;
        Ok(model)
    }

    /// Number of trees in the ensemble.
    #[must_use]
    pub fn n_estimators(&self) -> usize {
        self.estimators.len()
    }

    /// Shrinkage applied to every tree.
    #[must_use]
    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    /// Constant the ensemble starts from.
    #[must_use]
    pub fn init_prediction(&self) -> f64 {
        self.init_prediction
    }

    /// Checks the ensemble can serve predictions.
    ///
    /// # Errors
    ///
    /// [`ValuerError::ModelUnavailable`] describing the first problem found.
    pub fn validate(&self) -> Result<()> {
        if self.estimators.is_empty() {
            return Err(ValuerError::unavailable("gradient boosting has no trees"));
        }
        if !self.learning_rate.is_finite() || !self.init_prediction.is_finite() {
            return Err(ValuerError::unavailable(
                "gradient boosting parameters are not finite",
            ));
        }
        for (i, tree) in self.estimators.iter().enumerate() {
            if tree.n_features() != self.n_features {
                return Err(ValuerError::unavailable(format!(
                    "tree {i} expects {} features, ensemble declares {}",
                    tree.n_features(),
                    self.n_features
                )));
            }
            tree.validate()?;
        }
        Ok(())
    }
}

impl Regressor for GradientBoostingRegressor {
    fn n_features(&self) -> usize {
        self.n_features
    }

    fn is_fitted(&self) -> bool {
        !self.estimators.is_empty()
    }

    fn predict_row(&self, row: &[f64]) -> Result<f64> {
        let mut prediction = self.init_prediction;
        for tree in &self.estimators {
            prediction += self.learning_rate * tree.predict_row(row)?;
        }
        Ok(prediction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::RegressionTreeNode;

    fn tree(threshold: f64, left: f64, right: f64) -> DecisionTreeRegressor {
        DecisionTreeRegressor::new(
            RegressionTreeNode::split(
                0,
                threshold,
                RegressionTreeNode::leaf(left),
                RegressionTreeNode::leaf(right),
            ),
            2,
        )
        .expect("valid tree")
    }

    #[test]
    fn test_ensemble_sums_shrunken_trees() {
        let gbm = GradientBoostingRegressor::new(
            1000.0,
            0.5,
            vec![tree(0.0, -100.0, 100.0), tree(1.0, -20.0, 40.0)],
            2,
        )
        .expect("valid ensemble");
        // x0 = 0.5: first tree goes right (+100), second goes left (-20).
        let y = gbm.predict_row(&[0.5, 0.0]).expect("predict");
        assert!((y - (1000.0 + 0.5 * 80.0)).abs() < 1e-9);
        assert_eq!(gbm.n_estimators(), 2);
    }

    #[test]
    fn test_empty_ensemble_is_unavailable() {
        let err = GradientBoostingRegressor::new(0.0, 0.1, Vec::new(), 2).expect_err("no trees");
        assert!(matches!(err, ValuerError::ModelUnavailable { .. }));
    }

    #[test]
    fn test_tree_width_must_match() {
        let narrow = DecisionTreeRegressor::new(RegressionTreeNode::leaf(1.0), 1).expect("valid");
        assert!(GradientBoostingRegressor::new(0.0, 0.1, vec![narrow], 2).is_err());
    }

    #[test]
    fn test_json_roundtrip_preserves_predictions() {
        let gbm = GradientBoostingRegressor::new(50.0, 0.1, vec![tree(0.0, 1.0, 2.0)], 2)
            .expect("valid ensemble");
        let json = serde_json::to_string(&gbm).expect("serialize");
        let back: GradientBoostingRegressor = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(
            gbm.predict_row(&[1.0, 1.0]).expect("predict"),
            back.predict_row(&[1.0, 1.0]).expect("predict")
        );
    }
}
