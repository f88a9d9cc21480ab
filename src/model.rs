//! The fitted regressor artifact.
//!
//! A model file holds exactly one of the supported families, externally
//! tagged by its snake_case name:
//!
//! ```json
//! { "linear": { "coefficients": [1.0, 2.0], "intercept": 10.0 } }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::linear_model::LinearRegression;
use crate::traits::Regressor;
use crate::tree::{DecisionTreeRegressor, GradientBoostingRegressor};

/// Any regressor the valuation pipeline can serve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredictionModel {
    /// Linear model.
    Linear(LinearRegression),
    /// Single regression tree.
    DecisionTree(DecisionTreeRegressor),
    /// Gradient-boosted tree ensemble.
    GradientBoosting(GradientBoostingRegressor),
}

impl PredictionModel {
    /// Family name as written in the artifact.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            PredictionModel::Linear(_) => "linear",
            PredictionModel::DecisionTree(_) => "decision_tree",
            PredictionModel::GradientBoosting(_) => "gradient_boosting",
        }
    }

    /// Checks the model's internal structure against its declared width.
    ///
    /// Deserialized artifacts bypass the checked constructors, so this runs
    /// once at startup.
    ///
    /// # Errors
    ///
    /// [`ValuerError::ModelUnavailable`](crate::ValuerError::ModelUnavailable)
    /// describing the first structural problem.
    pub fn validate(&self) -> Result<()> {
        match self {
            PredictionModel::Linear(_) => Ok(()),
            PredictionModel::DecisionTree(m) => m.validate(),
            PredictionModel::GradientBoosting(m) => m.validate(),
        }
    }

    fn inner(&self) -> &dyn Regressor {
        match self {
            PredictionModel::Linear(m) => m,
            PredictionModel::DecisionTree(m) => m,
            PredictionModel::GradientBoosting(m) => m,
        }
    }
}

impl Regressor for PredictionModel {
    fn n_features(&self) -> usize {
        self.inner().n_features()
    }

    fn is_fitted(&self) -> bool {
        self.inner().is_fitted()
    }

    fn predict_row(&self, row: &[f64]) -> Result<f64> {
        self.inner().predict_row(row)
    }
}

impl From<LinearRegression> for PredictionModel {
    fn from(model: LinearRegression) -> Self {
        PredictionModel::Linear(model)
    }
}

impl From<DecisionTreeRegressor> for PredictionModel {
    fn from(model: DecisionTreeRegressor) -> Self {
        PredictionModel::DecisionTree(model)
    }
}

impl From<GradientBoostingRegressor> for PredictionModel {
    fn from(model: GradientBoostingRegressor) -> Self {
        PredictionModel::GradientBoosting(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::RegressionTreeNode;

    #[test]
    fn test_external_tag_in_json() {
        let model: PredictionModel =
            serde_json::from_str(r#"{"linear": {"coefficients": [2.0], "intercept": 1.0}}"#)
                .expect("tagged linear model");
        assert_eq!(model.kind(), "linear");
        assert_eq!(model.predict_row(&[3.0]).expect("predict"), 7.0);
    }

    #[test]
    fn test_unknown_family_is_rejected() {
        let parsed = serde_json::from_str::<PredictionModel>(r#"{"svm": {}}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_validate_reaches_ensemble_trees() {
        let json = r#"{"gradient_boosting": {
            "init_prediction": 10.0,
            "learning_rate": 0.1,
            "estimators": [{"tree": {"Leaf": {"value": 1.0}}, "n_features": 3}],
            "n_features": 2
        }}"#;
        let model: PredictionModel = serde_json::from_str(json).expect("well-formed json");
        assert!(model.validate().is_err());
    }

    #[test]
    fn test_bincode_roundtrip_tree() {
        let tree = DecisionTreeRegressor::new(
            RegressionTreeNode::split(
                0,
                0.0,
                RegressionTreeNode::leaf(1.0),
                RegressionTreeNode::leaf(2.0),
            ),
            1,
        )
        .expect("valid tree");
        let model = PredictionModel::from(tree);
        let bytes = bincode::serialize(&model).expect("encode");
        let back: PredictionModel = bincode::deserialize(&bytes).expect("decode");
        assert_eq!(back, model);
        assert_eq!(back.kind(), "decision_tree");
        assert_eq!(back.n_features(), 1);
    }
}
