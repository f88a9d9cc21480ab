//! Core trait for fitted regression models.

use crate::error::Result;

/// A fitted regressor that scores one standardized feature row.
///
/// Implementations hold no interior mutability: prediction is a pure
/// function of the parameters and the row.
pub trait Regressor {
    /// Number of features the model was fit on.
    fn n_features(&self) -> usize;

    /// Returns true if the model has usable parameters.
    fn is_fitted(&self) -> bool;

    /// Predicts the target for one row.
    ///
    /// # Errors
    ///
    /// Returns an error if the model is unfitted or `row` has the wrong width.
    fn predict_row(&self, row: &[f64]) -> Result<f64>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValuerError;

    struct MeanModel {
        value: Option<f64>,
    }

    impl Regressor for MeanModel {
        fn n_features(&self) -> usize {
            0
        }

        fn is_fitted(&self) -> bool {
            self.value.is_some()
        }

        fn predict_row(&self, _row: &[f64]) -> Result<f64> {
            self.value
                .ok_or_else(|| ValuerError::unavailable("mean model not fitted"))
        }
    }

    #[test]
    fn test_trait_object_dispatch() {
        let models: Vec<Box<dyn Regressor>> = vec![
            Box::new(MeanModel { value: Some(4.0) }),
            Box::new(MeanModel { value: None }),
        ];
        assert_eq!(models[0].predict_row(&[]).expect("fitted"), 4.0);
        assert!(!models[1].is_fitted());
        assert!(models[1].predict_row(&[]).is_err());
    }
}
