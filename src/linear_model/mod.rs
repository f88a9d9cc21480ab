//! Linear regression inference.
//!
//! Evaluates `y = intercept + Σ coefficients[j] · x[j]` for a fitted
//! coefficient vector.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ValuerError};
use crate::traits::Regressor;

/// Fitted ordinary-least-squares (or regularized) linear model.
///
/// # Examples
///
/// ```
/// use laptop_valuer::linear_model::LinearRegression;
/// use laptop_valuer::traits::Regressor;
///
/// let model = LinearRegression::new(vec![2.0, -1.0], 10.0);
/// assert_eq!(model.predict_row(&[3.0, 4.0]).unwrap(), 12.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearRegression {
    /// Coefficients for features (excluding intercept).
    coefficients: Vec<f64>,
    /// Intercept (bias) term.
    #[serde(default)]
    intercept: f64,
}

impl LinearRegression {
    /// Creates a model from fitted parameters.
    #[must_use]
    pub fn new(coefficients: Vec<f64>, intercept: f64) -> Self {
        Self {
            coefficients,
            intercept,
        }
    }

    /// Returns the coefficients (excluding intercept).
    #[must_use]
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Returns the intercept term.
    #[must_use]
    pub fn intercept(&self) -> f64 {
        self.intercept
    }
}

impl Regressor for LinearRegression {
    fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    fn is_fitted(&self) -> bool {
        !self.coefficients.is_empty()
    }

    fn predict_row(&self, row: &[f64]) -> Result<f64> {
        if !self.is_fitted() {
            return Err(ValuerError::unavailable("linear model has no coefficients"));
        }
        if row.len() != self.coefficients.len() {
            return Err(ValuerError::unavailable(format!(
                "linear model expects {} features, got {}",
                self.coefficients.len(),
                row.len()
            )));
        }
        let dot: f64 = self
            .coefficients
            .iter()
            .zip(row)
            .map(|(c, x)| c * x)
            .sum();
        Ok(self.intercept + dot)
    }
}
