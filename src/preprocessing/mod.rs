//! Fitted feature scaling.
//!
//! The scaler is an externally fitted artifact: the pipeline only applies it.
//!
//! # Example
//!
//! ```
//! use laptop_valuer::preprocessing::StandardScaler;
//!
//! let scaler = StandardScaler::new(vec![8.0, 256.0], vec![4.0, 128.0])
//!     .expect("matching lengths");
//! let scaled = scaler.transform_row(&[16.0, 512.0]).expect("width matches");
//! assert_eq!(scaled, vec![2.0, 2.0]);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Result, ValuerError};

/// Scales below this are treated as constant features and left undivided.
const MIN_SCALE: f64 = 1e-10;

/// Standardizes features: `z = (x - mean) / scale`.
///
/// A feature whose scale is (near) zero was constant during training; it is
/// centered but not divided.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    /// Per-feature offset.
    mean: Vec<f64>,
    /// Per-feature divisor.
    scale: Vec<f64>,
    /// Column names the scaler was fit on, when recorded.
    #[serde(default)]
    feature_names: Option<Vec<String>>,
}

impl StandardScaler {
    /// Creates a scaler from fitted parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the vectors differ in length, are empty, or hold
    /// non-finite values.
    pub fn new(mean: Vec<f64>, scale: Vec<f64>) -> Result<Self> {
        let scaler = Self {
            mean,
            scale,
            feature_names: None,
        };
        scaler.validate()?;
        Ok(scaler)
    }

    /// Records the column names the scaler was fit on.
    #[must_use]
    pub fn with_feature_names(mut self, names: Vec<String>) -> Self {
        self.feature_names = Some(names);
        self
    }

    /// Per-feature offsets.
    #[must_use]
    pub fn mean(&self) -> &[f64] {
        &self.mean
    }

    /// Per-feature divisors.
    #[must_use]
    pub fn scale(&self) -> &[f64] {
        &self.scale
    }

    /// Recorded training column names.
    #[must_use]
    pub fn feature_names(&self) -> Option<&[String]> {
        self.feature_names.as_deref()
    }

    /// Number of features the scaler expects.
    #[must_use]
    pub fn n_features(&self) -> usize {
        self.mean.len()
    }

    /// Returns true if the scaler has fitted parameters.
    #[must_use]
    pub fn is_fitted(&self) -> bool {
        !self.mean.is_empty()
    }

    /// Checks internal consistency of the fitted parameters.
    ///
    /// # Errors
    ///
    /// [`ValuerError::ModelUnavailable`] when the parameters cannot be used.
    pub fn validate(&self) -> Result<()> {
        if !self.is_fitted() {
            return Err(ValuerError::unavailable("scaler has no fitted parameters"));
        }
        if self.mean.len() != self.scale.len() {
            return Err(ValuerError::unavailable(format!(
                "scaler mean has {} entries but scale has {}",
                self.mean.len(),
                self.scale.len()
            )));
        }
        if let Some(names) = &self.feature_names {
            if names.len() != self.mean.len() {
                return Err(ValuerError::unavailable(format!(
                    "scaler records {} feature names for {} features",
                    names.len(),
                    self.mean.len()
                )));
            }
        }
        if self
            .mean
            .iter()
            .chain(&self.scale)
            .any(|v| !v.is_finite())
        {
            return Err(ValuerError::unavailable("scaler parameters are not finite"));
        }
        Ok(())
    }

    /// Standardizes one row.
    ///
    /// # Errors
    ///
    /// Returns an error if `row` has the wrong width or the scaler is unfitted.
    pub fn transform_row(&self, row: &[f64]) -> Result<Vec<f64>> {
        if !self.is_fitted() {
            return Err(ValuerError::unavailable("scaler has no fitted parameters"));
        }
        if row.len() != self.n_features() {
            return Err(ValuerError::unavailable(format!(
                "scaler expects {} features, got {}",
                self.n_features(),
                row.len()
            )));
        }

        Ok(row
            .iter()
            .zip(self.mean.iter().zip(&self.scale))
            .map(|(&x, (&mean, &scale))| {
                let centered = x - mean;
                if scale.abs() > MIN_SCALE {
                    centered / scale
                } else {
                    centered
                }
            })
            .collect())
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
