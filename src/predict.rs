//! Scale-and-predict: FeatureVector → raw model price.

use tracing::{debug, warn};

use crate::error::{Result, ValuerError};
use crate::features::{FeatureSchema, FeatureVector};
use crate::model::PredictionModel;
use crate::preprocessing::StandardScaler;
use crate::traits::Regressor;

/// Borrowed view over the fitted scaler and model.
#[derive(Debug, Clone, Copy)]
pub struct Predictor<'a> {
    scaler: &'a StandardScaler,
    model: &'a PredictionModel,
}

impl<'a> Predictor<'a> {
    /// Pairs a scaler with a model.
    #[must_use]
    pub fn new(scaler: &'a StandardScaler, model: &'a PredictionModel) -> Self {
        Self { scaler, model }
    }

    /// Checks that both artifacts are fitted and agree with `schema`.
    ///
    /// # Errors
    ///
    /// - [`ValuerError::ModelUnavailable`] if either artifact is unfitted,
    ///   the model is structurally invalid, or a width differs from the schema.
    /// - [`ValuerError::SchemaMismatch`] if the scaler recorded column names
    ///   that differ from the schema.
    pub fn readiness(&self, schema: &FeatureSchema) -> Result<()> {
        self.scaler.validate()?;
        if !self.model.is_fitted() {
            return Err(ValuerError::unavailable(format!(
                "{} model is not fitted",
                self.model.kind()
            )));
        }
        self.model.validate()?;
        if self.scaler.n_features() != schema.len() {
            return Err(ValuerError::unavailable(format!(
                "scaler has {} features but schema has {} columns",
                self.scaler.n_features(),
                schema.len()
            )));
        }
        if self.model.n_features() != schema.len() {
            return Err(ValuerError::unavailable(format!(
                "{} model has {} features but schema has {} columns",
                self.model.kind(),
                self.model.n_features(),
                schema.len()
            )));
        }
        if let Some(names) = self.scaler.feature_names() {
            if let Some((idx, (recorded, expected))) = names
                .iter()
                .zip(schema.columns())
                .enumerate()
                .find(|(_, (a, b))| a != b)
            {
                warn!(
                    column = idx,
                    scaler = %recorded,
                    schema = %expected,
                    "scaler column names disagree with schema"
                );
                return Err(ValuerError::schema(format!(
                    "scaler column {idx} is `{recorded}` but schema has `{expected}`"
                )));
            }
        }
        Ok(())
    }

    /// Standardizes the vector in schema order and runs inference.
    ///
    /// # Errors
    ///
    /// [`ValuerError::ModelUnavailable`] if the artifacts cannot score this
    /// vector or the model produces a non-finite value.
    pub fn predict(&self, features: &FeatureVector) -> Result<f64> {
        let scaled = self.scaler.transform_row(features.values())?;
        let raw = self.model.predict_row(&scaled)?;
        if !raw.is_finite() {
            return Err(ValuerError::unavailable(format!(
                "{} model produced a non-finite price",
                self.model.kind()
            )));
        }
        if raw <= 0.0 {
            warn!(raw_price = raw, "model produced a non-positive price");
        }
        debug!(raw_price = raw, model = self.model.kind(), "scored feature vector");
        Ok(raw)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::features::Vectorizer;
    use crate::laptop::RawSpec;
    use crate::linear_model::LinearRegression;

    fn schema() -> FeatureSchema {
        FeatureSchema::new(vec!["Ram".into(), "SSD".into()]).expect("valid schema")
    }

    fn spec() -> RawSpec {
        serde_json::from_value(serde_json::json!({
            "manufacturer": "Dell",
            "category": "Notebook",
            "os": "Windows 10",
            "ram_gb": 16,
            "weight_kg": 2.0,
            "display": {"inches": 15.6, "resolution": "Full HD", "width": 1920, "height": 1080},
            "cpu": {"brand": "Intel", "line": "Core i5", "generation": 8, "suffix": "U", "clock_ghz": 1.6},
            "gpu": {"brand": "Intel", "series": "HD Graphics"},
            "storage": {"ssd": 512}
        }))
        .expect("valid spec")
    }

    #[test]
    fn test_predict_scales_then_scores() {
        let scaler = StandardScaler::new(vec![8.0, 256.0], vec![4.0, 128.0]).expect("valid");
        let model = PredictionModel::from(LinearRegression::new(vec![100.0, 10.0], 1000.0));
        let predictor = Predictor::new(&scaler, &model);
        let schema = schema();
        predictor.readiness(&schema).expect("ready");

        let vector = Vectorizer::new(Arc::new(schema)).vectorize(&spec()).expect("vectorize");
        // z = [2, 2] → 1000 + 200 + 20
        let price = predictor.predict(&vector).expect("predict");
        assert!((price - 1220.0).abs() < 1e-9);
    }

    #[test]
    fn test_width_disagreement_is_unavailable() {
        let scaler = StandardScaler::new(vec![0.0; 3], vec![1.0; 3]).expect("valid");
        let model = PredictionModel::from(LinearRegression::new(vec![1.0; 3], 0.0));
        let err = Predictor::new(&scaler, &model)
            .readiness(&schema())
            .expect_err("3 vs 2");
        assert!(matches!(err, ValuerError::ModelUnavailable { .. }));
    }

    #[test]
    fn test_scaler_names_must_follow_schema() {
        let scaler = StandardScaler::new(vec![0.0; 2], vec![1.0; 2])
            .expect("valid")
            .with_feature_names(vec!["SSD".into(), "Ram".into()]);
        let model = PredictionModel::from(LinearRegression::new(vec![1.0; 2], 0.0));
        let err = Predictor::new(&scaler, &model)
            .readiness(&schema())
            .expect_err("swapped names");
        assert!(matches!(err, ValuerError::SchemaMismatch { .. }));
    }

    #[test]
    fn test_unfitted_model_is_unavailable() {
        let scaler = StandardScaler::new(vec![0.0; 2], vec![1.0; 2]).expect("valid");
        let model = PredictionModel::from(LinearRegression::new(Vec::new(), 0.0));
        let err = Predictor::new(&scaler, &model)
            .readiness(&schema())
            .expect_err("no coefficients");
        assert!(err.to_string().contains("linear model is not fitted"));
    }
}
