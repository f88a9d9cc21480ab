//! Price estimation: vectorize, scale-and-predict, adjust.
//!
//! A [`ValuationContext`] is built once at startup from the artifacts and
//! then shared (it is `Send + Sync`, typically behind an `Arc`). Every call
//! allocates its own transient data and reads the context without locks.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::adjust::{AdjustmentEngine, Estimate};
use crate::artifacts::ArtifactBundle;
use crate::config::ValuerConfig;
use crate::error::{EstimateError, Result, Stage};
use crate::features::{FeatureSchema, FeatureVector, GpuModelEncoding, Vectorizer};
use crate::laptop::RawSpec;

/// Immutable state shared by every estimate.
#[derive(Debug, Clone)]
pub struct ValuationContext {
    bundle: ArtifactBundle,
    vectorizer: Vectorizer,
    engine: AdjustmentEngine,
}

impl ValuationContext {
    /// Builds a context and checks the artifacts can serve predictions.
    ///
    /// # Errors
    ///
    /// - [`crate::error::ValuerError::ModelUnavailable`] if the model or
    ///   scaler is unfitted or disagrees with the schema width.
    /// - [`crate::error::ValuerError::SchemaMismatch`] if the scaler's column
    ///   names differ from the schema, or `encoding` is fixed but the schema
    ///   has no GPU model dictionary.
    pub fn new(bundle: ArtifactBundle, encoding: GpuModelEncoding) -> Result<Self> {
        let vectorizer = Vectorizer::new(Arc::clone(bundle.schema())).with_encoding(encoding)?;
        bundle.predictor().readiness(bundle.schema())?;

        let unfilled = vectorizer.unfilled_columns();
        if !unfilled.is_empty() {
            warn!(columns = ?unfilled, "schema columns that are never derived stay 0");
        }
        info!(
            columns = bundle.schema().len(),
            model = bundle.model().kind(),
            encoding = ?encoding,
            "valuation context ready"
        );
        Ok(Self {
            bundle,
            vectorizer,
            engine: AdjustmentEngine::standard(),
        })
    }

    /// Loads the artifacts named by `config` and builds a context.
    ///
    /// # Errors
    ///
    /// Any artifact load failure, or as [`ValuationContext::new`].
    pub fn load(config: &ValuerConfig) -> Result<Self> {
        let bundle = ArtifactBundle::load(&config.artifact_paths())?;
        Self::new(bundle, config.gpu_model_encoding)
    }

    /// Replaces the adjustment chain.
    #[must_use]
    pub fn with_engine(mut self, engine: AdjustmentEngine) -> Self {
        self.engine = engine;
        self
    }

    /// The feature schema.
    #[must_use]
    pub fn schema(&self) -> &FeatureSchema {
        self.bundle.schema()
    }

    /// The loaded artifacts.
    #[must_use]
    pub fn bundle(&self) -> &ArtifactBundle {
        &self.bundle
    }

    /// The vectorizer.
    #[must_use]
    pub fn vectorizer(&self) -> &Vectorizer {
        &self.vectorizer
    }

    /// The adjustment chain.
    #[must_use]
    pub fn engine(&self) -> &AdjustmentEngine {
        &self.engine
    }

    /// Prices one laptop.
    ///
    /// # Errors
    ///
    /// The first failing stage, with its error passed through unchanged.
    pub fn estimate(&self, spec: &RawSpec) -> std::result::Result<Estimate, EstimateError> {
        let features = self
            .vectorizer
            .vectorize(spec)
            .map_err(EstimateError::at(Stage::Vectorize))?;
        self.price_vector(spec, &features)
    }

    /// Prices one laptop and returns only the final price.
    ///
    /// # Errors
    ///
    /// As [`ValuationContext::estimate`].
    pub fn estimate_price(&self, spec: &RawSpec) -> std::result::Result<f64, EstimateError> {
        self.estimate(spec).map(|estimate| estimate.price)
    }

    /// Prices a batch vectorized together, one estimate per spec in order.
    ///
    /// # Errors
    ///
    /// The first failure aborts the batch.
    pub fn estimate_batch(
        &self,
        specs: &[RawSpec],
    ) -> std::result::Result<Vec<Estimate>, EstimateError> {
        let vectors = self
            .vectorizer
            .vectorize_batch(specs)
            .map_err(EstimateError::at(Stage::Vectorize))?;
        specs
            .iter()
            .zip(&vectors)
            .map(|(spec, features)| self.price_vector(spec, features))
            .collect()
    }

    fn price_vector(
        &self,
        spec: &RawSpec,
        features: &FeatureVector,
    ) -> std::result::Result<Estimate, EstimateError> {
        let raw = self
            .bundle
            .predictor()
            .predict(features)
            .map_err(EstimateError::at(Stage::Predict))?;
        let estimate = self.engine.apply(raw, spec);
        debug!(
            raw_price = estimate.base_price,
            multiplier = estimate.multiplier,
            price = estimate.price,
            "estimated"
        );
        Ok(estimate)
    }
}
