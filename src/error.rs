//! Error types for valuation operations.
//!
//! Only artifact and schema problems are errors. Unknown labels, missing
//! optional fields and out-of-vocabulary values resolve to documented
//! defaults inside the pipeline and never surface here.

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Main error type for the valuation pipeline.
///
/// # Examples
///
/// ```
/// use laptop_valuer::error::ValuerError;
///
/// let err = ValuerError::unavailable("model has no trees");
/// assert!(err.to_string().contains("model unavailable"));
/// ```
#[derive(Debug, Error)]
pub enum ValuerError {
    /// Model, scaler or schema could not be read or decoded.
    #[error("artifact load failure for {artifact} at {path}: {details}")]
    ArtifactLoad {
        /// Which artifact failed (`model`, `scaler`, `schema`).
        artifact: &'static str,
        /// Location that was read.
        path: PathBuf,
        /// Underlying failure.
        details: String,
    },

    /// The feature schema is absent, malformed, or disagrees with a vector.
    #[error("schema mismatch: {details}")]
    SchemaMismatch {
        /// What was wrong with the schema.
        details: String,
    },

    /// The inference backend cannot serve predictions.
    #[error("model unavailable: {details}")]
    ModelUnavailable {
        /// Why the backend is not ready.
        details: String,
    },

    /// Configuration file could not be parsed.
    #[error("configuration error: {details}")]
    Config {
        /// Parser message.
        details: String,
    },

    /// I/O failure outside artifact loading (config, artifact writes).
    #[error("I/O failure at {path}: {source}")]
    Io {
        /// Path being accessed.
        path: PathBuf,
        /// Source error.
        #[source]
        source: std::io::Error,
    },
}

impl ValuerError {
    /// Create an artifact load error for the given artifact and path.
    #[must_use]
    pub fn artifact(
        artifact: &'static str,
        path: impl AsRef<Path>,
        details: impl fmt::Display,
    ) -> Self {
        Self::ArtifactLoad {
            artifact,
            path: path.as_ref().to_path_buf(),
            details: details.to_string(),
        }
    }

    /// Create a schema mismatch error.
    #[must_use]
    pub fn schema(details: impl Into<String>) -> Self {
        Self::SchemaMismatch {
            details: details.into(),
        }
    }

    /// Create a model unavailable error.
    #[must_use]
    pub fn unavailable(details: impl Into<String>) -> Self {
        Self::ModelUnavailable {
            details: details.into(),
        }
    }

    /// Convenience constructor for IO errors with a known path.
    #[must_use]
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Whether the error prevents the service from starting at all.
    #[must_use]
    pub const fn is_fatal_at_startup(&self) -> bool {
        matches!(
            self,
            Self::ArtifactLoad { .. } | Self::SchemaMismatch { .. } | Self::Config { .. }
        )
    }
}

impl From<toml::de::Error> for ValuerError {
    fn from(value: toml::de::Error) -> Self {
        Self::Config {
            details: value.to_string(),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, ValuerError>;

/// Pipeline stage an estimate failure originated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// RawSpec to FeatureVector.
    Vectorize,
    /// Scaling and model inference.
    Predict,
}

impl Stage {
    /// Stable lowercase name, used in logs and messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Stage::Vectorize => "vectorize",
            Stage::Predict => "predict",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed `estimate` call: the stage it failed in and the untouched cause.
#[derive(Debug, Error)]
#[error("estimate failed in {stage} stage: {source}")]
pub struct EstimateError {
    /// Stage of origin.
    pub stage: Stage,
    /// The downstream error, propagated verbatim.
    #[source]
    pub source: ValuerError,
}

impl EstimateError {
    /// Returns a closure that tags a [`ValuerError`] with `stage`.
    pub fn at(stage: Stage) -> impl FnOnce(ValuerError) -> Self {
        move |source| Self { stage, source }
    }
}
