//! Service configuration.
//!
//! ```toml
//! # laptop-valuer.toml
//! artifact_dir = "/srv/valuer/artifacts"
//! model_file = "model.bin"
//! gpu_model_encoding = "fixed"
//! ```
//!
//! Every field is optional. The artifact directory can also be set through
//! `LAPTOP_VALUER_ARTIFACT_DIR`, which wins over the file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::artifacts::{
    ArtifactPaths, DEFAULT_MODEL_FILE, DEFAULT_SCALER_FILE, DEFAULT_SCHEMA_FILE,
};
use crate::error::{Result, ValuerError};
use crate::features::GpuModelEncoding;

/// Environment variable overriding [`ValuerConfig::artifact_dir`].
pub const ENV_ARTIFACT_DIR: &str = "LAPTOP_VALUER_ARTIFACT_DIR";

/// Artifact directory used when nothing else is configured.
pub const DEFAULT_ARTIFACT_DIR: &str = "artifacts";

/// Where the artifacts live and how the GPU model is coded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValuerConfig {
    /// Directory holding the artifact files.
    pub artifact_dir: PathBuf,
    /// Model file name, relative to `artifact_dir` unless absolute.
    pub model_file: PathBuf,
    /// Scaler file name.
    pub scaler_file: PathBuf,
    /// Schema file name.
    pub schema_file: PathBuf,
    /// GPU model coding.
    pub gpu_model_encoding: GpuModelEncoding,
}

impl Default for ValuerConfig {
    fn default() -> Self {
        Self {
            artifact_dir: PathBuf::from(DEFAULT_ARTIFACT_DIR),
            model_file: PathBuf::from(DEFAULT_MODEL_FILE),
            scaler_file: PathBuf::from(DEFAULT_SCALER_FILE),
            schema_file: PathBuf::from(DEFAULT_SCHEMA_FILE),
            gpu_model_encoding: GpuModelEncoding::default(),
        }
    }
}

impl ValuerConfig {
    /// Parses a TOML document.
    ///
    /// # Errors
    ///
    /// [`ValuerError::Config`] for invalid TOML or unknown keys.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Reads a TOML file.
    ///
    /// # Errors
    ///
    /// [`ValuerError::Io`] if the file cannot be read, otherwise as
    /// [`ValuerConfig::from_toml_str`].
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ValuerError::io(path, e))?;
        Self::from_toml_str(&content)
    }

    /// Reads `path` when given, otherwise starts from defaults; then applies
    /// the environment override.
    ///
    /// # Errors
    ///
    /// As [`ValuerConfig::from_toml_file`].
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_toml_file(path)?,
            None => Self::default(),
        };
        Ok(config.with_env_overrides())
    }

    /// Applies `LAPTOP_VALUER_ARTIFACT_DIR` when set and non-empty.
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        let dir = std::env::var_os(ENV_ARTIFACT_DIR).filter(|v| !v.is_empty());
        self.with_artifact_dir(dir.map(PathBuf::from))
    }

    /// Replaces the artifact directory when `dir` is `Some`.
    #[must_use]
    pub fn with_artifact_dir(mut self, dir: Option<PathBuf>) -> Self {
        if let Some(dir) = dir {
            self.artifact_dir = dir;
        }
        self
    }

    /// Resolved artifact file locations.
    #[must_use]
    pub fn artifact_paths(&self) -> ArtifactPaths {
        ArtifactPaths {
            model: self.artifact_dir.join(&self.model_file),
            scaler: self.artifact_dir.join(&self.scaler_file),
            schema: self.artifact_dir.join(&self.schema_file),
        }
    }
}
