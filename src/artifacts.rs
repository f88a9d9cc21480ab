//! Loading and saving the trained artifacts.
//!
//! Three files make up a bundle: the regressor, the fitted scaler and the
//! feature schema. Model and scaler are JSON unless the file ends in `.bin`,
//! in which case they are bincode. The schema is always JSON.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::info;

use crate::error::{Result, ValuerError};
use crate::features::FeatureSchema;
use crate::model::PredictionModel;
use crate::predict::Predictor;
use crate::preprocessing::StandardScaler;

/// Default model file name.
pub const DEFAULT_MODEL_FILE: &str = "model.json";
/// Default scaler file name.
pub const DEFAULT_SCALER_FILE: &str = "scaler.json";
/// Default schema file name.
pub const DEFAULT_SCHEMA_FILE: &str = "feature_columns.json";

/// Where each artifact lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    /// Regressor file.
    pub model: PathBuf,
    /// Scaler file.
    pub scaler: PathBuf,
    /// Feature schema file.
    pub schema: PathBuf,
}

impl ArtifactPaths {
    /// Default file names inside `dir`.
    #[must_use]
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            model: dir.join(DEFAULT_MODEL_FILE),
            scaler: dir.join(DEFAULT_SCALER_FILE),
            schema: dir.join(DEFAULT_SCHEMA_FILE),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Encoding {
    Json,
    Bincode,
}

impl Encoding {
    fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("bin") => Encoding::Bincode,
            _ => Encoding::Json,
        }
    }
}

fn read_bytes(artifact: &'static str, path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| ValuerError::artifact(artifact, path, e))
}

fn read_artifact<T: DeserializeOwned>(artifact: &'static str, path: &Path) -> Result<T> {
    let bytes = read_bytes(artifact, path)?;
    match Encoding::for_path(path) {
        Encoding::Json => serde_json::from_slice(&bytes)
            .map_err(|e| ValuerError::artifact(artifact, path, format!("invalid JSON: {e}"))),
        Encoding::Bincode => bincode::deserialize(&bytes).map_err(|e| {
            ValuerError::artifact(artifact, path, format!("Deserialization failed: {e}"))
        }),
    }
}

fn write_artifact<T: Serialize>(artifact: &'static str, path: &Path, value: &T) -> Result<()> {
    let encoded = match Encoding::for_path(path) {
        Encoding::Json => serde_json::to_vec_pretty(value).map_err(|e| e.to_string()),
        Encoding::Bincode => bincode::serialize(value).map_err(|e| e.to_string()),
    };
    let bytes = encoded.map_err(|e| {
        ValuerError::artifact(artifact, path, format!("Serialization failed: {e}"))
    })?;
    fs::write(path, bytes).map_err(|e| ValuerError::io(path, e))
}

/// Reads the schema file.
///
/// Undecodable JSON is an [`ValuerError::ArtifactLoad`]; well-formed JSON
/// that does not describe a usable column list is a
/// [`ValuerError::SchemaMismatch`].
///
/// # Errors
///
/// See above.
pub fn load_schema(path: &Path) -> Result<FeatureSchema> {
    if Encoding::for_path(path) != Encoding::Json {
        return Err(ValuerError::artifact(
            "schema",
            path,
            "feature schema must be a JSON file",
        ));
    }
    let bytes = read_bytes("schema", path)?;
    let value: serde_json::Value = serde_json::from_slice(&bytes)
        .map_err(|e| ValuerError::artifact("schema", path, format!("invalid JSON: {e}")))?;
    serde_json::from_value(value)
        .map_err(|e| ValuerError::schema(format!("{}: {e}", path.display())))
}

/// Model, scaler and schema, loaded once and then read-only.
#[derive(Debug, Clone)]
pub struct ArtifactBundle {
    model: PredictionModel,
    scaler: StandardScaler,
    schema: Arc<FeatureSchema>,
}

impl ArtifactBundle {
    /// Bundles in-memory artifacts.
    #[must_use]
    pub fn new(model: PredictionModel, scaler: StandardScaler, schema: FeatureSchema) -> Self {
        Self {
            model,
            scaler,
            schema: Arc::new(schema),
        }
    }

    /// Loads all three artifacts.
    ///
    /// # Errors
    ///
    /// [`ValuerError::ArtifactLoad`] for a missing, unreadable or undecodable
    /// file; [`ValuerError::SchemaMismatch`] for a malformed schema.
    pub fn load(paths: &ArtifactPaths) -> Result<Self> {
        let schema = load_schema(&paths.schema)?;
        let scaler: StandardScaler = read_artifact("scaler", &paths.scaler)?;
        let model: PredictionModel = read_artifact("model", &paths.model)?;
        info!(
            model = %paths.model.display(),
            scaler = %paths.scaler.display(),
            schema = %paths.schema.display(),
            kind = model.kind(),
            columns = schema.len(),
            "loaded artifacts"
        );
        Ok(Self::new(model, scaler, schema))
    }

    /// Loads the default file names from `dir`.
    ///
    /// # Errors
    ///
    /// See [`ArtifactBundle::load`].
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self> {
        Self::load(&ArtifactPaths::in_dir(dir))
    }

    /// Writes all three artifacts, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory cannot be created or a file written.
    pub fn save(&self, paths: &ArtifactPaths) -> Result<()> {
        for path in [&paths.model, &paths.scaler, &paths.schema] {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|e| ValuerError::io(parent, e))?;
            }
        }
        if Encoding::for_path(&paths.schema) != Encoding::Json {
            return Err(ValuerError::artifact(
                "schema",
                &paths.schema,
                "feature schema must be a JSON file",
            ));
        }
        write_artifact("model", &paths.model, &self.model)?;
        write_artifact("scaler", &paths.scaler, &self.scaler)?;
        write_artifact("schema", &paths.schema, self.schema.as_ref())
    }

    /// The regressor.
    #[must_use]
    pub fn model(&self) -> &PredictionModel {
        &self.model
    }

    /// The scaler.
    #[must_use]
    pub fn scaler(&self) -> &StandardScaler {
        &self.scaler
    }

    /// The feature schema.
    #[must_use]
    pub fn schema(&self) -> &Arc<FeatureSchema> {
        &self.schema
    }

    /// Scale-and-predict view over the bundle.
    #[must_use]
    pub fn predictor(&self) -> Predictor<'_> {
        Predictor::new(&self.scaler, &self.model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linear_model::LinearRegression;

    fn bundle() -> ArtifactBundle {
        let schema = FeatureSchema::new(vec!["Ram".into(), "SSD".into()]).expect("schema");
        let scaler = StandardScaler::new(vec![8.0, 256.0], vec![4.0, 128.0])
            .expect("scaler")
            .with_feature_names(vec!["Ram".into(), "SSD".into()]);
        let model = LinearRegression::new(vec![10.0, 20.0], 500.0).into();
        ArtifactBundle::new(model, scaler, schema)
    }

    #[test]
    fn test_save_then_load_json() {
        let dir = tempfile::tempdir().expect("tempdir");
        let paths = ArtifactPaths::in_dir(dir.path());
        bundle().save(&paths).expect("save");

        let loaded = ArtifactBundle::load_dir(dir.path()).expect("load");
        assert_eq!(loaded.model(), bundle().model());
        assert_eq!(loaded.scaler(), bundle().scaler());
        assert_eq!(loaded.schema().columns(), bundle().schema().columns());
        loaded.predictor().readiness(loaded.schema()).expect("ready");
    }

    #[test]
    fn test_bincode_model_and_scaler() {
        let dir = tempfile::tempdir().expect("tempdir");
        let paths = ArtifactPaths {
            model: dir.path().join("model.bin"),
            scaler: dir.path().join("scaler.bin"),
            schema: dir.path().join("feature_columns.json"),
        };
        bundle().save(&paths).expect("save");
        let loaded = ArtifactBundle::load(&paths).expect("load");
        assert_eq!(loaded.model().kind(), "linear");
        assert_eq!(loaded.scaler().n_features(), 2);
    }

    #[test]
    fn test_missing_model_is_artifact_load() {
        let dir = tempfile::tempdir().expect("tempdir");
        let paths = ArtifactPaths::in_dir(dir.path());
        bundle().save(&paths).expect("save");
        fs::remove_file(&paths.model).expect("remove model");

        let err = ArtifactBundle::load(&paths).expect_err("model missing");
        match err {
            ValuerError::ArtifactLoad { artifact, path, .. } => {
                assert_eq!(artifact, "model");
                assert_eq!(path, paths.model);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_corrupt_scaler_is_artifact_load() {
        let dir = tempfile::tempdir().expect("tempdir");
        let paths = ArtifactPaths::in_dir(dir.path());
        bundle().save(&paths).expect("save");
        fs::write(&paths.scaler, b"{\"mean\": [1.0").expect("corrupt");

        let err = ArtifactBundle::load(&paths).expect_err("truncated scaler");
        assert!(matches!(err, ValuerError::ArtifactLoad { artifact: "scaler", .. }));
    }

    #[test]
    fn test_malformed_schema_is_schema_mismatch() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("feature_columns.json");
        fs::write(&path, br#"["Ram", "Ram"]"#).expect("write");
        assert!(matches!(
            load_schema(&path),
            Err(ValuerError::SchemaMismatch { .. })
        ));

        fs::write(&path, b"not json").expect("write");
        assert!(matches!(
            load_schema(&path),
            Err(ValuerError::ArtifactLoad { .. })
        ));
    }

    #[test]
    fn test_schema_with_gpu_dictionary() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("feature_columns.json");
        fs::write(
            &path,
            br#"{"columns": ["gpu_model"], "gpu_model_codes": {"620": 3, "Unknown": 0}}"#,
        )
        .expect("write");
        let schema = load_schema(&path).expect("schema with codes");
        let codes = schema.gpu_model_codes().expect("codes");
        assert_eq!(codes.code("620"), 3);
        assert_eq!(codes.code("9999"), 0);
    }
}
