//! Feature schema, feature vectors and the RawSpec vectorizer.
//!
//! The [`FeatureSchema`] is owned by the training artifact: it fixes which
//! columns the model sees and in what order. A [`FeatureVector`] always has
//! exactly the schema's columns, in the schema's order.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::encoding::FixedLabelCodes;
use crate::error::{Result, ValuerError};

pub mod columns;
mod vectorizer;

pub use vectorizer::{GpuModelEncoding, Vectorizer};

/// Ordered list of feature names the model was fit on.
///
/// Names are unique and non-empty; the list is non-empty. The on-disk form
/// is either a bare JSON array of names or an object with `columns` and an
/// optional `gpu_model_codes` dictionary.
///
/// # Examples
///
/// ```
/// use laptop_valuer::features::FeatureSchema;
///
/// let schema: FeatureSchema = serde_json::from_str(r#"["Inches", "Ram", "SSD"]"#).unwrap();
/// assert_eq!(schema.len(), 3);
/// assert_eq!(schema.position("Ram"), Some(1));
///
/// assert!(serde_json::from_str::<FeatureSchema>(r#"["Ram", "Ram"]"#).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SchemaFile", into = "SchemaFile")]
pub struct FeatureSchema {
    columns: Vec<String>,
    gpu_model_codes: Option<FixedLabelCodes>,
}

impl FeatureSchema {
    /// Validates and wraps a column list.
    ///
    /// # Errors
    ///
    /// Returns [`ValuerError::SchemaMismatch`] for an empty list, a blank
    /// name, or a duplicate name.
    pub fn new(columns: Vec<String>) -> Result<Self> {
        if columns.is_empty() {
            return Err(ValuerError::schema("feature schema has no columns"));
        }
        let mut seen = std::collections::HashSet::with_capacity(columns.len());
        for (idx, name) in columns.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(ValuerError::schema(format!(
                    "feature schema column {idx} has a blank name"
                )));
            }
            if !seen.insert(name.as_str()) {
                return Err(ValuerError::schema(format!(
                    "feature schema repeats column `{name}`"
                )));
            }
        }
        Ok(Self {
            columns,
            gpu_model_codes: None,
        })
    }

    /// Attaches a training-time GPU model dictionary.
    #[must_use]
    pub fn with_gpu_model_codes(mut self, codes: FixedLabelCodes) -> Self {
        self.gpu_model_codes = Some(codes);
        self
    }

    /// Column names in model order.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Always false for a validated schema.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Index of `name` in the schema.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Whether the schema contains `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// The fixed GPU model dictionary, when the artifact carries one.
    #[must_use]
    pub fn gpu_model_codes(&self) -> Option<&FixedLabelCodes> {
        self.gpu_model_codes.as_ref()
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum SchemaFile {
    Columns(Vec<String>),
    Bundle {
        columns: Vec<String>,
        #[serde(default)]
        gpu_model_codes: Option<FixedLabelCodes>,
    },
}

impl TryFrom<SchemaFile> for FeatureSchema {
    type Error = ValuerError;

    fn try_from(file: SchemaFile) -> Result<Self> {
        match file {
            SchemaFile::Columns(columns) => Self::new(columns),
            SchemaFile::Bundle {
                columns,
                gpu_model_codes,
            } => {
                let schema = Self::new(columns)?;
                Ok(match gpu_model_codes {
                    Some(codes) => schema.with_gpu_model_codes(codes),
                    None => schema,
                })
            }
        }
    }
}

impl From<FeatureSchema> for SchemaFile {
    fn from(schema: FeatureSchema) -> Self {
        match schema.gpu_model_codes {
            None => SchemaFile::Columns(schema.columns),
            Some(codes) => SchemaFile::Bundle {
                columns: schema.columns,
                gpu_model_codes: Some(codes),
            },
        }
    }
}

/// Numeric features for one laptop, in schema order.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    schema: Arc<FeatureSchema>,
    values: Vec<f64>,
}

impl FeatureVector {
    pub(crate) fn new(schema: Arc<FeatureSchema>, values: Vec<f64>) -> Result<Self> {
        if values.len() != schema.len() {
            return Err(ValuerError::schema(format!(
                "vector has {} values but schema has {} columns",
                values.len(),
                schema.len()
            )));
        }
        Ok(Self { schema, values })
    }

    /// Column names, identical to the schema's.
    #[must_use]
    pub fn names(&self) -> &[String] {
        self.schema.columns()
    }

    /// Values in schema order.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Value of one column.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.schema.position(name).map(|idx| self.values[idx])
    }

    /// Number of features.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the vector has no features.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The schema this vector was built against.
    #[must_use]
    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    /// (name, value) pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.names()
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}
