//! RawSpec → FeatureVector.
//!
//! Derivation never fails on input values: unknown labels take table
//! defaults, nominal values the schema has no column for produce all-zero
//! indicators, and non-finite numbers become 0. Only the schema can make
//! vectorization fail.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{columns, FeatureSchema, FeatureVector};
use crate::encoding::{
    score, FixedLabelCodes, LabelIndex, Table, CPU_BRAND, GPU_BRAND, GPU_SERIES, MANUFACTURER,
    NOMINAL_FIELDS, OPERATING_SYSTEM, PRODUCT_CATEGORY,
};
use crate::error::{Result, ValuerError};
use crate::laptop::RawSpec;

/// How the free-text GPU model string becomes a number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GpuModelEncoding {
    /// Sorted index over the labels of the batch being vectorized. A lone
    /// request always codes 0.
    #[default]
    PerBatch,
    /// The schema artifact's training-time dictionary.
    Fixed,
}

enum GpuModelCoder<'a> {
    Batch(LabelIndex),
    Fixed(&'a FixedLabelCodes),
}

impl GpuModelCoder<'_> {
    fn code(&self, label: &str) -> f64 {
        match self {
            GpuModelCoder::Batch(index) => index.code(label).unwrap_or(0) as f64,
            GpuModelCoder::Fixed(codes) => f64::from(codes.code(label)),
        }
    }
}

/// Turns RawSpecs into schema-shaped feature vectors.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use laptop_valuer::features::{FeatureSchema, Vectorizer};
///
/// let schema = FeatureSchema::new(vec!["Ram".into(), "cpu_line".into(), "Company_Dell".into()])
///     .unwrap();
/// let vectorizer = Vectorizer::new(Arc::new(schema));
/// assert_eq!(vectorizer.unfilled_columns().len(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct Vectorizer {
    schema: Arc<FeatureSchema>,
    encoding: GpuModelEncoding,
}

impl Vectorizer {
    /// A vectorizer using per-batch GPU model coding.
    #[must_use]
    pub fn new(schema: Arc<FeatureSchema>) -> Self {
        Self {
            schema,
            encoding: GpuModelEncoding::PerBatch,
        }
    }

    /// Selects the GPU model coding.
    ///
    /// # Errors
    ///
    /// [`GpuModelEncoding::Fixed`] requires the schema to carry a dictionary.
    pub fn with_encoding(mut self, encoding: GpuModelEncoding) -> Result<Self> {
        if encoding == GpuModelEncoding::Fixed && self.schema.gpu_model_codes().is_none() {
            return Err(ValuerError::schema(
                "fixed gpu_model encoding requested but the schema has no gpu_model_codes",
            ));
        }
        self.encoding = encoding;
        Ok(self)
    }

    /// The schema vectors are shaped to.
    #[must_use]
    pub fn schema(&self) -> &Arc<FeatureSchema> {
        &self.schema
    }

    /// Active GPU model coding.
    #[must_use]
    pub fn encoding(&self) -> GpuModelEncoding {
        self.encoding
    }

    /// Vectorizes a single spec; it forms its own batch.
    pub fn vectorize(&self, spec: &RawSpec) -> Result<FeatureVector> {
        let coder = self.coder(std::slice::from_ref(spec));
        self.assemble(spec, &coder)
    }

    /// Vectorizes a batch; the per-batch GPU model index spans all of it.
    pub fn vectorize_batch(&self, specs: &[RawSpec]) -> Result<Vec<FeatureVector>> {
        let coder = self.coder(specs);
        specs.iter().map(|spec| self.assemble(spec, &coder)).collect()
    }

    /// Schema columns this vectorizer never derives; they are always 0.
    #[must_use]
    pub fn unfilled_columns(&self) -> Vec<&str> {
        self.schema
            .columns()
            .iter()
            .map(String::as_str)
            .filter(|name| !is_derivable(name))
            .collect()
    }

    fn coder<'a>(&'a self, specs: &[RawSpec]) -> GpuModelCoder<'a> {
        match (self.encoding, self.schema.gpu_model_codes()) {
            (GpuModelEncoding::Fixed, Some(codes)) => GpuModelCoder::Fixed(codes),
            _ => GpuModelCoder::Batch(LabelIndex::fit(
                specs.iter().map(|spec| spec.gpu.model_label()),
            )),
        }
    }

    fn assemble(&self, spec: &RawSpec, coder: &GpuModelCoder<'_>) -> Result<FeatureVector> {
        let derived = derive(spec, coder.code(spec.gpu.model_label()));
        let values: Vec<f64> = self
            .schema
            .columns()
            .iter()
            .map(|name| derived.get(name).copied().unwrap_or(0.0))
            .collect();
        FeatureVector::new(Arc::clone(&self.schema), values)
    }
}

fn is_derivable(name: &str) -> bool {
    columns::DERIVED.contains(&name) || NOMINAL_FIELDS.iter().any(|vocab| vocab.owns(name))
}

fn insert(cols: &mut BTreeMap<String, f64>, name: &str, value: f64) {
    let value = if value.is_finite() {
        value
    } else {
        debug!(column = name, "non-finite input replaced with 0");
        0.0
    };
    cols.insert(name.to_string(), value);
}

fn flag(on: bool) -> f64 {
    if on {
        1.0
    } else {
        0.0
    }
}

/// Every column derivable from `spec`, including indicators outside the schema.
fn derive(spec: &RawSpec, gpu_code: f64) -> BTreeMap<String, f64> {
    let mut cols = BTreeMap::new();
    let display = &spec.display;
    let cpu = &spec.cpu;
    let storage = &spec.storage;

    insert(&mut cols, columns::INCHES, display.inches);
    insert(&mut cols, columns::RAM, f64::from(spec.ram_gb));
    insert(&mut cols, columns::WEIGHT, spec.weight_kg);

    insert(&mut cols, columns::CPU_LINE, score(Table::CpuLine, &cpu.line));
    insert(&mut cols, columns::CPU_GENERATION, f64::from(cpu.generation));
    insert(&mut cols, columns::CPU_SUFFIX, score(Table::CpuSuffix, &cpu.suffix));
    insert(&mut cols, columns::CPU_CLOCK, cpu.clock_ghz);

    insert(
        &mut cols,
        columns::RESOLUTION,
        score(Table::Resolution, &display.resolution),
    );
    insert(&mut cols, columns::RESOLUTION_WIDTH, f64::from(display.width));
    insert(&mut cols, columns::RESOLUTION_HEIGHT, f64::from(display.height));
    insert(&mut cols, columns::TOUCHSCREEN, flag(display.touchscreen));
    insert(&mut cols, columns::IPS_PANEL, flag(display.ips_panel));
    insert(&mut cols, columns::RETINA, flag(display.retina));

    insert(&mut cols, columns::GPU_MODEL, gpu_code);

    insert(&mut cols, columns::HDD, f64::from(storage.hdd));
    insert(&mut cols, columns::SSD, f64::from(storage.ssd));
    insert(&mut cols, columns::HYBRID, f64::from(storage.hybrid));
    insert(&mut cols, columns::FLASH, f64::from(storage.flash));

    let nominal = [
        (&MANUFACTURER, spec.manufacturer.as_str()),
        (&PRODUCT_CATEGORY, spec.category.as_str()),
        (&OPERATING_SYSTEM, spec.os.as_str()),
        (&CPU_BRAND, cpu.brand.as_str()),
        (&GPU_BRAND, spec.gpu.brand.as_str()),
        (&GPU_SERIES, spec.gpu.series.as_str()),
    ];
    for (vocab, value) in nominal {
        cols.extend(vocab.indicators(value));
        if let Some(column) = vocab.hot_column(value) {
            cols.insert(column, 1.0);
        }
    }

    cols
}
