//! Encoding tables for categorical hardware labels.
//!
//! Three kinds of encoding feed the feature vectorizer:
//!
//! - [`OrdinalTable`]: a fixed label → rank mapping (CPU line, CPU power
//!   suffix, resolution class). Unknown labels score the table default.
//! - [`LabelIndex`] / [`FixedLabelCodes`]: integer codes for free-text labels
//!   such as the GPU model string.
//! - [`OneHotVocabulary`]: the known values of a nominal field, expanded into
//!   indicator columns with the reference value dropped.
//!
//! Ranks are hand-assigned, not derived; within a product family a faster
//! part always ranks strictly higher.
//!
//! # Example
//!
//! ```
//! use laptop_valuer::encoding::{score, Table};
//!
//! assert_eq!(score(Table::CpuLine, "Core i7"), 7.0);
//! assert_eq!(score(Table::CpuSuffix, "HQ (High Performance Quad Core)"), 5.0);
//! assert_eq!(score(Table::CpuLine, "Snapdragon X"), 3.0); // table default
//! ```

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

mod vocabulary;

pub use vocabulary::{
    OneHotVocabulary, CPU_BRAND, GPU_BRAND, GPU_SERIES, MANUFACTURER, NOMINAL_FIELDS,
    OPERATING_SYSTEM, PRODUCT_CATEGORY,
};

/// Label used when a free-text field is missing.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Immutable label → ordinal score mapping with a documented default.
#[derive(Debug)]
pub struct OrdinalTable {
    name: &'static str,
    entries: &'static [(&'static str, f64)],
    default: f64,
}

impl OrdinalTable {
    /// Creates a table from static entries.
    #[must_use]
    pub const fn new(
        name: &'static str,
        entries: &'static [(&'static str, f64)],
        default: f64,
    ) -> Self {
        Self {
            name,
            entries,
            default,
        }
    }

    /// Table name, as used in logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Score returned for labels outside the vocabulary.
    #[must_use]
    pub fn default_score(&self) -> f64 {
        self.default
    }

    /// Looks up a label, falling back to the default. Never fails.
    #[must_use]
    pub fn score(&self, label: &str) -> f64 {
        self.lookup(label).unwrap_or(self.default)
    }

    /// Looks up a label, returning `None` when it is outside the vocabulary.
    #[must_use]
    pub fn lookup(&self, label: &str) -> Option<f64> {
        let label = canonical_label(label);
        self.entries
            .iter()
            .find(|(known, _)| *known == label)
            .map(|(_, score)| *score)
    }

    /// Whether the label is part of the declared vocabulary.
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.lookup(label).is_some()
    }

    /// Declared labels in table order.
    pub fn labels(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|(label, _)| *label)
    }
}

/// CPU product line → performance rank. Default 3 (entry mainstream).
pub static CPU_LINE: OrdinalTable = OrdinalTable::new(
    "cpu_line",
    &[
        ("Celeron", 1.0),
        ("Atom", 1.0),
        ("E-Series", 1.0),
        ("A4-Series", 1.5),
        ("Pentium", 2.0),
        ("A6-Series", 2.0),
        ("A8-Series", 2.5),
        ("Core i3", 3.0),
        ("Ryzen 3", 3.0),
        ("A9-Series", 3.0),
        ("A10-Series", 3.5),
        ("Core M", 4.0),
        ("A12-Series", 4.0),
        ("Core i5", 5.0),
        ("Ryzen 5", 5.0),
        ("Core i7", 7.0),
        ("Ryzen 7", 7.0),
        ("Xeon", 8.0),
        ("Core i9", 9.0),
        ("Ryzen 9", 9.0),
        (UNKNOWN_LABEL, 3.0),
    ],
    3.0,
);

/// CPU power suffix → performance rank. Default 2 (ultra-low-power class).
pub static CPU_SUFFIX: OrdinalTable = OrdinalTable::new(
    "cpu_type_suffix",
    &[
        ("Y", 1.0),
        ("U", 2.0),
        ("M", 2.0),
        ("T", 2.0),
        ("HS", 3.0),
        ("H", 4.0),
        ("HQ", 5.0),
        ("HK", 6.0),
        (UNKNOWN_LABEL, 2.0),
    ],
    2.0,
);

/// Display resolution class → rank. Default 1 (standard panel).
pub static RESOLUTION: OrdinalTable = OrdinalTable::new(
    "resolution_type",
    &[
        ("Standard", 1.0),
        ("Full HD", 2.0),
        ("Quad HD", 3.0),
        ("Quad HD+", 4.0),
        ("4K Ultra HD", 5.0),
    ],
    1.0,
);

/// Ordinal table selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    /// [`CPU_LINE`]
    CpuLine,
    /// [`CPU_SUFFIX`]
    CpuSuffix,
    /// [`RESOLUTION`]
    Resolution,
}

impl Table {
    /// The backing table.
    #[must_use]
    pub fn table(self) -> &'static OrdinalTable {
        match self {
            Table::CpuLine => &CPU_LINE,
            Table::CpuSuffix => &CPU_SUFFIX,
            Table::Resolution => &RESOLUTION,
        }
    }
}

/// Scores `label` in the selected table. Total: unknown labels get the default.
#[must_use]
pub fn score(table: Table, label: &str) -> f64 {
    table.table().score(label)
}

/// Strips a trailing parenthesised description from a form label.
///
/// `"U (Ultra-Low Power)"` becomes `"U"`, `"Full HD (1920x1080)"` becomes
/// `"Full HD"`. Labels without a description are only trimmed.
#[must_use]
pub fn canonical_label(label: &str) -> &str {
    match label.find('(') {
        Some(idx) => label[..idx].trim(),
        None => label.trim(),
    }
}

/// Display resolution classes with their canonical panel dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResolutionClass {
    /// 1366×768
    Standard,
    /// 1920×1080
    FullHd,
    /// 2560×1440
    QuadHd,
    /// 3200×1800
    QuadHdPlus,
    /// 3840×2160
    UltraHd4k,
}

impl ResolutionClass {
    /// All classes, lowest first.
    pub const ALL: [ResolutionClass; 5] = [
        ResolutionClass::Standard,
        ResolutionClass::FullHd,
        ResolutionClass::QuadHd,
        ResolutionClass::QuadHdPlus,
        ResolutionClass::UltraHd4k,
    ];

    /// Label used by the training data and [`RESOLUTION`].
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            ResolutionClass::Standard => "Standard",
            ResolutionClass::FullHd => "Full HD",
            ResolutionClass::QuadHd => "Quad HD",
            ResolutionClass::QuadHdPlus => "Quad HD+",
            ResolutionClass::UltraHd4k => "4K Ultra HD",
        }
    }

    /// Canonical (width, height) in pixels.
    #[must_use]
    pub const fn dimensions(self) -> (u32, u32) {
        match self {
            ResolutionClass::Standard => (1366, 768),
            ResolutionClass::FullHd => (1920, 1080),
            ResolutionClass::QuadHd => (2560, 1440),
            ResolutionClass::QuadHdPlus => (3200, 1800),
            ResolutionClass::UltraHd4k => (3840, 2160),
        }
    }

    /// Parses a class label, including the form's `"Full HD (1920x1080)"` style.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let label = canonical_label(label);
        Self::ALL.into_iter().find(|class| class.label() == label)
    }
}

/// Sorted index over a set of free-text labels.
///
/// Codes are positions in byte-wise sorted order, so the same label set
/// always yields the same codes regardless of the order labels were seen in.
/// The codes are only meaningful relative to the set the index was fit on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelIndex {
    labels: Vec<String>,
}

impl LabelIndex {
    /// Builds the index over the distinct labels in `labels`.
    pub fn fit<'a, I>(labels: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let distinct: BTreeSet<&str> = labels.into_iter().collect();
        Self {
            labels: distinct.into_iter().map(str::to_string).collect(),
        }
    }

    /// Code for a label seen during `fit`.
    #[must_use]
    pub fn code(&self, label: &str) -> Option<usize> {
        self.labels
            .binary_search_by(|probe| probe.as_str().cmp(label))
            .ok()
    }

    /// Number of distinct labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether no labels were seen.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Labels in code order.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

/// A label → code dictionary fixed at training time.
///
/// Labels missing from the dictionary take the code of [`UNKNOWN_LABEL`]
/// when the dictionary has one, otherwise 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FixedLabelCodes {
    codes: BTreeMap<String, u32>,
}

impl FixedLabelCodes {
    /// Wraps a dictionary.
    #[must_use]
    pub fn new(codes: BTreeMap<String, u32>) -> Self {
        Self { codes }
    }

    /// Code for `label`, using the unknown fallback when absent.
    #[must_use]
    pub fn code(&self, label: &str) -> u32 {
        self.codes
            .get(label)
            .or_else(|| self.codes.get(UNKNOWN_LABEL))
            .copied()
            .unwrap_or(0)
    }

    /// Number of labels in the dictionary.
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Whether the dictionary is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}
