//! Multiplier band tables.
//!
//! Each family's bands are disjoint and listed most specific first; the
//! first matching band wins and a value no band covers gets 1.0.

/// Inclusive integer range mapped to a multiplier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeBand {
    /// Lower bound, inclusive.
    pub min: u32,
    /// Upper bound, inclusive. `None` is open-ended.
    pub max: Option<u32>,
    /// Multiplier for values in range.
    pub multiplier: f64,
}

impl RangeBand {
    const fn at_least(min: u32, multiplier: f64) -> Self {
        Self {
            min,
            max: None,
            multiplier,
        }
    }

    const fn between(min: u32, max: u32, multiplier: f64) -> Self {
        Self {
            min,
            max: Some(max),
            multiplier,
        }
    }

    const fn exactly(value: u32, multiplier: f64) -> Self {
        Self::between(value, value, multiplier)
    }

    /// Whether `value` falls in the band.
    #[must_use]
    pub fn contains(&self, value: u32) -> bool {
        value >= self.min && self.max.map_or(true, |max| value <= max)
    }
}

/// A set of exact labels mapped to a multiplier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelBand {
    /// Labels in the band.
    pub labels: &'static [&'static str],
    /// Multiplier for those labels.
    pub multiplier: f64,
}

impl LabelBand {
    /// Whether `label` is in the band.
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.labels.contains(&label)
    }
}

/// A GPU family keyed by a token of the series name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GpuFamilyBand {
    /// Substring the series must contain.
    pub series_token: &'static str,
    /// Vendor the GPU must have, when the family is vendor specific.
    pub brand: Option<&'static str>,
    /// Model-number tiers within the family, first match wins.
    pub tiers: &'static [(&'static [&'static str], f64)],
    /// Multiplier when no tier matches.
    pub fallback: f64,
}

impl GpuFamilyBand {
    /// Whether a GPU of this brand and series belongs to the family.
    #[must_use]
    pub fn matches(&self, brand: &str, series: &str) -> bool {
        series.contains(self.series_token) && self.brand.map_or(true, |b| b == brand)
    }

    /// Multiplier for a model string inside this family.
    #[must_use]
    pub fn multiplier(&self, model: &str) -> f64 {
        let model = model.to_lowercase();
        self.tiers
            .iter()
            .find(|(needles, _)| needles.iter().any(|n| model.contains(n)))
            .map_or(self.fallback, |&(_, m)| m)
    }
}

/// First matching range band, else 1.0.
#[must_use]
pub fn range_multiplier(bands: &[RangeBand], value: u32) -> f64 {
    bands
        .iter()
        .find(|band| band.contains(value))
        .map_or(1.0, |band| band.multiplier)
}

/// First matching label band, else 1.0.
#[must_use]
pub fn label_multiplier(bands: &[LabelBand], label: &str) -> f64 {
    bands
        .iter()
        .find(|band| band.contains(label))
        .map_or(1.0, |band| band.multiplier)
}

/// CPU generation bands.
pub static CPU_GENERATION: [RangeBand; 5] = [
    RangeBand::between(9, 10, 1.02),
    RangeBand::exactly(11, 1.03),
    RangeBand::exactly(12, 1.05),
    RangeBand::exactly(13, 1.09),
    RangeBand::at_least(14, 1.13),
];

/// Flagship and high-performance CPU lines.
pub static CPU_LINE: [LabelBand; 2] = [
    LabelBand {
        labels: &["Core i9", "Ryzen 9"],
        multiplier: 1.10,
    },
    LabelBand {
        labels: &["Core i7", "Ryzen 7"],
        multiplier: 1.05,
    },
];

/// GPU families newer than the training data, checked in order.
pub static GPU_FAMILIES: [GpuFamilyBand; 8] = [
    GpuFamilyBand {
        series_token: "RTX 40",
        brand: None,
        tiers: &[(&["4090", "4080"], 1.20), (&["4070", "4060"], 1.13)],
        fallback: 1.10,
    },
    GpuFamilyBand {
        series_token: "RTX 30",
        brand: None,
        tiers: &[(&["3090", "3080", "3070"], 1.10), (&["3060", "3050"], 1.05)],
        fallback: 1.03,
    },
    GpuFamilyBand {
        series_token: "GTX 16",
        brand: None,
        tiers: &[],
        fallback: 1.05,
    },
    GpuFamilyBand {
        series_token: "RX 7000",
        brand: None,
        tiers: &[],
        fallback: 1.30,
    },
    GpuFamilyBand {
        series_token: "RX 6000",
        brand: None,
        tiers: &[],
        fallback: 1.20,
    },
    GpuFamilyBand {
        series_token: "RX 5000",
        brand: None,
        tiers: &[],
        fallback: 1.08,
    },
    GpuFamilyBand {
        series_token: "Iris Xe",
        brand: Some("Intel"),
        tiers: &[],
        fallback: 1.03,
    },
    GpuFamilyBand {
        series_token: "UHD Graphics",
        brand: Some("Intel"),
        tiers: &[],
        fallback: 1.02,
    },
];

/// High-resolution panels.
pub static RESOLUTION: [LabelBand; 3] = [
    LabelBand {
        labels: &["4K Ultra HD"],
        multiplier: 1.12,
    },
    LabelBand {
        labels: &["Quad HD+"],
        multiplier: 1.06,
    },
    LabelBand {
        labels: &["Quad HD"],
        multiplier: 1.04,
    },
];

/// Memory capacity in GB.
pub static RAM: [RangeBand; 3] = [
    RangeBand::at_least(32, 1.15),
    RangeBand::exactly(24, 1.08),
    RangeBand::exactly(16, 1.03),
];

/// SSD capacity in GB.
pub static SSD: [RangeBand; 3] = [
    RangeBand::at_least(2048, 1.12),
    RangeBand::between(1024, 2047, 1.08),
    RangeBand::between(512, 1023, 1.04),
];
