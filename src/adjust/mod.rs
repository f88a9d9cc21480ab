//! Post-hoc price adjustment.
//!
//! The model was fit on older hardware and underprices current parts. The
//! [`AdjustmentEngine`] corrects this with an ordered list of independent
//! rules. Each rule reads only the [`RawSpec`] and yields a multiplier of at
//! least 1.0; the multipliers compose by product in declared order.
//!
//! The final price has no floor or ceiling.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::encoding::canonical_label;
use crate::laptop::RawSpec;

pub mod bands;

use bands::{label_multiplier, range_multiplier};

/// One family of multiplicative correction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentRule {
    /// Processor generation.
    CpuGeneration,
    /// Flagship processor lines.
    CpuLine,
    /// GPU family and model tier.
    GpuFamily,
    /// Panel resolution class.
    Resolution,
    /// Memory capacity.
    RamCapacity,
    /// SSD capacity.
    SsdCapacity,
}

impl AdjustmentRule {
    /// The standard rule order.
    pub const ALL: [AdjustmentRule; 6] = [
        AdjustmentRule::CpuGeneration,
        AdjustmentRule::CpuLine,
        AdjustmentRule::GpuFamily,
        AdjustmentRule::Resolution,
        AdjustmentRule::RamCapacity,
        AdjustmentRule::SsdCapacity,
    ];

    /// Stable snake_case name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            AdjustmentRule::CpuGeneration => "cpu_generation",
            AdjustmentRule::CpuLine => "cpu_line",
            AdjustmentRule::GpuFamily => "gpu_family",
            AdjustmentRule::Resolution => "resolution",
            AdjustmentRule::RamCapacity => "ram_capacity",
            AdjustmentRule::SsdCapacity => "ssd_capacity",
        }
    }

    /// Multiplier this rule assigns to `spec`; 1.0 when it does not apply.
    #[must_use]
    pub fn multiplier(self, spec: &RawSpec) -> f64 {
        match self {
            AdjustmentRule::CpuGeneration => {
                range_multiplier(&bands::CPU_GENERATION, spec.cpu.generation)
            }
            AdjustmentRule::CpuLine => {
                label_multiplier(&bands::CPU_LINE, canonical_label(&spec.cpu.line))
            }
            AdjustmentRule::GpuFamily => {
                let gpu = &spec.gpu;
                bands::GPU_FAMILIES
                    .iter()
                    .find(|family| family.matches(gpu.brand.trim(), &gpu.series))
                    .map_or(1.0, |family| family.multiplier(gpu.model_label()))
            }
            AdjustmentRule::Resolution => label_multiplier(
                &bands::RESOLUTION,
                canonical_label(&spec.display.resolution),
            ),
            AdjustmentRule::RamCapacity => range_multiplier(&bands::RAM, spec.ram_gb),
            AdjustmentRule::SsdCapacity => range_multiplier(&bands::SSD, spec.storage.ssd),
        }
    }
}

impl std::fmt::Display for AdjustmentRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A rule together with the multiplier it produced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AppliedFactor {
    /// Rule that fired.
    pub rule: AdjustmentRule,
    /// Its multiplier.
    pub multiplier: f64,
}

/// A priced laptop: model output, correction factors and final price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    /// Raw model price before adjustment.
    pub base_price: f64,
    /// Per-rule multipliers in declared order.
    pub factors: Vec<AppliedFactor>,
    /// Product of all factors.
    pub multiplier: f64,
    /// `base_price * multiplier`.
    pub price: f64,
}

/// Ordered chain of adjustment rules.
///
/// # Examples
///
/// ```
/// use laptop_valuer::adjust::{AdjustmentEngine, AdjustmentRule};
///
/// let engine = AdjustmentEngine::standard();
/// assert_eq!(engine.rules().len(), 6);
/// assert_eq!(engine.rules()[0], AdjustmentRule::CpuGeneration);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjustmentEngine {
    rules: Vec<AdjustmentRule>,
}

impl Default for AdjustmentEngine {
    fn default() -> Self {
        Self::standard()
    }
}

impl AdjustmentEngine {
    /// All six rules in standard order.
    #[must_use]
    pub fn standard() -> Self {
        Self::with_rules(AdjustmentRule::ALL.to_vec())
    }

    /// A custom rule chain.
    #[must_use]
    pub fn with_rules(rules: Vec<AdjustmentRule>) -> Self {
        Self { rules }
    }

    /// Rules in application order.
    #[must_use]
    pub fn rules(&self) -> &[AdjustmentRule] {
        &self.rules
    }

    /// Every rule's multiplier for `spec`, in order.
    #[must_use]
    pub fn factors(&self, spec: &RawSpec) -> Vec<AppliedFactor> {
        self.rules
            .iter()
            .map(|&rule| AppliedFactor {
                rule,
                multiplier: rule.multiplier(spec),
            })
            .collect()
    }

    /// Applies the chain to a raw model price.
    #[must_use]
    pub fn apply(&self, base_price: f64, spec: &RawSpec) -> Estimate {
        let factors = self.factors(spec);
        let multiplier = factors.iter().fold(1.0, |acc, f| acc * f.multiplier);
        let price = base_price * multiplier;
        debug!(base_price, multiplier, price, "applied adjustment chain");
        Estimate {
            base_price,
            factors,
            multiplier,
            price,
        }
    }
}
