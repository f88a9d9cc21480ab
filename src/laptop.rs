//! The laptop description submitted for valuation.
//!
//! Categorical fields are plain strings so that out-of-vocabulary values are
//! accepted; the vectorizer degrades them to defaults instead of rejecting.

use serde::{Deserialize, Serialize};

use crate::encoding::{ResolutionClass, UNKNOWN_LABEL};

/// Structured hardware description of one laptop.
///
/// # Examples
///
/// ```
/// use laptop_valuer::laptop::{StorageKind, StorageSlot, StorageTotals};
///
/// let storage = StorageTotals::from_slots(
///     StorageSlot::new(StorageKind::Ssd, 512),
///     StorageSlot::new(StorageKind::Hdd, 1024),
/// );
/// assert_eq!(storage.ssd, 512);
/// assert_eq!(storage.hdd, 1024);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSpec {
    /// Manufacturer, e.g. `Dell`.
    pub manufacturer: String,
    /// Product category, e.g. `Notebook`.
    pub category: String,
    /// Operating system, e.g. `Windows 10`.
    pub os: String,
    /// Memory in GB.
    pub ram_gb: u32,
    /// Weight in kg.
    pub weight_kg: f64,
    /// Panel description.
    pub display: Display,
    /// Processor description.
    pub cpu: Cpu,
    /// Graphics description.
    pub gpu: Gpu,
    /// Storage totals per medium, in GB.
    #[serde(default)]
    pub storage: StorageTotals,
}

/// Screen size, resolution class and panel flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Display {
    /// Diagonal in inches.
    pub inches: f64,
    /// Resolution class label, e.g. `Full HD`.
    pub resolution: String,
    /// Horizontal pixels.
    pub width: u32,
    /// Vertical pixels.
    pub height: u32,
    /// Touch input.
    #[serde(default)]
    pub touchscreen: bool,
    /// IPS panel.
    #[serde(default)]
    pub ips_panel: bool,
    /// Retina branding.
    #[serde(default)]
    pub retina: bool,
}

impl Display {
    /// A panel of the given class at its canonical dimensions, no flags set.
    #[must_use]
    pub fn from_class(inches: f64, class: ResolutionClass) -> Self {
        let (width, height) = class.dimensions();
        Self {
            inches,
            resolution: class.label().to_string(),
            width,
            height,
            touchscreen: false,
            ips_panel: false,
            retina: false,
        }
    }
}

/// Processor description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cpu {
    /// Vendor, e.g. `Intel`.
    pub brand: String,
    /// Product line, e.g. `Core i5`.
    pub line: String,
    /// Generation number, e.g. 8.
    pub generation: u32,
    /// Power suffix code, e.g. `U`.
    pub suffix: String,
    /// Base clock in GHz.
    pub clock_ghz: f64,
}

/// Graphics description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gpu {
    /// Vendor, e.g. `Nvidia`.
    pub brand: String,
    /// Product series, e.g. `RTX 40 Series`.
    pub series: String,
    /// Free-text model, e.g. `4090`.
    #[serde(default)]
    pub model: Option<String>,
}

impl Gpu {
    /// The model string, or `Unknown` when absent or blank.
    #[must_use]
    pub fn model_label(&self) -> &str {
        self.model
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(UNKNOWN_LABEL)
    }
}

/// Storage media tracked as separate totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StorageKind {
    /// Spinning disk.
    #[serde(rename = "HDD")]
    Hdd,
    /// Solid-state drive.
    #[serde(rename = "SSD")]
    Ssd,
    /// SSHD.
    Hybrid,
    /// eMMC / soldered flash.
    #[serde(rename = "Flash Storage")]
    Flash,
}

impl StorageKind {
    /// Parses a form label. `None`, empty and unknown labels give `None`.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "HDD" => Some(Self::Hdd),
            "SSD" => Some(Self::Ssd),
            "Hybrid" => Some(Self::Hybrid),
            "Flash Storage" | "Flash_Storage" | "Flash" => Some(Self::Flash),
            _ => None,
        }
    }
}

/// One storage slot as entered on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageSlot {
    /// Medium, `None` for an empty slot.
    pub kind: Option<StorageKind>,
    /// Capacity in GB.
    pub size_gb: u32,
}

impl StorageSlot {
    /// An occupied slot.
    #[must_use]
    pub fn new(kind: StorageKind, size_gb: u32) -> Self {
        Self {
            kind: Some(kind),
            size_gb,
        }
    }

    /// An empty slot.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            kind: None,
            size_gb: 0,
        }
    }
}

/// Capacity totals per medium in GB.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageTotals {
    /// HDD total.
    #[serde(default)]
    pub hdd: u32,
    /// SSD total.
    #[serde(default)]
    pub ssd: u32,
    /// Hybrid total.
    #[serde(default)]
    pub hybrid: u32,
    /// Flash total.
    #[serde(default)]
    pub flash: u32,
}

impl StorageTotals {
    /// Collapses the primary and secondary slots into totals.
    ///
    /// Each slot contributes once to the total of its own medium; two slots
    /// of the same medium add up.
    #[must_use]
    pub fn from_slots(primary: StorageSlot, secondary: StorageSlot) -> Self {
        let mut totals = Self::default();
        for slot in [primary, secondary] {
            if let Some(kind) = slot.kind {
                let total = totals.get_mut(kind);
                *total = total.saturating_add(slot.size_gb);
            }
        }
        totals
    }

    /// Total for one medium.
    #[must_use]
    pub fn get(&self, kind: StorageKind) -> u32 {
        match kind {
            StorageKind::Hdd => self.hdd,
            StorageKind::Ssd => self.ssd,
            StorageKind::Hybrid => self.hybrid,
            StorageKind::Flash => self.flash,
        }
    }

    fn get_mut(&mut self, kind: StorageKind) -> &mut u32 {
        match kind {
            StorageKind::Hdd => &mut self.hdd,
            StorageKind::Ssd => &mut self.ssd,
            StorageKind::Hybrid => &mut self.hybrid,
            StorageKind::Flash => &mut self.flash,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gpu(model: Option<&str>) -> Gpu {
        Gpu {
            brand: "Nvidia".into(),
            series: "RTX 30 Series".into(),
            model: model.map(Into::into),
        }
    }

    #[test]
    fn test_missing_gpu_model_is_unknown() {
        assert_eq!(gpu(None).model_label(), "Unknown");
        assert_eq!(gpu(Some("   ")).model_label(), "Unknown");
        assert_eq!(gpu(Some(" 3060 ")).model_label(), "3060");
    }

    #[test]
    fn test_storage_slots_attributed_once() {
        let totals = StorageTotals::from_slots(
            StorageSlot::new(StorageKind::Ssd, 256),
            StorageSlot::new(StorageKind::Ssd, 512),
        );
        assert_eq!(totals.ssd, 768);
        assert_eq!(totals.hdd + totals.hybrid + totals.flash, 0);

        let totals = StorageTotals::from_slots(
            StorageSlot::new(StorageKind::Flash, 64),
            StorageSlot::empty(),
        );
        assert_eq!(totals.get(StorageKind::Flash), 64);
        assert_eq!(totals.ssd, 0);
    }

    #[test]
    fn test_storage_kind_labels() {
        assert_eq!(StorageKind::from_label("Flash Storage"), Some(StorageKind::Flash));
        assert_eq!(StorageKind::from_label("HDD"), Some(StorageKind::Hdd));
        assert_eq!(StorageKind::from_label("None"), None);
        assert_eq!(StorageKind::from_label("Tape"), None);
    }

    #[test]
    fn test_display_from_class() {
        let d = Display::from_class(15.6, ResolutionClass::QuadHd);
        assert_eq!(d.resolution, "Quad HD");
        assert_eq!((d.width, d.height), (2560, 1440));
        assert!(!d.touchscreen);
    }

    #[test]
    fn test_deserialize_with_optional_fields_omitted() {
        let json = r#"{
            "manufacturer": "HP",
            "category": "Notebook",
            "os": "Windows 11",
            "ram_gb": 16,
            "weight_kg": 1.8,
            "display": {"inches": 14.0, "resolution": "Full HD", "width": 1920, "height": 1080},
            "cpu": {"brand": "Intel", "line": "Core i7", "generation": 12, "suffix": "H", "clock_ghz": 2.3},
            "gpu": {"brand": "Intel", "series": "Iris Xe Graphics"}
        }"#;
        let spec: RawSpec = serde_json::from_str(json).expect("valid spec json");
        assert_eq!(spec.gpu.model, None);
        assert_eq!(spec.storage, StorageTotals::default());
        assert!(!spec.display.ips_panel);
    }
}
