//! Shared fixtures: a reference schema, artifacts fit to it, and the
//! reference Dell notebook.

#![allow(dead_code)]

use laptop_valuer::prelude::*;

/// Schema columns in model order.
pub const COLUMNS: [&str; 33] = [
    "Inches",
    "Ram",
    "Weight",
    "cpu_line",
    "cpu_generation",
    "cpu_type_suffix",
    "cpu_clock_speed",
    "resolution_type",
    "resolution_width",
    "resolution_height",
    "touchscreen",
    "ips_panel",
    "retina_display",
    "gpu_model",
    "HDD",
    "SSD",
    "Hybrid",
    "Flash_Storage",
    "Company_Apple",
    "Company_Asus",
    "Company_Dell",
    "Company_HP",
    "Company_Lenovo",
    "TypeName_Gaming",
    "TypeName_Notebook",
    "TypeName_Ultrabook",
    "OpSys_Windows 10",
    "OpSys_macOS",
    "cpu_company_Intel",
    "gpu_company_Intel",
    "gpu_company_Nvidia",
    "gpu_series_HD Graphics",
    "gpu_series_RTX 40 Series",
];

/// (column, mean, scale, coefficient) for the columns the model weighs.
const WEIGHTED: [(&str, f64, f64, f64); 6] = [
    ("Ram", 8.0, 5.0, 2500.0),
    ("SSD", 256.0, 300.0, 2000.0),
    ("cpu_line", 5.0, 2.0, 3000.0),
    ("cpu_generation", 7.0, 2.0, 1500.0),
    ("resolution_type", 2.0, 1.0, 1500.0),
    ("gpu_series_RTX 40 Series", 0.0, 1.0, 4000.0),
];

/// Intercept of the reference linear model.
pub const INTERCEPT: f64 = 60_000.0;

pub fn schema() -> FeatureSchema {
    FeatureSchema::new(COLUMNS.iter().map(|c| (*c).to_string()).collect())
        .expect("reference schema is valid")
}

fn weight(column: &str) -> (f64, f64, f64) {
    WEIGHTED
        .iter()
        .find(|(name, ..)| *name == column)
        .map_or((0.0, 1.0, 0.0), |&(_, mean, scale, coef)| (mean, scale, coef))
}

pub fn scaler() -> StandardScaler {
    let (mean, scale): (Vec<f64>, Vec<f64>) = COLUMNS
        .iter()
        .map(|c| {
            let (mean, scale, _) = weight(c);
            (mean, scale)
        })
        .unzip();
    StandardScaler::new(mean, scale)
        .expect("reference scaler is valid")
        .with_feature_names(COLUMNS.iter().map(|c| (*c).to_string()).collect())
}

pub fn linear_model() -> LinearRegression {
    LinearRegression::new(COLUMNS.iter().map(|c| weight(c).2).collect(), INTERCEPT)
}

pub fn bundle() -> ArtifactBundle {
    ArtifactBundle::new(linear_model().into(), scaler(), schema())
}

pub fn context() -> ValuationContext {
    ValuationContext::new(bundle(), GpuModelEncoding::PerBatch).expect("reference context")
}

/// Dell Notebook, 15.6" Full HD IPS-less, Core i5 8th gen U, HD Graphics 620, 256 GB SSD.
pub fn dell_notebook() -> RawSpec {
    RawSpec {
        manufacturer: "Dell".into(),
        category: "Notebook".into(),
        os: "Windows 10".into(),
        ram_gb: 8,
        weight_kg: 2.5,
        display: Display {
            inches: 15.6,
            resolution: "Full HD".into(),
            width: 1920,
            height: 1080,
            touchscreen: false,
            ips_panel: false,
            retina: false,
        },
        cpu: Cpu {
            brand: "Intel".into(),
            line: "Core i5".into(),
            generation: 8,
            suffix: "U".into(),
            clock_ghz: 1.6,
        },
        gpu: Gpu {
            brand: "Intel".into(),
            series: "HD Graphics".into(),
            model: Some("620".into()),
        },
        storage: StorageTotals {
            ssd: 256,
            ..StorageTotals::default()
        },
    }
}
