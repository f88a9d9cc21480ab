//! Property-based tests using proptest.
//!
//! These tests verify invariants of the estimation pipeline over randomly
//! generated laptop specs, including out-of-vocabulary labels.

mod common;

use laptop_valuer::encoding::ResolutionClass;
use laptop_valuer::prelude::*;
use proptest::prelude::*;
use proptest::sample::select;

fn display_strategy() -> impl Strategy<Value = Display> {
    (
        select(ResolutionClass::ALL.to_vec()),
        11.0f64..18.5,
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(class, inches, touchscreen, ips_panel)| Display {
            touchscreen,
            ips_panel,
            ..Display::from_class(inches, class)
        })
}

fn cpu_strategy() -> impl Strategy<Value = Cpu> {
    (
        select(vec!["Intel", "AMD", "Apple M-Series", "Cyrix"]),
        select(vec![
            "Celeron", "Core i3", "Core i5", "Core i7", "Core i9", "Ryzen 5", "Ryzen 9", "Xeon",
            "Quantum Q1",
        ]),
        1u32..=16,
        select(vec!["U", "H", "HQ", "HK", "Y", "HS", "U (Ultra-Low Power)", "Z"]),
        0.8f64..5.0,
    )
        .prop_map(|(brand, line, generation, suffix, clock_ghz)| Cpu {
            brand: brand.into(),
            line: line.into(),
            generation,
            suffix: suffix.into(),
            clock_ghz,
        })
}

fn gpu_strategy() -> impl Strategy<Value = Gpu> {
    (
        select(vec![
            ("Intel", "HD Graphics"),
            ("Intel", "UHD Graphics"),
            ("Intel", "Iris Xe Graphics"),
            ("Nvidia", "RTX 40 Series"),
            ("Nvidia", "RTX 30 Series"),
            ("Nvidia", "GTX 16 Series"),
            ("AMD", "Radeon RX 7000 Series"),
            ("Imagination", "PowerVR"),
        ]),
        proptest::option::of(select(vec!["620", "4090", "4060", "3050", "MX150", ""])),
    )
        .prop_map(|((brand, series), model)| Gpu {
            brand: brand.into(),
            series: series.into(),
            model: model.map(Into::into),
        })
}

fn spec_strategy() -> impl Strategy<Value = RawSpec> {
    (
        select(vec!["Dell", "HP", "Apple", "Lenovo", "Framework"]),
        select(vec!["Notebook", "Gaming", "Ultrabook", "Tablet"]),
        select(vec!["Windows 10", "macOS", "Linux", "Haiku"]),
        select(vec![2u32, 4, 8, 12, 16, 24, 32, 64]),
        0.8f64..4.5,
        display_strategy(),
        cpu_strategy(),
        gpu_strategy(),
        (select(vec![0u32, 128, 256, 512, 1024, 2048]), select(vec![0u32, 500, 1000, 2000])),
    )
        .prop_map(
            |(manufacturer, category, os, ram_gb, weight_kg, display, cpu, gpu, (ssd, hdd))| {
                RawSpec {
                    manufacturer: manufacturer.into(),
                    category: category.into(),
                    os: os.into(),
                    ram_gb,
                    weight_kg,
                    display,
                    cpu,
                    gpu,
                    storage: StorageTotals {
                        ssd,
                        hdd,
                        ..StorageTotals::default()
                    },
                }
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn vector_shape_follows_schema(spec in spec_strategy()) {
        let ctx = common::context();
        let features = ctx.vectorizer().vectorize(&spec).expect("vectorize");
        prop_assert_eq!(features.names(), ctx.schema().columns());
        prop_assert_eq!(features.len(), ctx.schema().len());
        prop_assert!(features.values().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn ram_upgrades_never_lower_the_price(spec in spec_strategy()) {
        let ctx = common::context();
        let mut previous = f64::NEG_INFINITY;
        for ram_gb in [8, 16, 24, 32] {
            let spec = RawSpec { ram_gb, ..spec.clone() };
            let price = ctx.estimate_price(&spec).expect("estimate");
            prop_assert!(price >= previous, "{} GB priced {} after {}", ram_gb, price, previous);
            previous = price;
        }
    }

    #[test]
    fn ssd_upgrades_never_lower_the_price(spec in spec_strategy()) {
        let ctx = common::context();
        let mut previous = f64::NEG_INFINITY;
        for ssd in [0, 512, 1024, 2048] {
            let mut spec = spec.clone();
            spec.storage.ssd = ssd;
            let price = ctx.estimate_price(&spec).expect("estimate");
            prop_assert!(price >= previous, "{} GB SSD priced {} after {}", ssd, price, previous);
            previous = price;
        }
    }

    #[test]
    fn estimate_is_idempotent(spec in spec_strategy()) {
        let ctx = common::context();
        let first = ctx.estimate(&spec).expect("first");
        let second = ctx.estimate(&spec).expect("second");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn multipliers_never_discount(spec in spec_strategy()) {
        let estimate = AdjustmentEngine::standard().apply(1000.0, &spec);
        prop_assert!(estimate.factors.iter().all(|f| f.multiplier >= 1.0));
        prop_assert!(estimate.price >= 1000.0);
    }
}
