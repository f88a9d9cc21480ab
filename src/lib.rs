//! Laptop Valuer: market-price estimation for laptop configurations.
//!
//! A structured hardware description ([`laptop::RawSpec`]) is turned into the
//! numeric feature vector a trained regressor expects, standardized and
//! scored, and the raw prediction is then corrected by a chain of
//! multiplicative hardware adjustments.
//!
//! # Quick Start
//!
//! ```
//! use laptop_valuer::prelude::*;
//!
//! let schema = FeatureSchema::new(vec!["Ram".into(), "SSD".into()]).unwrap();
//! let scaler = StandardScaler::new(vec![8.0, 256.0], vec![4.0, 256.0]).unwrap();
//! let model = LinearRegression::new(vec![150.0, 80.0], 900.0);
//! let bundle = ArtifactBundle::new(model.into(), scaler, schema);
//! let context = ValuationContext::new(bundle, GpuModelEncoding::PerBatch).unwrap();
//!
//! let spec: RawSpec = serde_json::from_str(r#"{
//!     "manufacturer": "Dell", "category": "Notebook", "os": "Windows 10",
//!     "ram_gb": 16, "weight_kg": 2.2,
//!     "display": {"inches": 15.6, "resolution": "Full HD", "width": 1920, "height": 1080},
//!     "cpu": {"brand": "Intel", "line": "Core i5", "generation": 8, "suffix": "U", "clock_ghz": 1.6},
//!     "gpu": {"brand": "Intel", "series": "HD Graphics", "model": "620"},
//!     "storage": {"ssd": 512}
//! }"#).unwrap();
//!
//! let estimate = context.estimate(&spec).unwrap();
//! assert!(estimate.price >= estimate.base_price);
//! ```
//!
//! # Modules
//!
//! - [`laptop`]: The RawSpec input record
//! - [`encoding`]: Ordinal tables, label indices and one-hot vocabularies
//! - [`features`]: Feature schema and the RawSpec vectorizer
//! - [`preprocessing`]: Fitted standard scaler
//! - [`linear_model`], [`tree`]: Regressor families
//! - [`model`]: The regressor artifact
//! - [`predict`]: Scale-and-predict
//! - [`adjust`]: Post-hoc multiplier chain
//! - [`artifacts`]: Artifact loading and saving
//! - [`config`]: TOML configuration
//! - [`service`]: The estimation service

pub mod adjust;
pub mod artifacts;
pub mod config;
pub mod encoding;
pub mod error;
pub mod features;
pub mod laptop;
pub mod linear_model;
pub mod model;
pub mod predict;
pub mod prelude;
pub mod preprocessing;
pub mod service;
pub mod traits;
pub mod tree;

pub use error::{EstimateError, Result, Stage, ValuerError};
pub use service::ValuationContext;
