//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use laptop_valuer::prelude::*;
//! ```

pub use crate::adjust::{AdjustmentEngine, AdjustmentRule, Estimate};
pub use crate::artifacts::{ArtifactBundle, ArtifactPaths};
pub use crate::config::ValuerConfig;
pub use crate::error::{EstimateError, Stage, ValuerError};
pub use crate::features::{FeatureSchema, FeatureVector, GpuModelEncoding, Vectorizer};
pub use crate::laptop::{Cpu, Display, Gpu, RawSpec, StorageKind, StorageSlot, StorageTotals};
pub use crate::linear_model::LinearRegression;
pub use crate::model::PredictionModel;
pub use crate::preprocessing::StandardScaler;
pub use crate::service::ValuationContext;
pub use crate::traits::Regressor;
pub use crate::tree::{DecisionTreeRegressor, GradientBoostingRegressor, RegressionTreeNode};
