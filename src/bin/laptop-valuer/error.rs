//! Error types for the laptop-valuer CLI

use std::path::PathBuf;
use std::process::ExitCode;

use laptop_valuer::error::{EstimateError, ValuerError};
use thiserror::Error;

/// Result type alias for CLI operations
pub(crate) type Result<T> = std::result::Result<T, CliError>;

/// CLI error types
#[derive(Error, Debug)]
pub(crate) enum CliError {
    /// Configuration or artifacts could not be loaded
    #[error("{0}")]
    Startup(#[from] ValuerError),

    /// Spec file could not be read
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Spec file is not a RawSpec or an array of them
    #[error("invalid spec in {path}: {details}")]
    InvalidSpec { path: PathBuf, details: String },

    /// Estimation failed
    #[error("{0}")]
    Estimate(#[from] EstimateError),

    /// Output could not be rendered
    #[error("cannot render output: {0}")]
    Output(#[from] serde_json::Error),
}

impl CliError {
    /// Get exit code for this error
    pub(crate) fn exit_code(&self) -> ExitCode {
        match self {
            Self::Startup(ValuerError::Config { .. } | ValuerError::Io { .. }) => ExitCode::from(2),
            Self::Startup(_) => ExitCode::from(6),
            Self::Read { .. } => ExitCode::from(3),
            Self::InvalidSpec { .. } => ExitCode::from(4),
            Self::Estimate(_) => ExitCode::from(8),
            Self::Output(_) => ExitCode::from(1),
        }
    }
}
