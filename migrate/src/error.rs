//! Error types for migration runs.
//!
//! Every variant is fatal: the pipeline stops at the first error and the
//! binary reports it with a non-zero exit code.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while migrating service levels.
#[derive(Debug, Error)]
pub enum MigrateError {
    /// Invalid or missing configuration.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The input file could not be read.
    #[error("could not read service levels from '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input is neither a service level list nor a single service level.
    #[error("could not decode service levels: {0}")]
    Decode(#[source] serde_yaml::Error),

    /// The input contained no service levels.
    #[error("0 service levels loaded")]
    EmptyInput,

    /// An objective cannot be expressed as a Sloth SLO.
    #[error(
        "could not map service level '{service_level}': objective '{objective}' has no Prometheus indicator"
    )]
    Mapping {
        service_level: String,
        objective: String,
    },

    /// A Sloth service level could not be serialized.
    #[error("could not encode Sloth service level '{name}': {source}")]
    Encode {
        name: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// A generated file could not be written.
    #[error("could not write Sloth service level to '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience alias for results with [`MigrateError`].
pub type Result<T> = std::result::Result<T, MigrateError>;
