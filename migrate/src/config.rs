//! Run configuration.

use std::path::PathBuf;

use crate::error::{MigrateError, Result};

/// Settings for one migration run.
///
/// The binary fills this in from command-line flags or their environment
/// variable equivalents.
///
/// # Examples
///
/// ```
/// use slo_migrate::MigrateConfig;
///
/// let config = MigrateConfig::new("slos.yaml", "out/").with_ignore_disabled(true);
/// assert!(config.ignore_disabled);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrateConfig {
    /// service-level-operator YAML file (a `ServiceLevel` or `ServiceLevelList`).
    pub spec_file: PathBuf,
    /// Directory receiving the generated Sloth files.
    pub out_dir: PathBuf,
    /// Drop objectives marked `disable: true` instead of migrating them.
    pub ignore_disabled: bool,
}

impl MigrateConfig {
    /// Creates a configuration that migrates disabled objectives too.
    pub fn new(spec_file: impl Into<PathBuf>, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            spec_file: spec_file.into(),
            out_dir: out_dir.into(),
            ignore_disabled: false,
        }
    }

    /// Sets whether disabled objectives are dropped.
    pub fn with_ignore_disabled(mut self, ignore_disabled: bool) -> Self {
        self.ignore_disabled = ignore_disabled;
        self
    }

    /// Checks that both paths are set.
    ///
    /// # Errors
    ///
    /// Returns [`MigrateError::Config`] if either path is empty, which can
    /// happen when a flag is supplied through an empty environment variable.
    pub fn validate(&self) -> Result<()> {
        if self.spec_file.as_os_str().is_empty() {
            return Err(MigrateError::Config(
                "service levels file path is empty".to_string(),
            ));
        }
        if self.out_dir.as_os_str().is_empty() {
            return Err(MigrateError::Config(
                "output directory path is empty".to_string(),
            ));
        }
        Ok(())
    }
}
