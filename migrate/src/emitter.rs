//! Writing Sloth resources to disk.

use std::path::{Path, PathBuf};

use slo_migrate_core::PrometheusServiceLevel;
use tracing::debug;

use crate::config::MigrateConfig;
use crate::error::{MigrateError, Result};

/// Name of the generated file for a resource.
///
/// # Examples
///
/// ```
/// use slo_migrate::emitter::output_file_name;
///
/// assert_eq!(output_file_name("ns1", "app"), "_gen_ns1_app.yaml");
/// ```
pub fn output_file_name(namespace: &str, name: &str) -> String {
    format!("_gen_{namespace}_{name}.yaml")
}

/// Path of the generated file for `sl` inside `out_dir`.
pub fn output_path(out_dir: &Path, sl: &PrometheusServiceLevel) -> PathBuf {
    out_dir.join(output_file_name(sl.namespace(), sl.name()))
}

/// Encodes a resource as YAML.
///
/// # Errors
///
/// Returns [`MigrateError::Encode`] if serialization fails.
pub fn encode_service_level(sl: &PrometheusServiceLevel) -> Result<String> {
    serde_yaml::to_string(sl).map_err(|source| MigrateError::Encode {
        name: sl.name().to_string(),
        source,
    })
}

/// Encodes a resource and writes it to its file in `config.out_dir`,
/// replacing any existing file. Returns the written path.
///
/// The output directory must already exist.
///
/// # Errors
///
/// Returns [`MigrateError::Encode`] if serialization fails, or
/// [`MigrateError::Write`] if the file cannot be written.
pub fn store_service_level(config: &MigrateConfig, sl: &PrometheusServiceLevel) -> Result<PathBuf> {
    let raw = encode_service_level(sl)?;
    let path = output_path(&config.out_dir, sl);
    std::fs::write(&path, raw).map_err(|source| MigrateError::Write {
        path: path.clone(),
        source,
    })?;
    debug!(name = sl.name(), path = %path.display(), "wrote Sloth service level");
    Ok(path)
}
