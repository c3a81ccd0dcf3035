//! Loading service-level-operator resources from YAML.
//!
//! An input file holds either a `ServiceLevelList` document or a single bare
//! `ServiceLevel` document. [`load_service_levels`] accepts both: it decodes
//! the bytes as a list first and falls back to a single resource when the
//! document is not a collection. A stream must hold exactly one YAML
//! document; multi-document input is rejected rather than truncated.
//!
//! ```
//! use slo_migrate::loader::load_service_levels;
//!
//! let list = br#"
//! kind: ServiceLevelList
//! items:
//!   - metadata: { name: a, namespace: ns }
//!   - metadata: { name: b, namespace: ns }
//! "#;
//! let levels = load_service_levels(list).unwrap();
//! assert_eq!(levels.len(), 2);
//!
//! let single = b"kind: ServiceLevel\nmetadata: { name: c, namespace: ns }\n";
//! let levels = load_service_levels(single).unwrap();
//! assert_eq!(levels[0].name(), "c");
//! ```

use std::path::Path;

use serde_yaml::Value;
use slo_migrate_core::{ServiceLevel, ServiceLevelList};
use tracing::debug;

use crate::error::{MigrateError, Result};

/// Decodes the bytes as a `ServiceLevelList` document.
///
/// A bare `ServiceLevel` document also decodes successfully, as a list with
/// no `items`; use [`ServiceLevelList::is_collection`] to tell them apart.
///
/// # Errors
///
/// Returns [`MigrateError::Decode`] on malformed YAML or mistyped fields.
pub fn decode_list(data: &[u8]) -> Result<ServiceLevelList> {
    serde_yaml::from_slice(data).map_err(MigrateError::Decode)
}

/// Decodes the bytes as a single `ServiceLevel` document.
///
/// # Errors
///
/// Returns [`MigrateError::Decode`] on malformed YAML or mistyped fields.
pub fn decode_single(data: &[u8]) -> Result<ServiceLevel> {
    serde_yaml::from_slice(data).map_err(MigrateError::Decode)
}

/// Decodes service levels from either accepted document shape.
///
/// Resources are returned in document order. The result is empty when the
/// input holds no document (blank, comments only, a bare `---`, or an
/// explicit `null`) or is a collection without items; the caller decides
/// whether that is an error.
///
/// # Errors
///
/// Returns [`MigrateError::Decode`] on malformed YAML, more than one YAML
/// document, or a document that matches neither shape.
pub fn load_service_levels(data: &[u8]) -> Result<Vec<ServiceLevel>> {
    if data.trim_ascii().is_empty() {
        debug!("input is blank");
        return Ok(Vec::new());
    }

    let document: Value = serde_yaml::from_slice(data).map_err(MigrateError::Decode)?;
    if document.is_null() {
        debug!("input holds no document");
        return Ok(Vec::new());
    }

    let list: ServiceLevelList =
        serde_yaml::from_value(document.clone()).map_err(MigrateError::Decode)?;
    if !list.is_empty() {
        debug!(count = list.len(), "decoded service level list");
        return Ok(list.into_items());
    }
    if list.is_collection() {
        // An empty list has no bare resource to fall back to.
        debug!("decoded empty service level list");
        return Ok(Vec::new());
    }

    let single: ServiceLevel = serde_yaml::from_value(document).map_err(MigrateError::Decode)?;
    debug!(name = single.name(), "decoded single service level");
    Ok(vec![single])
}

/// Reads a file and decodes the service levels in it.
///
/// # Errors
///
/// Returns [`MigrateError::Read`] if the file cannot be read, or
/// [`MigrateError::Decode`] if its content cannot be decoded.
pub fn read_service_levels(path: impl AsRef<Path>) -> Result<Vec<ServiceLevel>> {
    let path = path.as_ref();
    let data = std::fs::read(path).map_err(|source| MigrateError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = data.len(), "read service levels file");
    load_service_levels(&data)
}
